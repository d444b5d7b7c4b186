use crate::board::Board;
use crate::error::{Result, SolverError};

/// Parses an array of row strings into a `Board`.
///
/// Each string is one row, starting from the top. Tiles are separated by
/// whitespace and/or commas. The blank may be written as `0`, `_` or `.`.
/// The number of rows fixes the board size; every row must hold exactly that
/// many tiles, and the values must form a permutation of `0..size²`.
///
/// # Examples
/// ```
/// use eight_puzzle::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["3 1 2", "4,7,5", "6 8 _"]).unwrap();
/// assert_eq!(board.blank_position(), (2, 2));
/// assert_eq!(board.tile(1, 1), 7);
///
/// assert!(board_from_str_array(&["1 2", "3 x"]).is_err());
/// assert!(board_from_str_array(&["0 1 2", "3 4 5"]).is_err());
/// ```
pub fn board_from_str_array(rows: &[&str]) -> Result<Board> {
    let mut parsed = Vec::with_capacity(rows.len());
    for (line, row) in rows.iter().enumerate() {
        parsed.push(parse_tiles(row, line + 1)?);
    }
    Board::from_rows(&parsed)
}

/// Parses multi-line board text, skipping blank lines and `#` comments.
pub fn parse_board(text: &str) -> Result<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .collect();
    board_from_str_array(&rows)
}

/// Parses a single-line, row-major tile list such as `"3,1,2,4,7,5,6,8,0"`.
/// The side length is inferred from the number of tiles.
pub fn parse_flat_board(s: &str) -> Result<Board> {
    let values = parse_tiles(s, 1)?;
    let size = (values.len() as f64).sqrt().round() as usize;
    if size * size != values.len() {
        return Err(SolverError::InvalidBoardLength {
            size,
            expected: size * size,
            got: values.len(),
        });
    }
    Board::new(size, values)
}

fn parse_tiles(row: &str, line: usize) -> Result<Vec<u32>> {
    row.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "_" | "." => Ok(0),
            _ => token.parse::<u32>().map_err(|_| SolverError::InvalidToken {
                token: token.to_string(),
                line,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["0 1 2", "3 4 5", "6 7 8"]).unwrap();
        assert_eq!(board, Board::goal(3));
    }

    #[test]
    fn test_board_from_str_array_invalid_token() {
        let err = board_from_str_array(&["0 1 2", "3 four 5", "6 7 8"]).unwrap_err();
        assert_eq!(
            err,
            SolverError::InvalidToken {
                token: "four".to_string(),
                line: 2
            }
        );
    }

    #[test]
    fn test_board_from_str_array_ragged_row() {
        let result = board_from_str_array(&["0 1 2", "3 4", "5 6 7 8"]);
        assert!(matches!(result, Err(SolverError::RaggedRow { row: 1, .. })));
    }

    #[test]
    fn test_board_from_str_array_repeated_tile() {
        let result = board_from_str_array(&["1 1 2", "3 4 5", "6 7 8"]);
        assert_eq!(result.unwrap_err(), SolverError::DuplicateTile { value: 1 });
    }

    #[test]
    fn test_parse_board_skips_comments_and_blank_lines() {
        let text = "# start\n3 1 2\n\n4 7 5  # middle\n6 8 0\n";
        let board = parse_board(text).unwrap();
        assert_eq!(board.tiles(), &[3, 1, 2, 4, 7, 5, 6, 8, 0]);
    }

    #[test]
    fn test_parse_flat_board() {
        let board = parse_flat_board("3,1,2,4,7,5,6,8,0").unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.blank_position(), (2, 2));

        let four = parse_flat_board(&(0..16).map(|v| v.to_string()).collect::<Vec<_>>().join(" "))
            .unwrap();
        assert_eq!(four, Board::goal(4));

        assert!(matches!(
            parse_flat_board("0 1 2 3 4"),
            Err(SolverError::InvalidBoardLength { got: 5, .. })
        ));
    }
}
