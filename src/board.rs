//! Board model for the sliding-tile puzzle.
//!
//! This module defines:
//! - `Move`: one orthogonal slide of the blank tile (`U`, `D`, `L`, `R`).
//! - `Board`: an N×N permutation of `0..N²` where `0` is the blank. The
//!   fallible constructors validate the permutation and `goal`/`scrambled`
//!   panic on unsupported sizes, so a `Board` value always upholds
//!   `tiles[blank] == 0`.
use crate::error::{Result, SolverError};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Side length of the classic 8-puzzle.
pub const DEFAULT_SIZE: usize = 3;

/// Largest supported side length. Tiles are stored as `u8`.
pub const MAX_SIZE: usize = 15;

/// A single move of the blank tile.
///
/// The direction names where the blank goes, not the tile that slides into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the search driver.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column delta applied to the blank position.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Single-letter symbol from the alphabet `{U, D, L, R}`.
    ///
    /// ```
    /// use eight_puzzle::board::Move;
    /// assert_eq!(Move::Left.symbol(), 'L');
    /// assert_eq!(Move::from_symbol('d'), Some(Move::Down));
    /// assert_eq!(Move::from_symbol('x'), None);
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'U' => Some(Move::Up),
            'D' => Some(Move::Down),
            'L' => Some(Move::Left),
            'R' => Some(Move::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Renders a move sequence as a string over `{U, D, L, R}`.
pub fn moves_to_string(moves: &[Move]) -> String {
    moves.iter().map(Move::symbol).collect()
}

/// Parses a move string such as `"ULDR"`. Returns `None` on any unknown symbol.
pub fn parse_moves(s: &str) -> Option<Vec<Move>> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(Move::from_symbol)
        .collect()
}

/// An N×N sliding-tile board stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Builds a board from row-major tile values, validating that they form a
    /// permutation of `0..size²`.
    ///
    /// ```
    /// use eight_puzzle::board::Board;
    /// let board = Board::new(3, vec![3, 1, 2, 4, 7, 5, 6, 8, 0]).unwrap();
    /// assert_eq!(board.blank_position(), (2, 2));
    /// assert!(Board::new(3, vec![1, 1, 2, 3, 4, 5, 6, 7, 8]).is_err());
    /// ```
    pub fn new(size: usize, values: Vec<u32>) -> Result<Self> {
        if !(2..=MAX_SIZE).contains(&size) {
            return Err(SolverError::InvalidSize { size });
        }
        let cells = size * size;
        if values.len() != cells {
            return Err(SolverError::InvalidBoardLength {
                size,
                expected: cells,
                got: values.len(),
            });
        }

        let mut seen = vec![false; cells];
        for &value in &values {
            let idx = value as usize;
            if idx >= cells {
                return Err(SolverError::TileOutOfRange { value, size });
            }
            if seen[idx] {
                return Err(SolverError::DuplicateTile { value });
            }
            seen[idx] = true;
        }

        let blank = values
            .iter()
            .position(|&v| v == 0)
            .ok_or(SolverError::MissingBlank)?;
        let tiles = values.into_iter().map(|v| v as u8).collect();
        Ok(Board { size, tiles, blank })
    }

    /// Builds a square board from a slice of rows.
    ///
    /// ```
    /// use eight_puzzle::board::Board;
    /// let board = Board::from_rows(&[[0, 1, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
    /// assert_eq!(board, Board::goal(3));
    /// ```
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(SolverError::RaggedRow {
                    row,
                    expected: size,
                    got: cells.len(),
                });
            }
            values.extend_from_slice(cells);
        }
        Self::new(size, values)
    }

    /// The canonical solved layout: blank first, then tiles in ascending order.
    ///
    /// # Panics
    /// Panics if `size` is outside `2..=MAX_SIZE`.
    pub fn goal(size: usize) -> Self {
        assert!(
            (2..=MAX_SIZE).contains(&size),
            "board size must be between 2 and {}, got {}",
            MAX_SIZE,
            size
        );
        Board {
            size,
            tiles: (0..size * size).map(|v| v as u8).collect(),
            blank: 0,
        }
    }

    /// Produces a reproducible solvable board by walking the blank `steps`
    /// random moves away from the canonical goal. Immediate reversals are
    /// avoided so the walk does not collapse on itself.
    ///
    /// # Panics
    /// Panics if `size` is outside `2..=MAX_SIZE`.
    pub fn scrambled(size: usize, steps: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Self::goal(size);
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let options: Vec<(Move, Board)> = Move::ALL
                .iter()
                .filter(|&&m| last.map_or(true, |prev| m != prev.opposite()))
                .filter_map(|&m| board.apply_move(m).map(|next| (m, next)))
                .collect();
            // Every cell has at least two neighbours, so one always survives.
            if let Some((m, next)) = options.choose(&mut rng).cloned() {
                board = next;
                last = Some(m);
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major tiles, blank included.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.size + col]
    }

    /// `(row, col)` of the blank tile.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Slides the blank one step. Returns `None` when the blank would leave
    /// the grid.
    pub fn apply_move(&self, mv: Move) -> Option<Board> {
        let (row, col) = self.blank_position();
        let (dr, dc) = mv.offset();
        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let bound = self.size as isize;
        if new_row < 0 || new_row >= bound || new_col < 0 || new_col >= bound {
            return None;
        }

        let target = new_row as usize * self.size + new_col as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// Applies `moves` in order and returns every board visited, starting with
    /// `self`. Returns `None` if any move is illegal.
    pub fn replay(&self, moves: &[Move]) -> Option<Vec<Board>> {
        let mut path = Vec::with_capacity(moves.len() + 1);
        path.push(self.clone());
        for &mv in moves {
            let next = path.last()?.apply_move(mv)?;
            path.push(next);
        }
        Some(path)
    }
}

impl fmt::Display for Board {
    /// One row per line, tiles separated by single spaces and right-aligned
    /// when the board holds multi-digit values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for (r, row) in self.tiles.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", tile, width = width)?;
            }
        }
        Ok(())
    }
}
