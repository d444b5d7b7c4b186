//! Heuristic strategies estimating the remaining number of moves to the goal.
//!
//! Every strategy here is admissible for unit-cost orthogonal slides, so A*
//! with any of them returns an optimal move count. `ZeroHeuristic` turns the
//! search into uniform-cost search.

use crate::board::Board;
use std::fmt;

/// Estimates the number of moves left from `board` to `goal`.
///
/// Implementations must never overestimate the true distance. They must also
/// be consistent (`h(a) <= 1 + h(b)` for neighbouring boards) for the default
/// first-seen duplicate policy to keep results optimal.
pub trait Heuristic {
    fn name(&self) -> &'static str;

    fn estimate(&self, board: &Board, goal: &Board) -> u32;
}

/// Always zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn estimate(&self, _board: &Board, _goal: &Board) -> u32 {
        0
    }
}

/// Number of non-blank cells whose tile differs from the goal.
#[derive(Clone, Copy, Debug, Default)]
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn name(&self) -> &'static str {
        "misplaced"
    }

    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .zip(goal.tiles())
            .filter(|&(&tile, &target)| tile != 0 && tile != target)
            .count() as u32
    }
}

/// Sum over non-blank tiles of the grid distance to their goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn name(&self) -> &'static str {
        "manhattan"
    }

    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        let size = board.size();
        let mut target = vec![0usize; size * size];
        for (idx, &tile) in goal.tiles().iter().enumerate() {
            target[tile as usize] = idx;
        }

        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(idx, &tile)| {
                let goal_idx = target[tile as usize];
                let dr = (idx / size).abs_diff(goal_idx / size);
                let dc = (idx % size).abs_diff(goal_idx % size);
                (dr + dc) as u32
            })
            .sum()
    }
}

/// Closed set of the built-in strategies, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Zero,
    Misplaced,
    Manhattan,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Zero,
        HeuristicKind::Misplaced,
        HeuristicKind::Manhattan,
    ];

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            HeuristicKind::Zero => "UCS (h=0)",
            HeuristicKind::Misplaced => "A* with Misplaced Tiles",
            HeuristicKind::Manhattan => "A* with Manhattan Distance",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Zero => ZeroHeuristic.name(),
            HeuristicKind::Misplaced => MisplacedTiles.name(),
            HeuristicKind::Manhattan => ManhattanDistance.name(),
        }
    }

    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        match self {
            HeuristicKind::Zero => ZeroHeuristic.estimate(board, goal),
            HeuristicKind::Misplaced => MisplacedTiles.estimate(board, goal),
            HeuristicKind::Manhattan => ManhattanDistance.estimate(board, goal),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn start() -> Board {
        Board::from_rows(&[[3, 1, 2], [4, 7, 5], [6, 8, 0]]).unwrap()
    }

    #[test]
    fn test_zero_heuristic() {
        assert_eq!(ZeroHeuristic.estimate(&start(), &Board::goal(3)), 0);
    }

    #[test]
    fn test_misplaced_tiles_ignores_blank() {
        // 3, 4, 7 and 8 are off target; the blank at (2, 2) does not count.
        assert_eq!(MisplacedTiles.estimate(&start(), &Board::goal(3)), 4);
        assert_eq!(MisplacedTiles.estimate(&Board::goal(3), &Board::goal(3)), 0);
    }

    #[test]
    fn test_manhattan_distance() {
        // 3, 4, 7 and 8 are each one cell away.
        assert_eq!(ManhattanDistance.estimate(&start(), &Board::goal(3)), 4);
        let one_away = Board::goal(3).apply_move(Move::Right).unwrap();
        assert_eq!(ManhattanDistance.estimate(&one_away, &Board::goal(3)), 1);
    }

    #[test]
    fn test_heuristics_are_ordered_and_consistent() {
        let goal = Board::goal(3);
        for seed in 0..25 {
            let board = Board::scrambled(3, 25, seed);
            let misplaced = MisplacedTiles.estimate(&board, &goal);
            let manhattan = ManhattanDistance.estimate(&board, &goal);
            assert!(misplaced <= manhattan);

            for mv in Move::ALL {
                if let Some(next) = board.apply_move(mv) {
                    for kind in HeuristicKind::ALL {
                        let h = kind.estimate(&board, &goal);
                        let h_next = kind.estimate(&next, &goal);
                        assert!(h <= h_next + 1, "{} inconsistent", kind);
                    }
                }
            }
        }
    }

    #[test]
    fn test_kind_dispatch() {
        let goal = Board::goal(3);
        assert_eq!(HeuristicKind::Misplaced.estimate(&start(), &goal), 4);
        assert_eq!(HeuristicKind::Zero.name(), "zero");
        assert_eq!(HeuristicKind::Manhattan.to_string(), "manhattan");
    }
}
