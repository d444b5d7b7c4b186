//! Inversion-parity solvability precheck.
//!
//! A sliding move never changes the parity of `inversions + blank_row` on
//! even-width boards, and never changes the parity of `inversions` on odd-width
//! boards. Two boards are mutually reachable iff that invariant agrees.

use crate::board::Board;

/// How the precheck decides whether `start` can reach `goal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParityRule {
    /// Solvable iff the start board is in the parity class of the canonical
    /// layout (`0, 1, .., N²-1`): an even inversion count on odd widths, an
    /// even `inversions + blank_row` on even widths. The goal argument is
    /// ignored, so this is only correct when the goal is canonical.
    #[default]
    Canonical,
    /// Compares the parity invariant of start against the supplied goal.
    RelativeToGoal,
}

/// Counts pairs `(i, j)`, `i < j`, with `tiles[i] > tiles[j]`, ignoring the blank.
///
/// ```
/// use eight_puzzle::board::Board;
/// use eight_puzzle::solvability::count_inversions;
/// let board = Board::new(3, vec![3, 1, 2, 4, 7, 5, 6, 8, 0]).unwrap();
/// assert_eq!(count_inversions(&board), 4);
/// ```
pub fn count_inversions(board: &Board) -> usize {
    let tiles = board.tiles();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Parity of the invariant preserved by every legal move.
fn parity_class(board: &Board) -> usize {
    let inversions = count_inversions(board);
    if board.size() % 2 == 1 {
        inversions % 2
    } else {
        (inversions + board.blank_position().0) % 2
    }
}

/// Whether `board` can reach the canonical layout. On odd widths this is an
/// even inversion count.
pub fn is_solvable(board: &Board) -> bool {
    parity_class(board) == 0
}

/// Whether `goal` is reachable from `start` under the given rule.
pub fn is_reachable(start: &Board, goal: &Board, rule: ParityRule) -> bool {
    match rule {
        ParityRule::Canonical => is_solvable(start),
        ParityRule::RelativeToGoal => parity_class(start) == parity_class(goal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn swap_tiles(board: &Board, a: usize, b: usize) -> Board {
        let mut values: Vec<u32> = board.tiles().iter().map(|&t| t as u32).collect();
        values.swap(a, b);
        Board::new(board.size(), values).unwrap()
    }

    #[test]
    fn test_goal_has_no_inversions() {
        assert_eq!(count_inversions(&Board::goal(3)), 0);
        assert!(is_solvable(&Board::goal(3)));
    }

    #[test]
    fn test_blank_is_ignored() {
        let board = Board::new(3, vec![1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(count_inversions(&board), 0);
    }

    #[test]
    fn test_single_swap_is_unsolvable() {
        let swapped = swap_tiles(&Board::goal(3), 1, 2);
        assert_eq!(count_inversions(&swapped), 1);
        assert!(!is_solvable(&swapped));
        assert!(!is_reachable(&swapped, &Board::goal(3), ParityRule::RelativeToGoal));
    }

    #[test]
    fn test_transposition_count_decides_parity() {
        let goal = Board::goal(3);
        let mut rng = SmallRng::seed_from_u64(42);
        for swaps in 1..12 {
            let mut board = goal.clone();
            for _ in 0..swaps {
                let a = rng.gen_range(1..9);
                let mut b = rng.gen_range(1..9);
                while b == a {
                    b = rng.gen_range(1..9);
                }
                let ia = board.tiles().iter().position(|&t| t as usize == a).unwrap();
                let ib = board.tiles().iter().position(|&t| t as usize == b).unwrap();
                board = swap_tiles(&board, ia, ib);
            }
            assert_eq!(is_solvable(&board), swaps % 2 == 0, "after {} swaps", swaps);
        }
    }

    #[test]
    fn test_legal_moves_preserve_solvability() {
        for seed in 0..20 {
            let board = Board::scrambled(3, 30, seed);
            assert!(is_solvable(&board));
            assert!(is_reachable(&board, &Board::goal(3), ParityRule::RelativeToGoal));
        }
    }

    #[test]
    fn test_relative_rule_uses_actual_goal() {
        let goal = Board::new(3, vec![1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        let start = goal.apply_move(Move::Up).unwrap();
        assert!(is_reachable(&start, &goal, ParityRule::RelativeToGoal));

        let odd_goal = swap_tiles(&Board::goal(3), 1, 2);
        let start = odd_goal.apply_move(Move::Right).unwrap();
        assert!(!is_reachable(&start, &odd_goal, ParityRule::Canonical));
        assert!(is_reachable(&start, &odd_goal, ParityRule::RelativeToGoal));
    }

    #[test]
    fn test_even_width_accounts_for_blank_row() {
        let goal = Board::goal(4);
        let down = goal.apply_move(Move::Down).unwrap();
        // Vertical moves on a 4-wide board flip inversion parity.
        assert_eq!(count_inversions(&down) % 2, 1);
        assert!(is_reachable(&down, &goal, ParityRule::RelativeToGoal));
        assert!(!is_reachable(&swap_tiles(&goal, 1, 2), &goal, ParityRule::RelativeToGoal));
    }

    #[test]
    fn test_canonical_rule_on_even_width() {
        let goal = Board::goal(4);
        assert!(is_solvable(&goal));
        assert!(is_solvable(&goal.apply_move(Move::Down).unwrap()));
        assert!(!is_solvable(&swap_tiles(&goal, 1, 2)));
        for seed in 0..20 {
            let board = Board::scrambled(4, 30, seed);
            assert!(is_solvable(&board), "seed {}", seed);
            assert!(is_reachable(&board, &goal, ParityRule::Canonical));
        }
        for seed in 0..10 {
            assert!(is_solvable(&Board::scrambled(2, 7, seed)));
        }
    }
}
