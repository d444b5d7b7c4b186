//! Open and closed lists for best-first search.
//!
//! - `Frontier`: min-priority queue over `f = g + h`. Entries with equal `f`
//!   pop in insertion order, which keeps path selection reproducible when
//!   several optimal paths exist.
//! - `VisitedSet`: boards already generated, with the best `g` seen for each.

use crate::board::Board;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    serial: u64,
    node: usize,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// BinaryHeap is a max-heap: lower f and then lower serial must compare greater.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.serial.cmp(&self.serial))
    }
}

/// Priority queue of arena indices keyed by `f`.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_serial: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `node` with total estimated cost `f`.
    pub fn push(&mut self, f: u32, node: usize) {
        self.heap.push(FrontierEntry {
            f,
            serial: self.next_serial,
            node,
        });
        self.next_serial += 1;
    }

    /// Removes the entry with the lowest `f`, earliest pushed first on ties.
    /// Returns `(f, node)`.
    pub fn pop(&mut self) -> Option<(u32, usize)> {
        self.heap.pop().map(|entry| (entry.f, entry.node))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes since creation.
    pub fn pushes(&self) -> u64 {
        self.next_serial
    }
}

/// What happens when a board is reached again through a different path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitedPolicy {
    /// A board is closed as soon as it is generated; later paths to it are
    /// dropped even if cheaper. Optimal only for consistent heuristics.
    #[default]
    FirstSeen,
    /// A board is queued again whenever a strictly cheaper `g` reaches it.
    /// Superseded queue entries are skipped when popped.
    ReopenOnImprovement,
}

/// Boards generated so far, marked at push time rather than at expansion.
#[derive(Debug, Default)]
pub struct VisitedSet {
    policy: VisitedPolicy,
    best_g: HashMap<Board, u32>,
}

impl VisitedSet {
    pub fn new(policy: VisitedPolicy) -> Self {
        VisitedSet {
            policy,
            best_g: HashMap::new(),
        }
    }

    /// Records `board` reached with path cost `g`. Returns `true` when the
    /// caller should queue it.
    pub fn admit(&mut self, board: &Board, g: u32) -> bool {
        match (self.policy, self.best_g.get(board)) {
            (_, None) => {
                self.best_g.insert(board.clone(), g);
                true
            }
            (VisitedPolicy::FirstSeen, Some(_)) => false,
            (VisitedPolicy::ReopenOnImprovement, Some(&best)) => {
                if g < best {
                    self.best_g.insert(board.clone(), g);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Whether a queued entry for `board` at cost `g` has been superseded by a
    /// cheaper one. Always `false` under `FirstSeen`.
    pub fn is_stale(&self, board: &Board, g: u32) -> bool {
        match self.policy {
            VisitedPolicy::FirstSeen => false,
            VisitedPolicy::ReopenOnImprovement => {
                self.best_g.get(board).map_or(false, |&best| best < g)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.best_g.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_g.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_pop_returns_lowest_f() {
        let mut frontier = Frontier::new();
        frontier.push(5, 0);
        frontier.push(2, 1);
        frontier.push(9, 2);
        assert_eq!(frontier.pop(), Some((2, 1)));
        assert_eq!(frontier.pop(), Some((5, 0)));
        assert_eq!(frontier.pop(), Some((9, 2)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        for node in [7, 3, 11, 0, 4] {
            frontier.push(1, node);
        }
        frontier.push(0, 99);
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|(_, n)| n)).collect();
        assert_eq!(order, vec![99, 7, 3, 11, 0, 4]);
    }

    #[test]
    fn test_push_counter() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        frontier.push(1, 0);
        frontier.push(1, 1);
        frontier.pop();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pushes(), 2);
    }

    #[test]
    fn test_first_seen_keeps_first_path() {
        let board = Board::goal(3);
        let mut visited = VisitedSet::new(VisitedPolicy::FirstSeen);
        assert!(visited.admit(&board, 5));
        assert!(!visited.admit(&board, 1));
        assert!(!visited.is_stale(&board, 5));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_reopen_accepts_cheaper_paths_only() {
        let board = Board::goal(3);
        let other = board.apply_move(Move::Down).unwrap();
        let mut visited = VisitedSet::new(VisitedPolicy::ReopenOnImprovement);
        assert!(visited.admit(&board, 5));
        assert!(!visited.admit(&board, 5));
        assert!(!visited.admit(&board, 7));
        assert!(visited.admit(&board, 3));
        assert!(visited.is_stale(&board, 5));
        assert!(!visited.is_stale(&board, 3));
        assert!(!visited.is_stale(&other, 0));
        assert_eq!(visited.len(), 1);
        assert!(!visited.is_empty());
    }
}
