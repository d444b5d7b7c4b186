//! A* / uniform-cost search driver and path reconstruction.
//!
//! The driver runs the parity precheck once, then expands boards in order of
//! `f = g + h` until the goal is popped. Search nodes live in an arena owned by
//! the call; each node stores its parent as an index, and the whole arena is
//! dropped once the path has been rebuilt.

use crate::board::{moves_to_string, Board, Move};
use crate::error::{Result, SolverError};
use crate::frontier::{Frontier, VisitedPolicy, VisitedSet};
use crate::heuristics::Heuristic;
use crate::solvability::{is_reachable, ParityRule};
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};

/// Knobs for a single search. `Default` gives first-seen duplicate
/// suppression, the canonical parity rule and no expansion limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub visited_policy: VisitedPolicy,
    pub parity_rule: ParityRule,
    /// Stop with `SearchOutcome::Aborted` after this many expansions.
    pub max_expansions: Option<usize>,
}

/// A solved instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Boards from start to goal, both inclusive.
    pub path: Vec<Board>,
    pub moves: Vec<Move>,
    /// Equal to `moves.len()` and `path.len() - 1`.
    pub move_count: usize,
    /// Boards pushed into the frontier after the start board.
    pub states_generated: usize,
    /// Boards popped and expanded before the goal was popped.
    pub states_expanded: usize,
}

impl Solution {
    /// Moves as a string over `{U, D, L, R}`.
    pub fn move_string(&self) -> String {
        moves_to_string(&self.moves)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    ExpansionBudget,
    Cancelled,
}

/// Terminal state of the search state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The parity precheck rejected the start board. Nothing was generated.
    Unsolvable,
    Solved(Solution),
    /// The frontier ran dry after passing the precheck. For a correct
    /// goal/parity pairing this indicates a defect, not an unsolvable input.
    Exhausted { states_generated: usize },
    /// Stopped early by `SearchConfig::max_expansions` or a cancel flag.
    Aborted {
        states_generated: usize,
        reason: AbortReason,
    },
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn states_generated(&self) -> usize {
        match self {
            SearchOutcome::Unsolvable => 0,
            SearchOutcome::Solved(solution) => solution.states_generated,
            SearchOutcome::Exhausted { states_generated }
            | SearchOutcome::Aborted {
                states_generated, ..
            } => *states_generated,
        }
    }
}

#[derive(Debug)]
struct SearchNode {
    board: Board,
    g: u32,
    last_move: Option<Move>,
    parent: Option<usize>,
}

/// Solves `start -> goal` with the default configuration.
///
/// ```
/// use eight_puzzle::board::Board;
/// use eight_puzzle::heuristics::MisplacedTiles;
/// use eight_puzzle::solver::solve;
///
/// let start = Board::from_rows(&[[3, 1, 2], [4, 7, 5], [6, 8, 0]]).unwrap();
/// let outcome = solve(&start, &Board::goal(3), &MisplacedTiles).unwrap();
/// assert_eq!(outcome.solution().unwrap().move_string(), "LULU");
/// ```
pub fn solve(start: &Board, goal: &Board, heuristic: &dyn Heuristic) -> Result<SearchOutcome> {
    solve_with_config(start, goal, heuristic, &SearchConfig::default())
}

pub fn solve_with_config(
    start: &Board,
    goal: &Board,
    heuristic: &dyn Heuristic,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    let cancel = AtomicBool::new(false);
    solve_cancelable(start, goal, heuristic, config, &cancel)
}

/// Like `solve_with_config`, checking `cancel` once per loop iteration.
pub fn solve_cancelable(
    start: &Board,
    goal: &Board,
    heuristic: &dyn Heuristic,
    config: &SearchConfig,
    cancel: &AtomicBool,
) -> Result<SearchOutcome> {
    if start.size() != goal.size() {
        return Err(SolverError::SizeMismatch {
            start: start.size(),
            goal: goal.size(),
        });
    }

    if !is_reachable(start, goal, config.parity_rule) {
        debug!("start rejected by {:?} parity check", config.parity_rule);
        return Ok(SearchOutcome::Unsolvable);
    }

    debug!(
        "searching with heuristic '{}' ({:?})",
        heuristic.name(),
        config.visited_policy
    );

    let mut arena = vec![SearchNode {
        board: start.clone(),
        g: 0,
        last_move: None,
        parent: None,
    }];
    let mut frontier = Frontier::new();
    let mut visited = VisitedSet::new(config.visited_policy);
    visited.admit(start, 0);
    frontier.push(heuristic.estimate(start, goal), 0);

    let mut states_generated = 0usize;
    let mut states_expanded = 0usize;

    while let Some((f, idx)) = frontier.pop() {
        if cancel.load(Ordering::Relaxed) {
            debug!("search cancelled after {} expansions", states_expanded);
            return Ok(SearchOutcome::Aborted {
                states_generated,
                reason: AbortReason::Cancelled,
            });
        }

        let (board, g) = (arena[idx].board.clone(), arena[idx].g);
        if visited.is_stale(&board, g) {
            continue;
        }

        if board == *goal {
            debug_assert_eq!(frontier.pushes(), states_generated as u64 + 1);
            debug!(
                "goal reached at depth {} ({} generated, {} expanded, {} boards visited)",
                g,
                states_generated,
                states_expanded,
                visited.len()
            );
            let (path, moves) = reconstruct_path(&arena, idx);
            return Ok(SearchOutcome::Solved(Solution {
                move_count: moves.len(),
                path,
                moves,
                states_generated,
                states_expanded,
            }));
        }

        if config
            .max_expansions
            .map_or(false, |limit| states_expanded >= limit)
        {
            debug!("expansion budget of {} exhausted", states_expanded);
            return Ok(SearchOutcome::Aborted {
                states_generated,
                reason: AbortReason::ExpansionBudget,
            });
        }

        trace!("expanding node {} (g={}, f={})", idx, g, f);
        states_expanded += 1;

        for mv in Move::ALL {
            let child = match board.apply_move(mv) {
                Some(child) => child,
                None => continue,
            };
            let child_g = g + 1;
            if !visited.admit(&child, child_g) {
                continue;
            }

            let h = heuristic.estimate(&child, goal);
            arena.push(SearchNode {
                board: child,
                g: child_g,
                last_move: Some(mv),
                parent: Some(idx),
            });
            frontier.push(child_g + h, arena.len() - 1);
            states_generated += 1;
        }
    }

    debug_assert!(frontier.is_empty());
    debug!(
        "frontier exhausted after {} generated states ({} pushes)",
        states_generated,
        frontier.pushes()
    );
    Ok(SearchOutcome::Exhausted { states_generated })
}

/// Walks parent links from `goal_idx` back to the root and returns the boards
/// and moves in forward order.
fn reconstruct_path(arena: &[SearchNode], goal_idx: usize) -> (Vec<Board>, Vec<Move>) {
    let mut path = Vec::with_capacity(arena[goal_idx].g as usize + 1);
    let mut moves = Vec::with_capacity(arena[goal_idx].g as usize);
    let mut cursor = Some(goal_idx);

    while let Some(idx) = cursor {
        let node = &arena[idx];
        path.push(node.board.clone());
        if let Some(mv) = node.last_move {
            moves.push(mv);
        }
        cursor = node.parent;
    }

    path.reverse();
    moves.reverse();
    (path, moves)
}
