//! # Eight Puzzle Solver Library
//!
//! This library provides a best-first (A* / uniform-cost) search engine for
//! sliding-tile puzzles, delivered for the 3×3 "8-puzzle" but generic over the
//! side length internally.
//!
//! It is used by two binaries:
//! - `astar_solver`: Solves a start/goal pair with one or more heuristics and
//!   prints the path, the move string and the number of generated states.
//! - `heuristic_evaluator`: Compares heuristics on seeded random boards.
//!
//! ## Modules
//! - `board`: The board value type (`Board`) and blank moves (`Move`).
//! - `solvability`: Inversion-parity precheck (`is_solvable`, `ParityRule`).
//! - `heuristics`: The `Heuristic` trait and the zero, misplaced-tile and
//!   Manhattan-distance strategies.
//! - `frontier`: Priority frontier with insertion-order tie-breaking and the
//!   visited set with its duplicate policy.
//! - `solver`: The search driver (`solve`, `SearchOutcome`) and path
//!   reconstruction.
//! - `utils`: Parsing boards from text.
//! - `error`: `SolverError` for boards rejected before search.

pub mod board;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod solvability;
pub mod solver;
pub mod utils;

pub use crate::board::{Board, Move};
pub use crate::error::{Result, SolverError};
pub use crate::heuristics::{Heuristic, HeuristicKind};
pub use crate::solver::{solve, solve_with_config, SearchConfig, SearchOutcome, Solution};
