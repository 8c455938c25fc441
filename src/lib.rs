//! # 8-Puzzle Solver Library
//!
//! This library provides the board model for the 3x3 sliding-tile puzzle and six
//! interchangeable search strategies that find a move sequence from any starting
//! arrangement to the solved one.
//!
//! It is used by two binaries:
//! - `puzzle_solver`: Takes a board (typed, preset or random), runs one strategy or
//!   all of them, and prints the solution path and effort counters as text or JSON.
//! - `strategy_evaluator`: Runs every strategy over a batch of seeded random boards
//!   and reports average path length and effort per strategy.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), moves (`Move`), the goal
//!   arrangement, successor generation, fingerprints and the solvability check.
//! - `state`: Search nodes (`State`) with cost bookkeeping, and the arena that owns
//!   them during a solve.
//! - `heuristics`: The Manhattan distance estimate used by Greedy and A*.
//! - `solver`: The `Solver` trait, the `Algorithm` selector and the six strategies.
//! - `report`: Serializable per-solve reports and the run-everything comparison.
//! - `utils`: Board parsing and the named preset boards.
//! - `error`: Error types for malformed boards and unknown strategy names.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod report;
pub mod solver;
pub mod state;
pub mod utils;
