//! Consumer-facing view of a solve.
//!
//! Viewers and report generators read only what is here: the strategy's name and
//! colour, its effort counters, and per step the board, `g`, `h`, `total_cost` and
//! the move label.

use serde::Serialize;
use std::fmt;

use crate::engine::{Board, Move, BOARD_SIZE};
use crate::solver::{Algorithm, SearchMetrics, Solver, SolverConfig};
use crate::state::State;

/// One step of a solution path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub step: usize,
    pub board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    pub g: u32,
    pub h: u32,
    pub total_cost: u32,
    #[serde(rename = "move")]
    pub mv: Option<Move>,
}

impl From<(usize, &State)> for StepView {
    fn from((step, state): (usize, &State)) -> Self {
        StepView {
            step,
            board: *state.board.rows(),
            g: state.g,
            h: state.h,
            total_cost: state.total_cost(),
            mv: state.mv,
        }
    }
}

/// Outcome of running one strategy on one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub name: &'static str,
    pub color: &'static str,
    pub initial: [[u8; BOARD_SIZE]; BOARD_SIZE],
    pub solved: bool,
    /// Path length in moves; `None` when no solution was found.
    pub moves: Option<usize>,
    pub nodes_explored: usize,
    /// Distinct states memoized, or `nodes_explored` for strategies that do not
    /// track them separately.
    pub visited_nodes: usize,
    /// Depth bound of DFS and IDDFS.
    pub max_depth: Option<usize>,
    pub path: Vec<StepView>,
}

impl SolveReport {
    /// Builds a report from a finished solve.
    pub fn new(
        algorithm: Algorithm,
        initial: &Board,
        path: Option<&[State]>,
        metrics: SearchMetrics,
    ) -> Self {
        let steps: Vec<StepView> = path
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(StepView::from)
            .collect();
        SolveReport {
            algorithm,
            name: algorithm.display_name(),
            color: algorithm.color(),
            initial: *initial.rows(),
            solved: path.is_some(),
            moves: path.map(|p| p.len().saturating_sub(1)),
            nodes_explored: metrics.nodes_explored,
            visited_nodes: metrics.visited_nodes.unwrap_or(metrics.nodes_explored),
            max_depth: metrics.max_depth,
            path: steps,
        }
    }

    /// Runs `solver` on `initial` and captures the result.
    pub fn run(solver: &mut dyn Solver, initial: &Board) -> Self {
        let path = solver.solve(initial);
        SolveReport::new(solver.algorithm(), initial, path.as_deref(), solver.metrics())
    }

    /// One line summarising the outcome, for comparison tables.
    pub fn summary_row(&self) -> String {
        let moves = self
            .moves
            .map_or_else(|| "-".to_string(), |m| m.to_string());
        let depth = self
            .max_depth
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        format!(
            "{:<18} {:>6} {:>10} {:>10} {:>6}",
            self.name, moves, self.nodes_explored, self.visited_nodes, depth
        )
    }

    /// Header matching [`SolveReport::summary_row`].
    pub fn summary_header() -> String {
        format!(
            "{:<18} {:>6} {:>10} {:>10} {:>6}",
            "Algorithm", "Moves", "Explored", "Visited", "Depth"
        )
    }
}

impl fmt::Display for SolveReport {
    /// Lists the path frame by frame, followed by the effort counters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(moves) = self.moves else {
            return writeln!(
                f,
                "{}: no solution found after exploring {} nodes.",
                self.name, self.nodes_explored
            );
        };

        writeln!(f, "{} solution found in {} moves:\n", self.name, moves)?;
        for step in &self.path {
            match step.mv {
                Some(mv) => writeln!(f, "Move {}: {}", step.step, mv)?,
                None => writeln!(f, "Initial State:")?,
            }
            if let Ok(board) = Board::from_rows(step.board) {
                writeln!(f, "{}", board)?;
            }
        }
        writeln!(
            f,
            "Nodes explored: {}, Visited: {}",
            self.nodes_explored, self.visited_nodes
        )?;
        if let Some(depth) = self.max_depth {
            writeln!(f, "Max depth: {}", depth)?;
        }
        Ok(())
    }
}

/// Runs every strategy on `initial`, in [`Algorithm::ALL`] order.
pub fn compare_all(initial: &Board, config: &SolverConfig) -> Vec<SolveReport> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let mut solver = algorithm.solver(config);
            SolveReport::run(solver.as_mut(), initial)
        })
        .collect()
}
