//! Search strategies over the puzzle's state graph.
//!
//! Six interchangeable strategies implement [`Solver`]:
//! - [`BfsSolver`]: breadth-first, visited on discovery. Move-optimal.
//! - [`DfsSolver`]: depth-first with a depth bound. Not optimal.
//! - [`IddfsSolver`]: iterative deepening with a fresh seen map per limit. Move-optimal.
//! - [`BidirectionalSolver`]: breadth-first from both ends until the trees meet. Move-optimal.
//! - [`GreedySolver`]: best-first on the Manhattan estimate alone. Not optimal.
//! - [`AStarSolver`]: best-first on `g + h` with a closed set. Move-optimal.
//!
//! Every `solve` call owns its frontier, visited structures and state arena; nothing
//! is shared between calls or between strategies, so separate solver values can run
//! on separate threads without synchronization.

mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod frontier;
mod greedy;
mod iddfs;

pub use astar::AStarSolver;
pub use bfs::BfsSolver;
pub use bidirectional::BidirectionalSolver;
pub use dfs::DfsSolver;
pub use greedy::GreedySolver;
pub use iddfs::IddfsSolver;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::engine::Board;
use crate::error::UnknownAlgorithm;
use crate::state::State;

/// Depth bound used by DFS and IDDFS unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Effort counters of the most recent `solve` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchMetrics {
    /// Work performed: states taken off the frontier and expanded (or entered, for
    /// the recursive strategies).
    pub nodes_explored: usize,
    /// Distinct states memoized. `None` when a strategy does not track it separately.
    pub visited_nodes: Option<usize>,
    /// Configured depth bound, for the depth-limited strategies only.
    pub max_depth: Option<usize>,
}

/// Tunables shared by the strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SolverConfig {
    /// Deepest `g` DFS will expand, and the last limit IDDFS will try.
    pub max_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Common interface of the six search strategies.
pub trait Solver {
    /// Which strategy this is.
    fn algorithm(&self) -> Algorithm;

    /// Searches for a path from `initial` to the goal.
    ///
    /// # Returns
    /// * `Some(path)` with the states from `initial` to the goal inclusive, root first.
    ///   Each state's `parent` indexes the previous entry of `path`.
    /// * `None` if the goal was not reached within the strategy's bounds. This is
    ///   the normal outcome for unsolvable boards.
    ///
    /// The counters returned by [`Solver::metrics`] are reset at the start of each call.
    fn solve(&mut self, initial: &Board) -> Option<Vec<State>>;

    /// Effort counters of the most recent `solve` call.
    fn metrics(&self) -> SearchMetrics;

    fn nodes_explored(&self) -> usize {
        self.metrics().nodes_explored
    }

    fn visited_nodes(&self) -> Option<usize> {
        self.metrics().visited_nodes
    }

    fn max_depth(&self) -> Option<usize> {
        self.metrics().max_depth
    }
}

/// Selector for the six strategies, carrying the metadata the result consumers need.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    AStar,
    Bfs,
    Dfs,
    Iddfs,
    Bidirectional,
    Greedy,
}

impl Algorithm {
    /// Every strategy, in the order comparisons are run and listed.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Iddfs,
        Algorithm::Bidirectional,
        Algorithm::Greedy,
    ];

    /// Short lowercase name, as accepted by [`Algorithm::from_str`].
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::AStar => "astar",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Iddfs => "iddfs",
            Algorithm::Bidirectional => "bidirectional",
            Algorithm::Greedy => "greedy",
        }
    }

    /// Human-readable name shown by result viewers.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A* Search",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Iddfs => "IDDFS",
            Algorithm::Bidirectional => "Bidirectional BFS",
            Algorithm::Greedy => "Greedy Best-First",
        }
    }

    /// Theme colour handed to result viewers.
    pub fn color(self) -> &'static str {
        match self {
            Algorithm::AStar => "#3498db",
            Algorithm::Bfs => "#e74c3c",
            Algorithm::Dfs => "#2ecc71",
            Algorithm::Iddfs => "#9b59b6",
            Algorithm::Bidirectional => "#f39c12",
            Algorithm::Greedy => "#1abc9c",
        }
    }

    /// Whether the strategy always returns a minimum-move path.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs | Algorithm::Greedy)
    }

    /// Builds a fresh solver for this strategy.
    pub fn solver(self, config: &SolverConfig) -> Box<dyn Solver> {
        match self {
            Algorithm::AStar => Box::new(AStarSolver::new()),
            Algorithm::Bfs => Box::new(BfsSolver::new()),
            Algorithm::Dfs => Box::new(DfsSolver::with_max_depth(config.max_depth)),
            Algorithm::Iddfs => Box::new(IddfsSolver::with_max_depth(config.max_depth)),
            Algorithm::Bidirectional => Box::new(BidirectionalSolver::new()),
            Algorithm::Greedy => Box::new(GreedySolver::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let alias = match wanted.as_str() {
            "a*" | "a-star" => "astar",
            "bidi" | "bibfs" => "bidirectional",
            "best-first" | "gbfs" => "greedy",
            other => other,
        };
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.key() == alias)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Emits the per-solve summary event every strategy logs on completion.
pub(crate) fn log_outcome(algorithm: Algorithm, path: Option<&[State]>, metrics: &SearchMetrics) {
    match path {
        Some(path) => debug!(
            algorithm = algorithm.key(),
            moves = path.len().saturating_sub(1),
            nodes_explored = metrics.nodes_explored,
            visited_nodes = ?metrics.visited_nodes,
            "solution found"
        ),
        None => debug!(
            algorithm = algorithm.key(),
            nodes_explored = metrics.nodes_explored,
            visited_nodes = ?metrics.visited_nodes,
            "no solution found"
        ),
    }
}
