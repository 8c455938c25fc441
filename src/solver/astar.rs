use rustc_hash::FxHashSet;
use tracing::trace;

use super::frontier::PriorityFrontier;
use super::{log_outcome, Algorithm, SearchMetrics, Solver};
use crate::engine::{Board, GOAL};
use crate::heuristics::manhattan_distance;
use crate::state::{neighbors, State, StateArena};

/// A* search with the Manhattan distance.
///
/// The frontier is ordered by `g + h`, ties going to the earlier insertion. A board
/// joins the closed set when it is expanded. The same board may sit in the frontier
/// several times with different costs; the cheapest copy is popped first and the
/// rest are skipped when they come up. `nodes_explored` counts expansions only.
#[derive(Debug, Default)]
pub struct AStarSolver {
    nodes_explored: usize,
    visited_nodes: usize,
}

impl AStarSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for AStarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn solve(&mut self, initial: &Board) -> Option<Vec<State>> {
        self.nodes_explored = 0;
        self.visited_nodes = 0;

        let goal = GOAL.fingerprint();
        let mut arena = StateArena::new();
        let root_state = State::root(*initial, Some(manhattan_distance));
        let root = arena.insert(root_state);

        let mut open = PriorityFrontier::new();
        open.push(root_state.total_cost(), root);
        let mut closed = FxHashSet::default();
        let mut skipped = 0usize;

        let mut result = None;
        while let Some(id) = open.pop() {
            let current = *arena.get(id);
            let fingerprint = current.fingerprint();
            if closed.contains(&fingerprint) {
                skipped += 1;
                continue;
            }
            self.nodes_explored += 1;

            if fingerprint == goal {
                result = Some(arena.path_to(id));
                break;
            }
            closed.insert(fingerprint);

            for child in neighbors(&current, id, Some(manhattan_distance)) {
                if !closed.contains(&child.fingerprint()) {
                    open.push(child.total_cost(), arena.insert(child));
                }
            }
        }

        self.visited_nodes = closed.len();
        trace!(skipped, open = open.len(), "a* frontier at exit");
        log_outcome(self.algorithm(), result.as_deref(), &self.metrics());
        result
    }

    fn metrics(&self) -> SearchMetrics {
        SearchMetrics {
            nodes_explored: self.nodes_explored,
            visited_nodes: Some(self.visited_nodes),
            max_depth: None,
        }
    }
}
