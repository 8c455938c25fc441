use rustc_hash::FxHashSet;

use super::frontier::PriorityFrontier;
use super::{log_outcome, Algorithm, SearchMetrics, Solver};
use crate::engine::{Board, GOAL};
use crate::heuristics::manhattan_distance;
use crate::state::{neighbors, State, StateArena};

/// Greedy best-first search on the Manhattan distance.
///
/// The frontier is ordered by `h` alone, with ties going to the earlier insertion.
/// Boards are marked visited when discovered. Accumulated cost is ignored, so the
/// path is usually longer than the optimum, but far fewer states are expanded than
/// with BFS.
#[derive(Debug, Default)]
pub struct GreedySolver {
    nodes_explored: usize,
    visited_nodes: usize,
}

impl GreedySolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for GreedySolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn solve(&mut self, initial: &Board) -> Option<Vec<State>> {
        self.nodes_explored = 0;
        self.visited_nodes = 0;

        let goal = GOAL.fingerprint();
        let mut arena = StateArena::new();
        let root_state = State::root(*initial, Some(manhattan_distance));
        let root = arena.insert(root_state);

        let mut frontier = PriorityFrontier::new();
        frontier.push(root_state.h, root);
        let mut visited = FxHashSet::default();
        visited.insert(initial.fingerprint());

        let mut result = None;
        while let Some(id) = frontier.pop() {
            self.nodes_explored += 1;
            let current = *arena.get(id);

            if current.fingerprint() == goal {
                result = Some(arena.path_to(id));
                break;
            }

            for child in neighbors(&current, id, Some(manhattan_distance)) {
                if visited.insert(child.fingerprint()) {
                    frontier.push(child.h, arena.insert(child));
                }
            }
        }

        self.visited_nodes = visited.len();
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
