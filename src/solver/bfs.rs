use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use super::{log_outcome, Algorithm, SearchMetrics, Solver};
use crate::engine::{Board, GOAL};
use crate::state::{neighbors, State, StateArena};

/// Breadth-first search.
///
/// States are marked visited when they are enqueued, so each board enters the queue
/// once, via the first (and therefore shortest) path that reaches it. The goal test
/// happens at dequeue.
#[derive(Debug, Default)]
pub struct BfsSolver {
    nodes_explored: usize,
    visited_nodes: usize,
}

impl BfsSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for BfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn solve(&mut self, initial: &Board) -> Option<Vec<State>> {
        self.nodes_explored = 0;
        self.visited_nodes = 0;

        let goal = GOAL.fingerprint();
        let mut arena = StateArena::new();
        let root = arena.insert(State::root(*initial, None));
        let mut queue = VecDeque::from([root]);
        let mut visited = FxHashSet::default();
        visited.insert(initial.fingerprint());

        let mut result = None;
        while let Some(id) = queue.pop_front() {
            self.nodes_explored += 1;
            let current = *arena.get(id);

            if current.fingerprint() == goal {
                result = Some(arena.path_to(id));
                break;
            }

            for child in neighbors(&current, id, None) {
                if visited.insert(child.fingerprint()) {
                    queue.push_back(arena.insert(child));
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
