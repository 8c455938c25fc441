use rustc_hash::FxHashSet;

use super::{log_outcome, Algorithm, SearchMetrics, Solver, DEFAULT_MAX_DEPTH};
use crate::engine::{Board, GOAL};
use crate::state::{neighbors, State, StateArena};

/// Depth-first search bounded by a maximum depth.
///
/// Uses an explicit stack. A state is marked visited when it is expanded, and the
/// visited set lasts for the whole call, so once a board has been expanded it is
/// never expanded again even if a shorter route to it turns up later. Successors are
/// pushed in reverse so they are explored in emission order. A successor that is the
/// goal ends the search immediately.
///
/// Neither optimal nor complete: a board whose only solutions pass through states
/// first reached deep in another branch may come back as `None`.
#[derive(Debug)]
pub struct DfsSolver {
    max_depth: usize,
    nodes_explored: usize,
    visited_nodes: usize,
}

impl DfsSolver {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        DfsSolver {
            max_depth,
            nodes_explored: 0,
            visited_nodes: 0,
        }
    }
}

impl Default for DfsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for DfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn solve(&mut self, initial: &Board) -> Option<Vec<State>> {
        self.nodes_explored = 0;
        self.visited_nodes = 0;

        let goal = GOAL.fingerprint();
        let mut arena = StateArena::new();
        let mut stack = vec![arena.insert(State::root(*initial, None))];
        let mut visited = FxHashSet::default();

        let mut result = None;
        while let Some(id) = stack.pop() {
            let current = *arena.get(id);
            if !visited.insert(current.fingerprint()) {
                continue;
            }
            self.nodes_explored += 1;

            if current.fingerprint() == goal {
                result = Some(arena.path_to(id));
                break;
            }
            if current.g as usize >= self.max_depth {
                continue;
            }

            let children: Vec<State> = neighbors(&current, id, None)
                .filter(|child| !visited.contains(&child.fingerprint()))
                .collect();

            if let Some(&found) = children.iter().find(|child| child.fingerprint() == goal) {
                visited.insert(goal);
                let goal_id = arena.insert(found);
                result = Some(arena.path_to(goal_id));
                break;
            }

            for child in children.into_iter().rev() {
                stack.push(arena.insert(child));
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
            max_depth: Some(self.max_depth),
        }
    }
}
