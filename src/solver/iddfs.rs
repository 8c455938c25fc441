use rustc_hash::FxHashMap;
use tracing::trace;

use super::{log_outcome, Algorithm, SearchMetrics, Solver, DEFAULT_MAX_DEPTH};
use crate::engine::{Board, Fingerprint};
use crate::state::{neighbors, State, StateArena, StateId};

/// Iterative-deepening depth-first search.
///
/// Runs a depth-limited DFS for the limits `0, 1, 2, ..., max_depth` and returns the
/// first solution found. Every iteration starts with a fresh seen map, so states met
/// at a shallow limit never block their rediscovery at a deeper one. Within an
/// iteration a state is skipped only if it was already entered at the same or a
/// smaller depth, which keeps the first solution move-optimal.
///
/// The arena holds nothing but the current recursion path: it is truncated on every
/// backtrack.
#[derive(Debug)]
pub struct IddfsSolver {
    max_depth: usize,
    nodes_explored: usize,
    visited_nodes: usize,
}

impl IddfsSolver {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        IddfsSolver {
            max_depth,
            nodes_explored: 0,
            visited_nodes: 0,
        }
    }

    fn depth_limited(
        &mut self,
        arena: &mut StateArena,
        id: StateId,
        remaining: usize,
        seen: &mut FxHashMap<Fingerprint, u32>,
    ) -> Option<StateId> {
        self.nodes_explored += 1;
        let current = *arena.get(id);
        seen.insert(current.fingerprint(), current.g);

        if current.board.is_goal() {
            return Some(id);
        }
        if remaining == 0 {
            return None;
        }

        for child in neighbors(&current, id, None) {
            let shallower = seen
                .get(&child.fingerprint())
                .map_or(true, |&depth| child.g < depth);
            if !shallower {
                continue;
            }
            let child_id = arena.insert(child);
            if let Some(found) = self.depth_limited(arena, child_id, remaining - 1, seen) {
                return Some(found);
            }
            arena.truncate(child_id.index());
        }
        None
    }
}

impl Default for IddfsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for IddfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Iddfs
    }

    fn solve(&mut self, initial: &Board) -> Option<Vec<State>> {
        self.nodes_explored = 0;
        self.visited_nodes = 0;

        let mut result = None;
        for limit in 0..=self.max_depth {
            let mut arena = StateArena::new();
            let root = arena.insert(State::root(*initial, None));
            let mut seen = FxHashMap::default();

            let found = self.depth_limited(&mut arena, root, limit, &mut seen);
            self.visited_nodes += seen.len();
            trace!(
                limit,
                seen = seen.len(),
                nodes_explored = self.nodes_explored,
                "iddfs iteration finished"
            );

            if let Some(goal_id) = found {
                result = Some(arena.path_to(goal_id));
                break;
            }
        }

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
