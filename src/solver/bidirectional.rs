use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use tracing::trace;

use super::{log_outcome, Algorithm, SearchMetrics, Solver};
use crate::engine::{Board, Fingerprint, GOAL};
use crate::state::{detach, neighbors, State, StateArena, StateId};

/// One direction of the search: its FIFO queue and a map from every board it has
/// discovered to the state that discovered it.
#[derive(Debug)]
struct Tree {
    queue: VecDeque<StateId>,
    visited: FxHashMap<Fingerprint, StateId>,
}

impl Tree {
    fn new(root: StateId, fingerprint: Fingerprint) -> Self {
        let mut visited = FxHashMap::default();
        visited.insert(fingerprint, root);
        Tree {
            queue: VecDeque::from([root]),
            visited,
        }
    }
}

/// Breadth-first search from the initial board and from the goal at the same time.
///
/// Each round pops one state from the forward queue and then one from the backward
/// queue. A popped board that the other tree has already discovered is a meeting
/// point and ends the search. Boards join a tree's visited map when discovered. The
/// search gives up once both queues are empty.
#[derive(Debug, Default)]
pub struct BidirectionalSolver {
    nodes_explored: usize,
    visited_nodes: usize,
}

impl BidirectionalSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops and expands the next state of `tree`.
    ///
    /// # Returns
    /// `Some((mine, theirs))` with the handles of the meeting board in `tree` and in
    /// `other`, or `None` if the popped board is unknown to `other` or the queue was
    /// empty.
    fn expand_next(
        &mut self,
        arena: &mut StateArena,
        tree: &mut Tree,
        other: &Tree,
    ) -> Option<(StateId, StateId)> {
        let id = tree.queue.pop_front()?;
        self.nodes_explored += 1;
        let current = *arena.get(id);

        let fingerprint = current.fingerprint();
        if let Some(&theirs) = other.visited.get(&fingerprint) {
            trace!(meeting = %fingerprint, depth = current.g, "search trees met");
            return Some((id, theirs));
        }

        for child in neighbors(&current, id, None) {
            let child_fingerprint = child.fingerprint();
            if !tree.visited.contains_key(&child_fingerprint) {
                let child_id = arena.insert(child);
                tree.visited.insert(child_fingerprint, child_id);
                tree.queue.push_back(child_id);
            }
        }
        None
    }

    /// Joins the forward path to `forward` with the backward chain from `backward`
    /// to the goal.
    ///
    /// `backward` is the goal tree's copy of the meeting board, so it is skipped and
    /// the walk starts at its parent. The backward tree records the moves that lead
    /// away from the goal; walking it toward the goal uses their opposites.
    fn join(arena: &StateArena, forward: StateId, backward: StateId) -> Vec<State> {
        let mut path = arena.path_to(forward);
        let mut link = *arena.get(backward);

        while let Some(parent_id) = link.parent {
            let parent = arena.get(parent_id);
            let g = path.last().map_or(0, |prev| prev.g + 1);
            path.push(State {
                board: parent.board,
                g,
                h: 0,
                parent: None,
                mv: link.mv.map(|mv| mv.opposite()),
            });
            link = *parent;
        }
        detach(path)
    }
}

impl Solver for BidirectionalSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bidirectional
    }

    fn solve(&mut self, initial: &Board) -> Option<Vec<State>> {
        self.nodes_explored = 0;
        self.visited_nodes = 0;

        let mut arena = StateArena::new();
        let start = arena.insert(State::root(*initial, None));
        let goal = arena.insert(State::root(GOAL, None));
        let mut forward = Tree::new(start, initial.fingerprint());
        let mut backward = Tree::new(goal, GOAL.fingerprint());

        let mut result = None;
        while !forward.queue.is_empty() || !backward.queue.is_empty() {
            if let Some((f, b)) = self.expand_next(&mut arena, &mut forward, &backward) {
                result = Some(Self::join(&arena, f, b));
                break;
            }
            if let Some((b, f)) = self.expand_next(&mut arena, &mut backward, &forward) {
                result = Some(Self::join(&arena, f, b));
                break;
            }
        }

        self.visited_nodes = forward.visited.len() + backward.visited.len();
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
