//! Search states, the arena that owns them, and the neighbor generator.
//!
//! Each strategy owns one `StateArena` per `solve` call. A state refers to its
//! predecessor by `StateId`, so reconstructing a path is a walk over indices and no
//! state ever holds a reference to another.

use crate::engine::{Board, Fingerprint, Move};
use crate::heuristics::HeuristicFn;

/// Handle of a state inside a [`StateArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    /// Position of the state in its arena, or of the step in a returned path.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One board configuration plus the bookkeeping needed to rebuild a path and
/// order a frontier.
///
/// Equality looks at the board alone; `g`, `h`, `parent` and `mv` are ignored.
#[derive(Clone, Copy, Debug)]
pub struct State {
    /// Snapshot of the board. Boards are `Copy`, so no two states alias one.
    pub board: Board,
    /// Number of moves from the initial state.
    pub g: u32,
    /// Heuristic estimate to the goal; 0 for strategies that use none.
    pub h: u32,
    /// Predecessor. Inside an arena this indexes the arena; in a returned path it
    /// indexes the path. `None` for the root.
    pub parent: Option<StateId>,
    /// Move that produced this state from its parent. `None` for the root.
    pub mv: Option<Move>,
}

impl State {
    /// Creates a root state with no parent and no move.
    pub fn root(board: Board, heuristic: Option<HeuristicFn>) -> Self {
        State {
            board,
            g: 0,
            h: heuristic.map_or(0, |f| f(&board)),
            parent: None,
            mv: None,
        }
    }

    /// `g + h`.
    pub fn total_cost(&self) -> u32 {
        self.g + self.h
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.board.fingerprint()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for State {}

/// Generates the successors of `parent`, stored at `parent_id`.
///
/// Successors come out in the fixed order Up, Down, Left, Right, skipping moves
/// that would push the blank off the board. Each one has `g = parent.g + 1`, `h`
/// from `heuristic` (or 0), the parent's handle and the move label. Nothing is
/// inserted into an arena; the caller decides which successors to keep.
pub fn neighbors(
    parent: &State,
    parent_id: StateId,
    heuristic: Option<HeuristicFn>,
) -> impl Iterator<Item = State> {
    let g = parent.g + 1;
    parent.board.successors().map(move |(mv, next)| State {
        board: next,
        g,
        h: heuristic.map_or(0, |f| f(&next)),
        parent: Some(parent_id),
        mv: Some(mv),
    })
}

/// Append-only storage for the states created during one search.
#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<State>,
}

impl StateArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a state and returns its handle.
    pub fn insert(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(state);
        id
    }

    pub fn get(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    /// Drops every state stored at or after `len`. Handles to them become invalid.
    ///
    /// Recursive strategies use this to keep only the current path alive.
    pub fn truncate(&mut self, len: usize) {
        self.states.truncate(len);
    }

    /// Handles from the root down to `id`, root first.
    pub fn lineage(&self, id: StateId) -> Vec<StateId> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            chain.push(cur);
            current = self.get(cur).parent;
        }
        chain.reverse();
        chain
    }

    /// Rebuilds the path from the root to `id`, detached from the arena.
    ///
    /// The returned states are copies whose `parent` indexes the previous entry of
    /// the returned vector.
    pub fn path_to(&self, id: StateId) -> Vec<State> {
        detach(self.lineage(id).into_iter().map(|sid| *self.get(sid)).collect())
    }
}

/// Rewrites `parent` handles so each step points at the previous step in `path`.
pub fn detach(mut path: Vec<State>) -> Vec<State> {
    for (i, state) in path.iter_mut().enumerate() {
        state.parent = i.checked_sub(1).map(|p| StateId(p as u32));
    }
    path
}
