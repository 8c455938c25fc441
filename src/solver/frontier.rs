//! Min-priority frontier shared by the informed strategies.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::state::StateId;

#[derive(Debug, PartialEq, Eq)]
struct Entry {
    priority: u32,
    seq: u64,
    id: StateId,
}

// Reversed so the std max-heap pops the lowest priority, then the earliest insertion.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of state handles. Equal priorities come out in insertion order,
/// which keeps every search reproducible.
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, priority: u32, id: StateId) {
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            id,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<StateId> {
        self.heap.pop().map(|entry| entry.id)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GOAL;
    use crate::state::{State, StateArena};

    #[test]
    fn test_lowest_priority_first_with_fifo_ties() {
        let mut arena = StateArena::new();
        let ids: Vec<StateId> = (0..5)
            .map(|_| arena.insert(State::root(GOAL, None)))
            .collect();

        let mut frontier = PriorityFrontier::new();
        frontier.push(4, ids[0]);
        frontier.push(2, ids[1]);
        frontier.push(4, ids[2]);
        frontier.push(2, ids[3]);
        frontier.push(1, ids[4]);
        assert_eq!(frontier.len(), 5);

        let order: Vec<StateId> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec![ids[4], ids[1], ids[3], ids[0], ids[2]]);
        assert_eq!(frontier.pop(), None);
    }
}
