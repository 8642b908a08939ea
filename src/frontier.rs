//! Frontier policies for the pop-driven search strategies.
//!
//! The frontier holds not-yet-expanded promising node ids. Each strategy
//! differs only in insert/remove order, so the policies are a tagged variant
//! selected once per solve. Beam search is level-synchronous and never builds
//! a pop frontier; it lives in the controller.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::thought::ThoughtId;

/// Max-heap entry for best-first search: highest value wins, ties broken by
/// ascending id so expansion order is deterministic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub id: ThoughtId,
    pub value: f64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Strategy-specific frontier: FIFO (BFS), LIFO (DFS), or max-priority
/// (best-first).
#[derive(Debug)]
pub(crate) enum Frontier {
    Queue(VecDeque<ThoughtId>),
    Stack(Vec<ThoughtId>),
    Heap(BinaryHeap<FrontierEntry>),
}

impl Frontier {
    pub(crate) fn queue() -> Self {
        Self::Queue(VecDeque::new())
    }

    pub(crate) fn stack() -> Self {
        Self::Stack(Vec::new())
    }

    pub(crate) fn heap() -> Self {
        Self::Heap(BinaryHeap::new())
    }

    /// Insert one expansion's promising children, given in generation order.
    ///
    /// The stack pushes in reverse so pops preserve declared left-to-right
    /// order; the queue and heap keep generation order as given.
    pub(crate) fn push_children(&mut self, children: &[(ThoughtId, f64)]) {
        match self {
            Self::Queue(queue) => queue.extend(children.iter().map(|&(id, _)| id)),
            Self::Stack(stack) => stack.extend(children.iter().rev().map(|&(id, _)| id)),
            Self::Heap(heap) => {
                heap.extend(children.iter().map(|&(id, value)| FrontierEntry { id, value }));
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<ThoughtId> {
        match self {
            Self::Queue(queue) => queue.pop_front(),
            Self::Stack(stack) => stack.pop(),
            Self::Heap(heap) => heap.pop().map(|entry| entry.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut frontier: Frontier) -> Vec<ThoughtId> {
        let mut ids = Vec::new();
        while let Some(id) = frontier.pop() {
            ids.push(id);
        }
        ids
    }

    #[test]
    fn queue_pops_in_insertion_order() {
        let mut frontier = Frontier::queue();
        frontier.push_children(&[(1, 0.5), (2, 0.9)]);
        frontier.push_children(&[(3, 0.1)]);
        assert_eq!(drain(frontier), vec![1, 2, 3]);
    }

    #[test]
    fn stack_pops_batches_left_to_right_but_newest_batch_first() {
        let mut frontier = Frontier::stack();
        frontier.push_children(&[(1, 0.5), (2, 0.5)]);
        // Popping 1 first and expanding it pushes its children on top.
        assert_eq!(frontier.pop(), Some(1));
        frontier.push_children(&[(3, 0.5), (4, 0.5)]);
        assert_eq!(drain(frontier), vec![3, 4, 2]);
    }

    #[test]
    fn heap_pops_highest_value_first() {
        let mut frontier = Frontier::heap();
        frontier.push_children(&[(1, 0.4), (2, 0.9), (3, 0.6)]);
        assert_eq!(drain(frontier), vec![2, 3, 1]);
    }

    #[test]
    fn heap_breaks_value_ties_by_ascending_id() {
        let mut frontier = Frontier::heap();
        frontier.push_children(&[(7, 0.5), (2, 0.5), (5, 0.5)]);
        assert_eq!(drain(frontier), vec![2, 5, 7]);
    }
}
