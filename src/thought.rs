//! Shared data model for the thought tree.
//!
//! These types define stable contracts between the store, the controller, and
//! the collaborator traits. They carry no behavior beyond construction and
//! must remain deterministic across runs.

use serde::{Deserialize, Serialize};

/// Identifier of a thought within one [`crate::store::ThoughtStore`].
///
/// Ids are assigned monotonically at creation and never reused.
pub type ThoughtId = usize;

/// Lifecycle state of a thought.
///
/// `Solved` and `Pruned` are terminal: once set, the node is never expanded
/// or re-evaluated. `Failed` is reserved for callers post-processing a
/// returned store; the engine itself never sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThoughtState {
    Promising,
    Solved,
    Failed,
    Pruned,
}

/// A single node in the thought tree: one candidate partial solution.
///
/// Parent/child links are pure relations expressed as ids; the store owns
/// every node. `value` defaults to 0 until the evaluator scores the node
/// (the root is never itself evaluated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    pub id: ThoughtId,
    /// Opaque text payload; its meaning is defined by the collaborators.
    pub content: String,
    /// Root has depth 0; every child has depth = parent depth + 1.
    pub depth: usize,
    /// `None` only for the root.
    pub parent_id: Option<ThoughtId>,
    /// Child ids in generation order.
    pub children_ids: Vec<ThoughtId>,
    pub state: ThoughtState,
    /// Evaluator quality score in [0, 1].
    pub value: f64,
}

impl Thought {
    pub(crate) fn new(id: ThoughtId, content: String, depth: usize, parent_id: Option<ThoughtId>) -> Self {
        Self {
            id,
            content,
            depth,
            parent_id,
            children_ids: Vec::new(),
            state: ThoughtState::Promising,
            value: 0.0,
        }
    }
}

/// Evaluator verdict for one thought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Quality score in [0, 1].
    pub value: f64,
    /// True if this thought is a complete solution to the problem.
    pub is_solution: bool,
    /// Whether the evaluator considers the thought worth expanding further.
    ///
    /// Recorded for callers; the engine gates expansion on depth alone.
    pub can_expand: bool,
    /// Free-form explanation of the score.
    pub rationale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_thought_defaults_to_promising_with_zero_value() {
        let thought = Thought::new(3, "step".to_string(), 1, Some(0));
        assert_eq!(thought.state, ThoughtState::Promising);
        assert_eq!(thought.value, 0.0);
        assert!(thought.children_ids.is_empty());
    }

    #[test]
    fn state_serializes_lowercase() {
        let json = serde_json::to_string(&ThoughtState::Promising).expect("serialize");
        assert_eq!(json, "\"promising\"");
    }
}
