//! Collaborator abstractions for candidate generation and evaluation.
//!
//! The two traits decouple the search controller from whatever produces and
//! scores thought contents: a remote text-generation service, a rule table,
//! or the built-in keyword heuristics in [`heuristic`]. Both calls are
//! synchronous and may be arbitrarily slow; the engine adds no timeout or
//! cancellation of its own.

pub mod heuristic;

use serde_json::{Map, Value};

use crate::error::{EvaluationError, GenerationError};
use crate::thought::{Evaluation, Thought};

/// Opaque caller-supplied context, passed through unchanged to both
/// collaborators.
pub type SearchContext = Map<String, Value>;

/// Proposes candidate child contents for a thought.
pub trait CandidateGenerator {
    /// Produce candidate next-step contents for `parent`.
    ///
    /// An empty list is the correct signal for "no candidates" and is not a
    /// fault. The controller caps the result at its configured
    /// `max_thoughts_per_step`.
    fn generate(
        &self,
        parent: &Thought,
        problem: &str,
        context: Option<&SearchContext>,
    ) -> Result<Vec<String>, GenerationError>;
}

/// Scores a thought and flags solution/expandability.
pub trait Evaluator {
    fn evaluate(
        &self,
        node: &Thought,
        problem: &str,
        context: Option<&SearchContext>,
    ) -> Result<Evaluation, EvaluationError>;
}
