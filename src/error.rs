//! Error taxonomy for the search engine.
//!
//! Configuration problems surface at construction, never mid-search.
//! Collaborator faults abort `solve` and propagate; the controller never
//! substitutes a default score or returns a partial path. "No solution within
//! budget" is a normal outcome, not an error.

use thiserror::Error;

use crate::thought::ThoughtId;

/// Invalid search configuration, raised by [`crate::controller::SearchController::new`].
#[derive(Debug, Error)]
#[error("invalid search configuration: {0}")]
pub struct ConfigError(pub(crate) String);

/// A candidate generator call failed.
///
/// Returning zero candidates is not a fault; generators signal "no
/// candidates" with an empty list.
#[derive(Debug, Error)]
#[error("candidate generation failed: {0}")]
pub struct GenerationError(#[from] pub anyhow::Error);

/// An evaluator call failed.
#[derive(Debug, Error)]
#[error("evaluation failed: {0}")]
pub struct EvaluationError(#[from] pub anyhow::Error);

/// Errors that can abort a `solve` call or a store lookup.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// Lookup of an id not present in the store. Not reachable through the
    /// public API; indicates a caller holding ids from a different store.
    #[error("unknown thought id {0}")]
    UnknownThought(ThoughtId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_preserves_message() {
        let err = GenerationError(anyhow::anyhow!("backend unreachable"));
        assert!(err.to_string().contains("backend unreachable"));
    }

    #[test]
    fn search_error_wraps_collaborator_errors_transparently() {
        let err: SearchError = EvaluationError(anyhow::anyhow!("boom")).into();
        assert!(err.to_string().contains("boom"));
    }
}
