//! Built-in keyword-heuristic collaborators.
//!
//! These give the engine a working end-to-end path without a remote backend:
//! the generator proposes canned next steps keyed on the problem wording, and
//! the evaluator scores contents by indicator keywords plus an optional
//! domain bonus from the caller context. Production deployments substitute
//! their own [`CandidateGenerator`]/[`Evaluator`] implementations.

use serde_json::Value;

use crate::agents::{CandidateGenerator, Evaluator, SearchContext};
use crate::error::{EvaluationError, GenerationError};
use crate::thought::{Evaluation, Thought};

const POSITIVE_INDICATORS: &[&str] = &[
    "consider",
    "verify",
    "check",
    "evaluate",
    "identify",
    "break down",
    "analyze",
    "systematic",
    "comprehensive",
];

const NEGATIVE_INDICATORS: &[&str] = &["ignore", "skip", "assume", "maybe", "unclear"];

/// Proposes next steps from a fixed table keyed on problem keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicGenerator;

impl CandidateGenerator for HeuristicGenerator {
    fn generate(
        &self,
        _parent: &Thought,
        problem: &str,
        _context: Option<&SearchContext>,
    ) -> Result<Vec<String>, GenerationError> {
        let problem = problem.to_lowercase();

        let candidates: &[&str] = if problem.contains("test") || problem.contains("validation") {
            &[
                "Consider happy path scenarios first",
                "Identify edge cases that could break the system",
                "Think about error conditions and how to handle them",
                "Consider security implications and malicious inputs",
            ]
        } else if problem.contains("review") || problem.contains("analyze") {
            &[
                "Check for security vulnerabilities (injection, XSS, etc.)",
                "Evaluate performance and scalability concerns",
                "Verify compliance with project restrictions",
                "Assess code maintainability and readability",
            ]
        } else if problem.contains("database") || problem.contains("migration") {
            &[
                "Verify no writes to read-only databases",
                "Check for proper transaction handling",
                "Consider migration rollback safety",
                "Evaluate impact on existing data",
            ]
        } else {
            &[
                "Break down problem into smaller sub-problems",
                "Identify constraints and requirements",
                "Consider multiple approaches",
                "Evaluate trade-offs of each approach",
            ]
        };

        Ok(candidates.iter().map(|c| (*c).to_string()).collect())
    }
}

/// Scores thoughts by indicator keywords with optional domain bonuses.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicEvaluator {
    max_depth: usize,
}

impl HeuristicEvaluator {
    /// `max_depth` drives the `can_expand` flag; pass the same value as the
    /// search configuration.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(
        &self,
        node: &Thought,
        _problem: &str,
        context: Option<&SearchContext>,
    ) -> Result<Evaluation, EvaluationError> {
        let content = node.content.to_lowercase();
        let mut rationale = String::new();

        let positive: f64 = POSITIVE_INDICATORS
            .iter()
            .filter(|ind| content.contains(**ind))
            .map(|_| 0.1)
            .sum();
        let negative: f64 = NEGATIVE_INDICATORS
            .iter()
            .filter(|ind| content.contains(**ind))
            .map(|_| 0.15)
            .sum();
        let mut value = (0.5 + positive - negative).clamp(0.0, 1.0);

        let domain = context
            .and_then(|ctx| ctx.get("domain"))
            .and_then(Value::as_str);
        match domain {
            Some("security")
                if ["security", "vulnerability", "injection"]
                    .iter()
                    .any(|kw| content.contains(kw)) =>
            {
                value += 0.2;
                rationale.push_str("Security-focused (domain relevant). ");
            }
            Some("database")
                if ["database", "transaction", "read-only"]
                    .iter()
                    .any(|kw| content.contains(kw)) =>
            {
                value += 0.2;
                rationale.push_str("Database-focused (domain relevant). ");
            }
            _ => {}
        }
        value = value.min(1.0);

        let solution_wording = ["solution", "implement", "fix"]
            .iter()
            .any(|kw| content.contains(kw));
        let is_solution = solution_wording && value > 0.7;
        if is_solution {
            rationale.push_str("Potential solution identified. ");
        }

        if rationale.is_empty() {
            rationale = format!("Evaluated with score {value:.2}");
        }

        Ok(Evaluation {
            value,
            is_solution,
            can_expand: node.depth < self.max_depth,
            rationale,
        })
    }
}
