//! Test-only scripted collaborators for deterministic searches.

use std::cell::Cell;
use std::collections::HashMap;

use crate::agents::{CandidateGenerator, Evaluator, SearchContext};
use crate::error::{EvaluationError, GenerationError};
use crate::thought::{Evaluation, Thought};

/// Build a deterministic verdict with `can_expand = true` and no rationale.
pub fn verdict(value: f64, is_solution: bool) -> Evaluation {
    Evaluation {
        value,
        is_solution,
        can_expand: true,
        rationale: String::new(),
    }
}

/// Generator returning the same candidate list for every parent.
pub struct StaticGenerator {
    candidates: Vec<String>,
}

impl StaticGenerator {
    pub fn new(candidates: &[&str]) -> Self {
        Self {
            candidates: candidates.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl CandidateGenerator for StaticGenerator {
    fn generate(
        &self,
        _parent: &Thought,
        _problem: &str,
        _context: Option<&SearchContext>,
    ) -> Result<Vec<String>, GenerationError> {
        Ok(self.candidates.clone())
    }
}

/// Generator keyed by parent content; unknown parents get no candidates.
pub struct TableGenerator {
    children: HashMap<String, Vec<String>>,
}

impl TableGenerator {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let children = entries
            .iter()
            .map(|(parent, kids)| {
                let kids = kids.iter().map(|k| (*k).to_string()).collect();
                ((*parent).to_string(), kids)
            })
            .collect();
        Self { children }
    }
}

impl CandidateGenerator for TableGenerator {
    fn generate(
        &self,
        parent: &Thought,
        _problem: &str,
        _context: Option<&SearchContext>,
    ) -> Result<Vec<String>, GenerationError> {
        Ok(self.children.get(&parent.content).cloned().unwrap_or_default())
    }
}

/// Counts calls while delegating to an inner generator.
pub struct CountingGenerator<G> {
    inner: G,
    calls: Cell<usize>,
}

impl<G> CountingGenerator<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<G: CandidateGenerator> CandidateGenerator for CountingGenerator<G> {
    fn generate(
        &self,
        parent: &Thought,
        problem: &str,
        context: Option<&SearchContext>,
    ) -> Result<Vec<String>, GenerationError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.generate(parent, problem, context)
    }
}

/// Generator that always fails, for abort-path tests.
pub struct FailingGenerator;

impl CandidateGenerator for FailingGenerator {
    fn generate(
        &self,
        _parent: &Thought,
        _problem: &str,
        _context: Option<&SearchContext>,
    ) -> Result<Vec<String>, GenerationError> {
        Err(GenerationError(anyhow::anyhow!("scripted generator fault")))
    }
}

/// One evaluation rule: matches on content, optionally pinned to a depth.
pub struct EvalRule {
    pub content: String,
    pub depth: Option<usize>,
    pub evaluation: Evaluation,
}

/// Deterministic evaluator: the first matching rule wins, otherwise the
/// default verdict applies.
pub struct RuleEvaluator {
    rules: Vec<EvalRule>,
    default: Evaluation,
}

impl RuleEvaluator {
    pub fn new(default: Evaluation) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    /// Add a rule for `content`, optionally restricted to one depth.
    pub fn rule(mut self, content: &str, depth: Option<usize>, evaluation: Evaluation) -> Self {
        self.rules.push(EvalRule {
            content: content.to_string(),
            depth,
            evaluation,
        });
        self
    }
}

impl Evaluator for RuleEvaluator {
    fn evaluate(
        &self,
        node: &Thought,
        _problem: &str,
        _context: Option<&SearchContext>,
    ) -> Result<Evaluation, EvaluationError> {
        let matched = self.rules.iter().find(|rule| {
            rule.content == node.content && rule.depth.is_none_or(|d| d == node.depth)
        });
        Ok(matched.map_or_else(|| self.default.clone(), |rule| rule.evaluation.clone()))
    }
}

/// Evaluator that always fails, for abort-path tests.
pub struct FailingEvaluator;

impl Evaluator for FailingEvaluator {
    fn evaluate(
        &self,
        _node: &Thought,
        _problem: &str,
        _context: Option<&SearchContext>,
    ) -> Result<Evaluation, EvaluationError> {
        Err(EvaluationError(anyhow::anyhow!("scripted evaluator fault")))
    }
}
