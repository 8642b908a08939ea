//! Orchestration of one search: strategy dispatch, expansion, termination.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::agents::{CandidateGenerator, Evaluator, SearchContext};
use crate::config::{SearchConfig, SearchStrategy};
use crate::error::{ConfigError, SearchError};
use crate::frontier::Frontier;
use crate::store::ThoughtStore;
use crate::thought::{Thought, ThoughtId, ThoughtState};

/// Inputs for one `solve` call.
#[derive(Debug, Clone, Default)]
pub struct SolveRequest {
    /// Text describing what is being searched for.
    pub problem: String,
    /// Pre-supplied first-level contents. When set, expanding the root uses
    /// these instead of one generator call.
    pub initial_candidates: Option<Vec<String>>,
    /// Opaque map passed through unchanged to both collaborators.
    pub context: Option<SearchContext>,
}

impl SolveRequest {
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            ..Self::default()
        }
    }
}

/// Summary counters for one completed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMetadata {
    pub total_thoughts: usize,
    pub max_depth_reached: usize,
    pub strategy: SearchStrategy,
    pub solution_found: bool,
}

/// Result of one `solve` call.
///
/// `path` is the root-first solution path, or `None` when the budget was
/// exhausted without a qualifying solution (a normal outcome, not an error).
/// The store holds every explored node and is returned for rendering and
/// inspection; it is discarded with the outcome.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub path: Option<Vec<Thought>>,
    pub metadata: SearchMetadata,
    pub store: ThoughtStore,
}

/// Result of expanding one frontier node.
enum Expanded {
    /// A qualifying solution was found; search stops here.
    Solved(Vec<Thought>),
    /// Promising children `(id, value)` in generation order.
    Children(Vec<(ThoughtId, f64)>),
}

/// Drives one configured strategy over a fresh [`ThoughtStore`] per call.
///
/// The controller itself is stateless across calls: every `solve` allocates
/// its own store, so reusing one controller for multiple logical searches is
/// safe and ids never collide.
#[derive(Debug, Clone)]
pub struct SearchController {
    config: SearchConfig,
}

impl SearchController {
    /// Validate the configuration and build a controller. Invalid values fail
    /// here, never mid-search.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the configured strategy to termination.
    ///
    /// Returns the path to the first qualifying solution found under the
    /// strategy's ordering (first-found, not best-found), or `None` when the
    /// frontier is exhausted. Collaborator failures abort the search and
    /// propagate; no partial path is returned.
    #[instrument(skip_all, fields(strategy = %self.config.strategy))]
    pub fn solve<G: CandidateGenerator, E: Evaluator>(
        &self,
        generator: &G,
        evaluator: &E,
        request: &SolveRequest,
    ) -> Result<SearchOutcome, SearchError> {
        info!(
            max_depth = self.config.max_depth,
            max_thoughts_per_step = self.config.max_thoughts_per_step,
            "starting thought search"
        );

        let mut store = ThoughtStore::new();
        let root_id = store.create(format!("Problem: {}", request.problem), 0, None)?;

        let path = match self.config.strategy {
            SearchStrategy::Beam => {
                self.search_beam(&mut store, root_id, generator, evaluator, request)?
            }
            strategy => {
                let frontier = match strategy {
                    SearchStrategy::Bfs => Frontier::queue(),
                    SearchStrategy::Dfs => Frontier::stack(),
                    _ => Frontier::heap(),
                };
                self.search_frontier(frontier, &mut store, root_id, generator, evaluator, request)?
            }
        };

        let metadata = SearchMetadata {
            total_thoughts: store.len(),
            max_depth_reached: store.max_depth_reached(),
            strategy: self.config.strategy,
            solution_found: path.is_some(),
        };
        match &path {
            Some(path) => info!(path_len = path.len(), "solution found"),
            None => info!(
                total_thoughts = metadata.total_thoughts,
                "no solution within constraints"
            ),
        }

        Ok(SearchOutcome { path, metadata, store })
    }

    /// Pop-driven loop shared by BFS, DFS, and best-first; only the frontier
    /// policy differs.
    fn search_frontier<G: CandidateGenerator, E: Evaluator>(
        &self,
        mut frontier: Frontier,
        store: &mut ThoughtStore,
        root_id: ThoughtId,
        generator: &G,
        evaluator: &E,
        request: &SolveRequest,
    ) -> Result<Option<Vec<Thought>>, SearchError> {
        frontier.push_children(&[(root_id, 0.0)]);

        while let Some(id) = frontier.pop() {
            match self.expand(store, id, generator, evaluator, request)? {
                Expanded::Solved(path) => return Ok(Some(path)),
                Expanded::Children(children) => frontier.push_children(&children),
            }
        }
        Ok(None)
    }

    /// Level-synchronous beam search.
    ///
    /// Every beam node is expanded, the level's surviving children are sorted
    /// by value (ties by ascending id), and the top `beam_width` become the
    /// next beam; the surplus is pruned. Without an explicit solution, the
    /// best remaining beam node above threshold is returned after the last
    /// level even though it was never flagged `is_solution`.
    fn search_beam<G: CandidateGenerator, E: Evaluator>(
        &self,
        store: &mut ThoughtStore,
        root_id: ThoughtId,
        generator: &G,
        evaluator: &E,
        request: &SolveRequest,
    ) -> Result<Option<Vec<Thought>>, SearchError> {
        let mut beam = vec![root_id];

        for _ in 0..self.config.max_depth {
            let mut level: Vec<(ThoughtId, f64)> = Vec::new();
            for &id in &beam {
                match self.expand(store, id, generator, evaluator, request)? {
                    Expanded::Solved(path) => return Ok(Some(path)),
                    Expanded::Children(children) => level.extend(children),
                }
            }

            level.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            let keep = level.len().min(self.config.beam_width);
            for &(id, _) in &level[keep..] {
                store.get_mut(id)?.state = ThoughtState::Pruned;
            }
            level.truncate(keep);
            beam = level.into_iter().map(|(id, _)| id).collect();
            debug!(beam_len = beam.len(), "beam level complete");

            if beam.is_empty() {
                break;
            }
        }

        // Fallback: the best surviving beam member counts as the result if it
        // clears the threshold, even without an explicit solution flag.
        let mut best: Option<(ThoughtId, f64)> = None;
        for &id in &beam {
            let value = store.get(id)?.value;
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((id, value));
            }
        }
        if let Some((id, value)) = best
            && value >= self.config.value_threshold
        {
            return Ok(Some(store.path_to(id)?));
        }
        Ok(None)
    }

    /// Shared expansion step used by all strategies.
    ///
    /// Generates up to `max_thoughts_per_step` children for `node_id` (when
    /// below `max_depth`), evaluates each in generation order, and classifies
    /// it: qualifying solution (stop), promising (keep), or pruned (discard).
    fn expand<G: CandidateGenerator, E: Evaluator>(
        &self,
        store: &mut ThoughtStore,
        node_id: ThoughtId,
        generator: &G,
        evaluator: &E,
        request: &SolveRequest,
    ) -> Result<Expanded, SearchError> {
        let node = store.get(node_id)?.clone();
        if node.depth >= self.config.max_depth {
            return Ok(Expanded::Children(Vec::new()));
        }

        let mut contents = match (&node.parent_id, &request.initial_candidates) {
            // Pre-supplied first-level contents bypass one generator call.
            (None, Some(initial)) => initial.clone(),
            _ => generator.generate(&node, &request.problem, request.context.as_ref())?,
        };
        // The contract asks generators for at most max_thoughts_per_step
        // contents, but they have no access to the config.
        contents.truncate(self.config.max_thoughts_per_step);

        let mut promising = Vec::new();
        for content in contents {
            let child_id = store.create(content, node.depth + 1, Some(node_id))?;
            let child = store.get(child_id)?.clone();
            let evaluation =
                evaluator.evaluate(&child, &request.problem, request.context.as_ref())?;

            let child = store.get_mut(child_id)?;
            child.value = evaluation.value;

            if evaluation.is_solution && evaluation.value >= self.config.value_threshold {
                child.state = ThoughtState::Solved;
                debug!(id = child_id, value = evaluation.value, "qualifying solution");
                return Ok(Expanded::Solved(store.path_to(child_id)?));
            }
            if evaluation.value >= self.config.value_threshold {
                child.state = ThoughtState::Promising;
                promising.push((child_id, evaluation.value));
            } else {
                child.state = ThoughtState::Pruned;
            }
        }
        debug!(
            id = node_id,
            promising = promising.len(),
            "expanded thought"
        );
        Ok(Expanded::Children(promising))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FailingEvaluator, FailingGenerator, RuleEvaluator, StaticGenerator, verdict,
    };

    fn controller(strategy: SearchStrategy) -> SearchController {
        SearchController::new(SearchConfig {
            strategy,
            max_thoughts_per_step: 2,
            max_depth: 2,
            beam_width: 2,
            value_threshold: 0.5,
        })
        .expect("config")
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = SearchController::new(SearchConfig {
            value_threshold: 2.0,
            ..SearchConfig::default()
        })
        .expect_err("invalid");
        assert!(err.to_string().contains("value_threshold"));
    }

    #[test]
    fn generator_failure_aborts_the_search() {
        let controller = controller(SearchStrategy::Bfs);
        let evaluator = RuleEvaluator::new(verdict(0.9, false));
        let err = controller
            .solve(&FailingGenerator, &evaluator, &SolveRequest::new("p"))
            .expect_err("generator error");
        assert!(matches!(err, SearchError::Generation(_)));
    }

    #[test]
    fn evaluator_failure_aborts_the_search() {
        let controller = controller(SearchStrategy::Dfs);
        let generator = StaticGenerator::new(&["A", "B"]);
        let err = controller
            .solve(&generator, &FailingEvaluator, &SolveRequest::new("p"))
            .expect_err("evaluator error");
        assert!(matches!(err, SearchError::Evaluation(_)));
    }

    #[test]
    fn no_candidates_terminates_with_normal_outcome() {
        let controller = controller(SearchStrategy::Bfs);
        let generator = StaticGenerator::new(&[]);
        let evaluator = RuleEvaluator::new(verdict(0.9, false));
        let outcome = controller
            .solve(&generator, &evaluator, &SolveRequest::new("p"))
            .expect("solve");
        assert!(outcome.path.is_none());
        assert!(!outcome.metadata.solution_found);
        assert_eq!(outcome.metadata.total_thoughts, 1);
    }

    #[test]
    fn initial_candidates_bypass_one_generator_call() {
        let controller = controller(SearchStrategy::Bfs);
        // The generator would fail if ever consulted for the root; children
        // below threshold keep it from being consulted deeper.
        let evaluator = RuleEvaluator::new(verdict(0.2, false));
        let mut request = SolveRequest::new("p");
        request.initial_candidates = Some(vec!["seed-1".to_string(), "seed-2".to_string()]);

        let outcome = controller
            .solve(&FailingGenerator, &evaluator, &request)
            .expect("solve");
        let root = outcome.store.root().expect("root");
        assert_eq!(root.children_ids.len(), 2);
        assert_eq!(outcome.store.get(1).expect("child").content, "seed-1");
    }

    #[test]
    fn initial_candidates_are_capped_at_max_thoughts_per_step() {
        let controller = controller(SearchStrategy::Bfs);
        let evaluator = RuleEvaluator::new(verdict(0.2, false));
        let mut request = SolveRequest::new("p");
        request.initial_candidates =
            Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]);

        let outcome = controller
            .solve(&FailingGenerator, &evaluator, &request)
            .expect("solve");
        assert_eq!(outcome.store.root().expect("root").children_ids.len(), 2);
    }
}
