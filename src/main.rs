//! Command-line demo driving the search engine with the built-in keyword
//! heuristics.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;

use thought_tree::agents::SearchContext;
use thought_tree::agents::heuristic::{HeuristicEvaluator, HeuristicGenerator};
use thought_tree::config::{SearchConfig, SearchStrategy, load_config};
use thought_tree::controller::{SearchController, SolveRequest};
use thought_tree::render::render_tree;

#[derive(Parser)]
#[command(
    name = "thought-tree",
    version,
    about = "Deliberate tree-of-thoughts search over a problem statement"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for a solution path using the built-in heuristic collaborators.
    Solve {
        /// Problem statement to search over.
        problem: String,
        /// Search strategy.
        #[arg(long, value_enum)]
        strategy: Option<SearchStrategy>,
        /// Maximum depth to explore.
        #[arg(long)]
        max_depth: Option<usize>,
        /// Thoughts to generate per expansion.
        #[arg(long)]
        max_thoughts: Option<usize>,
        /// Nodes retained per level (beam search only).
        #[arg(long)]
        beam_width: Option<usize>,
        /// Minimum value for a thought to stay viable.
        #[arg(long)]
        threshold: Option<f64>,
        /// Domain hint for the evaluator (e.g. security, database).
        #[arg(long)]
        domain: Option<String>,
        /// Load configuration from a TOML file; flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the explored tree after the search.
        #[arg(long)]
        tree: bool,
    },
}

fn main() {
    thought_tree::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve {
            problem,
            strategy,
            max_depth,
            max_thoughts,
            beam_width,
            threshold,
            domain,
            config,
            tree,
        } => {
            let mut cfg = match config {
                Some(path) => load_config(&path)?,
                None => SearchConfig::default(),
            };
            if let Some(strategy) = strategy {
                cfg.strategy = strategy;
            }
            if let Some(max_depth) = max_depth {
                cfg.max_depth = max_depth;
            }
            if let Some(max_thoughts) = max_thoughts {
                cfg.max_thoughts_per_step = max_thoughts;
            }
            if let Some(beam_width) = beam_width {
                cfg.beam_width = beam_width;
            }
            if let Some(threshold) = threshold {
                cfg.value_threshold = threshold;
            }
            cmd_solve(cfg, &problem, domain, tree)
        }
    }
}

fn cmd_solve(cfg: SearchConfig, problem: &str, domain: Option<String>, tree: bool) -> Result<()> {
    let controller = SearchController::new(cfg)?;
    let generator = HeuristicGenerator;
    let evaluator = HeuristicEvaluator::new(controller.config().max_depth);

    let mut request = SolveRequest::new(problem);
    if let Some(domain) = domain {
        let mut context = SearchContext::new();
        context.insert("domain".to_string(), Value::String(domain));
        request.context = Some(context);
    }

    let outcome = controller.solve(&generator, &evaluator, &request)?;

    println!("strategy: {}", outcome.metadata.strategy);
    println!("total thoughts explored: {}", outcome.metadata.total_thoughts);
    println!("max depth reached: {}", outcome.metadata.max_depth_reached);
    println!("solution found: {}", outcome.metadata.solution_found);

    if let Some(path) = &outcome.path {
        println!("\nSolution path ({} steps):", path.len());
        for (i, thought) in path.iter().enumerate() {
            println!("{i}. {} (value={:.2})", thought.content, thought.value);
        }
    }

    if tree {
        println!("\n{}", render_tree(&outcome.store));
    }
    Ok(())
}
