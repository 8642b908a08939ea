//! Deliberate state-space search over a tree of candidate "thoughts".
//!
//! The engine explores a branching space of partial solutions by repeatedly
//! generating children of a node, scoring them, and deciding whether to keep
//! exploring, stop at a solution, or prune a branch. Four strategies share
//! one expansion primitive and differ only in frontier policy: BFS, DFS,
//! beam, and best-first.
//!
//! The architecture enforces a strict separation:
//!
//! - **[`store`] and the frontier policies**: pure, deterministic tree and
//!   frontier logic. No I/O, fully testable in isolation.
//! - **[`agents`]**: collaborator traits for candidate generation and
//!   evaluation. Backends (remote services, rule tables, the built-in
//!   keyword heuristics) live behind these seams.
//! - **[`controller`]**: orchestration of one `solve` call over the pure
//!   core and the collaborators.
//!
//! Searches are single-threaded and synchronous; `solve` blocks until a
//! qualifying solution is found or the budget is exhausted, and allocates a
//! fresh store per call. Given deterministic collaborators, two identical
//! `solve` calls produce identical trees and paths.

pub mod agents;
pub mod config;
pub mod controller;
pub mod error;
mod frontier;
pub mod logging;
pub mod render;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod thought;
