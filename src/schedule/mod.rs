// src/schedule/mod.rs

//! Dependency-aware scheduling.
//!
//! - [`graph`] builds the dependency graph from a batch (vertices,
//!   dependents, in-degrees).
//! - [`ready`] is the due-date-ordered set of tasks eligible to run.
//! - [`scheduler`] drives Kahn's algorithm over the graph.
//! - [`outcome`] shapes the final result: a complete order, or a
//!   circular-dependency failure with diagnostics.

pub mod graph;
pub mod outcome;
pub mod ready;
pub mod scheduler;

/// Canonical task identity type used throughout the engine.
pub type TaskTitle = String;

pub use graph::DepGraph;
pub use outcome::SchedulePlan;
pub use ready::ReadySet;
pub use scheduler::Scheduler;
