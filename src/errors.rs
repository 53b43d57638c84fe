// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::schedule::TaskTitle;

#[derive(Error, Debug)]
pub enum TaskdagError {
    /// The dependency graph contains at least one cycle, so no complete
    /// ordering exists. `unresolved` lists every task that never became
    /// ready, in batch order; `witness` names one task on a cycle.
    #[error("circular dependency involving task '{witness}' (unresolved tasks: {})", unresolved.join(", "))]
    CircularDependency {
        unresolved: Vec<TaskTitle>,
        witness: TaskTitle,
    },

    #[error("Batch error: {0}")]
    BatchError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskdagError>;
