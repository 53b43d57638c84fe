// src/batch/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::model::BatchFile;
use crate::batch::validate::validate_batch;
use crate::errors::Result;

/// Load a batch file from a given path and return the raw `BatchFile`.
///
/// This only performs TOML deserialization; it does **not** perform
/// semantic validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<BatchFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let batch: BatchFile = toml::from_str(&contents)?;

    Ok(batch)
}

/// Load a batch file from path and run basic validation.
///
/// This is the recommended entry point for the CLI:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that titles are non-empty and estimates are non-negative.
///
/// The scheduler itself takes the resulting `Vec<TaskSpec>` as-is.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<BatchFile> {
    let batch = load_from_path(&path)?;
    validate_batch(&batch)?;
    Ok(batch)
}

/// Helper to resolve a default batch path.
///
/// Currently this just returns `Tasks.toml` in the current working
/// directory; it exists so callers have one place to extend lookup
/// behaviour (env var, multiple default locations).
pub fn default_batch_path() -> PathBuf {
    PathBuf::from("Tasks.toml")
}
