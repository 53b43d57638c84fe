// src/batch/validate.rs

use crate::batch::model::BatchFile;
use crate::errors::{Result, TaskdagError};

/// Semantic checks on a freshly parsed batch.
///
/// Deliberately light: unknown `depends_on` titles and duplicate titles
/// are *not* rejected here, because the scheduler's contract is to ignore
/// the former and let the latter overwrite (last write wins). Only field
/// values that can never be meaningful are errors.
pub fn validate_batch(batch: &BatchFile) -> Result<()> {
    validate_titles(batch)?;
    validate_estimates(batch)?;
    Ok(())
}

fn validate_titles(batch: &BatchFile) -> Result<()> {
    for (idx, task) in batch.task.iter().enumerate() {
        if task.title.trim().is_empty() {
            return Err(TaskdagError::BatchError(format!(
                "task at position {} has an empty title",
                idx
            )));
        }
    }
    Ok(())
}

fn validate_estimates(batch: &BatchFile) -> Result<()> {
    for task in batch.task.iter() {
        if task.estimated_hours < 0.0 || !task.estimated_hours.is_finite() {
            return Err(TaskdagError::BatchError(format!(
                "task '{}' has invalid estimated_hours {} (must be a finite number >= 0)",
                task.title, task.estimated_hours
            )));
        }
    }
    Ok(())
}
