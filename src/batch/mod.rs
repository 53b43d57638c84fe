// src/batch/mod.rs

//! Batch input: the TOML model, loading, and light validation.
//!
//! - [`model`] maps the `[[task]]` TOML format onto serde structs.
//! - [`loader`] reads and deserializes a batch file.
//! - [`validate`] rejects field values that can never be meaningful.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_batch_path, load_and_validate, load_from_path};
pub use model::{BatchFile, TaskSpec};
