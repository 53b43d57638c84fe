// tests/batch_loading.rs
mod common;
use crate::common::{due, init_tracing};

use std::error::Error;
use std::io::Write;

use tempfile::NamedTempFile;

use taskdag::batch::{load_and_validate, load_from_path};
use taskdag::errors::TaskdagError;
use taskdag::plan_batch;

type TestResult = Result<(), Box<dyn Error>>;

fn write_batch(contents: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn loads_tasks_in_file_order_with_defaults() -> TestResult {
    init_tracing();

    let file = write_batch(
        r#"
[[task]]
title = "Design"
due = "2024-01-10T00:00:00Z"

[[task]]
title = "Build"
estimated_hours = 8.0
depends_on = ["Design"]
"#,
    )?;

    let batch = load_and_validate(file.path())?;
    assert_eq!(batch.task.len(), 2);

    let design = &batch.task[0];
    assert_eq!(design.title, "Design");
    assert_eq!(design.due_date, Some(due("2024-01-10T00:00:00Z")));
    assert_eq!(design.estimated_hours, 0.0);
    assert!(design.depends_on.is_empty());

    let build = &batch.task[1];
    assert_eq!(build.title, "Build");
    assert_eq!(build.due_date, None);
    assert_eq!(build.estimated_hours, 8.0);
    assert_eq!(build.depends_on, vec!["Design"]);
    Ok(())
}

#[test]
fn empty_file_is_an_empty_batch() -> TestResult {
    init_tracing();

    let file = write_batch("")?;
    let batch = load_and_validate(file.path())?;
    assert!(batch.task.is_empty());
    Ok(())
}

#[test]
fn empty_title_is_rejected() -> TestResult {
    init_tracing();

    let file = write_batch(
        r#"
[[task]]
title = "  "
"#,
    )?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, TaskdagError::BatchError(_)), "got {err:?}");
    Ok(())
}

#[test]
fn negative_estimated_hours_are_rejected() -> TestResult {
    init_tracing();

    let file = write_batch(
        r#"
[[task]]
title = "A"
estimated_hours = -1.0
"#,
    )?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, TaskdagError::BatchError(_)), "got {err:?}");
    Ok(())
}

#[test]
fn malformed_toml_maps_to_toml_error() -> TestResult {
    init_tracing();

    let file = write_batch("[[task]\ntitle = oops")?;

    let err = load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, TaskdagError::TomlError(_)), "got {err:?}");
    Ok(())
}

#[test]
fn loaded_batch_plans_end_to_end() -> TestResult {
    init_tracing();

    let file = write_batch(
        r#"
[[task]]
title = "Design"
due = "2024-01-10T00:00:00Z"

[[task]]
title = "Build"
due = "2024-01-05T00:00:00Z"
depends_on = ["Design"]

[[task]]
title = "Test"
due = "2024-01-01T00:00:00Z"
depends_on = ["Build"]
"#,
    )?;

    let batch = load_and_validate(file.path())?;
    let plan = plan_batch(&batch.task)?;
    assert_eq!(plan.order, vec!["Design", "Build", "Test"]);
    Ok(())
}
