// src/lib.rs

pub mod batch;
pub mod cli;
pub mod errors;
pub mod logging;
pub mod schedule;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::batch::loader::load_and_validate;
use crate::batch::{BatchFile, TaskSpec};
use crate::cli::CliArgs;
use crate::schedule::{SchedulePlan, Scheduler};

/// Compute an execution order for an in-memory batch.
///
/// Convenience entry point for embedding callers that already hold task
/// descriptors; the CLI path goes through [`run`] instead. The engine is
/// a pure function of its input: each call builds and discards its own
/// graph and ready set, so concurrent calls need no coordination.
pub fn plan_batch(batch: &[TaskSpec]) -> errors::Result<SchedulePlan> {
    Scheduler::from_batch(batch).plan()
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - batch loading + validation
/// - scheduler
/// - output (stdout; logs go to stderr)
pub fn run(args: CliArgs) -> Result<()> {
    let input_path = PathBuf::from(&args.input);
    let batch = load_and_validate(&input_path)?;

    if args.dry_run {
        print_dry_run(&batch);
        return Ok(());
    }

    info!(
        input = %input_path.display(),
        tasks = batch.task.len(),
        "planning batch"
    );

    let plan = plan_batch(&batch.task)?;

    for title in &plan.order {
        println!("{title}");
    }
    info!(
        tasks = plan.order.len(),
        total_estimated_hours = plan.total_estimated_hours,
        "order written to stdout"
    );

    Ok(())
}

/// Simple dry-run output: print tasks, due dates, estimates and deps.
fn print_dry_run(batch: &BatchFile) {
    println!("taskdag dry-run");
    println!();

    println!("tasks ({}):", batch.task.len());
    for task in batch.task.iter() {
        println!("  - {}", task.title);
        if let Some(due) = task.due_date {
            println!("      due: {}", due.to_rfc3339());
        }
        if task.estimated_hours > 0.0 {
            println!("      estimated_hours: {}", task.estimated_hours);
        }
        if !task.depends_on.is_empty() {
            println!("      depends_on: {:?}", task.depends_on);
        }
    }

    debug!("dry-run complete (no planning)");
}
