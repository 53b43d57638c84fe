// src/schedule/scheduler.rs

use std::collections::HashMap;

use tracing::{debug, info};

use crate::batch::TaskSpec;
use crate::errors::Result;
use crate::schedule::graph::DepGraph;
use crate::schedule::outcome::{resolve_outcome, SchedulePlan};
use crate::schedule::ready::ReadySet;
use crate::schedule::TaskTitle;

/// Scheduler holds the immutable dependency graph for one batch.
///
/// It is responsible for:
/// - seeding the ready set with every zero-in-degree vertex
/// - repeatedly emitting the earliest-due ready task (Kahn's algorithm)
/// - decrementing dependents' in-degrees and offering the ones that
///   become ready
/// - handing the emitted sequence to the outcome resolver, which decides
///   success vs. circular dependency
///
/// `plan` copies the in-degrees into per-invocation state, so a single
/// `Scheduler` value can plan repeatedly, and concurrent invocations
/// share nothing mutable.
#[derive(Debug, Clone)]
pub struct Scheduler {
    graph: DepGraph,
}

impl Scheduler {
    /// Construct a scheduler from an ordered batch of task descriptors.
    pub fn from_batch(batch: &[TaskSpec]) -> Self {
        let graph = DepGraph::from_batch(batch);
        debug!(
            vertices = graph.len(),
            batch_entries = batch.len(),
            "scheduler: dependency graph built"
        );
        Self { graph }
    }

    /// The graph this scheduler plans over.
    pub fn graph(&self) -> &DepGraph {
        &self.graph
    }

    /// Compute a complete execution order, earliest-due-first among tasks
    /// that are simultaneously ready.
    ///
    /// Fails with [`TaskdagError::CircularDependency`] when some vertex
    /// never reaches zero in-degree; no partial order accompanies the
    /// failure.
    ///
    /// [`TaskdagError::CircularDependency`]: crate::errors::TaskdagError::CircularDependency
    pub fn plan(&self) -> Result<SchedulePlan> {
        let mut in_degrees: HashMap<TaskTitle, usize> = self.graph.in_degrees();
        let mut ready = ReadySet::new();

        // Seed: everything with no unresolved prerequisites.
        for title in self.graph.titles() {
            if in_degrees.get(&title) == Some(&0) {
                let due = self.graph.due_date_of(&title);
                let position = self.graph.position_of(&title).unwrap_or(usize::MAX);
                debug!(task = %title, "initially ready");
                ready.offer(title, due, position);
            }
        }

        let mut order: Vec<TaskTitle> = Vec::with_capacity(self.graph.len());

        while let Some(current) = ready.take_earliest() {
            debug!(task = %current, emitted = order.len(), "emitting task");
            order.push(current.clone());

            for dependent in self.graph.dependents_of(&current).iter() {
                let degree = match in_degrees.get_mut(dependent) {
                    Some(d) => d,
                    None => continue,
                };
                *degree -= 1;
                if *degree == 0 {
                    let due = self.graph.due_date_of(dependent);
                    let position = self.graph.position_of(dependent).unwrap_or(usize::MAX);
                    debug!(task = %dependent, "all prerequisites emitted; now ready");
                    ready.offer(dependent.clone(), due, position);
                }
            }
        }

        let plan = resolve_outcome(&self.graph, order)?;
        info!(
            tasks = plan.order.len(),
            total_estimated_hours = plan.total_estimated_hours,
            "schedule complete"
        );
        Ok(plan)
    }
}
