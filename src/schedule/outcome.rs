// src/schedule/outcome.rs

//! Outcome resolution: full ordering vs. unresolved cycle.

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::errors::{Result, TaskdagError};
use crate::schedule::graph::DepGraph;
use crate::schedule::TaskTitle;

/// Successful scheduling result.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulePlan {
    /// Every distinct title, in an order that respects all prerequisites.
    pub order: Vec<TaskTitle>,
    /// Sum of the batch's estimates, carried through for output only.
    pub total_estimated_hours: f64,
}

/// Decide success or failure after the scheduling loop has terminated.
///
/// The loop itself never fails; if the emitted sequence is shorter than
/// the vertex set, at least one vertex never reached zero in-degree and
/// the batch contains a cycle. The empty batch trivially succeeds.
pub fn resolve_outcome(graph: &DepGraph, order: Vec<TaskTitle>) -> Result<SchedulePlan> {
    if order.len() == graph.len() {
        return Ok(SchedulePlan {
            order,
            total_estimated_hours: graph.total_estimated_hours(),
        });
    }

    let emitted: HashSet<&str> = order.iter().map(|t| t.as_str()).collect();
    let unresolved: Vec<TaskTitle> = graph
        .titles()
        .into_iter()
        .filter(|t| !emitted.contains(t.as_str()))
        .collect();

    let witness = cycle_witness(graph, &unresolved);
    warn!(
        unresolved = unresolved.len(),
        witness = %witness,
        "scheduling left tasks unresolved; reporting circular dependency"
    );

    Err(TaskdagError::CircularDependency {
        unresolved,
        witness,
    })
}

/// Pin one task that sits on a cycle, for diagnostics.
///
/// Every unresolved vertex is on a cycle or downstream of one, so a
/// topological sort over the unresolved subgraph is guaranteed to fail
/// and name a node that participates in a cycle.
fn cycle_witness(graph: &DepGraph, unresolved: &[TaskTitle]) -> TaskTitle {
    let members: HashSet<&str> = unresolved.iter().map(|t| t.as_str()).collect();

    let mut sub: DiGraphMap<&str, ()> = DiGraphMap::new();
    for title in unresolved {
        sub.add_node(title.as_str());
    }
    for title in unresolved {
        for dependent in graph.dependents_of(title) {
            if members.contains(dependent.as_str()) {
                sub.add_edge(title.as_str(), dependent.as_str(), ());
            }
        }
    }

    match toposort(&sub, None) {
        // Unreachable for a correct scheduling loop; fall back to the
        // first unresolved title rather than panicking.
        Ok(_) => unresolved
            .first()
            .cloned()
            .unwrap_or_else(|| "<unknown>".to_string()),
        Err(cycle) => cycle.node_id().to_string(),
    }
}
