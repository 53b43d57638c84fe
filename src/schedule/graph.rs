// src/schedule/graph.rs

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::batch::TaskSpec;
use crate::schedule::TaskTitle;

/// Internal vertex structure: task fields plus derived graph data.
#[derive(Debug, Clone)]
struct GraphNode {
    due_date: Option<DateTime<Utc>>,
    estimated_hours: f64,
    /// Declared prerequisites, deduplicated. Titles not present in the
    /// batch are skipped when edges are derived.
    deps: Vec<TaskTitle>,
    /// Direct dependents: tasks that list this one in their `depends_on`.
    dependents: Vec<TaskTitle>,
    /// Count of unresolved incoming prerequisite edges.
    in_degree: usize,
    /// Position in the input batch, used as the deterministic tie-break.
    position: usize,
}

/// In-memory dependency graph keyed by task title.
///
/// Built fresh for every scheduling request and discarded afterwards.
/// Construction never fails: duplicate titles overwrite (last write wins)
/// and dependency titles absent from the batch are dropped without effect.
/// Cycles are allowed to exist here; they are detected after the
/// scheduling loop, not during construction.
#[derive(Debug, Clone)]
pub struct DepGraph {
    nodes: HashMap<TaskTitle, GraphNode>,
}

impl DepGraph {
    /// Build a graph from an ordered batch of task descriptors.
    pub fn from_batch(batch: &[TaskSpec]) -> Self {
        let mut nodes: HashMap<TaskTitle, GraphNode> = HashMap::new();

        // First pass: one vertex per distinct title, last write wins.
        // The surviving batch position is that of the last occurrence,
        // consistent with the field overwrite.
        for (position, spec) in batch.iter().enumerate() {
            if nodes.contains_key(&spec.title) {
                warn!(
                    task = %spec.title,
                    position,
                    "duplicate title in batch; later entry replaces the earlier vertex"
                );
            }

            // Dependency lists are sets: a prerequisite declared twice
            // counts once.
            let mut seen: HashSet<&str> = HashSet::new();
            let deps: Vec<TaskTitle> = spec
                .depends_on
                .iter()
                .filter(|d| seen.insert(d.as_str()))
                .cloned()
                .collect();

            nodes.insert(
                spec.title.clone(),
                GraphNode {
                    due_date: spec.due_date,
                    estimated_hours: spec.estimated_hours,
                    deps,
                    dependents: Vec::new(),
                    in_degree: 0,
                    position,
                },
            );
        }

        // Second pass: populate dependents and in-degrees from deps.
        // A title naming itself gains an incoming edge it can never shed,
        // which guarantees it surfaces in the cycle report.
        let titles: Vec<TaskTitle> = nodes.keys().cloned().collect();
        for title in titles {
            let deps = nodes
                .get(&title)
                .map(|n| n.deps.clone())
                .unwrap_or_default();

            for dep in deps {
                if nodes.contains_key(&dep) {
                    if let Some(dep_node) = nodes.get_mut(&dep) {
                        dep_node.dependents.push(title.clone());
                    }
                    if let Some(node) = nodes.get_mut(&title) {
                        node.in_degree += 1;
                    }
                } else {
                    debug!(
                        task = %title,
                        dependency = %dep,
                        "dependency not in batch; ignoring"
                    );
                }
            }
        }

        Self { nodes }
    }

    /// Number of distinct vertices.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All titles, in batch order.
    pub fn titles(&self) -> Vec<TaskTitle> {
        let mut out: Vec<(usize, TaskTitle)> = self
            .nodes
            .iter()
            .map(|(title, node)| (node.position, title.clone()))
            .collect();
        out.sort_by_key(|(pos, _)| *pos);
        out.into_iter().map(|(_, title)| title).collect()
    }

    /// Immediate dependents of a task (tasks that list it in `depends_on`).
    pub fn dependents_of(&self, title: &str) -> &[TaskTitle] {
        self.nodes
            .get(title)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Initial in-degree of a task, as derived from the batch.
    pub fn in_degree_of(&self, title: &str) -> Option<usize> {
        self.nodes.get(title).map(|n| n.in_degree)
    }

    /// A fresh copy of all in-degrees, for one scheduling invocation to
    /// consume without mutating the graph.
    pub fn in_degrees(&self) -> HashMap<TaskTitle, usize> {
        self.nodes
            .iter()
            .map(|(title, node)| (title.clone(), node.in_degree))
            .collect()
    }

    pub fn due_date_of(&self, title: &str) -> Option<DateTime<Utc>> {
        self.nodes.get(title).and_then(|n| n.due_date)
    }

    /// Batch position of a task, the deterministic tie-break key.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.nodes.get(title).map(|n| n.position)
    }

    /// Sum of `estimated_hours` over all vertices. Informational only.
    pub fn total_estimated_hours(&self) -> f64 {
        self.nodes.values().map(|n| n.estimated_hours).sum()
    }
}
