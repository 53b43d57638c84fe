// src/schedule/ready.rs

//! The ready set: tasks whose prerequisites are all satisfied, ordered by
//! due date with the earliest first.
//!
//! A task without a due date is treated as infinitely late, so it sorts
//! after every task that has one. Ties (equal due dates, or both absent)
//! fall back to batch position, which makes removal order fully
//! deterministic for a fixed input batch.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};

use crate::schedule::TaskTitle;

#[derive(Debug, Clone)]
struct ReadyEntry {
    due_date: Option<DateTime<Utc>>,
    position: usize,
    title: TaskTitle,
}

impl ReadyEntry {
    /// Earliest due date first; `None` after every `Some`; batch position
    /// breaks ties.
    fn cmp_key(&self, other: &Self) -> Ordering {
        let by_due = match (self.due_date, other.due_date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_due.then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialEq for ReadyEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_key(other) == Ordering::Equal
    }
}

impl Eq for ReadyEntry {}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_key(other)
    }
}

/// Min-heap of ready tasks keyed by (due date, batch position).
///
/// `offer` and `take_earliest` are O(log n).
#[derive(Debug, Default)]
pub struct ReadySet {
    heap: BinaryHeap<Reverse<ReadyEntry>>,
}

impl ReadySet {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Add a task that has just become ready.
    pub fn offer(&mut self, title: TaskTitle, due_date: Option<DateTime<Utc>>, position: usize) {
        self.heap.push(Reverse(ReadyEntry {
            due_date,
            position,
            title,
        }));
    }

    /// Remove and return the earliest-due ready task, if any.
    pub fn take_earliest(&mut self) -> Option<TaskTitle> {
        self.heap.pop().map(|Reverse(entry)| entry.title)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
