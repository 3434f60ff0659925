//! Timing metrics derived from a completed scheduling run.
//!
//! The numbers come from the process time fields written by the run; the
//! timeline argument is consulted only by the precondition checks. Means
//! are taken over the process set, not over timeline entries (round-robin
//! produces several entries per process).

use rustc_hash::FxHashMap;

use crate::models::{GanttEntry, Process, Tick};

/// Errors raised when a metrics computation gets unusable input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// No processes to compute over.
    EmptyProcessList,
    /// Timeline is empty or contains an entry with an inverted interval.
    MalformedGantt,
    /// A process is missing its start or finish time.
    UnscheduledProcess(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::EmptyProcessList => {
                write!(f, "cannot compute metrics over an empty process list")
            }
            MetricsError::MalformedGantt => write!(f, "timeline is empty or malformed"),
            MetricsError::UnscheduledProcess(id) => {
                write!(f, "process {} has not been scheduled", id)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

/// Timing quantities for a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMetrics {
    /// Delay from arrival to first execution.
    pub response: Tick,
    /// Delay from arrival to completion.
    pub turnaround: Tick,
    /// Turnaround minus required duration (time spent ready, not running).
    pub waiting: Tick,
}

/// Arithmetic means over the whole process set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateMetrics {
    pub mean_response: f64,
    pub mean_turnaround: f64,
    pub mean_waiting: f64,
}

/// Per-process and aggregate metrics for one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub per_process: FxHashMap<String, ProcessMetrics>,
    pub aggregate: AggregateMetrics,
}

/// Derive response, turnaround, and waiting time from a finished run.
///
/// Fails with [`MetricsError::EmptyProcessList`] on an empty process
/// set, [`MetricsError::MalformedGantt`] on an empty or inverted
/// timeline, and [`MetricsError::UnscheduledProcess`] when any process
/// is missing a time stamp. Inconsistent timelines supplied by a buggy
/// caller are not defended beyond these checks.
pub fn compute_metrics(
    processes: &[Process],
    gantt: &[GanttEntry],
) -> Result<MetricsReport, MetricsError> {
    if processes.is_empty() {
        return Err(MetricsError::EmptyProcessList);
    }
    if gantt.is_empty() || gantt.iter().any(|entry| entry.start >= entry.end) {
        return Err(MetricsError::MalformedGantt);
    }

    let mut per_process =
        FxHashMap::with_capacity_and_hasher(processes.len(), Default::default());
    let mut sum_response: u64 = 0;
    let mut sum_turnaround: u64 = 0;
    let mut sum_waiting: u64 = 0;

    for process in processes {
        let (start, finish) = match (process.start(), process.finish()) {
            (Some(start), Some(finish)) => (start, finish),
            _ => return Err(MetricsError::UnscheduledProcess(process.id().to_string())),
        };

        let response = start - process.arrival();
        let turnaround = finish - process.arrival();
        let waiting = turnaround - process.duration();

        sum_response += u64::from(response);
        sum_turnaround += u64::from(turnaround);
        sum_waiting += u64::from(waiting);

        per_process.insert(
            process.id().to_string(),
            ProcessMetrics {
                response,
                turnaround,
                waiting,
            },
        );
    }

    let count = processes.len() as f64;
    Ok(MetricsReport {
        per_process,
        aggregate: AggregateMetrics {
            mean_response: sum_response as f64 / count,
            mean_turnaround: sum_turnaround as f64 / count,
            mean_waiting: sum_waiting as f64 / count,
        },
    })
}
