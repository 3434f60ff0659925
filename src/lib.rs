//! Instructional CPU-scheduling simulator.
//!
//! Simulates two classic scheduling disciplines — first-come-first-served
//! and round-robin — over a finite set of synthetic processes, and
//! derives per-process and aggregate timing metrics (response,
//! turnaround, waiting) from the resulting execution timeline. Processes
//! never execute instructions; their declared CPU requirement is
//! consumed symbolically, one burst at a time.
//!
//! The core is pure and synchronous: a scheduler borrows the process
//! records exclusively for the duration of a run, writes their time
//! bookkeeping, and returns the timeline. The registry owns the records
//! between runs and enforces id uniqueness; persistence round-trips the
//! creation triples as JSON or CSV.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod persistence;
pub mod registry;
pub mod scheduler;

pub use config::SimConfig;
pub use metrics::{compute_metrics, AggregateMetrics, MetricsError, MetricsReport, ProcessMetrics};
pub use models::{GanttEntry, Process, ProcessError, Tick};
pub use persistence::{load_csv, load_json, save_csv, save_json, PersistenceError, ProcessRecord};
pub use registry::{ProcessRegistry, RegistryError};
pub use scheduler::{from_config, Fcfs, RoundRobin, ScheduleError, Scheduler};
