//! Scheduling disciplines over a fixed set of processes.
//!
//! Both disciplines consume an ordered slice of [`Process`] records,
//! write their time bookkeeping, and return the execution timeline as a
//! sequence of [`GanttEntry`] bursts. A run takes the records as
//! `&mut [Process]`: the exclusive borrow is the ownership contract, so
//! two runs can never mutate the same records concurrently.

mod fcfs;
mod round_robin;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;

use thiserror::Error;

use crate::config::SimConfig;
use crate::models::{GanttEntry, Process, ProcessError};

/// Errors that can occur while building or running a scheduler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("cannot schedule an empty process list")]
    EmptyInput,
    #[error("quantum must be a positive number of ticks")]
    InvalidQuantum,
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// A scheduling discipline.
///
/// Implementations take ownership of the per-run time bookkeeping: every
/// record is reset before scheduling, so prior run state is never
/// trusted. Neither discipline in this crate consults `priority`.
pub trait Scheduler {
    /// Run the discipline over `processes` in slice order.
    ///
    /// On success every record has `remaining() == 0` and both time
    /// stamps set, and the returned timeline is gap-free starting at
    /// tick 0. Fails with [`ScheduleError::EmptyInput`] on an empty
    /// slice.
    fn schedule(&self, processes: &mut [Process]) -> Result<Vec<GanttEntry>, ScheduleError>;
}

/// Build a scheduler from configuration.
///
/// Dispatches on `config.policy`: `"fcfs"` or `"round_robin"`. The
/// quantum is validated here for round-robin; unrecognized policies fail
/// with [`ScheduleError::UnknownPolicy`].
pub fn from_config(config: &SimConfig) -> Result<Box<dyn Scheduler>, ScheduleError> {
    match config.policy.as_str() {
        "fcfs" => Ok(Box::new(Fcfs::new().with_verbosity(config.verbosity))),
        "round_robin" => Ok(Box::new(
            RoundRobin::new(config.quantum)?.with_verbosity(config.verbosity),
        )),
        _ => Err(ScheduleError::UnknownPolicy(config.policy.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tick;

    fn make_processes(defs: &[(&str, Tick)]) -> Vec<Process> {
        defs.iter()
            .map(|(id, duration)| Process::new(*id, *duration, 0).unwrap())
            .collect()
    }

    #[test]
    fn test_from_config_fcfs() {
        let config = SimConfig {
            policy: "fcfs".to_string(),
            ..SimConfig::default()
        };
        let scheduler = from_config(&config).unwrap();
        let mut processes = make_processes(&[("P1", 2), ("P2", 3)]);
        let gantt = scheduler.schedule(&mut processes).unwrap();
        assert_eq!(gantt.len(), 2);
    }

    #[test]
    fn test_from_config_round_robin() {
        let config = SimConfig {
            policy: "round_robin".to_string(),
            quantum: 1,
            verbosity: 0,
        };
        let scheduler = from_config(&config).unwrap();
        let mut processes = make_processes(&[("P1", 2), ("P2", 1)]);
        let gantt = scheduler.schedule(&mut processes).unwrap();
        // Quantum 1 yields one burst per tick
        assert_eq!(gantt.len(), 3);
    }

    #[test]
    fn test_from_config_zero_quantum() {
        let config = SimConfig {
            policy: "round_robin".to_string(),
            quantum: 0,
            verbosity: 0,
        };
        assert_eq!(
            from_config(&config).err(),
            Some(ScheduleError::InvalidQuantum)
        );
    }

    #[test]
    fn test_from_config_unknown_policy() {
        let config = SimConfig {
            policy: "lottery".to_string(),
            ..SimConfig::default()
        };
        assert_eq!(
            from_config(&config).err(),
            Some(ScheduleError::UnknownPolicy("lottery".to_string()))
        );
    }
}
