//! First-come-first-served scheduling.

use crate::log_bursts;
use crate::models::{GanttEntry, Process, Tick};

use super::{ScheduleError, Scheduler};

/// Non-preemptive scheduler: each process runs to completion in slice
/// order, one burst per process.
#[derive(Clone, Debug, Default)]
pub struct Fcfs {
    verbosity: u8,
}

impl Fcfs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl Scheduler for Fcfs {
    fn schedule(&self, processes: &mut [Process]) -> Result<Vec<GanttEntry>, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }
        for process in processes.iter_mut() {
            process.reset();
        }

        let mut clock: Tick = 0;
        let mut gantt = Vec::with_capacity(processes.len());

        for process in processes.iter_mut() {
            let burst_start = clock;
            let duration = process.duration();

            process.mark_started(clock)?;
            process.consume(duration)?;
            clock += duration;
            process.mark_finished(clock)?;

            log_bursts!(
                self.verbosity,
                "t={}: {} runs to completion ({} ticks)",
                burst_start,
                process.id(),
                duration
            );
            gantt.push(GanttEntry::new(process.id(), burst_start, clock));
        }

        Ok(gantt)
    }
}
