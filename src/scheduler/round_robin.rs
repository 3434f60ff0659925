//! Round-robin scheduling with a fixed time slice.

use std::collections::VecDeque;

use crate::models::{GanttEntry, Process, Tick};
use crate::{log_bursts, log_queue};

use super::{ScheduleError, Scheduler};

/// Preemptive scheduler: processes rotate through a bounded time slice
/// until each completes.
///
/// The quantum is validated at construction and the field is private, so
/// a zero-quantum scheduler is unconstructible.
#[derive(Clone, Debug)]
pub struct RoundRobin {
    quantum: Tick,
    verbosity: u8,
}

impl RoundRobin {
    /// Create a round-robin scheduler with the given time slice.
    pub fn new(quantum: Tick) -> Result<Self, ScheduleError> {
        if quantum == 0 {
            return Err(ScheduleError::InvalidQuantum);
        }
        Ok(Self {
            quantum,
            verbosity: 0,
        })
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn quantum(&self) -> Tick {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn schedule(&self, processes: &mut [Process]) -> Result<Vec<GanttEntry>, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }
        for process in processes.iter_mut() {
            process.reset();
        }

        // Ready queue holds slice indices; seeded in input order and
        // strictly FIFO thereafter (re-enqueue goes to the tail after
        // the head was popped), which is what produces the rotation.
        let mut ready: VecDeque<usize> = (0..processes.len()).collect();
        let mut clock: Tick = 0;
        let mut gantt = Vec::with_capacity(processes.len());

        while let Some(index) = ready.pop_front() {
            let process = &mut processes[index];
            if process.start().is_none() {
                process.mark_started(clock)?;
            }

            let slice = self.quantum.min(process.remaining());
            log_queue!(
                self.verbosity,
                "t={}: {} granted {} of {} remaining ticks",
                clock,
                process.id(),
                slice,
                process.remaining()
            );

            gantt.push(GanttEntry::new(process.id(), clock, clock + slice));
            clock += slice;
            process.consume(slice)?;

            if process.remaining() > 0 {
                ready.push_back(index);
                log_queue!(
                    self.verbosity,
                    "t={}: {} preempted with {} ticks left",
                    clock,
                    process.id(),
                    process.remaining()
                );
            } else {
                process.mark_finished(clock)?;
                log_bursts!(self.verbosity, "t={}: {} finished", clock, process.id());
            }
        }

        Ok(gantt)
    }
}
