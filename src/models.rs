//! Core data types for the scheduling simulator.

use thiserror::Error;

/// Simulator time unit (abstract integer ticks, no wall-clock meaning).
pub type Tick = u32;

/// Errors raised by process construction and time bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("process id must be a non-empty string")]
    EmptyId,
    #[error("duration must be a positive number of ticks")]
    InvalidDuration,
    #[error("priority must be non-negative, got {0}")]
    InvalidPriority(i32),
    #[error("cannot consume {amount} ticks with {remaining} remaining")]
    InvalidAmount { amount: Tick, remaining: Tick },
    #[error("process {0} already has a start time")]
    AlreadyStarted(String),
    #[error("process {0} already has a finish time")]
    AlreadyFinished(String),
    #[error("process {0} cannot finish with {1} ticks remaining")]
    NotComplete(String, Tick),
    #[error("finish time {finish} for process {id} precedes its start")]
    FinishBeforeStart { id: String, finish: Tick },
}

/// A simulated schedulable unit of work.
///
/// Holds the creation triple (`id`, `duration`, `priority`) plus the
/// time-accounting fields a scheduling run writes. The accounting fields
/// are private so the set-once rules on `start`/`finish` and the
/// `remaining <= duration` bound hold no matter which scheduler drives
/// the record.
///
/// `priority` is stored and reported but never consulted by the
/// schedulers in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    id: String,
    duration: Tick,
    priority: i32,
    remaining: Tick,
    arrival: Tick,
    start: Option<Tick>,
    finish: Option<Tick>,
}

impl Process {
    /// Create a process from its creation triple.
    ///
    /// Fails when the id is empty, the duration is zero, or the priority
    /// is negative. Id uniqueness is the registry's concern, not checked
    /// here.
    pub fn new(id: impl Into<String>, duration: Tick, priority: i32) -> Result<Self, ProcessError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ProcessError::EmptyId);
        }
        if duration == 0 {
            return Err(ProcessError::InvalidDuration);
        }
        if priority < 0 {
            return Err(ProcessError::InvalidPriority(priority));
        }
        Ok(Self {
            id,
            duration,
            priority,
            remaining: duration,
            arrival: 0,
            start: None,
            finish: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn duration(&self) -> Tick {
        self.duration
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Ticks of CPU time still owed to this process.
    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    /// Arrival time (fixed at 0 in this version of the simulator).
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    /// Tick at which the process first received CPU time, if scheduled.
    pub fn start(&self) -> Option<Tick> {
        self.start
    }

    /// Tick at which the process was fully serviced, if scheduled.
    pub fn finish(&self) -> Option<Tick> {
        self.finish
    }

    /// Consume `amount` ticks of the remaining requirement.
    pub fn consume(&mut self, amount: Tick) -> Result<(), ProcessError> {
        if amount == 0 || amount > self.remaining {
            return Err(ProcessError::InvalidAmount {
                amount,
                remaining: self.remaining,
            });
        }
        self.remaining -= amount;
        Ok(())
    }

    /// Record the first tick at which the process ran.
    pub fn mark_started(&mut self, t: Tick) -> Result<(), ProcessError> {
        if self.start.is_some() {
            return Err(ProcessError::AlreadyStarted(self.id.clone()));
        }
        self.start = Some(t);
        Ok(())
    }

    /// Record the tick at which the process completed.
    ///
    /// Only valid once all remaining time has been consumed and the
    /// process has a start time no later than `t`.
    pub fn mark_finished(&mut self, t: Tick) -> Result<(), ProcessError> {
        if self.finish.is_some() {
            return Err(ProcessError::AlreadyFinished(self.id.clone()));
        }
        if self.remaining > 0 {
            return Err(ProcessError::NotComplete(self.id.clone(), self.remaining));
        }
        match self.start {
            Some(start) if start <= t => {
                self.finish = Some(t);
                Ok(())
            }
            _ => Err(ProcessError::FinishBeforeStart {
                id: self.id.clone(),
                finish: t,
            }),
        }
    }

    /// Restore the record to its pre-run state.
    ///
    /// Schedulers call this at the top of every run; a record set can be
    /// scheduled any number of times.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.start = None;
        self.finish = None;
    }

    /// Whether the process has been fully serviced.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0 && self.finish.is_some()
    }
}

/// One contiguous, uninterrupted CPU burst attributed to a process.
///
/// A scheduling run returns these in execution order; consecutive
/// entries need not reference the same process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GanttEntry {
    pub process_id: String,
    pub start: Tick,
    pub end: Tick,
}

impl GanttEntry {
    pub fn new(process_id: impl Into<String>, start: Tick, end: Tick) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the burst in ticks.
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(id: &str, duration: Tick) -> Process {
        Process::new(id, duration, 1).unwrap()
    }

    #[test]
    fn test_new_process_initial_state() {
        let p = Process::new("P1", 10, 2).unwrap();
        assert_eq!(p.id(), "P1");
        assert_eq!(p.duration(), 10);
        assert_eq!(p.priority(), 2);
        assert_eq!(p.remaining(), 10);
        assert_eq!(p.arrival(), 0);
        assert_eq!(p.start(), None);
        assert_eq!(p.finish(), None);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_empty_id_rejected() {
        assert_eq!(Process::new("", 5, 0), Err(ProcessError::EmptyId));
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(Process::new("P1", 0, 0), Err(ProcessError::InvalidDuration));
    }

    #[test]
    fn test_negative_priority_rejected() {
        assert_eq!(
            Process::new("P1", 5, -1),
            Err(ProcessError::InvalidPriority(-1))
        );
    }

    #[test]
    fn test_consume_reduces_remaining() {
        let mut p = make_process("P1", 10);
        p.consume(4).unwrap();
        assert_eq!(p.remaining(), 6);
        p.consume(6).unwrap();
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn test_consume_zero_rejected() {
        let mut p = make_process("P1", 10);
        assert_eq!(
            p.consume(0),
            Err(ProcessError::InvalidAmount {
                amount: 0,
                remaining: 10
            })
        );
    }

    #[test]
    fn test_consume_past_remaining_rejected() {
        let mut p = make_process("P1", 3);
        assert_eq!(
            p.consume(4),
            Err(ProcessError::InvalidAmount {
                amount: 4,
                remaining: 3
            })
        );
        // State unchanged after the failed call
        assert_eq!(p.remaining(), 3);
    }

    #[test]
    fn test_mark_started_once() {
        let mut p = make_process("P1", 5);
        p.mark_started(0).unwrap();
        assert_eq!(p.start(), Some(0));
        assert_eq!(
            p.mark_started(3),
            Err(ProcessError::AlreadyStarted("P1".to_string()))
        );
        assert_eq!(p.start(), Some(0));
    }

    #[test]
    fn test_mark_finished_requires_no_remaining() {
        let mut p = make_process("P1", 5);
        p.mark_started(0).unwrap();
        assert_eq!(
            p.mark_finished(5),
            Err(ProcessError::NotComplete("P1".to_string(), 5))
        );
        p.consume(5).unwrap();
        p.mark_finished(5).unwrap();
        assert_eq!(p.finish(), Some(5));
        assert!(p.is_finished());
    }

    #[test]
    fn test_mark_finished_once() {
        let mut p = make_process("P1", 2);
        p.mark_started(0).unwrap();
        p.consume(2).unwrap();
        p.mark_finished(2).unwrap();
        assert_eq!(
            p.mark_finished(3),
            Err(ProcessError::AlreadyFinished("P1".to_string()))
        );
    }

    #[test]
    fn test_mark_finished_before_start_rejected() {
        let mut p = make_process("P1", 2);
        p.mark_started(4).unwrap();
        p.consume(2).unwrap();
        assert_eq!(
            p.mark_finished(3),
            Err(ProcessError::FinishBeforeStart {
                id: "P1".to_string(),
                finish: 3
            })
        );
    }

    #[test]
    fn test_mark_finished_without_start_rejected() {
        let mut p = make_process("P1", 2);
        p.consume(2).unwrap();
        assert!(matches!(
            p.mark_finished(2),
            Err(ProcessError::FinishBeforeStart { .. })
        ));
    }

    #[test]
    fn test_reset_clears_run_state() {
        let mut p = make_process("P1", 5);
        p.mark_started(0).unwrap();
        p.consume(5).unwrap();
        p.mark_finished(5).unwrap();

        p.reset();
        assert_eq!(p.remaining(), 5);
        assert_eq!(p.start(), None);
        assert_eq!(p.finish(), None);
        // A fresh run may mark it again
        p.mark_started(7).unwrap();
        assert_eq!(p.start(), Some(7));
    }

    #[test]
    fn test_gantt_entry_len() {
        let entry = GanttEntry::new("P1", 3, 8);
        assert_eq!(entry.len(), 5);
        assert!(!entry.is_empty());
    }
}
