//! Configuration for simulator runs.

use crate::models::Tick;

/// Knobs for a simulation run.
///
/// `policy` names the scheduling discipline: `"fcfs"` or
/// `"round_robin"`. The struct itself carries no validation; unknown
/// policies and a zero quantum are rejected when the scheduler is built
/// (see [`crate::scheduler::from_config`]), so all configuration errors
/// surface through `ScheduleError`.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Scheduling discipline: "fcfs" or "round_robin"
    pub policy: String,
    /// Time slice for round-robin, ignored by FCFS
    pub quantum: Tick,
    /// Logging verbosity: 0 silent, 1 bursts, 2 queue movement, 3 debug
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy: "fcfs".to_string(),
            quantum: 4,
            verbosity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.policy, "fcfs");
        assert_eq!(config.quantum, 4);
        assert_eq!(config.verbosity, 0);
    }
}
