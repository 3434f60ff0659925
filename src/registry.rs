//! Process registry: owns the records and enforces id uniqueness.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::models::{Process, ProcessError, Tick};

/// Errors raised by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a process with id {0} is already registered")]
    DuplicateId(String),
    #[error("no process with id {0} is registered")]
    UnknownId(String),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Insertion-ordered store of process records with a live-id set.
///
/// The live-id set is explicit registry state: an id stays reserved for
/// exactly as long as its record is held here, and [`remove`] frees the
/// id and drops the record in the same step. Callers hand the records to
/// a scheduler via [`processes_mut`]; the exclusive borrow is what keeps
/// two runs from mutating the same records at once.
///
/// [`remove`]: ProcessRegistry::remove
/// [`processes_mut`]: ProcessRegistry::processes_mut
#[derive(Debug, Default, Clone)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
    live_ids: FxHashSet<String>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a process from its creation triple.
    ///
    /// The duplicate check consults the live-id set before validation so
    /// a colliding id reports as such even when other fields are bad.
    pub fn create(
        &mut self,
        id: &str,
        duration: Tick,
        priority: i32,
    ) -> Result<&Process, RegistryError> {
        if self.live_ids.contains(id) {
            return Err(RegistryError::DuplicateId(id.to_string()));
        }
        let process = Process::new(id, duration, priority)?;
        self.live_ids.insert(process.id().to_string());
        let index = self.processes.len();
        self.processes.push(process);
        Ok(&self.processes[index])
    }

    /// Register an already-constructed record.
    pub fn add(&mut self, process: Process) -> Result<(), RegistryError> {
        if self.live_ids.contains(process.id()) {
            return Err(RegistryError::DuplicateId(process.id().to_string()));
        }
        self.live_ids.insert(process.id().to_string());
        self.processes.push(process);
        Ok(())
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id() == id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| p.id() == id)
    }

    /// All records in insertion order; this is the order schedulers see.
    pub fn list(&self) -> &[Process] {
        &self.processes
    }

    /// Exclusive mutable view for a scheduling run.
    pub fn processes_mut(&mut self) -> &mut [Process] {
        &mut self.processes
    }

    /// Remove a record and free its id in the same step.
    ///
    /// The freed id may be reused by a later [`create`](Self::create).
    pub fn remove(&mut self, id: &str) -> Result<Process, RegistryError> {
        let index = self
            .processes
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| RegistryError::UnknownId(id.to_string()))?;
        self.live_ids.remove(id);
        Ok(self.processes.remove(index))
    }

    /// Drop every record and free every id.
    pub fn clear(&mut self) {
        self.processes.clear();
        self.live_ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.live_ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
