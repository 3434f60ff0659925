//! JSON and CSV round-trip of registry contents.
//!
//! Only the creation triple (`id`, `duration`, `priority`) is persisted.
//! Time bookkeeping is run state and is rebuilt by the next scheduling
//! run. Loads construct records through the registry factory, so file
//! contents pass the same validation and uniqueness gate as interactive
//! creation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Tick;
use crate::registry::{ProcessRegistry, RegistryError};

/// Errors raised while saving or loading process records.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
    #[error("id {0:?} contains characters that cannot be written as csv")]
    UnencodableId(String),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// On-disk form of a process record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: String,
    pub duration: Tick,
    pub priority: i32,
}

const CSV_HEADER: &str = "id,duration,priority";

/// Write the registry's records to `path` as a JSON array.
pub fn save_json(
    registry: &ProcessRegistry,
    path: impl AsRef<Path>,
) -> Result<(), PersistenceError> {
    let records: Vec<ProcessRecord> = registry
        .list()
        .iter()
        .map(|p| ProcessRecord {
            id: p.id().to_string(),
            duration: p.duration(),
            priority: p.priority(),
        })
        .collect();
    fs::write(path, serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

/// Load a registry from a JSON array written by [`save_json`].
pub fn load_json(path: impl AsRef<Path>) -> Result<ProcessRegistry, PersistenceError> {
    let contents = fs::read_to_string(path)?;
    let records: Vec<ProcessRecord> = serde_json::from_str(&contents)?;
    let mut registry = ProcessRegistry::new();
    for record in records {
        registry.create(&record.id, record.duration, record.priority)?;
    }
    Ok(registry)
}

/// Write the registry's records to `path` as headered CSV.
///
/// Ids containing a comma, quote, or line break are rejected rather than
/// escaped; the format stays three flat columns.
pub fn save_csv(
    registry: &ProcessRegistry,
    path: impl AsRef<Path>,
) -> Result<(), PersistenceError> {
    let mut out = String::with_capacity(CSV_HEADER.len() + registry.len() * 16);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for process in registry.list() {
        let id = process.id();
        if id.contains(&[',', '"', '\n', '\r'][..]) {
            return Err(PersistenceError::UnencodableId(id.to_string()));
        }
        out.push_str(id);
        out.push(',');
        out.push_str(&process.duration().to_string());
        out.push(',');
        out.push_str(&process.priority().to_string());
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

/// Load a registry from CSV written by [`save_csv`].
///
/// Parse failures report their 1-based line number.
pub fn load_csv(path: impl AsRef<Path>) -> Result<ProcessRegistry, PersistenceError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim() == CSV_HEADER => {}
        _ => {
            return Err(PersistenceError::MalformedRow {
                line: 1,
                reason: format!("expected header {:?}", CSV_HEADER),
            })
        }
    }

    let mut registry = ProcessRegistry::new();
    for (index, line) in lines {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return Err(PersistenceError::MalformedRow {
                line: line_number,
                reason: format!("expected 3 fields, got {}", fields.len()),
            });
        }

        let duration: Tick = fields[1].trim().parse().map_err(|_| {
            PersistenceError::MalformedRow {
                line: line_number,
                reason: format!("invalid duration {:?}", fields[1]),
            }
        })?;
        let priority: i32 = fields[2].trim().parse().map_err(|_| {
            PersistenceError::MalformedRow {
                line: line_number,
                reason: format!("invalid priority {:?}", fields[2]),
            }
        })?;

        registry.create(fields[0].trim(), duration, priority)?;
    }
    Ok(registry)
}
