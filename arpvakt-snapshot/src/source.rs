//! Snapshot sources.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::table::{parse_neighbor_table, NeighborSnapshot};

pub const DEFAULT_NEIGHBOR_TABLE: &str = "/proc/net/arp";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("neighbor table {path} unreadable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Produces one snapshot per cycle. Must run exactly once per cycle before
/// any consumer: deny/allow filtering mutates the working set derived from
/// the result.
pub trait SnapshotSource {
    fn snapshot(&self) -> Result<NeighborSnapshot, SnapshotError>;
}

/// Production source reading the kernel table from procfs.
#[derive(Debug, Clone)]
pub struct ProcNeighborTable {
    path: PathBuf,
}

impl ProcNeighborTable {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for ProcNeighborTable {
    fn default() -> Self {
        Self::new(DEFAULT_NEIGHBOR_TABLE)
    }
}

impl SnapshotSource for ProcNeighborTable {
    fn snapshot(&self) -> Result<NeighborSnapshot, SnapshotError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SnapshotError::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_neighbor_table(&text))
    }
}

/// Fixed in-memory source for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    snapshot: NeighborSnapshot,
}

impl MemorySource {
    pub fn new(snapshot: NeighborSnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for MemorySource {
    fn snapshot(&self) -> Result<NeighborSnapshot, SnapshotError> {
        Ok(self.snapshot.clone())
    }
}
