//! In-memory library manager.

use serde::{Deserialize, Serialize};

use crate::types::{LibraryIdentity, LibraryRecord};
use super::LibraryManager;

/// In-memory library manager.
///
/// Yields libraries in insertion order. Serializes as a plain JSON array of
/// records so graph snapshots can be stored as fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryLibraryManager {
    libraries: Vec<LibraryRecord>,
}

impl InMemoryLibraryManager {
    /// Create a new empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a library.
    pub fn add_library(&mut self, record: LibraryRecord) {
        self.libraries.push(record);
    }

    /// Append a library directly required by `parent`.
    pub fn add_dependency(&mut self, parent: &LibraryIdentity, record: LibraryRecord) {
        self.libraries.push(record.with_parent(parent));
    }

    /// Get number of libraries.
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Whether the manager holds no libraries.
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Load a snapshot from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl FromIterator<LibraryRecord> for InMemoryLibraryManager {
    fn from_iter<I: IntoIterator<Item = LibraryRecord>>(iter: I) -> Self {
        Self {
            libraries: iter.into_iter().collect(),
        }
    }
}

impl LibraryManager for InMemoryLibraryManager {
    fn get_libraries(&self) -> Box<dyn Iterator<Item = &LibraryRecord> + '_> {
        Box::new(self.libraries.iter())
    }
}
