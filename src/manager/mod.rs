//! Library manager backends.

pub mod memory;

use crate::types::LibraryRecord;

/// Source of the resolved dependency graph.
///
/// Implementations must yield libraries in a fixed, deterministic order for
/// the lifetime of one snapshot, with `resolved` flags, parent references and
/// payloads already populated.
pub trait LibraryManager: Send + Sync {
    /// All libraries of the resolved graph, in manager order.
    fn get_libraries(&self) -> Box<dyn Iterator<Item = &LibraryRecord> + '_>;

    /// First library whose name matches case-insensitively.
    fn get_library(&self, name: &str) -> Option<&LibraryRecord> {
        self.get_libraries().find(|record| record.identity.has_name(name))
    }
}

pub use memory::InMemoryLibraryManager;
