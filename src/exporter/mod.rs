//! Per-kind exporters.
//!
//! Each exporter turns one resolved [`LibraryRecord`] into a raw, unfiltered
//! [`Export`]. Cross-library dedup and directness filtering happen later in
//! the [aggregator](crate::aggregator).

pub mod package;
pub mod local_build;
pub mod platform;

use tracing::debug;

use crate::config::ExportConfig;
use crate::types::{Export, LibraryKind, LibraryPayload, LibraryRecord};

/// Compute the raw export of one library.
///
/// Returns `None` when the library contributes nothing: it is unresolved,
/// or it falls through to the platform-provided exporter without a path.
/// A kind whose payload doesn't match is treated as platform-provided.
pub fn export_library(record: &LibraryRecord, config: &ExportConfig) -> Option<Export> {
    if !record.resolved {
        debug!(library = %record.identity, "skipping unresolved library");
        return None;
    }

    match (record.kind(), &record.payload) {
        (LibraryKind::Package, LibraryPayload::Package(payload)) => {
            Some(package::export(record, payload, config))
        }
        (LibraryKind::LocalBuild, LibraryPayload::LocalBuild(payload)) => {
            Some(local_build::export(record, payload, config))
        }
        _ => platform::export(record),
    }
}
