//! Platform-provided exporter.

use tracing::debug;

use crate::types::{Export, LibraryRecord};

/// Export a platform-provided library.
///
/// The record path is the only compile-time asset. Platform libraries are
/// present at run time, so no run-time or native assets are named. Returns
/// `None` when the record has no path.
pub fn export(record: &LibraryRecord) -> Option<Export> {
    let Some(path) = record.path.as_ref().filter(|p| !p.as_os_str().is_empty()) else {
        debug!(library = %record.identity, "skipping platform library without a path");
        return None;
    };

    let mut export = Export::empty(record.identity.clone());
    export.compilation_assemblies.push(path.clone());
    Some(export)
}
