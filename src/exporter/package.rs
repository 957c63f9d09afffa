//! Package exporter.

use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::paths::{compose, compose_asset, is_under_folder};
use crate::types::{AssetEntry, Export, LibraryRecord, PackagePayload};

/// Export a resolved package.
///
/// Placeholder entries are skipped; everything else is composed under the
/// install root in declaration order, duplicates included. Files under the
/// shared folder become source files.
pub fn export(record: &LibraryRecord, payload: &PackagePayload, config: &ExportConfig) -> Export {
    let root = record.path.as_deref().unwrap_or_else(|| Path::new(""));

    let source_files = payload
        .files
        .iter()
        .filter(|file| is_under_folder(file, &config.shared_folder))
        .map(|file| compose(root, file))
        .collect();

    Export {
        library: record.identity.clone(),
        compilation_assemblies: compose_all(root, &payload.compile_assemblies),
        source_files,
        runtime_assemblies: compose_all(root, &payload.runtime_assemblies),
        native_libraries: compose_all(root, &payload.native_libraries),
    }
}

fn compose_all(root: &Path, assets: &[AssetEntry]) -> Vec<PathBuf> {
    assets
        .iter()
        .filter_map(|asset| compose_asset(root, asset))
        .collect()
}
