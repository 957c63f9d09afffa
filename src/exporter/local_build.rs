//! Local-build exporter.
//!
//! A locally built project produces exactly one output assembly per
//! configuration/target pair, so compile-time and run-time lists are the
//! same single path (or empty). Native libraries are never exposed here.

use std::path::PathBuf;

use crate::config::ExportConfig;
use crate::paths::compose_template;
use crate::types::{Export, LibraryRecord, LocalBuildPayload};

/// Export a resolved local-build project.
///
/// A declared pre-built binary takes precedence over the project's own
/// output and suppresses shared sources.
pub fn export(record: &LibraryRecord, payload: &LocalBuildPayload, config: &ExportConfig) -> Export {
    let mut export = Export::empty(record.identity.clone());

    if let Some(prebuilt) = compose_template(
        &payload.project_root,
        payload.target.prebuilt_assembly.as_deref(),
        &config.configuration,
    ) {
        export.compilation_assemblies.push(prebuilt);
        export.runtime_assemblies = export.compilation_assemblies.clone();
        return export;
    }

    // Source-less projects have nothing to compile against.
    if !payload.source_files.is_empty() {
        export.compilation_assemblies.push(output_assembly_path(payload, config));
    }
    export.source_files = payload.shared_files.clone();
    export.runtime_assemblies = export.compilation_assemblies.clone();
    export
}

/// `<root>/<output>/<configuration>/<target>/<name>.<ext>`
pub fn output_assembly_path(payload: &LocalBuildPayload, config: &ExportConfig) -> PathBuf {
    payload
        .project_root
        .join(&config.output_folder)
        .join(&config.configuration)
        .join(&payload.target.short_name)
        .join(format!("{}.{}", payload.project_name, config.assembly_extension))
}
