//! Export aggregation over the resolved dependency graph.
//!
//! The aggregator walks every library the manager reports, dispatches to the
//! per-kind exporters and filters the raw results into the final stream.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::{ConfigError, ExportConfig};
use crate::exporter::export_library;
use crate::manager::LibraryManager;
use crate::types::{CompilationInputs, Export, LibraryIdentity, LibraryRecord};

/// Error type for exporter operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Exporter configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Fingerprint serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Computes build inputs for one root project.
///
/// ## Algorithm
///
/// 1. Walk libraries in manager order, skipping those the predicate rejects
/// 2. Dispatch each to its per-kind exporter; skip libraries with no export
/// 3. Drop compile-time assemblies whose file stem was already emitted
/// 4. Keep source files only for direct dependencies of the root
/// 5. Forward run-time and native lists unchanged
///
/// Every call starts from empty dedup state, so calls never interfere with
/// each other. Nothing is cached between calls.
pub struct LibraryExporter<M: LibraryManager> {
    manager: Arc<M>,
    root: LibraryIdentity,
    config: ExportConfig,
}

impl<M: LibraryManager> LibraryExporter<M> {
    /// Create an exporter for `root` using the default layout.
    ///
    /// Fails if `configuration` is empty.
    pub fn new(
        root: &LibraryRecord,
        manager: Arc<M>,
        configuration: impl Into<String>,
    ) -> Result<Self, ExportError> {
        Self::with_config(root, manager, ExportConfig::new(configuration))
    }

    /// Create an exporter with a full configuration.
    pub fn with_config(
        root: &LibraryRecord,
        manager: Arc<M>,
        config: ExportConfig,
    ) -> Result<Self, ExportError> {
        config.validate()?;
        Ok(Self {
            manager,
            root: root.identity.clone(),
            config,
        })
    }

    /// Exports of every resolved library, including the root.
    pub fn get_all_exports(&self) -> impl Iterator<Item = Export> + '_ {
        self.export_libraries(|_| true)
    }

    /// Exports of every resolved library except the root project itself.
    pub fn get_compilation_dependencies(&self) -> impl Iterator<Item = Export> + '_ {
        let root_name = self.root.name.as_str();
        self.export_libraries(move |record| {
            let is_root = record.identity.has_name(root_name);
            if is_root {
                debug!(library = %record.identity, "excluding root project from its own dependencies");
            }
            !is_root
        })
    }

    /// Exports of every resolved library accepted by `predicate`.
    pub fn export_libraries<F>(&self, predicate: F) -> ExportIter<'_, F>
    where
        F: FnMut(&LibraryRecord) -> bool,
    {
        ExportIter {
            libraries: self.manager.get_libraries(),
            predicate,
            root: &self.root,
            config: &self.config,
            seen_compile_names: HashSet::new(),
        }
    }

    /// Raw export of a single library, looked up by name.
    ///
    /// No dedup or directness filtering is applied.
    pub fn get_export(&self, name: &str) -> Option<Export> {
        self.manager
            .get_library(name)
            .and_then(|record| export_library(record, &self.config))
    }

    /// Flattened inputs of [`get_compilation_dependencies`](Self::get_compilation_dependencies).
    pub fn compilation_inputs(&self) -> CompilationInputs {
        self.get_compilation_dependencies().collect()
    }

    /// Fingerprint of [`compilation_inputs`](Self::compilation_inputs) for build caching.
    pub fn fingerprint(&self) -> Result<String, ExportError> {
        Ok(self.compilation_inputs().fingerprint()?)
    }

    /// Root project identity.
    pub fn root(&self) -> &LibraryIdentity {
        &self.root
    }

    /// Get the config.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Get a reference to the manager.
    pub fn manager(&self) -> &M {
        &self.manager
    }
}

/// Lazy export stream for one aggregation call.
///
/// Each `next()` pulls libraries from the manager until one produces an
/// export. Not restartable; call the exporter again for a fresh stream.
pub struct ExportIter<'a, F> {
    libraries: Box<dyn Iterator<Item = &'a LibraryRecord> + 'a>,
    predicate: F,
    root: &'a LibraryIdentity,
    config: &'a ExportConfig,
    seen_compile_names: HashSet<String>,
}

impl<'a, F> ExportIter<'a, F> {
    fn apply_filters(&mut self, record: &LibraryRecord, raw: Export) -> Export {
        let mut compilation_assemblies = Vec::with_capacity(raw.compilation_assemblies.len());
        for path in raw.compilation_assemblies {
            let stem = assembly_name(&path);
            if self.seen_compile_names.insert(stem.clone()) {
                compilation_assemblies.push(path);
            } else {
                trace!(
                    library = %record.identity,
                    assembly = %stem,
                    "dropping duplicate compile-time assembly"
                );
            }
        }

        // Shared sources flow one level only.
        let source_files = if record.is_direct_dependency_of(self.root) {
            raw.source_files
        } else {
            Vec::new()
        };

        Export {
            library: raw.library,
            compilation_assemblies,
            source_files,
            runtime_assemblies: raw.runtime_assemblies,
            native_libraries: raw.native_libraries,
        }
    }
}

impl<'a, F> Iterator for ExportIter<'a, F>
where
    F: FnMut(&LibraryRecord) -> bool,
{
    type Item = Export;

    fn next(&mut self) -> Option<Export> {
        loop {
            let record = self.libraries.next()?;
            if !(self.predicate)(record) {
                continue;
            }
            let Some(raw) = export_library(record, self.config) else {
                continue;
            };

            let export = self.apply_filters(record, raw);
            debug!(
                library = %export.library,
                compile = export.compilation_assemblies.len(),
                sources = export.source_files.len(),
                runtime = export.runtime_assemblies.len(),
                native = export.native_libraries.len(),
                "exported library"
            );
            return Some(export);
        }
    }
}

/// File name without extension; the whole path when there is no file name.
fn assembly_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
