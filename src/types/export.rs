//! Export bundles produced for each library.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::library::LibraryIdentity;
use crate::canonical::canonical_hash_hex;

/// Build inputs contributed by one library.
///
/// Produced fresh on every aggregation call; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Export {
    /// Library that contributed these inputs.
    pub library: LibraryIdentity,
    /// Assemblies referenced at compile time.
    pub compilation_assemblies: Vec<PathBuf>,
    /// Source files compiled verbatim into the consumer.
    pub source_files: Vec<PathBuf>,
    /// Assemblies needed when running the built output.
    pub runtime_assemblies: Vec<PathBuf>,
    /// Native binaries needed at run time.
    pub native_libraries: Vec<PathBuf>,
}

impl Export {
    /// Create an export with empty lists.
    pub fn empty(library: LibraryIdentity) -> Self {
        Self {
            library,
            compilation_assemblies: Vec::new(),
            source_files: Vec::new(),
            runtime_assemblies: Vec::new(),
            native_libraries: Vec::new(),
        }
    }

    /// True when all four lists are empty.
    pub fn is_empty(&self) -> bool {
        self.compilation_assemblies.is_empty()
            && self.source_files.is_empty()
            && self.runtime_assemblies.is_empty()
            && self.native_libraries.is_empty()
    }
}

/// Flattened inputs handed to the compiler step.
///
/// Lists keep stream order. No dedup happens here: compile-time assemblies
/// are already unique by the time they reach this type, and run-time/native
/// lists are forwarded as the exporter produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationInputs {
    /// All compile-time assemblies.
    pub compilation_assemblies: Vec<PathBuf>,
    /// All shared source files.
    pub source_files: Vec<PathBuf>,
    /// All run-time assemblies.
    pub runtime_assemblies: Vec<PathBuf>,
    /// All native libraries.
    pub native_libraries: Vec<PathBuf>,
}

impl CompilationInputs {
    /// Fold an export stream into flat lists.
    pub fn from_exports<I>(exports: I) -> Self
    where
        I: IntoIterator<Item = Export>,
    {
        exports.into_iter().fold(Self::default(), |mut acc, export| {
            acc.compilation_assemblies.extend(export.compilation_assemblies);
            acc.source_files.extend(export.source_files);
            acc.runtime_assemblies.extend(export.runtime_assemblies);
            acc.native_libraries.extend(export.native_libraries);
            acc
        })
    }

    /// Deterministic xxh64 fingerprint of the flattened inputs.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        canonical_hash_hex(self)
    }
}

impl FromIterator<Export> for CompilationInputs {
    fn from_iter<I: IntoIterator<Item = Export>>(iter: I) -> Self {
        Self::from_exports(iter)
    }
}
