//! # library-exports
//!
//! Deterministic build-input computation for resolved dependency graphs.
//!
//! The exporter answers one question:
//!
//! > Given a root project and its resolved dependencies, which files does the
//! > compiler need?
//!
//! ## Core Contract
//!
//! 1. Decide per library what it contributes: a package's assets, a local
//!    project's output, shared sources, or a platform-provided binary
//! 2. Merge contributions into one filtered stream of [`Export`]s
//! 3. Flatten the stream into [`CompilationInputs`] for the compiler step
//!
//! ## Architecture
//!
//! ```text
//! LibraryManager → LibraryExporter → per-kind exporter → paths
//!                        ↓
//!              dedup + directness filter → Export stream
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same graph snapshot + same config → identical export stream
//! - Compile-time assemblies are unique by file stem across one stream;
//!   the first library in manager order wins
//! - Shared sources only flow from direct dependencies of the root

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod config;
pub mod paths;
pub mod exporter;
pub mod manager;
pub mod aggregator;
pub mod canonical;

// Re-exports
pub use types::{
    AssetEntry, CompilationInputs, Export, LibraryIdentity, LibraryKind, LibraryPayload,
    LibraryRecord, LocalBuildPayload, PackagePayload, TargetFramework,
};
pub use config::{ConfigError, ExportConfig, CONFIGURATION_TOKEN};
pub use exporter::export_library;
pub use manager::{InMemoryLibraryManager, LibraryManager};
pub use aggregator::{ExportError, ExportIter, LibraryExporter};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};
