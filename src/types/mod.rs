//! Core types for library export computation.

pub mod library;
pub mod export;

pub use library::{
    AssetEntry, LibraryIdentity, LibraryKind, LibraryPayload, LibraryRecord,
    LocalBuildPayload, PackagePayload, TargetFramework, PLACEHOLDER_FILE_NAME,
};
pub use export::{CompilationInputs, Export};
