//! Library records as materialized by the dependency resolver.
//!
//! Everything here is read-only from the exporter's point of view: records
//! are produced by a [`LibraryManager`](crate::manager::LibraryManager) and
//! live as long as that graph snapshot.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name used by package authors to mark an intentionally empty asset folder.
pub const PLACEHOLDER_FILE_NAME: &str = "_._";

/// Kind of library in the resolved graph.
///
/// Unknown tags deserialize as [`LibraryKind::PlatformProvided`], which is
/// also the dispatch fallback for any record whose payload doesn't match its
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryKind {
    /// Precompiled package from a package feed.
    Package,
    /// Project built locally from source.
    LocalBuild,
    /// Binary supplied by the target platform.
    #[serde(other)]
    PlatformProvided,
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package => write!(f, "package"),
            Self::LocalBuild => write!(f, "local_build"),
            Self::PlatformProvided => write!(f, "platform_provided"),
        }
    }
}

/// Identity of a library: name, version and kind.
///
/// Names compare case-insensitively over full Unicode lowercase mapping;
/// `Hash` folds the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryIdentity {
    /// Library name.
    pub name: String,
    /// Resolved version string.
    pub version: String,
    /// Library kind.
    pub kind: LibraryKind,
}

impl LibraryIdentity {
    /// Create a new identity.
    pub fn new(name: impl Into<String>, version: impl Into<String>, kind: LibraryKind) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind,
        }
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        fold_name(&self.name) == fold_name(name)
    }
}

/// Case-folded form of a library name.
fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

impl PartialEq for LibraryIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.has_name(&other.name) && self.version == other.version && self.kind == other.kind
    }
}

impl Eq for LibraryIdentity {}

impl Hash for LibraryIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold_name(&self.name).hash(state);
        self.version.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for LibraryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Candidate asset declared by a package for the current target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Path relative to the package install root.
    pub path: String,
    /// Marks "no file here"; never turned into a path.
    #[serde(default)]
    pub placeholder: bool,
}

impl AssetEntry {
    /// Create an entry with an explicit placeholder flag.
    pub fn new(path: impl Into<String>, placeholder: bool) -> Self {
        Self {
            path: path.into(),
            placeholder,
        }
    }

    /// Create an entry, flagging it as a placeholder when its file name is `_._`.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let placeholder = path
            .rsplit(['/', '\\'])
            .next()
            .is_some_and(|name| name == PLACEHOLDER_FILE_NAME);
        Self { path, placeholder }
    }
}

/// Package-specific payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagePayload {
    /// Native libraries for the target runtime.
    #[serde(default)]
    pub native_libraries: Vec<AssetEntry>,
    /// Managed assemblies needed at run time.
    #[serde(default)]
    pub runtime_assemblies: Vec<AssetEntry>,
    /// Managed assemblies referenced at compile time.
    #[serde(default)]
    pub compile_assemblies: Vec<AssetEntry>,
    /// Every file shipped in the package, relative to its root.
    #[serde(default)]
    pub files: Vec<String>,
}

impl PackagePayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a compile-time asset.
    pub fn with_compile(mut self, asset: AssetEntry) -> Self {
        self.compile_assemblies.push(asset);
        self
    }

    /// Add a run-time asset.
    pub fn with_runtime(mut self, asset: AssetEntry) -> Self {
        self.runtime_assemblies.push(asset);
        self
    }

    /// Add a native asset.
    pub fn with_native(mut self, asset: AssetEntry) -> Self {
        self.native_libraries.push(asset);
        self
    }

    /// Add a bundled file.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.files.push(file.into());
        self
    }
}

/// Target framework the local project is built for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFramework {
    /// Short folder name, e.g. `net46`.
    pub short_name: String,
    /// Pre-built binary path template; may embed `{configuration}`.
    #[serde(default)]
    pub prebuilt_assembly: Option<String>,
}

impl TargetFramework {
    /// Create a target with no pre-built binary.
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            prebuilt_assembly: None,
        }
    }

    /// Declare a pre-built binary template.
    pub fn with_prebuilt(mut self, template: impl Into<String>) -> Self {
        self.prebuilt_assembly = Some(template.into());
        self
    }
}

/// Locally built project payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBuildPayload {
    /// Project display name; also the output assembly name.
    pub project_name: String,
    /// Project root directory.
    pub project_root: PathBuf,
    /// Target framework for this build.
    pub target: TargetFramework,
    /// Own compiled source files.
    #[serde(default)]
    pub source_files: Vec<PathBuf>,
    /// Shared (non-compiled) source files offered to consumers.
    #[serde(default)]
    pub shared_files: Vec<PathBuf>,
}

impl LocalBuildPayload {
    /// Create a payload with no files.
    pub fn new(
        project_name: impl Into<String>,
        project_root: impl Into<PathBuf>,
        target: TargetFramework,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            project_root: project_root.into(),
            target,
            source_files: Vec::new(),
            shared_files: Vec::new(),
        }
    }

    /// Add an own source file.
    pub fn with_source(mut self, file: impl Into<PathBuf>) -> Self {
        self.source_files.push(file.into());
        self
    }

    /// Add a shared source file.
    pub fn with_shared(mut self, file: impl Into<PathBuf>) -> Self {
        self.shared_files.push(file.into());
        self
    }
}

/// Kind-specific payload of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LibraryPayload {
    /// Package payload.
    Package(PackagePayload),
    /// Local build payload.
    LocalBuild(LocalBuildPayload),
    /// Platform-provided libraries carry nothing beyond the record path.
    #[default]
    PlatformProvided,
}

/// A node of the resolved dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRecord {
    /// Library identity.
    pub identity: LibraryIdentity,
    /// Whether the resolver located real content.
    pub resolved: bool,
    /// Install root or on-disk location.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Identity of the library that directly required this one; `None` for the root.
    #[serde(default)]
    pub parent: Option<LibraryIdentity>,
    /// Kind-specific payload.
    #[serde(default)]
    pub payload: LibraryPayload,
}

impl LibraryRecord {
    /// Create a resolved package record installed at `install_path`.
    pub fn package(
        name: impl Into<String>,
        version: impl Into<String>,
        install_path: impl Into<PathBuf>,
        payload: PackagePayload,
    ) -> Self {
        Self {
            identity: LibraryIdentity::new(name, version, LibraryKind::Package),
            resolved: true,
            path: Some(install_path.into()),
            parent: None,
            payload: LibraryPayload::Package(payload),
        }
    }

    /// Create a resolved local-build record; its path is the project root.
    pub fn local_build(version: impl Into<String>, payload: LocalBuildPayload) -> Self {
        Self {
            identity: LibraryIdentity::new(
                payload.project_name.clone(),
                version,
                LibraryKind::LocalBuild,
            ),
            resolved: true,
            path: Some(payload.project_root.clone()),
            parent: None,
            payload: LibraryPayload::LocalBuild(payload),
        }
    }

    /// Create a resolved platform-provided record.
    pub fn platform(
        name: impl Into<String>,
        version: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Self {
        Self {
            identity: LibraryIdentity::new(name, version, LibraryKind::PlatformProvided),
            resolved: true,
            path,
            parent: None,
            payload: LibraryPayload::PlatformProvided,
        }
    }

    /// Set the parent back-reference.
    pub fn with_parent(mut self, parent: &LibraryIdentity) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Mark the record as unresolved.
    pub fn unresolved(mut self) -> Self {
        self.resolved = false;
        self
    }

    /// Library kind.
    pub fn kind(&self) -> LibraryKind {
        self.identity.kind
    }

    /// Whether `root` directly requires this library.
    pub fn is_direct_dependency_of(&self, root: &LibraryIdentity) -> bool {
        self.parent.as_ref() == Some(root)
    }
}
