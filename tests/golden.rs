//! Golden tests for the library exporter.
//!
//! These tests pin the export stream for small, realistic dependency graphs.

use std::path::PathBuf;
use std::sync::Arc;

use library_exports::{
    AssetEntry, CompilationInputs, ConfigError, Export, ExportError, InMemoryLibraryManager,
    LibraryExporter, LibraryIdentity, LibraryRecord, LocalBuildPayload, PackagePayload,
    TargetFramework,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn app() -> LibraryRecord {
    LibraryRecord::local_build(
        "1.0.0",
        LocalBuildPayload::new("App", "/src/App", TargetFramework::new("net46"))
            .with_source("/src/App/Program.cs"),
    )
}

fn lib_project(parent: &LibraryIdentity) -> LibraryRecord {
    LibraryRecord::local_build(
        "1.0.0",
        LocalBuildPayload::new("Lib", "/src/Lib", TargetFramework::new("net46"))
            .with_source("/src/Lib/Class1.cs")
            .with_shared("/src/Lib/Shared.cs"),
    )
    .with_parent(parent)
}

fn pkg_a(parent: &LibraryIdentity) -> LibraryRecord {
    LibraryRecord::package(
        "PkgA",
        "1.0.0",
        "/pkgs/PkgA",
        PackagePayload::new()
            .with_compile(AssetEntry::new("lib/ns1.3/PkgA.dll", false))
            .with_runtime(AssetEntry::new("lib/ns1.3/PkgA.dll", false))
            .with_file("lib/ns1.3/PkgA.dll")
            .with_file("shared/Helper.cs"),
    )
    .with_parent(parent)
}

fn exporter(records: Vec<LibraryRecord>) -> LibraryExporter<InMemoryLibraryManager> {
    let manager: InMemoryLibraryManager = records.into_iter().collect();
    LibraryExporter::new(&app(), Arc::new(manager), "Debug").unwrap()
}

fn find<'a>(exports: &'a [Export], name: &str) -> &'a Export {
    exports
        .iter()
        .find(|e| e.library.has_name(name))
        .unwrap_or_else(|| panic!("no export for {name}"))
}

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// SCENARIOS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_local_build_direct_dependency() {
    let root = app();
    let exporter = exporter(vec![root.clone(), lib_project(&root.identity)]);

    let exports: Vec<_> = exporter.get_all_exports().collect();
    let lib = find(&exports, "Lib");

    assert_eq!(lib.compilation_assemblies, paths(&["/src/Lib/bin/Debug/net46/Lib.dll"]));
    assert_eq!(lib.runtime_assemblies, lib.compilation_assemblies);
    assert_eq!(lib.source_files, paths(&["/src/Lib/Shared.cs"]));
    assert!(lib.native_libraries.is_empty());
}

#[test]
fn test_package_direct_dependency() {
    let root = app();
    let exporter = exporter(vec![pkg_a(&root.identity)]);

    let exports: Vec<_> = exporter.get_compilation_dependencies().collect();
    let pkg = find(&exports, "PkgA");

    assert_eq!(pkg.compilation_assemblies, paths(&["/pkgs/PkgA/lib/ns1.3/PkgA.dll"]));
    assert_eq!(pkg.source_files, paths(&["/pkgs/PkgA/shared/Helper.cs"]));
}

#[test]
fn test_first_compile_assembly_wins() {
    let root = app();
    let common = |name: &str, dir: &str| {
        LibraryRecord::package(
            name,
            "1.0.0",
            format!("/pkgs/{name}"),
            PackagePayload::new()
                .with_compile(AssetEntry::new(format!("lib/{dir}/Common.dll"), false))
                .with_compile(AssetEntry::new(format!("lib/{dir}/{name}.dll"), false)),
        )
        .with_parent(&root.identity)
    };
    let exporter = exporter(vec![common("PkgA", "net46"), common("PkgB", "ns1.3")]);

    let exports: Vec<_> = exporter.get_all_exports().collect();
    assert_eq!(
        find(&exports, "PkgA").compilation_assemblies,
        paths(&["/pkgs/PkgA/lib/net46/Common.dll", "/pkgs/PkgA/lib/net46/PkgA.dll"])
    );
    assert_eq!(
        find(&exports, "PkgB").compilation_assemblies,
        paths(&["/pkgs/PkgB/lib/ns1.3/PkgB.dll"])
    );
}

#[test]
fn test_platform_provided_library() {
    let root = app();
    let runtime = LibraryRecord::platform(
        "System.Runtime",
        "4.0.0",
        Some(PathBuf::from("/sdk/System.Runtime.dll")),
    )
    .with_parent(&root.identity);
    let exporter = exporter(vec![runtime]);

    let exports: Vec<_> = exporter.get_all_exports().collect();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].compilation_assemblies, paths(&["/sdk/System.Runtime.dll"]));
    assert!(exports[0].source_files.is_empty());
    assert!(exports[0].runtime_assemblies.is_empty());
    assert!(exports[0].native_libraries.is_empty());
}

#[test]
fn test_unresolved_library_is_absent() {
    let root = app();
    let missing = LibraryRecord::package(
        "Missing",
        "1.0.0",
        "/pkgs/Missing",
        PackagePayload::new().with_compile(AssetEntry::new("lib/Missing.dll", false)),
    )
    .with_parent(&root.identity)
    .unresolved();
    let exporter = exporter(vec![missing, pkg_a(&root.identity)]);

    assert!(exporter.get_all_exports().all(|e| !e.library.has_name("Missing")));
    assert!(exporter.get_compilation_dependencies().all(|e| !e.library.has_name("Missing")));
    assert_eq!(exporter.get_all_exports().count(), 1);
}

#[test]
fn test_empty_configuration_is_rejected() {
    let result = LibraryExporter::new(&app(), Arc::new(InMemoryLibraryManager::new()), "");
    assert!(matches!(result, Err(ExportError::Config(ConfigError::EmptyConfiguration))));
}

// ─────────────────────────────────────────────────────────────────────────────
// GRAPH SHAPES
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_mixed_graph_compilation_inputs() {
    //        App
    //       / | \
    //    Lib PkgA System.Runtime
    //     |
    //    PkgC (shared sources dropped: not direct)
    let root = app();
    let lib = lib_project(&root.identity);
    let pkg_c = LibraryRecord::package(
        "PkgC",
        "2.0.0",
        "/pkgs/PkgC",
        PackagePayload::new()
            .with_compile(AssetEntry::new("lib/net46/PkgC.dll", false))
            .with_native(AssetEntry::new("runtimes/linux-x64/native/libpkgc.so", false))
            .with_file("shared/Deep.cs"),
    )
    .with_parent(&lib.identity);
    let runtime = LibraryRecord::platform(
        "System.Runtime",
        "4.0.0",
        Some(PathBuf::from("/sdk/System.Runtime.dll")),
    )
    .with_parent(&root.identity);

    let exporter = exporter(vec![
        root.clone(),
        lib,
        pkg_a(&root.identity),
        pkg_c,
        runtime,
    ]);

    let inputs = exporter.compilation_inputs();
    assert_eq!(
        inputs.compilation_assemblies,
        paths(&[
            "/src/Lib/bin/Debug/net46/Lib.dll",
            "/pkgs/PkgA/lib/ns1.3/PkgA.dll",
            "/pkgs/PkgC/lib/net46/PkgC.dll",
            "/sdk/System.Runtime.dll",
        ])
    );
    assert_eq!(
        inputs.source_files,
        paths(&["/src/Lib/Shared.cs", "/pkgs/PkgA/shared/Helper.cs"])
    );
    assert_eq!(
        inputs.native_libraries,
        paths(&["/pkgs/PkgC/runtimes/linux-x64/native/libpkgc.so"])
    );

    let all = CompilationInputs::from_exports(exporter.get_all_exports());
    assert_eq!(
        all.compilation_assemblies.first(),
        Some(&PathBuf::from("/src/App/bin/Debug/net46/App.dll"))
    );
}

#[test]
fn test_snapshot_from_json() {
    let json = r#"[
        {
            "identity": { "name": "PkgA", "version": "1.0.0", "kind": "package" },
            "resolved": true,
            "path": "/pkgs/PkgA",
            "parent": { "name": "app", "version": "1.0.0", "kind": "local_build" },
            "payload": {
                "type": "package",
                "compile_assemblies": [
                    { "path": "lib/ns1.3/PkgA.dll" },
                    { "path": "ref/ns1.3/_._", "placeholder": true }
                ],
                "files": ["shared/Helper.cs"]
            }
        }
    ]"#;
    let manager = InMemoryLibraryManager::from_json(json).unwrap();
    let exporter = LibraryExporter::new(&app(), Arc::new(manager), "Release").unwrap();

    let exports: Vec<_> = exporter.get_compilation_dependencies().collect();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].compilation_assemblies, paths(&["/pkgs/PkgA/lib/ns1.3/PkgA.dll"]));
    // Parent name differs only in case, so PkgA is still direct.
    assert_eq!(exports[0].source_files, paths(&["/pkgs/PkgA/shared/Helper.cs"]));
}

#[test]
fn test_same_snapshot_same_fingerprint_100_runs() {
    let root = app();
    let exporter = exporter(vec![root.clone(), lib_project(&root.identity), pkg_a(&root.identity)]);

    let first = exporter.fingerprint().unwrap();
    for i in 1..100 {
        assert_eq!(first, exporter.fingerprint().unwrap(), "run {i} differs from run 0");
    }
}

#[test]
fn test_configuration_changes_fingerprint() {
    let root = app();
    let records = vec![lib_project(&root.identity)];
    let manager: Arc<InMemoryLibraryManager> = Arc::new(records.into_iter().collect());

    let debug = LibraryExporter::new(&root, Arc::clone(&manager), "Debug").unwrap();
    let release = LibraryExporter::new(&root, manager, "Release").unwrap();

    assert_ne!(debug.fingerprint().unwrap(), release.fingerprint().unwrap());
}
