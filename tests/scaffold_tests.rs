//! End-to-end tests for the plugin skeleton generator.

use exampleplugin::scaffold::{self, ScaffoldError};
use tempfile::tempdir;

#[test]
fn creates_the_full_plugin_tree() {
    let dir = tempdir().unwrap();
    let plugin = scaffold::create_plugin("MyPlugin", dir.path()).unwrap();

    assert_eq!(plugin, dir.path().join("MyPlugin"));
    for relative in [
        "Cargo.toml",
        "README.md",
        ".github/workflows/ci.yml",
        "src/lib.rs",
        "tests/plugin_contract.rs",
        "demos/xml/example.scn",
        "demos/example.py",
        "regression/references/.gitkeep",
    ] {
        assert!(plugin.join(relative).is_file(), "missing {relative}");
    }
}

#[test]
fn generated_sources_satisfy_the_plugin_abi() {
    let dir = tempdir().unwrap();
    let plugin = scaffold::create_plugin("BeamAdapter", dir.path()).unwrap();

    let lib = std::fs::read_to_string(plugin.join("src/lib.rs")).unwrap();
    for symbol in [
        "initExternalModule",
        "getModuleName",
        "getModuleVersion",
        "getModuleLicense",
        "getModuleDescription",
    ] {
        assert!(lib.contains(symbol), "generated lib.rs lacks {symbol}");
    }
    assert!(lib.contains(r#"b"SOFA plugin for BeamAdapter\0""#));

    let manifest = std::fs::read_to_string(plugin.join("Cargo.toml")).unwrap();
    assert!(manifest.contains(r#"name = "beamadapter""#));

    let test = std::fs::read_to_string(plugin.join("tests/plugin_contract.rs")).unwrap();
    assert!(test.contains("use beamadapter::"));
}

#[test]
fn rejects_invalid_plugin_names() {
    let dir = tempdir().unwrap();
    let err = scaffold::create_plugin("bad name!", dir.path()).unwrap_err();
    assert!(matches!(err, ScaffoldError::InvalidName(_)));
    assert!(!dir.path().join("bad name!").exists());
}

#[test]
fn rejects_missing_parent_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere");
    let err = scaffold::create_plugin("MyPlugin", &missing).unwrap_err();
    assert!(matches!(err, ScaffoldError::MissingParent(_)));
}

#[test]
fn rejects_existing_plugin_directory() {
    let dir = tempdir().unwrap();
    scaffold::create_plugin("MyPlugin", dir.path()).unwrap();
    let err = scaffold::create_plugin("MyPlugin", dir.path()).unwrap_err();
    assert!(matches!(err, ScaffoldError::AlreadyExists { .. }));
}
