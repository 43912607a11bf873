//! Generation of new SOFA plugin crate skeletons.
//!
//! `create_plugin` lays down a complete, buildable plugin crate: the five
//! exported entry points, a contract test, demo scenes, CI workflow and
//! README. Validation mirrors what the SOFA plugin tooling accepts for
//! plugin names.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::info;

/// Characters allowed in a plugin name.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_]+$").expect("valid name pattern"));

/// Errors surfaced while generating a plugin skeleton.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(
        "plugin name '{0}' can only contain letters, numbers, hyphens (-) and underscores (_)"
    )]
    InvalidName(String),

    #[error("the provided path '{0}' does not exist")]
    MissingParent(PathBuf),

    #[error("a folder named '{name}' already exists in '{parent}'")]
    AlreadyExists { name: String, parent: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Check a plugin name against the allowed-character pattern.
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// Cargo package name for a plugin: the name lowercased.
pub fn package_name(plugin: &str) -> String {
    plugin.to_lowercase()
}

/// Identifier the generated crate is imported as (hyphens become underscores).
pub fn crate_ident(plugin: &str) -> String {
    package_name(plugin).replace('-', "_")
}

/// Create a new plugin skeleton named `name` under `parent`.
///
/// Returns the path of the created plugin directory. Generation is not
/// atomic: if a write fails midway the partial tree is left in place for the
/// caller to remove.
pub fn create_plugin(name: &str, parent: &Path) -> Result<PathBuf, ScaffoldError> {
    validate_name(name)?;

    if !parent.exists() {
        return Err(ScaffoldError::MissingParent(parent.to_path_buf()));
    }

    let plugin_path = parent.join(name);
    if plugin_path.exists() {
        return Err(ScaffoldError::AlreadyExists {
            name: name.to_string(),
            parent: parent.to_path_buf(),
        });
    }

    create_dir(&plugin_path)?;
    create_file(&plugin_path.join("Cargo.toml"), &cargo_toml(name))?;
    create_file(&plugin_path.join("README.md"), &readme(name))?;

    let workflows = plugin_path.join(".github").join("workflows");
    create_dir(&workflows)?;
    create_file(&workflows.join("ci.yml"), &ci_workflow(name))?;

    let src = plugin_path.join("src");
    create_dir(&src)?;
    create_file(&src.join("lib.rs"), &lib_rs(name))?;

    let tests = plugin_path.join("tests");
    create_dir(&tests)?;
    create_file(&tests.join("plugin_contract.rs"), &contract_test(name))?;

    let demos = plugin_path.join("demos");
    create_dir(&demos.join("xml"))?;
    create_file(&demos.join("xml").join("example.scn"), &scene_xml(name))?;
    create_file(&demos.join("example.py"), &scene_python(name))?;
    create_dir(&demos.join("python"))?;
    create_file(&demos.join("python").join(".gitkeep"), "")?;

    let references = plugin_path.join("regression").join("references");
    create_dir(&references)?;
    create_file(&references.join(".gitkeep"), "")?;

    info!(plugin = name, path = %plugin_path.display(), "created plugin skeleton");
    Ok(plugin_path)
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path)?;
    info!("created folder: {}", path.display());
    Ok(())
}

fn create_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content)?;
    info!("created file: {}", path.display());
    Ok(())
}

fn cargo_toml(name: &str) -> String {
    format!(
        r#"[package]
name = "{package}"
version = "1.0.0"
edition = "2021"
description = "SOFA plugin for {name}"
license = "LGPL-2.1-or-later"

[lib]
crate-type = ["cdylib", "rlib"]

[dependencies]
tracing = "0.1"
"#,
        package = package_name(name),
        name = name,
    )
}

fn lib_rs(name: &str) -> String {
    format!(
        r#"//! {name} - a SOFA plugin.
//!
//! Exposes the entry points the SOFA plugin loader resolves by symbol name.

// Symbol names are dictated by the SOFA plugin ABI.
#![allow(non_snake_case)]

use std::os::raw::c_char;
use std::sync::Once;

/// Module name announced to the SOFA plugin loader.
pub const MODULE_NAME: &str = "{name}";

static MODULE_NAME_C: &[u8] = b"{name}\0";
static MODULE_VERSION_C: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
static MODULE_LICENSE_C: &[u8] = b"LGPL\0";
static MODULE_DESCRIPTION_C: &[u8] = b"SOFA plugin for {name}\0";

static INIT: Once = Once::new();

/// Perform one-time plugin setup. Idempotent.
pub fn initialize_plugin() {{
    INIT.call_once(|| {{
        tracing::debug!(module = MODULE_NAME, "initializing plugin");
        // Register components here
    }});
}}

/// Whether [`initialize_plugin`] has completed at least once.
pub fn is_initialized() -> bool {{
    INIT.is_completed()
}}

/// Trigger one-time plugin initialization. Idempotent.
#[no_mangle]
pub extern "C" fn initExternalModule() {{
    initialize_plugin();
}}

/// Return the fixed module name.
#[no_mangle]
pub extern "C" fn getModuleName() -> *const c_char {{
    MODULE_NAME_C.as_ptr().cast()
}}

/// Return the fixed module version.
#[no_mangle]
pub extern "C" fn getModuleVersion() -> *const c_char {{
    MODULE_VERSION_C.as_ptr().cast()
}}

/// Return the module license identifier.
#[no_mangle]
pub extern "C" fn getModuleLicense() -> *const c_char {{
    MODULE_LICENSE_C.as_ptr().cast()
}}

/// Return the human-readable module description.
#[no_mangle]
pub extern "C" fn getModuleDescription() -> *const c_char {{
    MODULE_DESCRIPTION_C.as_ptr().cast()
}}
"#,
        name = name,
    )
}

fn contract_test(name: &str) -> String {
    format!(
        r#"use std::ffi::CStr;
use std::os::raw::c_char;

use {ident}::{{getModuleDescription, getModuleLicense, getModuleName, getModuleVersion,
    initExternalModule, is_initialized}};

fn to_str(ptr: *const c_char) -> &'static str {{
    assert!(!ptr.is_null());
    unsafe {{ CStr::from_ptr(ptr) }}.to_str().unwrap()
}}

#[test]
fn plugin_contract() {{
    assert_eq!(to_str(getModuleName()), "{name}");
    assert!(!to_str(getModuleVersion()).is_empty());
    assert_eq!(to_str(getModuleLicense()), "LGPL");
    assert_eq!(to_str(getModuleDescription()), "SOFA plugin for {name}");
    assert!(!is_initialized());

    initExternalModule();
    assert!(is_initialized());
    initExternalModule();
    assert!(is_initialized());
}}
"#,
        ident = crate_ident(name),
        name = name,
    )
}

fn readme(name: &str) -> String {
    format!(
        r#"# {name}

## Description
A SOFA plugin created with plugin_maker.
"#,
        name = name,
    )
}

fn ci_workflow(name: &str) -> String {
    format!(
        r#"name: CI

on:
  workflow_dispatch:
  pull_request:
  push:

jobs:
  build-and-test:
    name: {name} on ${{{{ matrix.os }}}}
    runs-on: ${{{{ matrix.os }}}}
    strategy:
      fail-fast: false
      matrix:
        os: [ubuntu-22.04, macos-14, windows-2022]

    steps:
      - uses: actions/checkout@v4
      - uses: dtolnay/rust-toolchain@stable
      - name: Build
        run: cargo build --release
      - name: Test
        run: cargo test --release
"#,
        name = name,
    )
}

fn scene_xml(name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Node name="root" dt="0.005" gravity="0 0 -9.81">
    <Node name="plugins">
        <RequiredPlugin name="{name}"/>
    </Node>
</Node>
"#,
        name = name,
    )
}

fn scene_python(name: &str) -> String {
    format!(
        r#"import Sofa

def createScene(root_node):
    root_node.name = "root"
    root_node.dt = 0.005
    root_node.gravity = [0, 0, -9.81]

    plugins = root_node.addChild('plugins')

    plugins.addObject('RequiredPlugin', name="{name}")
"#,
        name = name,
    )
}
