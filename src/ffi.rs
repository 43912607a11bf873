//! C-linkage entry points resolved by the SOFA plugin loader.
//!
//! After dynamically loading the module, SOFA looks these five symbols up by
//! name. Names and signatures are fixed by the plugin ABI and must not
//! change. The boundary stays primitive-only: every returned pointer is a
//! NUL-terminated string in static storage, valid for the process lifetime,
//! never null.

// Symbol names are dictated by the SOFA plugin ABI.
#![allow(non_snake_case)]

use std::os::raw::c_char;

use crate::init;

static MODULE_NAME: &[u8] = b"ExamplePlugin\0";
static MODULE_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
static MODULE_LICENSE: &[u8] = b"LGPL\0";
static MODULE_DESCRIPTION: &[u8] = b"SOFA plugin for ExamplePlugin\0";

/// Trigger one-time plugin initialization. Idempotent.
#[no_mangle]
pub extern "C" fn initExternalModule() {
    init::initialize_plugin();
}

/// Return the fixed module name.
#[no_mangle]
pub extern "C" fn getModuleName() -> *const c_char {
    MODULE_NAME.as_ptr().cast()
}

/// Return the fixed module version.
#[no_mangle]
pub extern "C" fn getModuleVersion() -> *const c_char {
    MODULE_VERSION.as_ptr().cast()
}

/// Return the module license identifier.
#[no_mangle]
pub extern "C" fn getModuleLicense() -> *const c_char {
    MODULE_LICENSE.as_ptr().cast()
}

/// Return the human-readable module description.
#[no_mangle]
pub extern "C" fn getModuleDescription() -> *const c_char {
    MODULE_DESCRIPTION.as_ptr().cast()
}
