//! ExamplePlugin - a SOFA plugin stub
//!
//! This library builds the dynamic module that the SOFA plugin loader opens
//! at runtime. It provides the one-time initialization routine, the fixed
//! metadata the loader queries through the exported entry points, and the
//! skeleton generator behind the `plugin_maker` tool.
//!
//! # Modules
//!
//! - [`init`]: One-shot plugin initialization and module metadata
//! - [`ffi`]: C-linkage entry points resolved by the SOFA plugin loader
//! - [`scaffold`]: Generation of new plugin crate skeletons

pub mod ffi;
pub mod init;
pub mod scaffold;
