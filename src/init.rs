//! One-shot plugin initialization and module metadata.
//!
//! SOFA may call the init entry point more than once while resolving
//! `RequiredPlugin` nodes; the guard makes repeated calls harmless.

use std::sync::Once;
use tracing::debug;

/// Module name announced to the SOFA plugin loader.
pub const MODULE_NAME: &str = "ExamplePlugin";

/// Module version, fixed at build time from the crate version.
pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");

static INIT: Once = Once::new();

/// Perform one-time plugin setup.
///
/// Idempotent: only the first call runs the registration body, every later
/// call returns immediately. `Once` makes the check-and-set atomic, so the
/// guard holds even if the host ever calls the entry point from more than
/// one thread.
pub fn initialize_plugin() {
    INIT.call_once(|| {
        debug!(
            module = MODULE_NAME,
            version = MODULE_VERSION,
            "initializing plugin"
        );
        // Register components here
    });
}

/// Whether [`initialize_plugin`] has completed at least once.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_constants_are_non_empty() {
        assert!(!MODULE_NAME.is_empty());
        assert!(!MODULE_VERSION.is_empty());
    }

    #[test]
    fn repeated_initialization_is_idempotent() {
        initialize_plugin();
        assert!(is_initialized());
        initialize_plugin();
        assert!(is_initialized());
    }
}
