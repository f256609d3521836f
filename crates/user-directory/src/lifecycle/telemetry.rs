//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the process.
//!
//! The format is compact and hides the module prefix (`with_target(false)`); the actor logs
//! an `entity_type` field instead. `RUST_LOG` wins over the configured default filter.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Created / Shutdown lines only
//! RUST_LOG=debug cargo run     # Every request, with payloads
//! ```
//!
//! With `RUST_LOG=debug` an insert followed by a duplicate looks like:
//!
//! ```text
//! DEBUG insert: Sending request candidate=NewUser { .. } username=sdelamo
//! DEBUG Create entity_type="User" params=NewUser { .. }
//!  INFO Created entity_type="User" id=1 size=1
//! DEBUG insert: Sending request candidate=NewUser { .. } username=sdelamo
//!  WARN Create failed entity_type="User" error=Resource already exists: sdelamo
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. `default_filter` applies when `RUST_LOG` is unset
/// or unparseable. Calling it twice is harmless; the second call is ignored.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .try_init();
}
