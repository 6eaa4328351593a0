//! `bracec`: inspect bracket matching on files from the command line.
//!
//! The binary in `main.rs` only dispatches; argument parsing lives in
//! [`Args`] and every command writes its report to a caller-supplied
//! writer, so the commands are testable without a terminal.

pub mod commands;
mod error;
mod options;

pub use error::CliError;
pub use options::Args;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=brace_match=trace`
/// to see every scan, or `RUST_LOG=debug` for registry and command events.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
