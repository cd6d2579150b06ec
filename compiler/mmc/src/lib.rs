//! Multimethod compiler tooling.
//!
//! Commands for inspecting predicates and the lattices built from them,
//! shared by the `mmc` binary and its tests.

use std::sync::Once;

pub mod commands;

pub use commands::CommandError;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Reads the filter from `MM_LOG`, falling back to `RUST_LOG`. Does nothing
/// when neither is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Some(directives) = std::env::var("MM_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
