//! Tracing subscriber setup for the binary
//!
//! The library only emits events; installing a subscriber is left to the
//! program embedding it.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install a stderr fmt subscriber, once per process
///
/// `RUST_LOG` wins when set. Otherwise the crate logs at `warn`, or at
/// `debug` when `verbose`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "dolla=debug" } else { "dolla=warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        // A subscriber may already be installed by an embedding program
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("still fine after repeated init");
    }
}
