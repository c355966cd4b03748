//! Tracing initialization.
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log directives.
pub const LOG_ENV: &str = "WARDROBE_LOG";

/// Target of events emitted by this binary.
const BIN_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Default directives for a verbosity level (`-v` count).
pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("wardrobe_core={level},{BIN_TARGET}={level}")
}

/// Initialize the tracing subscriber.
///
/// `WARDROBE_LOG` (e.g. `WARDROBE_LOG=wardrobe_core=debug`) takes precedence
/// over the `-v` count. Calling this more than once is a no-op.
pub fn init_logging(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbosity > 1),
            )
            .with(filter)
            .init();
    });
}
