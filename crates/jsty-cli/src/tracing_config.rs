//! Tracing configuration for the jsty binary.
//!
//! The subscriber is only installed when `JSTY_LOG` (or `RUST_LOG`) is
//! set, so normal runs pay nothing. Filter syntax is the standard
//! `tracing-subscriber` directive list:
//!
//! ```bash
//! JSTY_LOG=debug jsty tree.json
//! JSTY_LOG="jsty_emitter=trace" jsty tree.json
//! ```

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `JSTY_LOG`, falling back to `RUST_LOG`.
/// `JSTY_LOG` takes precedence when both are set.
fn env_filter() -> Option<EnvFilter> {
    let directives = std::env::var("JSTY_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()?;
    Some(EnvFilter::new(directives))
}

/// Install the global subscriber if logging was requested.
pub fn init_tracing() {
    let Some(filter) = env_filter() else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
