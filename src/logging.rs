//! Logging setup for frr-render.
//!
//! Logs go to stderr so `--stdout` output stays clean. `RUST_LOG` takes
//! precedence over the `-v`/`-q` flags.

use crate::cli::LogArgs;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given verbosity flags.
pub fn default_directive(args: LogArgs) -> &'static str {
    if args.quiet {
        return "frr_render=error";
    }
    match args.verbose {
        0 => "frr_render=warn",
        1 => "frr_render=info",
        _ => "frr_render=debug",
    }
}

/// Install the global tracing subscriber.
pub fn init(args: LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(args).into());

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
