use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber for the analysis binary.
pub fn init() {
    init_with_default(DEFAULT_DIRECTIVE);
}

/// Same as [`init`] with a caller-chosen fallback directive.
///
/// Stage spans report their duration on close whenever the active filter lets
/// debug events through.
pub fn init_with_default(directive: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let is_debug = env_filter
        .max_level_hint()
        .is_some_and(|level| level >= LevelFilter::DEBUG);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if is_debug {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
