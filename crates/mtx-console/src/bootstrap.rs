use mtx_console_core::{ConsoleRuntime, ConsoleState};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::console_config::ConsoleConfig;

/// Installs the global subscriber. Logs go to stderr so rendered pages and
/// REPL transcripts on stdout stay clean.
pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub(crate) fn console_state_from_config(config: &ConsoleConfig) -> ConsoleState {
    ConsoleState::new(config.locale, config.response_delay_ms)
}

pub(crate) fn console_runtime_from_config(config: &ConsoleConfig) -> ConsoleRuntime {
    ConsoleRuntime::new(console_state_from_config(config))
}
