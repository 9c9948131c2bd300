//! Tracing setup: structured logging driven by `LEXIS_LOG`.

pub mod spans;

use std::sync::Once;

use lexis_core::config::ObservabilityConfig;
use lexis_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// `LEXIS_LOG` wins over the configured level, e.g.
/// `LEXIS_LOG=lexis_pipeline=debug,lexis_embeddings=info`.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        if config.json_logs {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
