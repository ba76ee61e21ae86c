use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Otherwise builds a filter from `LOG_LEVEL` (default `info`), quieting
///   tower_http/axum to the same level
/// - `LOG_FORMAT=json` switches to structured JSON output for containers
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(format!("{level},tower_http={level},axum={level}"))
    });

    let json = std::env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);
    if json {
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .with_writer(|| io::stdout())
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .with_writer(|| io::stdout())
            .try_init();
    }
}
