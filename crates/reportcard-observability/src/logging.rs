use std::{env, fs};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter() -> EnvFilter {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{log_level},tower_http=warn,hyper=warn,h2=warn,sqlx=warn"
        ))
    })
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init_tracing() {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter());

    // JSON file layer for structured logs
    let json_layer = env::var("LOG_DIR").ok().and_then(|log_dir| {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create log directory {log_dir}: {e}. Logging to console only");
            return None;
        }

        let json_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "reportcard.json");
        Some(
            fmt::layer()
                .json()
                .with_writer(json_appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(env_filter()),
        )
    });

    let file_logging = json_layer.is_some();

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();

    tracing::info!(file_logging, "Tracing initialized");
}
