use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, debug, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::metrics::status_class;

pub const LOG_DIR: &str = "storage/logs";

/// The route template when routing already happened, the raw path otherwise.
pub fn request_path(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string())
}

/// Wraps each request in a span carrying a fresh request id and logs the
/// outcome at a level picked from the status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = request_path(&req);

    let span = info_span!("request", %request_id, %method, %path);

    async move {
        debug!("Incoming request");

        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;

        match status_class(status) {
            "5xx" => error!(status, latency_ms, "Server error"),
            "4xx" => warn!(status, latency_ms, "Client error"),
            _ => info!(status, latency_ms, "Request completed"),
        }

        response
    }
    .instrument(span)
    .await
}

/// Console plus a daily-rotated JSON file under [`LOG_DIR`].
///
/// Falls back to console only when the log directory cannot be created.
pub fn init_tracing() {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=debug,tower_http=debug,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let json_layer = match std::fs::create_dir_all(LOG_DIR) {
        Ok(()) => {
            let json_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "hireboard.json");
            Some(
                fmt::layer()
                    .json()
                    .with_writer(json_appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info")),
            )
        }
        Err(e) => {
            eprintln!("Failed to create {LOG_DIR}: {e}. Logging to console only");
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();
}
