use axum::{
    Router,
    extract::Request,
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crate::logging::request_path;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Installs the Prometheus recorder and its upkeep task.
/// Returns `Ok(None)` if observability is disabled.
pub fn init_metrics() -> Result<Option<PrometheusHandle>, BuildError> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5,
                10.0,
            ],
        )?
        .install_recorder()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

/// Buckets a status code for the `http_requests_by_status` counter.
pub fn status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

/// The API resource a path belongs to, e.g. `jobs` for `/api/jobs/{id}`.
pub fn resource_label(path: &str) -> &str {
    path.strip_prefix("/api/")
        .and_then(|rest| rest.split('/').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("other")
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = request_path(&req);
    let resource = resource_label(&path).to_owned();

    gauge!("http_requests_active").increment(1.0);
    let response = next.run(req).await;
    gauge!("http_requests_active").decrement(1.0);

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "resource" => resource.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "resource" => resource)
        .record(latency);
    counter!("http_requests_by_status", "status_category" => status_class(status)).increment(1);

    response
}

/// Router for metrics server
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics

pub fn track_user_registered(user_type: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("users_registered_total", "user_type" => user_type.to_string()).increment(1);
}

pub fn track_login(success: bool) {
    if !is_observability_enabled() {
        return;
    }
    let status = if success { "success" } else { "failure" };
    counter!("user_logins_total", "status" => status).increment(1);
}

pub fn track_jwt_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("jwt_tokens_issued_total").increment(1);
}

/// `kind` is the record type, e.g. "job" or "company".
pub fn track_record_created(kind: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("records_created_total", "kind" => kind).increment(1);
}

pub fn track_soft_delete(kind: &'static str, by_moderator: bool) {
    if !is_observability_enabled() {
        return;
    }
    let actor = if by_moderator { "moderator" } else { "owner" };
    counter!("records_soft_deleted_total", "kind" => kind, "actor" => actor).increment(1);
}

pub fn track_application_submitted() {
    if !is_observability_enabled() {
        return;
    }
    counter!("applications_submitted_total").increment(1);
}

pub fn track_authorization_check(allowed: bool, role: &str) {
    if !is_observability_enabled() {
        return;
    }
    let status = if allowed { "allowed" } else { "denied" };
    counter!("authorization_checks_total", "role" => role.to_string(), "status" => status)
        .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(201), "2xx");
        assert_eq!(status_class(409), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(101), "other");
    }

    #[test]
    fn test_resource_label() {
        assert_eq!(resource_label("/api/jobs/{id}"), "jobs");
        assert_eq!(resource_label("/api/applications/applied"), "applications");
        assert_eq!(resource_label("/api/catalog"), "catalog");
        assert_eq!(resource_label("/swagger-ui/index.html"), "other");
        assert_eq!(resource_label("/api/"), "other");
    }
}
