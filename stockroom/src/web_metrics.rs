use std::{future::ready, net::SocketAddr, time::Instant};

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::IntoResponse,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

const REQUEST_DURATION: &str = "stockroom_http_requests_duration_seconds";

pub(crate) async fn track_metrics(req: Request, next: Next) -> impl IntoResponse {
    let start = Instant::now();
    // label by route template so `/inventory/{id}` doesn't explode cardinality
    let path = if let Some(matched_path) = req.extensions().get::<MatchedPath>() {
        matched_path.as_str().to_owned()
    } else {
        "unmatched".to_owned()
    };
    let method = req.method().clone();
    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    let labels = [
        ("method", method.to_string()),
        ("path", path),
        ("status", status),
    ];

    metrics::counter!("stockroom_http_requests_total", &labels).increment(1);
    metrics::histogram!(REQUEST_DURATION, &labels).record(latency);

    response
}

fn setup_metrics_recorder() -> anyhow::Result<PrometheusHandle> {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix("duration_seconds".to_string()),
            EXPONENTIAL_SECONDS,
        )?
        .install_recorder()?;
    Ok(handle)
}

/// Installs the global recorder and returns the `/metrics` app. Must run before any
/// metric is recorded, or those samples are dropped.
pub(crate) fn metrics_app() -> anyhow::Result<Router> {
    let recorder_handle = setup_metrics_recorder()?;
    Ok(Router::new().route("/metrics", get(move || ready(recorder_handle.render()))))
}

pub(crate) async fn start_metrics_server(app: Router, port: u16) -> anyhow::Result<()> {
    // NOTE: metrics live on their own port so they stay off the public API
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::debug!("metrics listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
