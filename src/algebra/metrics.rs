use crate::domain::ProjectionError;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use std::fmt::{self, Debug};

pub const OUTCOMES_PROJECTED_TOTAL: &str = "outcomes_projected_total";
pub const PROJECTION_FAILURES_TOTAL: &str = "projection_failures_total";

// The recorder is process-wide, every `Metrics` shares it.
static RECORDER: Lazy<Option<PrometheusHandle>> = Lazy::new(|| {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| {
            tracing::error!("Failed to install prometheus recorder: {}", e);
        })
        .ok();

    if handle.is_some() {
        metrics::describe_counter!(
            OUTCOMES_PROJECTED_TOTAL,
            "The number of outcomes written to the wire, by status code"
        );
        metrics::describe_counter!(
            PROJECTION_FAILURES_TOTAL,
            "The number of outcomes that could not be projected, by kind"
        );
    }

    handle
});

#[derive(Clone)]
pub struct Metrics {
    handle: Option<PrometheusHandle>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            handle: RECORDER.clone(),
        }
    }

    pub fn is_installed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn record_projection(&self, status_code: u16) {
        if self.is_installed() {
            metrics::increment_counter!(OUTCOMES_PROJECTED_TOTAL, "status" => status_code.to_string());
        }
    }

    pub fn record_failure(&self, error: &ProjectionError) {
        if self.is_installed() {
            metrics::increment_counter!(PROJECTION_FAILURES_TOTAL, "kind" => error.kind());
        }
    }

    /// Prometheus text exposition of every recorded metric.
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("is_installed", &self.is_installed())
            .finish()
    }
}
