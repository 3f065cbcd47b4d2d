mod configuration;
mod http;

pub use configuration::*;
pub use http::*;

use crate::algebra::{Metrics, Projector};
use crate::domain::{Outcome, RequestContext};
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct AppState {
    configuration: Config,
    projector: Projector,
    metrics: Metrics,
}

impl AppState {
    pub fn new(configuration: Config) -> Self {
        let projector = Projector::new(configuration.projection().internal_error_policy());
        let metrics = Metrics::new();

        Self {
            configuration,
            projector,
            metrics,
        }
    }

    pub fn configuration(&self) -> &Config {
        &self.configuration
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Projects an outcome with the configured policy and writes it out.
    ///
    /// Failures are counted here and handed back with the request context so
    /// the fault boundary in `ResponseError` decides what the client sees.
    pub fn respond<T: Serialize>(
        &self,
        outcome: Outcome<T>,
        context: &RequestContext,
    ) -> Result<HttpResponse, ProjectionFault> {
        match self.projector.project(outcome, context) {
            Ok(projection) => {
                self.metrics.record_projection(projection.status_code());
                Ok(projection.into_response())
            }
            Err(e) => {
                self.metrics.record_failure(&e);
                Err(ProjectionFault::new(e, context.clone()))
            }
        }
    }
}
