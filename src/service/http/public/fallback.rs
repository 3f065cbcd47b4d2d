use crate::algebra::HttpOutcomeExt;
use crate::domain::{Outcome, RequestContext};
use crate::service::{AppState, ProjectionFault};
use actix_web::{web::Data, HttpResponse};

/// Answers every route nothing else matched with the standard 404 envelope.
#[tracing::instrument(name = "Route not found", skip(state))]
pub async fn fallback(
    state: Data<AppState>,
    context: RequestContext,
) -> Result<HttpResponse, ProjectionFault> {
    let outcome: Outcome = Outcome::failed("").not_found();
    state.respond(outcome, &context)
}
