use crate::algebra::HttpOutcomeExt;
use crate::domain::{Outcome, RequestContext, SuccessEnvelope};
use crate::service::{AppState, ProjectionFault};
use actix_web::{get, web::Data, HttpResponse};

#[get("/health_check")]
pub async fn health_check(
    state: Data<AppState>,
    context: RequestContext,
) -> Result<HttpResponse, ProjectionFault> {
    let outcome = Outcome::success(SuccessEnvelope::new("I'm alive!".to_string())).ok();
    state.respond(outcome, &context)
}
