use crate::algebra::HttpOutcomeExt;
use crate::domain::{Outcome, RequestContext};
use crate::service::{AppState, ProjectionFault};
use actix_web::{get, http::header::ContentType, web::Data, HttpResponse};

#[get("/metrics")]
pub async fn render_metrics(
    state: Data<AppState>,
    context: RequestContext,
) -> Result<HttpResponse, ProjectionFault> {
    match state.metrics().render() {
        Some(body) => Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(body)),
        None => {
            let outcome: Outcome = Outcome::failed("Metrics recorder is not installed").not_found();
            state.respond(outcome, &context)
        }
    }
}
