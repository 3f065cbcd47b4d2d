mod application;
mod public;

pub use application::*;
pub use public::*;

use crate::domain::{
    ErrorEnvelope, Projection, ProjectionBody, ProjectionError, RequestContext,
    INTERNAL_ERROR_MESSAGE,
};
use actix_web::{
    body::BoxBody,
    dev::Payload,
    http::{header::LOCATION, StatusCode},
    error::ErrorInternalServerError,
    FromRequest, HttpMessage, HttpRequest, HttpResponse, HttpResponseBuilder, Responder,
    ResponseError,
};
use serde::Serialize;
use serde_json::Value;
use std::future::{ready, Ready};
use tracing_actix_web::RequestId;
use uuid::Uuid;

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // Without the tracing middleware there is no request id to reuse.
        let trace_id = req
            .extensions()
            .get::<RequestId>()
            .map(ToString::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        ready(Ok(RequestContext::new(req.path(), trace_id)))
    }
}

impl<T: Serialize> Projection<T> {
    pub fn into_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut builder = HttpResponseBuilder::new(status);

        if let Some(location) = self.location().filter(|location| !location.is_empty()) {
            builder.insert_header((LOCATION, location.to_string()));
        }

        match self.into_body() {
            ProjectionBody::Empty => builder.finish(),
            ProjectionBody::Value(value) => match serde_json::to_value(value) {
                // Unit and absent values have nothing to write.
                Ok(Value::Null) => builder.finish(),
                Ok(json) => builder.json(json),
                Err(e) => HttpResponse::from_error(ErrorInternalServerError(e)),
            },
            ProjectionBody::Error(envelope) => builder.json(envelope),
        }
    }
}

impl<T: Serialize> Responder for Projection<T> {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_response()
    }
}

/// A projection failure together with the request it happened on.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ProjectionFault {
    error: ProjectionError,
    context: RequestContext,
}

impl ProjectionFault {
    pub fn new(error: ProjectionError, context: RequestContext) -> Self {
        Self { error, context }
    }

    pub fn error(&self) -> &ProjectionError {
        &self.error
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }
}

impl ResponseError for ProjectionFault {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let kind = self.error.kind();
        let request_id = self.context.trace_id();
        if self.error.is_programmer_error() {
            tracing::warn!(kind, request_id, "Refusing to project outcome: {}", self.error);
        } else {
            tracing::error!(kind, request_id, "{}", self.error);
        }

        // The fault message stays in the logs, the client only sees the generic one.
        let envelope = ErrorEnvelope::new(
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            INTERNAL_ERROR_MESSAGE,
        )
        .set_path(self.context.path())
        .set_request_id(request_id);

        HttpResponseBuilder::new(self.status_code()).json(envelope)
    }
}
