use super::{ErrorEnvelope, UnknownPolicy};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The request facts an error envelope needs, handed over explicitly by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    path: String,
    trace_id: String,
}

impl RequestContext {
    pub fn new(path: impl Into<String>, trace_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            trace_id: trace_id.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }
}

/// What to do with an outcome classified as an internal error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InternalErrorPolicy {
    /// Hand the fault to the fault boundary instead of answering with it.
    #[default]
    Propagate,
    /// Answer with a 500 error envelope.
    Respond,
}

impl FromStr for InternalErrorPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "respond" => Ok(Self::Respond),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl Display for InternalErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagate => write!(f, "propagate"),
            Self::Respond => write!(f, "respond"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionBody<T> {
    Empty,
    Value(T),
    Error(ErrorEnvelope),
}

/// A status code and body ready to be written by the web layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<T> {
    status_code: u16,
    body: ProjectionBody<T>,
    location: Option<String>,
}

impl<T> Projection<T> {
    pub fn empty(status_code: u16) -> Self {
        Self::new(status_code, ProjectionBody::Empty)
    }

    pub fn value(status_code: u16, value: T) -> Self {
        Self::new(status_code, ProjectionBody::Value(value))
    }

    pub fn error(envelope: ErrorEnvelope) -> Self {
        Self::new(envelope.status_code(), ProjectionBody::Error(envelope))
    }

    fn new(status_code: u16, body: ProjectionBody<T>) -> Self {
        Self {
            status_code,
            body,
            location: None,
        }
    }

    /// Fills the location slot of a created resource.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &ProjectionBody<T> {
        &self.body
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn into_body(self) -> ProjectionBody<T> {
        self.body
    }
}
