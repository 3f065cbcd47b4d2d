use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub const NOT_FOUND_MESSAGE: &str = "The requested resource could not be found.";
pub const BAD_REQUEST_MESSAGE: &str =
    "Your request could not be processed due to invalid or missing data.";
pub const UNAUTHORIZED_MESSAGE: &str = "You must be authenticated to access this resource.";
pub const FORBIDDEN_MESSAGE: &str = "You do not have permission to access this resource.";
pub const UNPROCESSABLE_ENTITY_MESSAGE: &str =
    "Your request was understood but contains data that cannot be processed.";
pub const CONFLICT_MESSAGE: &str =
    "A resource with the same identifier already exists, causing a conflict.";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "The server encountered an error while processing your request.";

/// The closed set of shapes an outcome can take on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    Ok,
    Created,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    UnprocessableEntity,
    InternalError,
}

impl Classification {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::UnprocessableEntity => 422,
            Self::InternalError => 500,
        }
    }

    /// Message applied to a failed outcome that has none yet.
    pub fn default_message(&self) -> Option<&'static str> {
        match self {
            Self::Ok | Self::Created | Self::NoContent => None,
            Self::BadRequest => Some(BAD_REQUEST_MESSAGE),
            Self::Unauthorized => Some(UNAUTHORIZED_MESSAGE),
            Self::Forbidden => Some(FORBIDDEN_MESSAGE),
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::Conflict => Some(CONFLICT_MESSAGE),
            Self::UnprocessableEntity => Some(UNPROCESSABLE_ENTITY_MESSAGE),
            Self::InternalError => Some(INTERNAL_ERROR_MESSAGE),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok | Self::Created | Self::NoContent)
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "Ok",
            Self::Created => "Created",
            Self::NoContent => "NoContent",
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::UnprocessableEntity => "UnprocessableEntity",
            Self::InternalError => "InternalError",
        };
        write!(f, "{name}")
    }
}
