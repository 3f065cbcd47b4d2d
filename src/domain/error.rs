use super::Classification;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("Errors can only be attached to a failed outcome")]
    InvalidState,
    #[error("Invalid pagination: page {page} with page size {page_size}, both must be at least 1")]
    InvalidPagination { page: u64, page_size: u64 },
}

/// Raised when an outcome cannot be written to the wire.
///
/// `Unclassified` and `Mismatch` point at a bug in the calling handler and are
/// never turned into a client-facing 4xx envelope. `InternalFault` carries an
/// internal-error outcome up to the fault boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("A {} outcome was projected before it was classified", describe(.success))]
    Unclassified { success: bool },
    #[error("Classification {classification} cannot describe a {} outcome", describe(.success))]
    Mismatch {
        classification: Classification,
        success: bool,
    },
    #[error("Internal fault: {message}")]
    InternalFault { message: String },
}

impl ProjectionError {
    pub fn is_programmer_error(&self) -> bool {
        matches!(self, Self::Unclassified { .. } | Self::Mismatch { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unclassified { .. } => "unclassified",
            Self::Mismatch { .. } => "mismatch",
            Self::InternalFault { .. } => "internal_fault",
        }
    }
}

fn describe(success: &bool) -> &'static str {
    if *success {
        "successful"
    } else {
        "failed"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown internal error policy: {0}, expected one of propagate, respond")]
pub struct UnknownPolicy(pub String);
