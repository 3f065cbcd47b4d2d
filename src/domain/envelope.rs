use super::{Errors, Meta, PagedResult, Pagination};
use serde::{Deserialize, Serialize};

/// Body written for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    status_code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Errors>,
}

impl ErrorEnvelope {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            path: None,
            request_id: None,
            errors: None,
        }
    }

    pub fn set_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn set_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Empty error maps are dropped so the field never shows up as `{}`.
    pub fn add_errors(mut self, errors: Errors) -> Self {
        if !errors.is_empty() {
            self.errors = Some(errors);
        }
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn errors(&self) -> Option<&Errors> {
        self.errors.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope<T> {
    data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    pub fn with_meta(data: T, meta: Meta) -> Self {
        Self {
            data,
            meta: Some(meta),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> SuccessEnvelope<Vec<T>> {
    pub fn paged(result: PagedResult<T>, pagination: &Pagination) -> Self {
        let meta = Meta::paginated(pagination, result.total_count());
        Self::with_meta(result.into_items(), meta)
    }
}
