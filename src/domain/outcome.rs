use super::{Classification, Errors, Metadata, OutcomeError, Unit};
use serde::Serialize;
use serde_json::Value;

/// The result of an operation that may fail for one of several reasons.
///
/// `Outcome<T>` is the typed face and `Outcome` (that is `Outcome<()>`) the
/// untyped one. Outcomes are built once through [`Outcome::success`],
/// [`Outcome::completed`] or [`Outcome::failed`] and then decorated through
/// consuming builders. Decorations never flip the success flag and never
/// replace a message or value that is already there.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome<T = Unit> {
    is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Errors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<Classification>,
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self::new(true, Some(value), String::new())
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(false, None, message.into())
    }

    fn new(is_success: bool, value: Option<T>, message: String) -> Self {
        Self {
            is_success,
            value,
            message,
            errors: None,
            metadata: None,
            classification: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> Option<&Errors> {
        self.errors.as_ref()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn classification(&self) -> Option<Classification> {
        self.classification
    }

    /// Sets the message unless one is already present.
    ///
    /// The first non-blank message wins. Classification helpers rely on this
    /// to supply a default without clobbering a message given earlier in the
    /// chain.
    pub fn set_message(mut self, message: impl Into<String>) -> Self {
        if self.message.trim().is_empty() {
            self.message = message.into();
        }
        self
    }

    /// Merges field errors into the outcome.
    ///
    /// # Panics
    ///
    /// Panics when called on a successful outcome. Use
    /// [`Outcome::try_with_errors`] where that is a recoverable condition.
    pub fn with_errors<I, K, M>(self, errors: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>,
    {
        if self.is_success {
            panic!("{}", OutcomeError::InvalidState);
        }
        self.merge_errors(errors)
    }

    pub fn try_with_errors<I, K, M>(self, errors: I) -> Result<Self, OutcomeError>
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>,
    {
        if self.is_success {
            return Err(OutcomeError::InvalidState);
        }
        Ok(self.merge_errors(errors))
    }

    fn merge_errors<I, K, M>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>,
    {
        let incoming: Errors = errors
            .into_iter()
            .map(|(key, message)| (key, message.into()))
            .collect();
        if incoming.is_empty() {
            return self;
        }

        self.errors.get_or_insert_with(Errors::new).merge(incoming);
        self
    }

    pub fn with_metadata<I, K, V>(mut self, metadata: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let incoming: Metadata = metadata
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        if incoming.is_empty() {
            return self;
        }

        self.metadata
            .get_or_insert_with(Metadata::new)
            .merge(incoming);
        self
    }

    /// Classifies the outcome. Only the first classification sticks.
    pub fn classify(mut self, classification: Classification) -> Self {
        if self.classification.is_none() {
            self.classification = Some(classification);
        }
        self
    }

    /// Drops the value and keeps everything else.
    pub fn into_untyped(self) -> Outcome {
        Outcome {
            is_success: self.is_success,
            value: None,
            message: self.message,
            errors: self.errors,
            metadata: self.metadata,
            classification: self.classification,
        }
    }

    pub fn map<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            is_success: self.is_success,
            value: self.value.map(op),
            message: self.message,
            errors: self.errors,
            metadata: self.metadata,
            classification: self.classification,
        }
    }
}

impl Outcome<Unit> {
    /// A successful outcome with nothing to return.
    pub fn completed() -> Self {
        Self::new(true, None, String::new())
    }

    /// Gives the outcome a value type. `default` only survives on a success,
    /// a failed outcome never carries a value.
    pub fn into_typed<T>(self, default: Option<T>) -> Outcome<T> {
        Outcome {
            is_success: self.is_success,
            value: if self.is_success { default } else { None },
            message: self.message,
            errors: self.errors,
            metadata: self.metadata,
            classification: self.classification,
        }
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}
