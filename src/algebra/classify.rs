use crate::domain::{Classification, Outcome};

/// HTTP shapes for an outcome.
///
/// Each failure shape classifies the outcome if it is not classified yet and
/// supplies the shape's default message if the outcome has none. The `_with`
/// variants also merge field errors, which panics on a successful outcome.
pub trait HttpOutcomeExt: Sized {
    fn not_found(self) -> Self;
    fn bad_request(self) -> Self;
    fn bad_request_with<I, K, M>(self, errors: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>;
    fn unauthorized(self) -> Self;
    fn forbidden(self) -> Self;
    fn unprocessable_entity(self) -> Self;
    fn unprocessable_entity_with<I, K, M>(self, errors: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>;
    fn conflict(self) -> Self;
    fn internal_error(self) -> Self;
    fn ok(self) -> Self;
    fn created(self) -> Self;
    fn no_content(self) -> Self;
}

impl<T> HttpOutcomeExt for Outcome<T> {
    fn not_found(self) -> Self {
        tag(self, Classification::NotFound)
    }

    fn bad_request(self) -> Self {
        tag(self, Classification::BadRequest)
    }

    fn bad_request_with<I, K, M>(self, errors: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>,
    {
        tag(self, Classification::BadRequest).with_errors(errors)
    }

    fn unauthorized(self) -> Self {
        tag(self, Classification::Unauthorized)
    }

    fn forbidden(self) -> Self {
        tag(self, Classification::Forbidden)
    }

    fn unprocessable_entity(self) -> Self {
        tag(self, Classification::UnprocessableEntity)
    }

    fn unprocessable_entity_with<I, K, M>(self, errors: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>,
    {
        tag(self, Classification::UnprocessableEntity).with_errors(errors)
    }

    fn conflict(self) -> Self {
        tag(self, Classification::Conflict)
    }

    fn internal_error(self) -> Self {
        tag(self, Classification::InternalError)
    }

    fn ok(self) -> Self {
        tag(self, Classification::Ok)
    }

    fn created(self) -> Self {
        tag(self, Classification::Created)
    }

    fn no_content(self) -> Self {
        tag(self, Classification::NoContent)
    }
}

fn tag<T>(outcome: Outcome<T>, classification: Classification) -> Outcome<T> {
    let outcome = outcome.classify(classification);
    match classification.default_message() {
        Some(message) => outcome.set_message(message),
        None => outcome,
    }
}
