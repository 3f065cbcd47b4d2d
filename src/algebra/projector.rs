use crate::domain::{
    Classification, ErrorEnvelope, InternalErrorPolicy, Outcome, Projection, ProjectionError,
    RequestContext,
};

/// Turns classified outcomes into wire projections.
///
/// Projection is a pure function of the outcome, the request context and the
/// internal-error policy. The status code always comes from the
/// classification, never from the outcome's own fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projector {
    policy: InternalErrorPolicy,
}

impl Projector {
    pub fn new(policy: InternalErrorPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> InternalErrorPolicy {
        self.policy
    }

    pub fn project<T>(
        &self,
        outcome: Outcome<T>,
        context: &RequestContext,
    ) -> Result<Projection<T>, ProjectionError> {
        let success = outcome.is_success();
        let classification = outcome
            .classification()
            .ok_or(ProjectionError::Unclassified { success })?;

        if classification.is_success() != success {
            return Err(ProjectionError::Mismatch {
                classification,
                success,
            });
        }

        if success {
            Ok(succeed(classification, outcome))
        } else {
            self.fail(classification, outcome, context)
        }
    }

    fn fail<T>(
        &self,
        classification: Classification,
        outcome: Outcome<T>,
        context: &RequestContext,
    ) -> Result<Projection<T>, ProjectionError> {
        if classification == Classification::InternalError
            && self.policy == InternalErrorPolicy::Propagate
        {
            return Err(ProjectionError::InternalFault {
                message: outcome.message().to_string(),
            });
        }

        let envelope = ErrorEnvelope::new(classification.status_code(), outcome.message())
            .set_path(context.path())
            .set_request_id(context.trace_id());
        let envelope = match outcome.errors() {
            Some(errors) => envelope.add_errors(errors.clone()),
            None => envelope,
        };

        Ok(Projection::error(envelope))
    }
}

fn succeed<T>(classification: Classification, outcome: Outcome<T>) -> Projection<T> {
    let status_code = classification.status_code();
    match classification {
        Classification::NoContent => Projection::empty(status_code),
        _ => match outcome.into_value() {
            Some(value) => Projection::value(status_code, value),
            None => Projection::empty(status_code),
        },
    }
}

/// Projects with the default policy, which propagates internal errors.
pub fn project<T>(
    outcome: Outcome<T>,
    context: &RequestContext,
) -> Result<Projection<T>, ProjectionError> {
    Projector::default().project(outcome, context)
}
