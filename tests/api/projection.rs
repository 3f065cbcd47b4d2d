use serde_json::{json, Value};
use verdict::{
    project, Classification, ErrorEnvelope, HttpOutcomeExt, InternalErrorPolicy, Outcome,
    Projection, ProjectionBody, ProjectionError, Projector, RequestContext, BAD_REQUEST_MESSAGE,
    CONFLICT_MESSAGE, FORBIDDEN_MESSAGE, INTERNAL_ERROR_MESSAGE, NOT_FOUND_MESSAGE,
    UNAUTHORIZED_MESSAGE, UNPROCESSABLE_ENTITY_MESSAGE,
};

fn context() -> RequestContext {
    RequestContext::new("/api/orders/42", "c1b2a3")
}

fn envelope<T: std::fmt::Debug>(projection: Projection<T>) -> ErrorEnvelope {
    match projection.into_body() {
        ProjectionBody::Error(envelope) => envelope,
        body => panic!("Expected an error envelope, got {:?}", body),
    }
}

#[test]
fn not_found_projects_to_404_without_errors() {
    let outcome: Outcome = Outcome::failed("").not_found();

    let projection = project(outcome, &context()).expect("Failed to project outcome");

    assert_eq!(404, projection.status_code());
    assert_eq!(
        json!({
            "statusCode": 404,
            "message": NOT_FOUND_MESSAGE,
            "path": "/api/orders/42",
            "requestId": "c1b2a3"
        }),
        serde_json::to_value(envelope(projection)).expect("Failed to serialize envelope")
    );
}

#[test]
fn bad_request_embeds_the_exact_error_map() {
    let outcome: Outcome = Outcome::failed("").bad_request_with([("email", "required")]);

    let projection = project(outcome, &context()).expect("Failed to project outcome");

    assert_eq!(400, projection.status_code());
    let envelope = envelope(projection);
    assert_eq!(BAD_REQUEST_MESSAGE, envelope.message());
    assert_eq!(
        json!({ "email": "required" }),
        serde_json::to_value(envelope.errors()).expect("Failed to serialize errors")
    );
}

#[test]
fn classifying_twice_is_idempotent() {
    let once: Outcome = Outcome::failed("").not_found();
    let twice: Outcome = Outcome::failed("").not_found().not_found();

    let once = project(once, &context()).expect("Failed to project outcome");
    let twice = project(twice, &context()).expect("Failed to project outcome");

    assert_eq!(once, twice);
}

#[test]
fn status_comes_from_the_classification_only() {
    let cases: [(fn(Outcome) -> Outcome, u16, &str); 6] = [
        (HttpOutcomeExt::bad_request, 400, BAD_REQUEST_MESSAGE),
        (HttpOutcomeExt::unauthorized, 401, UNAUTHORIZED_MESSAGE),
        (HttpOutcomeExt::forbidden, 403, FORBIDDEN_MESSAGE),
        (HttpOutcomeExt::not_found, 404, NOT_FOUND_MESSAGE),
        (HttpOutcomeExt::conflict, 409, CONFLICT_MESSAGE),
        (
            HttpOutcomeExt::unprocessable_entity,
            422,
            UNPROCESSABLE_ENTITY_MESSAGE,
        ),
    ];

    for (classify, status_code, message) in cases {
        let outcome = classify(Outcome::failed("").with_metadata([("statusCode", 418)]));
        let projection = project(outcome, &context()).expect("Failed to project outcome");
        assert_eq!(status_code, projection.status_code());
        assert_eq!(message, envelope(projection).message());
    }
}

#[test]
fn unprocessable_entity_carries_errors() {
    let outcome: Outcome = Outcome::failed("Quantity rejected")
        .unprocessable_entity_with([("quantity", "must be positive")]);

    let envelope = envelope(project(outcome, &context()).expect("Failed to project outcome"));

    assert_eq!(422, envelope.status_code());
    assert_eq!("Quantity rejected", envelope.message());
    assert_eq!(
        Some(&"must be positive".to_string()),
        envelope.errors().and_then(|errors| errors.get("Quantity"))
    );
}

#[test]
fn unclassified_outcome_is_a_programmer_error() {
    let outcome: Outcome = Outcome::failed("Something happened");

    let error = project(outcome, &context()).expect_err("Projection should fail");

    assert_eq!(ProjectionError::Unclassified { success: false }, error);
    assert!(error.is_programmer_error());
}

#[test]
fn success_with_failure_shape_is_a_mismatch() {
    let outcome = Outcome::success(1).not_found();

    let error = project(outcome, &context()).expect_err("Projection should fail");

    assert_eq!(
        ProjectionError::Mismatch {
            classification: Classification::NotFound,
            success: true
        },
        error
    );
    assert!(error.is_programmer_error());
}

#[test]
fn failure_with_success_shape_is_a_mismatch() {
    let outcome: Outcome = Outcome::failed("Nope").created();

    let error = project(outcome, &context()).expect_err("Projection should fail");

    assert!(matches!(error, ProjectionError::Mismatch { success: false, .. }));
}

#[test]
fn internal_error_propagates_by_default() {
    let outcome: Outcome = Outcome::failed("").internal_error();

    let error = project(outcome, &context()).expect_err("Projection should fail");

    assert_eq!(
        ProjectionError::InternalFault {
            message: INTERNAL_ERROR_MESSAGE.to_string()
        },
        error
    );
    assert!(!error.is_programmer_error());
}

#[test]
fn internal_error_responds_with_500_when_asked_to() {
    let projector = Projector::new(InternalErrorPolicy::Respond);
    let outcome: Outcome = Outcome::failed("Ledger unavailable").internal_error();

    let projection = projector
        .project(outcome, &context())
        .expect("Failed to project outcome");

    assert_eq!(500, projection.status_code());
    let envelope = envelope(projection);
    assert_eq!("Ledger unavailable", envelope.message());
    assert_eq!(Some("c1b2a3"), envelope.request_id());
}

#[test]
fn ok_projects_the_value() {
    let outcome = Outcome::success(json!({ "id": 42 })).ok();

    let projection = project(outcome, &context()).expect("Failed to project outcome");

    assert_eq!(Projection::value(200, json!({ "id": 42 })), projection);
}

#[test]
fn ok_without_value_is_empty() {
    let projection = project(Outcome::completed().ok(), &context())
        .expect("Failed to project outcome");

    assert_eq!(Projection::empty(200), projection);
}

#[test]
fn created_keeps_the_value_and_leaves_location_open() {
    let outcome = Outcome::success("order-7").created();

    let projection = project(outcome, &context()).expect("Failed to project outcome");

    assert_eq!(201, projection.status_code());
    assert_eq!(None, projection.location());
    assert_eq!(&ProjectionBody::Value("order-7"), projection.body());

    let projection = projection.with_location("/api/orders/7");
    assert_eq!(Some("/api/orders/7"), projection.location());
}

#[test]
fn no_content_drops_the_value() {
    let outcome = Outcome::success(json!({ "ignored": true })).no_content();

    let projection = project(outcome, &context()).expect("Failed to project outcome");

    assert_eq!(Projection::<Value>::empty(204), projection);
}

#[test]
fn default_projector_propagates() {
    assert_eq!(InternalErrorPolicy::Propagate, Projector::default().policy());
}

#[test]
fn classification_table() {
    let table = [
        (Classification::Ok, 200, true),
        (Classification::Created, 201, true),
        (Classification::NoContent, 204, true),
        (Classification::BadRequest, 400, false),
        (Classification::Unauthorized, 401, false),
        (Classification::Forbidden, 403, false),
        (Classification::NotFound, 404, false),
        (Classification::Conflict, 409, false),
        (Classification::UnprocessableEntity, 422, false),
        (Classification::InternalError, 500, false),
    ];

    for (classification, status_code, success) in table {
        assert_eq!(status_code, classification.status_code());
        assert_eq!(success, classification.is_success());
        assert_eq!(!success, classification.default_message().is_some());
    }
    assert_eq!("UnprocessableEntity", Classification::UnprocessableEntity.to_string());
}
