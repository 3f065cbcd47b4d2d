use crate::suite::TestApp;
use std::collections::HashMap;
use verdict::{Config, InternalErrorPolicy, UnknownPolicy};

#[test]
fn config_defaults_when_keys_are_missing() {
    // Arrange
    let config = Config::from(HashMap::new());
    // Assert
    assert_eq!("localhost", config.server().host());
    assert_eq!(3007, config.server().port());
    assert_eq!(
        InternalErrorPolicy::Propagate,
        config.projection().internal_error_policy()
    );
}

#[test]
fn config_reads_policy_case_insensitively() {
    // Arrange
    let config = Config::from(HashMap::from_iter([("INTERNAL_ERROR_POLICY", "Respond")]));
    // Assert
    assert_eq!(
        InternalErrorPolicy::Respond,
        config.projection().internal_error_policy()
    );
}

#[test]
fn unknown_policy_is_rejected() {
    // Act
    let policy = "swallow".parse::<InternalErrorPolicy>();
    // Assert
    assert_eq!(Err(UnknownPolicy("swallow".to_string())), policy);
}

#[test]
fn policy_display_parses_back() {
    for policy in [InternalErrorPolicy::Propagate, InternalErrorPolicy::Respond] {
        assert_eq!(Ok(policy), policy.to_string().parse());
    }
}

#[actix_web::test]
async fn application_binds_a_random_port() {
    // Arrange
    let application =
        TestApp::spawn(HashMap::from_iter([("INTERNAL_ERROR_POLICY", "respond")])).await;
    // Assert
    assert_eq!(0, application.configuration().server().port());
    assert_eq!(
        InternalErrorPolicy::Respond,
        application.configuration().projection().internal_error_policy()
    );
}
