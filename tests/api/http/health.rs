use crate::suite::TestApp;
use std::collections::HashMap;
use verdict::SuccessEnvelope;

#[actix_web::test]
async fn health_check_works() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    // Act
    let response = application.get("health_check").await;
    // Assert
    assert!(response.status().is_success());
    let body: SuccessEnvelope<String> = response
        .json()
        .await
        .expect("Failed to deserialize response");
    assert_eq!("I'm alive!", body.data());
    assert!(body.meta().is_none());
}

#[actix_web::test]
async fn health_check_omits_meta_from_the_wire() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    // Act
    let response = application.get("health_check").await;
    // Assert
    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to deserialize response");
    assert_eq!(serde_json::json!({ "data": "I'm alive!" }), body);
}
