use crate::suite::TestApp;
use std::collections::HashMap;
use verdict::OUTCOMES_PROJECTED_TOTAL;

#[actix_web::test]
async fn metrics_count_projected_outcomes() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    let _ = application.get_raw("/nowhere").await;
    // Act
    let response = application.get("metrics").await;
    // Assert
    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to get response text");
    assert!(body.contains(OUTCOMES_PROJECTED_TOTAL));
    assert!(body.contains("status=\"404\""));
}

#[actix_web::test]
async fn metrics_count_health_checks() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    let _ = application.get("health_check").await;
    // Act
    let response = application.get("metrics").await;
    // Assert
    let body = response.text().await.expect("Failed to get response text");
    assert!(body.contains("status=\"200\""));
}
