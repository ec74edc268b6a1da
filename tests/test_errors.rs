mod common;

use std::time::Duration;

use common::TestEnvironment;
use mcp_mealdb::{MealDbClient, MealDbError};

#[tokio::test]
async fn test_empty_body_is_no_results() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    let _search = env.mock_json("/search.php?s=Arrabiata", "").await;
    let _random = env.mock_json("/random.php", "").await;
    let _categories = env.mock_json("/categories.php", "").await;
    let _areas = env.mock_json("/list.php?a=list", "").await;
    let _ingredients = env.mock_json("/list.php?i=list", "").await;

    assert!(env.client.search_by_name("Arrabiata").await.unwrap_err().is_no_results());
    assert!(env.client.random_meal().await.unwrap_err().is_no_results());
    assert!(env.client.list_categories().await.unwrap_err().is_no_results());
    assert!(env.client.list_area_filter_values().await.unwrap_err().is_no_results());
    assert!(env.client.list_ingredient_filter_values().await.unwrap_err().is_no_results());
}

#[tokio::test]
async fn test_null_envelope_is_no_results() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    let _random = env.mock_json("/random.php", common::NULL_MEALS).await;
    let _categories = env.mock_json("/categories.php", r#"{"categories":null}"#).await;
    let _names = env.mock_json("/list.php?c=list", common::NULL_MEALS).await;

    assert!(env.client.random_meal().await.unwrap_err().is_no_results());
    assert!(env.client.list_categories().await.unwrap_err().is_no_results());
    assert!(env.client.list_category_filter_values().await.unwrap_err().is_no_results());
}

#[tokio::test]
async fn test_invalid_json_forwards_parser_message() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    let body = "<html><body>maintenance</body></html>";
    let _mock = env.mock_json("/random.php", body).await;

    let err = env.client.random_meal().await.unwrap_err();
    let expected = serde_json::from_str::<serde_json::Value>(body).unwrap_err().to_string();

    assert!(matches!(err, MealDbError::Json(_)));
    assert!(!err.is_no_results());
    assert_eq!(err.to_string(), expected);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    let _mock = env
        .server
        .mock("GET", "/categories.php")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let err = env.client.list_categories().await.unwrap_err();

    match err {
        MealDbError::Status(status) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    common::init_test_logging();

    // Nothing listens on the discard port
    let client = MealDbClient::with_base_url("http://127.0.0.1:9".to_string())
        .with_timeout(Duration::from_secs(5));

    let err = client.random_meal().await.unwrap_err();

    match &err {
        MealDbError::Http(inner) => assert_eq!(err.to_string(), inner.to_string()),
        other => panic!("expected a transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_exactly_one_request_per_call() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    let mock = env
        .server
        .mock("GET", "/random.php")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    assert!(env.client.random_meal().await.is_err());
    // No retry after the failure
    mock.assert_async().await;
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = MealDbClient::with_base_url("http://localhost:1234/api/".to_string());
    assert_eq!(client.base_url(), "http://localhost:1234/api");

    let default = MealDbClient::default();
    assert_eq!(default.base_url(), "https://themealdb.com/api/json/v1/1");
}
