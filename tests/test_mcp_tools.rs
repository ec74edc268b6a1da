mod common;

use common::TestEnvironment;
use mcp_mealdb::{MealDbClient, MealDbMcpServer};
use rmcp::ServerHandler;

#[tokio::test]
async fn test_mcp_server_api_access() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    let mock = env.mock_json("/categories.php", common::CATEGORIES).await;

    let server = MealDbMcpServer::with_client(MealDbClient::with_base_url(env.server.url()));
    let result = server.test_api_access().await;

    assert!(result.is_ok(), "API access test should pass against a healthy API");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_mcp_server_api_access_failure() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    let _mock = env.mock_json("/categories.php", "").await;

    let server = MealDbMcpServer::with_client(MealDbClient::with_base_url(env.server.url()));
    let err = server.test_api_access().await.unwrap_err();

    assert_eq!(err.to_string(), "no results found");
}

#[test]
fn test_mcp_server_advertises_tools() {
    let server = MealDbMcpServer::new();
    let info = server.get_info();

    assert!(info.capabilities.tools.is_some(), "Tools capability should be enabled");
    assert!(info.instructions.unwrap().contains("TheMealDB"));
    assert_eq!(server.client().base_url(), mcp_mealdb::client::DEFAULT_BASE_URL);
}
