use mcp_mealdb::MealDbClient;
use mockito::ServerGuard;

pub const SEARCH_ARRABIATA: &str = include_str!("../fixtures/search_arrabiata.json");
pub const FILTER_CHICKEN_BREAST: &str = include_str!("../fixtures/filter_chicken_breast.json");
pub const CATEGORIES: &str = include_str!("../fixtures/categories.json");
pub const LIST_CATEGORIES: &str = include_str!("../fixtures/list_categories.json");
pub const LIST_AREAS: &str = include_str!("../fixtures/list_areas.json");
pub const LIST_INGREDIENTS: &str = include_str!("../fixtures/list_ingredients.json");

pub const NULL_MEALS: &str = r#"{"meals":null}"#;

pub struct TestEnvironment {
    pub server: ServerGuard,
    pub client: MealDbClient,
}

impl TestEnvironment {
    /// A client pointed at a fresh local mock server.
    pub async fn new() -> Self {
        let server = mockito::Server::new_async().await;
        let client = MealDbClient::with_base_url(server.url());
        Self { server, client }
    }

    /// Mock a JSON response for an exact path and query.
    pub async fn mock_json(&mut self, path_and_query: &str, body: &str) -> mockito::Mock {
        self.server
            .mock("GET", path_and_query)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// Parse a fixture so tests can compare decoded output against the raw payload.
pub fn fixture_value(fixture: &str) -> serde_json::Value {
    serde_json::from_str(fixture).expect("fixture is valid JSON")
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
