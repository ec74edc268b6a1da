use std::sync::Arc;
use std::future::Future;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::{json, Value};

use crate::client::{Meal, MealDbClient, MealDbError};

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchByNameParams {
    pub name: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchByFirstLetterParams {
    /// A single letter, e.g. "a"
    pub letter: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetMealDetailsParams {
    pub id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FilterByIngredientParams {
    pub ingredient: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FilterByAreaParams {
    pub area: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FilterByCategoryParams {
    pub category: String,
}

fn pretty(value: &Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Turn a client error into a tool result. An empty match is an answer, not a failure.
fn failure(action: &str, key: &str, e: MealDbError) -> Result<CallToolResult, McpError> {
    if e.is_no_results() {
        tracing::debug!("{}: no results", action);
        return pretty(&json!({
            key: [],
            "message": e.to_string()
        }));
    }

    tracing::error!("{} failed: {}", action, e);
    let error = json!({
        "error": format!("Failed to {}", action),
        "details": e.to_string()
    });
    Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
}

/// The only character of `input`, `None` when it is empty or longer.
fn single_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

fn meal_summary(meal: &Meal) -> Value {
    json!({
        "id": meal.id(),
        "name": meal.name(),
        "category": meal.category(),
        "area": meal.area(),
        "thumbnail": meal.thumbnail(),
    })
}

fn meal_details(meal: &Meal) -> Value {
    json!({
        "id": meal.id(),
        "name": meal.name(),
        "category": meal.category(),
        "area": meal.area(),
        "instructions": meal.instructions(),
        "ingredients": meal.ingredients(),
        "tags": meal.tags(),
        "thumbnail": meal.thumbnail(),
        "youtube": meal.youtube(),
        "source": meal.source(),
        "drink_alternate": meal.drink_alternate(),
        "date_modified": meal.date_modified().map(|d| d.to_string()),
    })
}

fn meal_list(meals: &[Meal], query: Value) -> Value {
    json!({
        "meals": meals.iter().map(meal_summary).collect::<Vec<_>>(),
        "total_count": meals.len(),
        "query": query
    })
}

#[derive(Clone)]
pub struct MealDbMcpServer {
    client: Arc<MealDbClient>,
    tool_router: ToolRouter<MealDbMcpServer>,
}

#[tool_router]
impl MealDbMcpServer {
    pub fn new() -> Self {
        Self::with_client(MealDbClient::new())
    }

    pub fn with_client(client: MealDbClient) -> Self {
        Self::with_shared_client(Arc::new(client))
    }

    /// Build a server around a client shared with other server instances.
    pub fn with_shared_client(client: Arc<MealDbClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub fn client(&self) -> &MealDbClient {
        &self.client
    }

    /// Check that the configured API answers, by listing categories.
    pub async fn test_api_access(&self) -> Result<(), anyhow::Error> {
        tracing::debug!("Testing API access by listing categories...");
        let categories = self.client.list_categories().await?;
        tracing::info!("API access test successful - found {} categories", categories.len());
        Ok(())
    }

    // Search tools
    #[tool(description = "Search meals by name")]
    async fn search_meals_by_name(
        &self,
        Parameters(params): Parameters<SearchByNameParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.search_by_name(&params.name).await {
            Ok(meals) => pretty(&meal_list(&meals, json!({ "name": params.name }))),
            Err(e) => failure("search meals by name", "meals", e),
        }
    }

    #[tool(description = "List all meals whose name starts with the given letter")]
    async fn search_meals_by_first_letter(
        &self,
        Parameters(params): Parameters<SearchByFirstLetterParams>,
    ) -> Result<CallToolResult, McpError> {
        let letter = match single_letter(&params.letter) {
            Some(letter) => letter,
            None => {
                let error = json!({
                    "error": "Invalid letter",
                    "details": format!("expected exactly one character, got {:?}", params.letter)
                });
                return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
            }
        };

        match self.client.search_by_first_letter(letter).await {
            Ok(meals) => pretty(&meal_list(&meals, json!({ "letter": letter.to_string() }))),
            Err(e) => failure("search meals by first letter", "meals", e),
        }
    }

    #[tool(description = "Get full meal details including instructions and ingredients")]
    async fn get_meal_details(
        &self,
        Parameters(params): Parameters<GetMealDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.search_by_id(&params.id).await {
            Ok(meal) => pretty(&meal_details(&meal)),
            Err(e) => failure("get meal details", "meals", e),
        }
    }

    #[tool(description = "Get a random meal with full details")]
    async fn random_meal(&self) -> Result<CallToolResult, McpError> {
        match self.client.random_meal().await {
            Ok(meal) => pretty(&meal_details(&meal)),
            Err(e) => failure("get a random meal", "meals", e),
        }
    }

    #[tool(description = "List all meal categories with descriptions")]
    async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        match self.client.list_categories().await {
            Ok(categories) => pretty(&json!({
                "total_count": categories.len(),
                "categories": categories,
            })),
            Err(e) => failure("list categories", "categories", e),
        }
    }

    // Filter tools
    #[tool(description = "Find meals that use the given main ingredient")]
    async fn filter_by_ingredient(
        &self,
        Parameters(params): Parameters<FilterByIngredientParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.filter_by_ingredient(&params.ingredient).await {
            Ok(meals) => pretty(&meal_list(&meals, json!({ "ingredient": params.ingredient }))),
            Err(e) => failure("filter meals by ingredient", "meals", e),
        }
    }

    #[tool(description = "Find meals from the given area, e.g. Canadian")]
    async fn filter_by_area(
        &self,
        Parameters(params): Parameters<FilterByAreaParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.filter_by_area(&params.area).await {
            Ok(meals) => pretty(&meal_list(&meals, json!({ "area": params.area }))),
            Err(e) => failure("filter meals by area", "meals", e),
        }
    }

    #[tool(description = "Find meals in the given category, e.g. Seafood")]
    async fn filter_by_category(
        &self,
        Parameters(params): Parameters<FilterByCategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.filter_by_category(&params.category).await {
            Ok(meals) => pretty(&meal_list(&meals, json!({ "category": params.category }))),
            Err(e) => failure("filter meals by category", "meals", e),
        }
    }

    // Facet listings
    #[tool(description = "List category names usable with filter_by_category")]
    async fn list_category_names(&self) -> Result<CallToolResult, McpError> {
        match self.client.list_category_filter_values().await {
            Ok(names) => pretty(&json!({ "categories": names, "total_count": names.len() })),
            Err(e) => failure("list category names", "categories", e),
        }
    }

    #[tool(description = "List ingredients usable with filter_by_ingredient")]
    async fn list_ingredients(&self) -> Result<CallToolResult, McpError> {
        match self.client.list_ingredient_filter_values().await {
            Ok(ingredients) => pretty(&json!({
                "total_count": ingredients.len(),
                "ingredients": ingredients,
            })),
            Err(e) => failure("list ingredients", "ingredients", e),
        }
    }

    #[tool(description = "List area names usable with filter_by_area")]
    async fn list_area_names(&self) -> Result<CallToolResult, McpError> {
        match self.client.list_area_filter_values().await {
            Ok(names) => pretty(&json!({ "areas": names, "total_count": names.len() })),
            Err(e) => failure("list area names", "areas", e),
        }
    }
}

impl Default for MealDbMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for MealDbMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server provides tools for looking up recipes in TheMealDB. Available tools include: searching meals by name or first letter, fetching full meal details or a random meal, filtering meals by ingredient, area or category, and listing the categories, areas and ingredients that filters accept.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
