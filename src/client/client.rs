use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::{
    envelope::{self, Envelope},
    error::{MealDbError, Result},
    types::*,
};

/// Public MealDB endpoint, version 1 with the shared test key.
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

pub struct MealDbClient {
    base_url: String,
    client: Client,
    timeout: Option<Duration>,
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDbClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout: None,
        }
    }

    /// Apply a timeout to every request made by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET against `endpoint`, decoding the payload held under `expected`.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, expected: Envelope) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("Making request to: {}", url);

        let mut request = self.client.get(&url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Network error requesting {}: {}", endpoint, e);
            MealDbError::Http(e)
        })?;

        let status = response.status();
        tracing::debug!("Response status for {}: {}", endpoint, status);

        if !status.is_success() {
            tracing::warn!("MealDB returned {} for {}", status, endpoint);
            return Err(MealDbError::Status(status));
        }

        let body = response.text().await?;

        envelope::decode(&body, expected).map_err(|e| {
            match &e {
                MealDbError::NoResults => tracing::debug!("No results for {}", endpoint),
                _ => tracing::error!("Failed to decode response for {}: {}", endpoint, e),
            }
            e
        })
    }

    /// The first meal of a lookup-style response.
    async fn get_single(&self, endpoint: &str) -> Result<Meal> {
        let meals: Vec<Meal> = self.get(endpoint, Envelope::Meals).await?;
        meals.into_iter().next().ok_or(MealDbError::NoResults)
    }

    // Search operations
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Meal>> {
        self.get(&format!("search.php?s={}", urlencoding::encode(name)), Envelope::Meals)
            .await
    }

    pub async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Meal>> {
        self.get(&format!("search.php?f={}", letter), Envelope::Meals)
            .await
    }

    pub async fn search_by_id(&self, id: &str) -> Result<Meal> {
        self.get_single(&format!("lookup.php?i={}", id)).await
    }

    pub async fn random_meal(&self) -> Result<Meal> {
        self.get_single("random.php").await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get("categories.php", Envelope::Categories).await
    }

    // Filter operations, these return partial meals (id, name, thumbnail)
    pub async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Meal>> {
        self.get(&format!("filter.php?i={}", urlencoding::encode(ingredient)), Envelope::Meals)
            .await
    }

    pub async fn filter_by_area(&self, area: &str) -> Result<Vec<Meal>> {
        self.get(&format!("filter.php?a={}", urlencoding::encode(area)), Envelope::Meals)
            .await
    }

    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<Meal>> {
        self.get(&format!("filter.php?c={}", urlencoding::encode(category)), Envelope::Meals)
            .await
    }

    // Filter facet listings
    pub async fn list_category_filter_values(&self) -> Result<Vec<String>> {
        let rows: Vec<CategoryName> = self.get("list.php?c=list", Envelope::Meals).await?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    /// Full ingredient records. Unlike the category and area listings these are
    /// not reduced to names, since each row carries a description and type.
    pub async fn list_ingredient_filter_values(&self) -> Result<Vec<Ingredient>> {
        self.get("list.php?i=list", Envelope::Meals).await
    }

    pub async fn list_area_filter_values(&self) -> Result<Vec<String>> {
        let rows: Vec<AreaName> = self.get("list.php?a=list", Envelope::Meals).await?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }
}
