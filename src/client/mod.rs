//! # MealDB HTTP Client
//!
//! This module provides a direct HTTP client for TheMealDB API, covering meal
//! search, lookup, filtering and the facet listings used to build filters.
//!
//! ## Modules
//!
//! - [`client`] - Main HTTP client implementation with all API methods
//! - [`envelope`] - Unwrapping of the `meals` / `categories` response envelope
//! - [`error`] - The [`MealDbError`] type every operation returns
//! - [`types`] - Type definitions for API responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_mealdb::client::MealDbClient;
//!
//! # async fn example() -> Result<(), mcp_mealdb::client::MealDbError> {
//! let client = MealDbClient::new();
//!
//! let meals = client.search_by_name("Arrabiata").await?;
//! println!("Found {} meals", meals.len());
//!
//! let random = client.random_meal().await?;
//! println!("Try {}", random.name().unwrap_or("something new"));
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod envelope;
pub mod error;
pub mod types;

pub use client::{MealDbClient, DEFAULT_BASE_URL};
pub use error::{MealDbError, Result};
pub use types::*;
