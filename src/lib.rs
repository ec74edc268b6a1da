//! # MealDB MCP Library
//!
//! This library provides tools for querying TheMealDB, a public recipe database,
//! both directly and through the Model Context Protocol (MCP). It consists of two
//! main components:
//!
//! ## Client Module
//!
//! The [`client`] module provides a direct HTTP client for the MealDB API: meal
//! search by name, first letter or id, random meals, category listings, and
//! filtering by ingredient, area or category.
//!
//! ## Server Module
//!
//! The [`server`] module implements an MCP server that exposes each client
//! operation as a standardized tool that AI assistants can use.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_mealdb::{MealDbClient, MealDbMcpServer};
//!
//! // Use the client directly
//! let client = MealDbClient::new();
//!
//! // Or create an MCP server
//! let server = MealDbMcpServer::with_client(client);
//! ```

pub mod client;
pub mod server;

pub use client::{MealDbClient, MealDbError};
pub use server::MealDbMcpServer;
