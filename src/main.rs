use mcp_mealdb::{MealDbClient, MealDbMcpServer, client::DEFAULT_BASE_URL};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::{env, sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables
    let base_url = env::var("MEALDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let timeout = match env::var("MEALDB_TIMEOUT_SECS") {
        Ok(secs) => Some(Duration::from_secs(secs.parse().map_err(|e| {
            anyhow::anyhow!("MEALDB_TIMEOUT_SECS must be a whole number of seconds: {}", e)
        })?)),
        Err(_) => None,
    };

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    let mut client = MealDbClient::with_base_url(base_url.clone());
    if let Some(timeout) = timeout {
        tracing::info!("Using request timeout of {:?}", timeout);
        client = client.with_timeout(timeout);
    }
    let client = Arc::new(client);

    // Probe the API once; failure is logged, not fatal
    tracing::info!("Testing API access at {}...", base_url);
    let probe = MealDbMcpServer::with_shared_client(client.clone());
    match probe.test_api_access().await {
        Ok(_) => {
            tracing::info!("API access test passed");
        }
        Err(e) => {
            tracing::warn!("API access test failed: {}", e);
            tracing::warn!("Please verify:");
            tracing::warn!("  - MEALDB_BASE_URL is correct: {}", base_url);
            tracing::warn!("  - The MealDB API is reachable from this host");
            tracing::warn!("The server will continue, but tool calls may fail.");
        }
    }

    // Create server configuration and start SSE server
    let config = SseServerConfig {
        bind: bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("MealDB MCP Server listening on {}", config.bind);

    // serve_with_config handles binding, axum server setup, and graceful shutdown internally
    let sse_server = SseServer::serve_with_config(config).await?;

    let ct = sse_server.with_service(move || MealDbMcpServer::with_shared_client(client.clone()));

    tracing::info!("MealDB MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
