//! VSM Network Server
//!
//! Seed a node tree and serve it over HTTP.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use vsm_server::{ServerConfig, VsmServer};
use vsm_tree::TreeStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vsm_server=info,vsm_tree=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        addr = %config.api_addr,
        default_poly_order = config.tree.default_poly_order,
        max_poly_order = config.tree.max_poly_order,
        "starting VSM server"
    );

    let store = Arc::new(TreeStore::seeded(config.tree.clone())?);
    VsmServer::new(store).serve(config.api_addr).await?;

    Ok(())
}
