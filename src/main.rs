use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use userscope::api::create_api_router;
use userscope::config::Config;
use userscope::store::{seed, InMemoryUserStore, UserStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Initialize and seed the in-memory store
    let store = InMemoryUserStore::new();
    store.preload(seed::sample_users());
    if config.seed.users > 0 {
        store.preload(seed::random_users(config.seed.users));
    }
    let store: Arc<dyn UserStore> = Arc::new(store);
    info!("Seeded in-memory store with {} users", store.count().await?);

    // Create router
    let router = create_api_router(Arc::clone(&store), &config.cache);

    // Start API server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 API server listening on http://{}", addr);
    info!(
        "   - Analytics report at http://{}/api/analytics/report",
        addr
    );

    axum::serve(listener, router).await?;

    Ok(())
}
