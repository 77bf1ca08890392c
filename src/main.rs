use std::net::SocketAddr;
use std::sync::Arc;

use movie_browser::{
    api,
    catalog::{self, Catalog},
    storage::FileStore,
    AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    // 目录加载失败不终止服务，以空目录继续运行
    let catalog = match catalog::source_for(&config.catalog_source) {
        Ok(source) => {
            let load = Catalog::load(source.as_ref()).await;
            if let Some(e) = &load.error {
                tracing::warn!("Catalog unavailable, serving empty results: {}", e);
            }
            load.catalog
        }
        Err(e) => {
            tracing::error!("Invalid catalog source {:?}: {}", config.catalog_source, e);
            Catalog::empty()
        }
    };

    let store = Arc::new(FileStore::new(config.storage_dir.clone()));
    tracing::info!("📁 Favorites stored in {}", config.storage_dir.display());

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = api::router(api::AppState::new(config, catalog, store));

    tracing::info!("🚀 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
