use std::sync::Arc;

use anyhow::Context;

use catalog_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = ApiConfig::from_env()?;

    let items = match &config.seed_path {
        Some(path) => catalog_infra::load_catalog_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => catalog_infra::demo_catalog().context("loading bundled catalog")?,
    };
    let services = Arc::new(app::services::AppServices::new(items));
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
