//! Products API - REST server over the JSON file catalog

use axum_helpers::server::{create_app, create_router, PipelineConfig};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{JsonFileStore, ProductService};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = JsonFileStore::new(&config.data_file);
    store.ensure_exists().await?;

    let state = AppState {
        config: config.clone(),
        products: ProductService::new(store),
    };

    let pipeline = PipelineConfig::new(config.environment, config.cors.clone());
    let router = create_router::<openapi::ApiDoc>(
        api::routes(&state),
        api::public_routes(&state),
        &pipeline,
    );

    info!(
        "Server running on port {} ({} mode)",
        config.server.port, config.environment
    );

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
