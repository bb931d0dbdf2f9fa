use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ecad_weather_api::api::{create_router, AppState};
use ecad_weather_api::catalog::StationCatalog;
use ecad_weather_api::cli::Cli;
use ecad_weather_api::query::QueryEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables before clap resolves env-backed args
    dotenvy::dotenv().ok();

    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ecad_weather_api=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = Cli::parse().into_config();
    info!("Starting weather API with config: {:?}", config);

    let state = AppState {
        catalog: StationCatalog::new(&config.data_dir),
        engine: QueryEngine::new(&config.data_dir),
    };
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
