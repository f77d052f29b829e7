use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod aggregator;
mod cache;
mod config;
mod routes;
mod upstream;

use aggregator::{NewsAggregator, WeatherAggregator};
use config::Config;
use routes::{create_router, AppState};
use upstream::newsapi::NewsApiClient;
use upstream::open_meteo::OpenMeteoClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize upstream clients
    let weather_client = Arc::new(OpenMeteoClient::new(config.clone()));
    let news_client = Arc::new(NewsApiClient::new(config));

    // Create application state
    let state = AppState {
        weather: Arc::new(WeatherAggregator::new(weather_client)),
        news: Arc::new(NewsAggregator::new(news_client)),
    };

    let app = create_router(state).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("Server starting on http://0.0.0.0:8080");

    axum::serve(listener, app).await?;

    Ok(())
}
