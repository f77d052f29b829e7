use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::aggregator::{
    AggregateError, NewsAggregator, NewsDigest, WeatherAggregator, WeatherReport,
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<WeatherAggregator>,
    pub news: Arc<NewsAggregator>,
}

// Request/Response types
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = match params.city.filter(|c| !c.trim().is_empty()) {
        Some(city) => city,
        None => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "No city provided. Pass a ?city=Name parameter.",
            ))
        }
    };

    match state.weather.get_weather(&city).await {
        Ok(report) => Ok(Json(report)),
        Err(err @ (AggregateError::CityNotFound | AggregateError::UpstreamUnavailable(_))) => {
            tracing::warn!(city = %city, error = %err, "weather lookup failed");
            Err(error_response(
                StatusCode::NOT_FOUND,
                "Could not fetch weather for that city",
            ))
        }
        Err(err) => {
            tracing::error!(city = %city, error = %err, "weather aggregation error");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Weather service error",
            ))
        }
    }
}

pub async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<NewsParams>,
) -> Result<Json<NewsDigest>, ApiError> {
    let category = params
        .category
        .unwrap_or_else(|| "technology".to_string());

    match state.news.get_news(&category).await {
        Ok(digest) => Ok(Json(digest)),
        Err(err @ AggregateError::UpstreamUnavailable(_)) => {
            tracing::warn!(category = %category, error = %err, "news lookup failed");
            Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Could not fetch news",
            ))
        }
        Err(err) => {
            tracing::error!(category = %category, error = %err, "news aggregation error");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "News service error",
            ))
        }
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(get_weather))
        .route("/news", get(get_news))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::upstream::newsapi::NewsApiClient;
    use crate::upstream::open_meteo::OpenMeteoClient;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(server: &MockServer) -> AppState {
        let config = Config {
            geocoding_base_url: server.uri(),
            forecast_base_url: server.uri(),
            news_base_url: server.uri(),
            news_api_key: Some("test-key".to_string()),
            upstream_timeout_secs: 5,
        };
        AppState {
            weather: Arc::new(WeatherAggregator::new(Arc::new(OpenMeteoClient::new(
                config.clone(),
            )))),
            news: Arc::new(NewsAggregator::new(Arc::new(NewsApiClient::new(config)))),
        }
    }

    #[tokio::test]
    async fn test_weather_without_city_is_bad_request() {
        let server = MockServer::start().await;
        let state = state_for(&server);

        let err = get_weather(State(state), Query(WeatherParams { city: None }))
            .await
            .unwrap_err();

        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_city_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;
        let state = state_for(&server);

        let err = get_weather(
            State(state),
            Query(WeatherParams {
                city: Some("Nowhereland".to_string()),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_news_defaults_to_technology_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/top-headlines"))
            .and(query_param("category", "technology"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": []})))
            .expect(1)
            .mount(&server)
            .await;
        let state = state_for(&server);

        let digest = get_news(State(state), Query(NewsParams { category: None }))
            .await
            .unwrap();

        assert!(digest.0.news.is_empty());
    }

    #[tokio::test]
    async fn test_news_provider_outage_maps_to_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/top-headlines"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let state = state_for(&server);

        let err = get_news(
            State(state),
            Query(NewsParams {
                category: Some("sports".to_string()),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
    }
}
