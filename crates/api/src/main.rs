use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod config;
mod metrics;
mod openapi;

use config::ServerConfig;
use metrics::Metrics;

struct AppState {
    config: ServerConfig,
    search: search::SearchClient,
    extractor: extract::ContentExtractor<extract::HttpFetcher>,
    metrics: Arc<Metrics>,
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    foreground: Option<String>,
    background: Option<String>,
}

#[derive(Deserialize)]
struct SearchRequest {
    query: Option<String>,
    max_results: Option<usize>,
}

#[derive(Deserialize)]
struct FetchRequest {
    url: Option<String>,
}

#[derive(Serialize)]
struct FetchResponse {
    text: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    let state = Arc::new(AppState {
        search: search::SearchClient::new()?,
        extractor: extract::ContentExtractor::new(extract::FetchConfig::default())?,
        metrics: Metrics::new(),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/wcag-info", get(wcag_info))
        .route("/api/analyze", post(analyze))
        .route("/api/search", post(search_web))
        .route("/api/fetch", post(fetch_url))
        .route("/stats", get(stats))
        .route("/openapi.json", get(openapi_spec))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "ok", "name": state.config.service_name }))
}

async fn wcag_info() -> Json<Value> {
    Json(json!({
        "info": "WCAG 2.1: AA requires a minimum contrast of 4.5:1 for normal text (3:1 for large text). AAA requires 7:1 for normal text."
    }))
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<contrast::ContrastResult>, ApiError> {
    let (Some(foreground), Some(background)) = (req.foreground, req.background) else {
        state.metrics.record_rejected();
        return Err(bad_request("Missing foreground or background"));
    };

    state.metrics.record_analyze();
    Ok(Json(contrast::analyze_contrast(&foreground, &background)))
}

async fn search_web(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Vec<search::SearchResult>>, ApiError> {
    let Some(query) = req.query else {
        state.metrics.record_rejected();
        return Err(bad_request("Missing query"));
    };
    let max_results = req.max_results.unwrap_or(search::DEFAULT_MAX_RESULTS);

    state.metrics.record_search();
    Ok(Json(state.search.search(&query, max_results).await))
}

async fn fetch_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FetchRequest>,
) -> Result<Json<FetchResponse>, ApiError> {
    let Some(url) = req.url else {
        state.metrics.record_rejected();
        return Err(bad_request("Missing url"));
    };

    state.metrics.record_fetch();
    let doc = state.extractor.fetch_and_extract(&url).await;
    Ok(Json(FetchResponse { text: doc.text }))
}

async fn stats(State(state): State<Arc<AppState>>) -> Json<metrics::MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

async fn openapi_spec(headers: HeaderMap) -> Json<Value> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost:8080");
    let protocol = if host.contains("localhost") || host.starts_with("127.") {
        "http"
    } else {
        "https"
    };
    Json(openapi::document(&format!("{}://{}", protocol, host)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: ServerConfig::default(),
            search: search::SearchClient::new().unwrap(),
            extractor: extract::ContentExtractor::new(extract::FetchConfig::default()).unwrap(),
            metrics: Metrics::new(),
        })
    }

    #[tokio::test]
    async fn analyze_rejects_missing_fields() {
        let state = test_state();
        let result = analyze(
            State(state.clone()),
            Json(AnalyzeRequest {
                foreground: Some("#000000".to_string()),
                background: None,
            }),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing foreground or background");
        assert_eq!(state.metrics.snapshot().rejected_requests, 1);
    }

    #[tokio::test]
    async fn analyze_returns_wire_shape() {
        let state = test_state();
        let result = analyze(
            State(state.clone()),
            Json(AnalyzeRequest {
                foreground: Some("#000000".to_string()),
                background: Some("#FFFFFF".to_string()),
            }),
        )
        .await;

        let Json(body) = result.ok().unwrap();
        assert_eq!(body.ratio, 21.0);
        assert!(body.passes_aa && body.passes_aaa);
        assert_eq!(state.metrics.snapshot().analyze_requests, 1);
    }

    #[tokio::test]
    async fn fetch_rejects_missing_url() {
        let state = test_state();
        let result = fetch_url(State(state), Json(FetchRequest { url: None })).await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing url");
    }

    #[tokio::test]
    async fn search_rejects_missing_query() {
        let state = test_state();
        let result = search_web(
            State(state),
            Json(SearchRequest {
                query: None,
                max_results: None,
            }),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing query");
    }
}
