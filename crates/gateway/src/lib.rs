//! HTTP API gateway for StudyMate.
//!
//! Exposes the assistant endpoint and a health check:
//!
//! - `POST /api/assistant` — decode a study request, run the engine,
//!   return the structured response
//! - `GET  /health`        — liveness probe
//!
//! The gateway owns JSON decoding and schema validation; the engine is a
//! pure function and is only ever handed a fully decoded request. Any
//! decode failure — malformed JSON, wrong types, an unknown mode — is a
//! `400` with a stable error body, never a panic. Because the engine is
//! stateless, the router carries no shared state; the config is consumed
//! once while building the middleware stack.
//!
//! Built on Axum, with CORS, a request body limit, and HTTP trace
//! logging layered on top.

use std::time::Duration;

use axum::{
    Router,
    extract::{DefaultBodyLimit, rejection::JsonRejection},
    http::{HeaderValue, Method, StatusCode, header},
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use studymate_config::AppConfig;
use studymate_core::{AssistantRequest, AssistantResponse};

/// Error body for any request the gateway cannot decode. Kept stable —
/// the web client renders it verbatim.
const DECODE_ERROR: &str = "Unable to process your request. Please adjust your message and retry.";

/// Build the Axum router with all gateway routes and layers.
pub fn build_router(config: &AppConfig) -> Router {
    Router::new()
        .route("/api/assistant", post(assistant_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(config.gateway.max_body_bytes))
        .layer(cors_layer(&config.gateway.allowed_origins))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server and serve until shutdown.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let app = build_router(&config);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS: same-origin by default; explicit origins come from config.
/// Unparsable origins are skipped with a warning rather than failing
/// startup.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

// --- Handlers ---

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn assistant_handler(
    payload: Result<Json<AssistantRequest>, JsonRejection>,
) -> Result<Json<AssistantResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected undecodable assistant request");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: DECODE_ERROR.into(),
            }),
        )
    })?;

    let request_id = uuid::Uuid::new_v4();
    info!(
        %request_id,
        mode = ?request.mode,
        message_len = request.message.len(),
        history_len = request.history.len(),
        "Assistant request"
    );

    Ok(Json(studymate_engine::generate(&request)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_router(&AppConfig::default())
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/assistant")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn plan_request_returns_a_plan() {
        let response = test_app()
            .oneshot(post_json(
                r#"{
                    "message": "Create a study plan for Biology",
                    "mode": "plan",
                    "context": {"subject": "Biology", "goal": "Master mitosis", "daysAvailable": 4, "timePerDay": 60}
                }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["studyPlan"]["blocks"].as_array().unwrap().len(), 4);
        assert!(json["reply"].as_str().is_some_and(|r| !r.is_empty()));
    }

    #[tokio::test]
    async fn chat_request_has_no_plan_key() {
        let response = test_app()
            .oneshot(post_json(r#"{"message": "hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json.get("studyPlan").is_none());
        let items = json["actionItems"].as_array().unwrap();
        assert!((3..=5).contains(&items.len()));
    }

    #[tokio::test]
    async fn malformed_body_is_a_400_with_stable_error() {
        let response = test_app().oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"].as_str().unwrap(), DECODE_ERROR);
    }

    #[tokio::test]
    async fn unknown_mode_is_a_400() {
        let response = test_app()
            .oneshot(post_json(r#"{"message": "hi", "mode": "tutor"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
