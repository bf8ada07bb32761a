mod heartbeat;
mod workflow;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

use recap_core::RetryPolicy;
use recap_git::DiffCollector;
use recap_llm::CompletionClient;

/// Shared state handed to every request handler.
///
/// The completion client is constructed once at process start and
/// reused across requests; nothing here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub collector: Arc<DiffCollector>,
    pub retry: RetryPolicy,
}

pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(service_info))
        .route("/api/v1/heartbeat", post(heartbeat::handle_heartbeat))
        .route("/api/v1/workflow/end", post(workflow::handle_workflow_end))
        .layer(cors)
        .with_state(state)
}

#[derive(Serialize)]
struct ServiceInfo {
    service: &'static str,
    version: &'static str,
    status: &'static str,
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "recap",
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}
