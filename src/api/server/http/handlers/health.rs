use axum::{extract::State, http::StatusCode, response::Json};
use log::warn;
use serde_json::json;

use crate::api::server::http::state::AppState;
use crate::storage::StorageClient;

pub async fn check<S: StorageClient + 'static>(
    State(state): State<AppState<S>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let (status, health, store) = match state.server.get_storage().verify().await {
        Ok(()) => (StatusCode::OK, "healthy", "up"),
        Err(e) => {
            warn!("Health check: store unreachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        }
    };

    (
        status,
        Json(json!({
            "status": health,
            "service": "staffgraph",
            "version": env!("CARGO_PKG_VERSION"),
            "store": store,
        })),
    )
}
