use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Static liveness probe; does not touch the database or the LLM.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is running"))
)]
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Personality Assessment API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
