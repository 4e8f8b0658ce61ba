use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Returns a liveness message confirming the service is up.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Editor API is running"
    }))
}
