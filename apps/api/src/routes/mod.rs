pub mod health;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::enhance::handlers::handle_enhance;
use crate::state::AppState;
use crate::storage::handlers::{handle_get_resume, handle_list_resumes, handle_save_resume};

/// Browser origins allowed to call the API with credentials.
const ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:5173",
    "https://resume-editor-rho-ashen.vercel.app",
];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/ai-enhance", post(handle_enhance))
        .route("/save-resume", post(handle_save_resume))
        .route("/resumes", get(handle_list_resumes))
        .route("/resume/:resume_id", get(handle_get_resume))
        .with_state(state)
}

/// CORS for the browser frontend: fixed origin allowlist with credentials.
/// Methods and headers mirror the request; tower-http rejects a wildcard
/// combined with `allow_credentials(true)`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.iter().copied().map(HeaderValue::from_static),
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
