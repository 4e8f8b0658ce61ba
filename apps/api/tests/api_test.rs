use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use api::enhance::enhancer::TemplateEnhancer;
use api::enhance::templates::{CONTENT_MARKER, SUMMARY_TEMPLATES};
use api::routes::{build_router, cors_layer};
use api::state::AppState;
use api::storage::store::ResumeStore;

fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let state = AppState {
        store: ResumeStore::new(dir.path()),
        enhancer: Arc::new(TemplateEnhancer),
    };
    (build_router(state).layer(cors_layer()), dir)
}

async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_reports_service_running() {
    let (app, _dir) = test_app();

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Resume Editor API is running"));
}

#[tokio::test]
async fn enhance_substitutes_content_into_template() {
    let (app, _dir) = test_app();

    let response = post_json(
        &app,
        "/ai-enhance",
        &json!({ "section": "summary", "content": "backend development" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // "backend development" is 19 characters, so the second template is used.
    let expected = SUMMARY_TEMPLATES[1].replace(CONTENT_MARKER, "backend development");
    let body = body_json(response).await;
    assert_eq!(body["enhanced_content"], json!(expected));
}

#[tokio::test]
async fn enhance_rejects_empty_and_whitespace_content() {
    let (app, _dir) = test_app();

    for content in ["", "   "] {
        let response = post_json(
            &app,
            "/ai-enhance",
            &json!({ "section": "summary", "content": content }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["detail"], json!("Content cannot be empty"));
    }
}

#[tokio::test]
async fn enhance_passes_unknown_sections_through() {
    let (app, _dir) = test_app();

    let response = post_json(
        &app,
        "/ai-enhance",
        &json!({ "section": "hobbies", "content": "Chess and hiking" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["enhanced_content"], json!("Chess and hiking"));
}

#[tokio::test]
async fn save_then_get_round_trip() {
    let (app, dir) = test_app();

    let document = json!({
        "name": "Ada Lovelace",
        "sections": {
            "summary": "Pioneering analyst",
            "skills": ["Mathematics", "Computing"]
        }
    });

    let response = post_json(&app, "/save-resume", &document).await;
    assert_eq!(response.status(), StatusCode::OK);

    let saved = body_json(response).await;
    assert_eq!(saved["message"], json!("Resume saved successfully"));
    let resume_id = saved["resume_id"].as_str().unwrap().to_string();
    assert!(resume_id.starts_with("resume_"));

    // The stored document carries the original fields plus id and saved_at.
    let response = get(&app, &format!("/resume/{resume_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["name"], json!("Ada Lovelace"));
    assert_eq!(fetched["sections"], document["sections"]);
    assert_eq!(fetched["id"], json!(resume_id));
    assert!(fetched["saved_at"].as_str().unwrap().contains('T'));

    // A pretty-printed mirror file lands in the store directory.
    let mirror = dir.path().join(format!("{resume_id}.json"));
    let contents = std::fs::read_to_string(&mirror).unwrap();
    let on_disk: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(on_disk, fetched);
}

#[tokio::test]
async fn saved_document_keys_keep_submission_order() {
    let (app, dir) = test_app();

    // Keys deliberately not alphabetical; the raw body pins the order the
    // caller submitted.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/save-resume")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"zeta":1,"mid":2,"alpha":3}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let saved = body_json(response).await;
    let resume_id = saved["resume_id"].as_str().unwrap().to_string();

    let fetched = body_json(get(&app, &format!("/resume/{resume_id}")).await).await;
    let keys: Vec<&str> = fetched
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        ["zeta", "mid", "alpha", "id", "saved_at"],
        "submission order must survive with injected fields appended last"
    );

    let contents =
        std::fs::read_to_string(dir.path().join(format!("{resume_id}.json"))).unwrap();
    let on_disk: Value = serde_json::from_str(&contents).unwrap();
    let disk_keys: Vec<&str> = on_disk
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(disk_keys, keys, "mirror file must keep the same key order");
}

#[tokio::test]
async fn resumes_lists_identifiers_in_save_order() {
    let (app, _dir) = test_app();

    let response = get(&app, "/resumes").await;
    let body = body_json(response).await;
    assert_eq!(body["resumes"], json!([]));

    let first = body_json(post_json(&app, "/save-resume", &json!({ "name": "First" })).await).await;
    // Identifiers have second precision, so spacing the saves out keeps them
    // distinct.
    tokio::time::sleep(Duration::from_millis(1100)).await;
    let second =
        body_json(post_json(&app, "/save-resume", &json!({ "name": "Second" })).await).await;

    let response = get(&app, "/resumes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["resumes"],
        json!([first["resume_id"], second["resume_id"]])
    );
}

#[tokio::test]
async fn get_unknown_resume_is_404() {
    let (app, _dir) = test_app();

    let response = get(&app, "/resume/resume_20200101_000000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["detail"], json!("Resume not found"));
}

#[tokio::test]
async fn save_rejects_non_object_body() {
    let (app, _dir) = test_app();

    let response = post_json(&app, "/save-resume", &json!([1, 2, 3])).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn preflight_allows_known_origin_with_credentials() {
    let (app, _dir) = test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/save-resume")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:5173")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|value| value.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn preflight_ignores_unknown_origin() {
    let (app, _dir) = test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/save-resume")
        .header(header::ORIGIN, "https://evil.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
