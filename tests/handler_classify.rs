mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::{Value, json};
use site_router::api::handlers::classify_handler;
use site_router::application::services::SiteService;
use site_router::domain::profiles::Profile;
use site_router::state::AppState;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/classify", post(classify_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_classify_domain() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/api/classify")
        .json(&json!({ "input": "  SRD.fund " }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["isValid"], true);
    assert_eq!(json["kind"], "domain");
    assert_eq!(json["canonicalDestination"], "https://srd.fund");
    assert_eq!(json["isExternal"], true);
    assert_eq!(json["metadata"]["siteId"], "srd");
    assert!(json.get("errorMessage").is_none());
}

#[tokio::test]
async fn test_classify_known_path() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/api/classify")
        .json(&json!({ "input": "/person/sandeep" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["kind"], "path");
    assert_eq!(json["canonicalDestination"], "/person/sandeep");
    assert_eq!(json["metadata"]["pathType"], "person");
    assert_eq!(json["metadata"]["identifier"], "sandeep");
}

#[tokio::test]
async fn test_classify_near_miss_path_is_200_with_suggestions() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/api/classify")
        .json(&json!({ "input": "/profile/spacez" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["kind"], "invalid");
    assert_eq!(json["errorMessage"], "Path not found: /profile/spacez");
    assert_eq!(json["suggestions"][0], "/profile/spacex");
}

#[tokio::test]
async fn test_classify_external_url() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/api/classify")
        .json(&json!({ "input": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["kind"], "external");
    assert_eq!(json["isExternal"], true);
    assert_eq!(json["canonicalDestination"], "https://example.com/page");
    assert_eq!(json["displayLabel"], "External: example.com");
}

#[tokio::test]
async fn test_classify_unknown_site_parameter() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/api/classify")
        .json(&json!({ "input": "?site=ghost" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["errorMessage"], "Unknown site identifier: ghost");
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_classify_empty_input() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/api/classify")
        .json(&json!({ "input": "   " }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["errorMessage"], "Input cannot be empty");
}

#[tokio::test]
async fn test_classify_input_too_long() {
    let site_service = SiteService::for_profile(Profile::Production).unwrap();
    let server = make_server(AppState::new(site_service, common::DEFAULT_HOST, 16));

    let response = server
        .post("/api/classify")
        .json(&json!({ "input": "/profile/".repeat(4) }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["max_length"], 16);
}

#[tokio::test]
async fn test_classify_missing_input_field() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/api/classify")
        .json(&json!({ "query": "srd" }))
        .await;

    assert!(response.status_code().is_client_error());
}
