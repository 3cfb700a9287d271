mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use site_router::api::handlers::resolve_handler;

fn make_server() -> TestServer {
    let app = Router::new()
        .route("/api/resolve", get(resolve_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_resolve_tenant_domain_rewrites() {
    let server = make_server();

    let response = server.get("/api/resolve?host=srd.fund").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["host"], "srd.fund");
    assert_eq!(json["action"], "rewrite");
    assert_eq!(json["siteId"], "srd");
    assert_eq!(json["tenant"]["siteId"], "srd");
    assert_eq!(json["tenant"]["externalUrl"], "https://srd.fund");
}

#[tokio::test]
async fn test_resolve_valid_site_parameter_wins() {
    let server = make_server();

    let response = server
        .get("/api/resolve?host=srd.fund&site=sandeep")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["action"], "none");
    assert_eq!(json["tenant"]["siteId"], "sandeep");
    assert!(json.get("siteId").is_none());
}

#[tokio::test]
async fn test_resolve_unknown_site_parameter_redirects() {
    let server = make_server();

    let response = server.get("/api/resolve?host=srd.fund&site=ghost").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["action"], "redirect");
    assert_eq!(json["tenant"]["siteId"], "srd");
}

#[tokio::test]
async fn test_resolve_local_host_is_selector() {
    let server = make_server();

    let response = server.get("/api/resolve?host=localhost:5173").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["action"], "none");
    assert_eq!(json["tenant"]["siteId"], "selector");
    assert_eq!(json["tenant"]["isSelector"], true);
}

#[tokio::test]
async fn test_resolve_defaults_to_request_host() {
    let server = make_server();

    let response = server
        .get("/api/resolve")
        .add_header("Host", "sandeepkoduri.com")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["host"], "sandeepkoduri.com");
    assert_eq!(json["action"], "rewrite");
    assert_eq!(json["siteId"], "sandeep");
}
