mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use site_router::api::handlers::{site_handler, site_list_handler};
use site_router::domain::profiles::Profile;
use site_router::state::AppState;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/sites", get(site_list_handler))
        .route("/api/sites/{site_id}", get(site_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_site_list_in_registry_order() {
    let server = make_server(common::create_test_state());

    let response = server.get("/api/sites").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["profile"], "production");

    let ids: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["siteId"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["srd", "sanskrut-corp", "sanskrut-enterprises", "sandeep", "selector"]
    );
}

#[tokio::test]
async fn test_site_list_urls() {
    let server = make_server(common::create_test_state());

    let json = server.get("/api/sites").await.json::<Value>();
    let items = json["items"].as_array().unwrap();

    assert_eq!(items[0]["internalUrl"], "/?site=srd");
    assert_eq!(items[0]["externalUrl"], "https://srd.fund");
    assert_eq!(items[0]["isSelector"], false);

    let selector = &items[4];
    assert_eq!(selector["internalUrl"], "/");
    assert_eq!(selector["isSelector"], true);
    assert!(selector.get("externalUrl").is_none());
}

#[tokio::test]
async fn test_site_by_id() {
    let server = make_server(common::create_test_state());

    let response = server.get("/api/sites/sanskrut-corp").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["domain"], "corp.sanskrut.in");
    assert_eq!(json["displayName"], "Sanskrut Corp");
}

#[tokio::test]
async fn test_site_by_id_staging_profile() {
    let server = make_server(common::create_profile_state(Profile::Staging));

    let response = server.get("/api/sites/sanskrut-enterprises").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["domain"], "ent.sanskrut.com");
}

#[tokio::test]
async fn test_site_not_found() {
    let server = make_server(common::create_test_state());

    let response = server.get("/api/sites/ghost").await;

    response.assert_status_not_found();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["site_id"], "ghost");
}
