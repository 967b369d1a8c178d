use std::sync::Arc;

use reqwest::StatusCode;
use roster_api::app::{build_app, AppOptions, AppServices};
use roster_api::app::users::USERS_COLLECTION;
use roster_core::Document;
use roster_core::document::doc_with;
use roster_infra::DocumentStore;
use serde_json::json;

struct TestServer {
    base_url: String,
    store: Arc<dyn DocumentStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, in-memory store, ephemeral port.
        let services = AppServices::in_memory();
        let store = services.store_handle();
        let app = build_app(services, AppOptions::default());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            store,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn users(&self) -> Vec<Document> {
        self.store
            .find(USERS_COLLECTION, &Document::new())
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn bob_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstname", "Bob"),
        ("lastname", "Jones"),
        ("username", "bobby1"),
        ("email", "bob@x.com"),
        ("about", "hi"),
    ]
}

#[tokio::test]
async fn health_and_home_page() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(srv.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await.unwrap();
    assert!(html.contains("<form action=\"/users/add\""));
}

#[tokio::test]
async fn stylesheet_is_served_regardless_of_working_directory() {
    // Run from the workspace root, not the crate dir cargo test defaults to.
    let workspace_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    std::env::set_current_dir(&workspace_root).unwrap();

    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(srv.url("/stylesheets/main.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("font-family"));
}

#[tokio::test]
async fn add_user_with_form_body_inserts_one_document() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/users/add"))
        .form(&bob_form())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Added the user");
    assert_eq!(body["payload"], json!({}));
    assert!(body["timestamp"].as_i64().unwrap() > 0);

    let users = srv.users().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "bobby1");
    assert_eq!(users[0]["firstname"], "Bob");
    assert_eq!(users[0].len(), 5);
}

#[tokio::test]
async fn add_user_accepts_json_and_drops_unvalidated_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/users/add"))
        .json(&json!({
            "username": "  bobby1  ",
            "email": "bob@x.com",
            "role": "admin",
        }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);

    let users = srv.users().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "bobby1");
    assert!(users[0].get("role").is_none());
    assert!(users[0].get("about").is_none());
}

#[tokio::test]
async fn add_user_without_username_reports_field_error_and_writes_nothing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let form: Vec<_> = bob_form().into_iter().filter(|(k, _)| *k != "username").collect();
    let res = client
        .post(srv.url("/users/add"))
        .form(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["errors"]["username"]["msg"],
        "Between 5 and 20 letters and digits"
    );
    assert!(body.get("success").is_none());
    assert!(srv.users().await.is_empty());
}

#[tokio::test]
async fn invalid_fields_are_all_reported_together() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/users/add"))
        .form(&[("username", "bob"), ("email", "not-an-email"), ("about", "no, commas")])
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();

    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors["email"]["msg"], "Must be an email");
    assert_eq!(errors["email"]["value"], "not-an-email");
    assert_eq!(errors["about"]["msg"], "Only letters and spaces");
    assert!(srv.users().await.is_empty());
}

#[tokio::test]
async fn update_email_is_scoped_to_current_user_and_idempotent() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut bob = doc_with("username", "bobbyjones");
    bob.insert("email".to_string(), json!("old@x.com"));
    bob.insert("about".to_string(), json!("hello"));
    srv.store.insert_one(USERS_COLLECTION, bob).await.unwrap();
    srv.store
        .insert_one(USERS_COLLECTION, doc_with("username", "alice1"))
        .await
        .unwrap();

    for _ in 0..2 {
        let res = client
            .post(srv.url("/users/update/email"))
            .form(&[("email", "new@x.com")])
            .send()
            .await
            .unwrap();
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Updated the user email");

        let users = srv.users().await;
        assert_eq!(users[0]["email"], "new@x.com");
        assert_eq!(users[0]["about"], "hello");
        assert_eq!(users[0]["username"], "bobbyjones");
        assert!(users[1].get("email").is_none());
    }
}

#[tokio::test]
async fn update_email_requires_a_valid_email() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/users/update/email"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["errors"]["email"]["msg"], "Must be an email");
}

#[tokio::test]
async fn update_about_without_current_user_document_fails() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/users/update/about"))
        .form(&[("about", "new bio")])
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "There was an error updating the about message");
}

#[tokio::test]
async fn update_about_overwrites_only_about() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut bob = doc_with("username", "bobbyjones");
    bob.insert("email".to_string(), json!("bob@x.com"));
    srv.store.insert_one(USERS_COLLECTION, bob).await.unwrap();

    let res = client
        .post(srv.url("/users/update/about"))
        .json(&json!({ "about": "I like trains", "email": "ignored@x.com" }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Updated the about message");

    let users = srv.users().await;
    assert_eq!(users[0]["about"], "I like trains");
    assert_eq!(users[0]["email"], "bob@x.com");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/users/add"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "malformed_body");
}

#[tokio::test]
async fn users_listing_echoes_the_body() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({}));

    let res = client
        .get(srv.url("/users"))
        .json(&json!({ "ping": 1 }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "ping": 1 }));
}

#[tokio::test]
async fn remove_is_not_routed() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    srv.store
        .insert_one(USERS_COLLECTION, doc_with("username", "bobbyjones"))
        .await
        .unwrap();

    let res = client
        .post(srv.url("/users/remove"))
        .form(&[("username", "bobbyjones")])
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
    assert_eq!(srv.users().await.len(), 1);
}
