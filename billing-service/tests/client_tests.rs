mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn user_token(app: &TestApp) -> String {
    app.register("nadia", "nadia@example.com", "secret123", None)
        .await;
    app.login_token("nadia", "secret123").await
}

#[tokio::test]
async fn test_create_client_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/clients")
        .json(&json!({ "name": "Acme Corp", "email": "billing@acme.example" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_get_client() {
    let app = TestApp::spawn().await;
    let token = user_token(&app).await;

    let response = app
        .post("/api/clients")
        .bearer_auth(&token)
        .json(&json!({
            "name": "Acme Corp",
            "email": "billing@acme.example",
            "phone": "0612345678"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["name"], "Acme Corp");
    assert_eq!(body["data"]["phone"], "0612345678");

    let response = app
        .get(&format!("/api/clients/{}", id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "billing@acme.example");
}

#[tokio::test]
async fn test_create_client_duplicate_name_conflicts() {
    let app = TestApp::spawn().await;
    let token = user_token(&app).await;

    app.post("/api/clients")
        .bearer_auth(&token)
        .json(&json!({ "name": "Acme Corp", "email": "billing@acme.example" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/clients")
        .bearer_auth(&token)
        .json(&json!({ "name": "Acme Corp", "email": "other@acme.example" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_client_short_name_rejected() {
    let app = TestApp::spawn().await;
    let token = user_token(&app).await;

    let response = app
        .post("/api/clients")
        .bearer_auth(&token)
        .json(&json!({ "name": "A", "email": "billing@acme.example" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_unknown_client_not_found() {
    let app = TestApp::spawn().await;
    let token = user_token(&app).await;

    let response = app
        .get("/api/clients/999")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_clients_pagination() {
    let app = TestApp::spawn().await;
    let token = user_token(&app).await;

    for i in 1..=5 {
        let response = app
            .post("/api/clients")
            .bearer_auth(&token)
            .json(&json!({
                "name": format!("Client {}", i),
                "email": format!("client{}@example.com", i)
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .get("/api/clients?skip=2&limit=2")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let clients = body["data"].as_array().unwrap();
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0]["name"], "Client 3");
    assert_eq!(clients[1]["name"], "Client 4");
}

#[tokio::test]
async fn test_delete_client_cascades_to_owned_records() {
    let app = TestApp::spawn().await;

    app.register("root-admin", "admin@example.com", "secret123", Some("admin"))
        .await;
    let token = app.login_token("root-admin", "secret123").await;

    app.post("/api/clients")
        .bearer_auth(&token)
        .json(&json!({ "name": "Acme Corp", "email": "billing@acme.example" }))
        .send()
        .await
        .expect("Failed to execute request");

    app.post("/api/clients/1/invoices")
        .bearer_auth(&token)
        .json(&json!({
            "number": "INV-001",
            "amount": 1500.50,
            "issued_on": "2024-01-15"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .delete("/api/clients/1")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The client is gone ...
    let response = app
        .get("/api/clients/1")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // ... and so is its invoice: updating it finds nothing
    let response = app
        .patch("/api/invoices/1")
        .bearer_auth(&token)
        .json(&json!({ "status": "paid" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_client_not_found() {
    let app = TestApp::spawn().await;

    app.register("root-admin", "admin@example.com", "secret123", Some("admin"))
        .await;
    let token = app.login_token("root-admin", "secret123").await;

    let response = app
        .delete("/api/clients/999")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
