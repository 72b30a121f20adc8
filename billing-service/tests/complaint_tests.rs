mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn setup_client(app: &TestApp) -> (String, i64) {
    app.register("nadia", "nadia@example.com", "secret123", None)
        .await;
    let token = app.login_token("nadia", "secret123").await;

    let response = app
        .post("/api/clients")
        .bearer_auth(&token)
        .json(&json!({ "name": "Acme Corp", "email": "billing@acme.example" }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");

    (token, body["data"]["id"].as_i64().unwrap())
}

#[tokio::test]
async fn test_create_complaint_defaults_to_open() {
    let app = TestApp::spawn().await;
    let (token, client_id) = setup_client(&app).await;

    let response = app
        .post(&format!("/api/clients/{}/complaints", client_id))
        .bearer_auth(&token)
        .json(&json!({
            "subject": "Billing problem",
            "description": "The January invoice never arrived.",
            "opened_on": "2024-02-20"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["subject"], "Billing problem");
    assert_eq!(body["data"]["status"], "open");
    assert_eq!(body["data"]["client_id"], client_id);
}

#[tokio::test]
async fn test_create_complaint_for_unknown_client_not_found() {
    let app = TestApp::spawn().await;
    let (token, _) = setup_client(&app).await;

    let response = app
        .post("/api/clients/999/complaints")
        .bearer_auth(&token)
        .json(&json!({
            "subject": "Billing problem",
            "description": "The January invoice never arrived.",
            "opened_on": "2024-02-20"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_complaint_empty_subject_rejected() {
    let app = TestApp::spawn().await;
    let (token, client_id) = setup_client(&app).await;

    let response = app
        .post(&format!("/api/clients/{}/complaints", client_id))
        .bearer_auth(&token)
        .json(&json!({
            "subject": "",
            "description": "The January invoice never arrived.",
            "opened_on": "2024-02-20"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_client_complaints() {
    let app = TestApp::spawn().await;
    let (token, client_id) = setup_client(&app).await;

    for subject in ["Late invoice", "Wrong amount"] {
        app.post(&format!("/api/clients/{}/complaints", client_id))
            .bearer_auth(&token)
            .json(&json!({
                "subject": subject,
                "description": "Details to follow.",
                "opened_on": "2024-02-20"
            }))
            .send()
            .await
            .expect("Failed to execute request");
    }

    let response = app
        .get(&format!("/api/clients/{}/complaints", client_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let complaints = body["data"].as_array().unwrap();
    assert_eq!(complaints.len(), 2);
}

#[tokio::test]
async fn test_update_complaint_status_lifecycle() {
    let app = TestApp::spawn().await;
    let (token, client_id) = setup_client(&app).await;

    let response = app
        .post(&format!("/api/clients/{}/complaints", client_id))
        .bearer_auth(&token)
        .json(&json!({
            "subject": "Billing problem",
            "description": "The January invoice never arrived.",
            "opened_on": "2024-02-20"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let complaint_id = body["data"]["id"].as_i64().unwrap();

    for status in ["in_progress", "resolved"] {
        let response = app
            .patch(&format!("/api/complaints/{}", complaint_id))
            .bearer_auth(&token)
            .json(&json!({ "status": status }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["data"]["status"], status);
    }
}

#[tokio::test]
async fn test_update_unknown_complaint_not_found() {
    let app = TestApp::spawn().await;
    let (token, _) = setup_client(&app).await;

    let response = app
        .patch("/api/complaints/999")
        .bearer_auth(&token)
        .json(&json!({ "status": "resolved" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
