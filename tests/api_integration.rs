//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use mindtriage::core::create_router;

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create_session(app: &axum::Router, language: &str) -> String {
    let response = app
        .clone()
        .oneshot(post("/session/new", json!({ "language": language })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["languages"], 12);
}

#[tokio::test]
async fn test_create_session_returns_welcome() {
    let app = create_router();

    let response = app
        .oneshot(post("/session/new", json!({ "language": "es" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["session_id"].is_string());
    assert!(json["websocket_url"].as_str().unwrap().starts_with("/ws/"));
    assert_eq!(json["welcome"]["author"], "ai");
    assert_eq!(json["welcome"]["language"], "es");
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = create_router();

    let response = app
        .clone()
        .oneshot(get("/session/nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(post("/session/nope/message", json!({ "text": "hello" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_message_flow_classifies_crisis() {
    let app = create_router();
    let id = create_session(&app, "en").await;

    let response = app
        .clone()
        .oneshot(post(
            &format!("/session/{}/message", id),
            json!({ "text": "I want to kill myself tonight" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["reply"]["severity"], "crisis");
    let actions = json["reply"]["actions"].as_array().unwrap();
    assert!(actions.iter().any(|a| a["kind"] == "emergency" && a["urgent"] == true));

    let response = app
        .oneshot(get(&format!("/session/{}", id)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["severity"], "crisis");
    // welcome + user + assistant reply
    assert_eq!(json["history"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_language_switch_rewrites_welcome() {
    let app = create_router();
    let id = create_session(&app, "en").await;

    let response = app
        .clone()
        .oneshot(post(
            &format!("/session/{}/language", id),
            json!({ "language": "fr" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["language"], "fr");
    assert_eq!(json["welcome"]["language"], "fr");
    assert!(json["welcome"]["text"].as_str().unwrap().contains("MindBuddy"));

    let response = app
        .oneshot(get(&format!("/session/{}", id)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["history"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_offline_queue_and_reconnect() {
    let app = create_router();
    let id = create_session(&app, "en").await;

    let response = app
        .clone()
        .oneshot(post(&format!("/session/{}/offline", id), json!({})))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["online"], false);

    let response = app
        .clone()
        .oneshot(post(
            &format!("/session/{}/message", id),
            json!({ "text": "anyone there?" }),
        ))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert!(json["reply"]["text"].as_str().unwrap().contains("offline"));

    let response = app
        .clone()
        .oneshot(post(&format!("/session/{}/reconnect", id), json!({})))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["online"], true);
    assert_eq!(json["queued"], 0);
    // welcome + offline notice + delivered user message
    assert_eq!(json["history_len"], 3);
}

#[tokio::test]
async fn test_action_dispatch_reports_host_events() {
    let app = create_router();
    let id = create_session(&app, "en").await;

    let response = app
        .clone()
        .oneshot(post(
            &format!("/session/{}/action", id),
            json!({ "action": { "kind": "emergency", "label": "Emergency Helpline", "urgent": true } }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let events = json["dispatched"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "dial_emergency");
    assert_eq!(events[0]["number"], "988");
}

#[tokio::test]
async fn test_followup_action_grows_history() {
    let app = create_router();
    let id = create_session(&app, "en").await;

    let response = app
        .clone()
        .oneshot(post(
            &format!("/session/{}/action", id),
            json!({ "action": { "kind": "followup", "label": "Keep Talking" } }),
        ))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert!(json["dispatched"].as_array().unwrap().is_empty());

    let response = app
        .oneshot(get(&format!("/session/{}", id)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["history"].as_array().unwrap().len(), 2);
}
