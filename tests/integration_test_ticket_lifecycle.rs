mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_entry_then_exit_happy_path() {
    let app = TestApp::new().await;
    let owner = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&owner, "Rustconf Local").await;
    let ticket = app.create_inscription_for(&owner, &event, "22233344455").await;

    let res = app.request("POST", &format!("/api/event/validate-entry/{}", ticket), Some(json!({
        "eventCreatorId": owner
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "USADO");
    assert_eq!(body["participation_status"], "PARTICIPANDO");
    let entered_at = body["checkin"]["in"].as_str().unwrap().to_string();
    assert!(body["checkin"].get("out").is_none());

    let res = app.request("POST", &format!("/api/event/validate-exit/{}", ticket), Some(json!({
        "eventCreatorId": owner
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "USADO");
    assert_eq!(body["participation_status"], "PARTICIPADO");
    assert_eq!(body["checkin"]["in"].as_str().unwrap(), entered_at);
    assert!(body["checkin"]["out"].as_str().is_some());
}

#[tokio::test]
async fn test_double_entry_is_rejected() {
    let app = TestApp::new().await;
    let owner = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&owner, "Rustconf Local").await;
    let ticket = app.create_inscription_for(&owner, &event, "22233344455").await;

    let res = app.request("POST", &format!("/api/event/validate-entry/{}", ticket), Some(json!({
        "eventCreatorId": owner
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("POST", &format!("/api/event/validate-entry/{}", ticket), Some(json!({
        "eventCreatorId": owner
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("already used"));
}

#[tokio::test]
async fn test_exit_before_entry_is_rejected() {
    let app = TestApp::new().await;
    let owner = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&owner, "Rustconf Local").await;
    let ticket = app.create_inscription_for(&owner, &event, "22233344455").await;

    let res = app.request("POST", &format!("/api/event/validate-exit/{}", ticket), Some(json!({
        "eventCreatorId": owner
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("PARTICIPANDO"));
}

#[tokio::test]
async fn test_double_exit_is_rejected() {
    let app = TestApp::new().await;
    let owner = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&owner, "Rustconf Local").await;
    let ticket = app.create_inscription_for(&owner, &event, "22233344455").await;

    app.request("POST", &format!("/api/event/validate-entry/{}", ticket), Some(json!({"eventCreatorId": owner}))).await;
    app.request("POST", &format!("/api/event/validate-exit/{}", ticket), Some(json!({"eventCreatorId": owner}))).await;

    let res = app.request("POST", &format!("/api/event/validate-exit/{}", ticket), Some(json!({
        "eventCreatorId": owner
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("already recorded"));
}

#[tokio::test]
async fn test_entry_by_non_owner_is_forbidden_and_leaves_ticket_untouched() {
    let app = TestApp::new().await;
    let owner = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let intruder = app.register_user("Bia", "bia@example.com", "55566677788").await;
    let event = app.create_event(&owner, "Rustconf Local").await;
    let ticket = app.create_inscription_for(&owner, &event, "22233344455").await;

    let res = app.request("POST", &format!("/api/event/validate-entry/{}", ticket), Some(json!({
        "eventCreatorId": intruder
    }))).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.request("GET", &format!("/api/inscription/{}", ticket), None).await;
    let body = parse_body(res).await;
    assert_eq!(body["status"], "APROVADO");
    assert_eq!(body["participation_status"], "APROVADO");
    assert!(body["checkin"].get("in").is_none());
}

#[tokio::test]
async fn test_entry_on_cancelled_ticket_is_rejected() {
    let app = TestApp::new().await;
    let owner = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&owner, "Rustconf Local").await;
    let ticket = app.create_inscription_for(&owner, &event, "22233344455").await;

    let res = app.request("PATCH", &format!("/api/inscription/{}/cancel", ticket), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("POST", &format!("/api/event/validate-entry/{}", ticket), Some(json!({
        "eventCreatorId": owner
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("expired"));
}

#[tokio::test]
async fn test_cancel_after_entry_is_rejected() {
    let app = TestApp::new().await;
    let owner = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&owner, "Rustconf Local").await;
    let ticket = app.create_inscription_for(&owner, &event, "22233344455").await;

    app.request("POST", &format!("/api/event/validate-entry/{}", ticket), Some(json!({"eventCreatorId": owner}))).await;

    let res = app.request("PATCH", &format!("/api/inscription/{}/cancel", ticket), None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("cannot be cancelled"));
}

#[tokio::test]
async fn test_entry_on_unknown_ticket_is_not_found() {
    let app = TestApp::new().await;
    let owner = app.register_user("Ana", "ana@example.com", "11122233344").await;

    let res = app.request("POST", "/api/event/validate-entry/missing-ticket", Some(json!({
        "eventCreatorId": owner
    }))).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
