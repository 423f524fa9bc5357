mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_self_registration_derives_participant_from_profile() {
    let app = TestApp::new().await;
    let user = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&user, "Rustconf Local").await;

    let res = app.request("POST", "/api/inscription", Some(json!({
        "userId": user,
        "eventId": event,
        "forAnotherOne": false
    }))).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "APROVADO");
    assert_eq!(body["participation_status"], "APROVADO");
    assert_eq!(body["forAnotherOne"], false);
    assert_eq!(body["participants"]["name"], "Ana Silva");
    assert_eq!(body["participants"]["email"], "ana@example.com");
    assert_eq!(body["participants"]["document"], "11122233344");
}

#[tokio::test]
async fn test_for_another_one_requires_full_participant() {
    let app = TestApp::new().await;
    let user = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&user, "Rustconf Local").await;

    let res = app.request("POST", "/api/inscription", Some(json!({
        "userId": user,
        "eventId": event,
        "forAnotherOne": true,
        "participants": {
            "name": "Convidado",
            "email": "convidado@example.com"
        }
    }))).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("dateOfBirth"));
    assert!(message.contains("document"));
}

#[tokio::test]
async fn test_registration_requires_existing_user_and_event() {
    let app = TestApp::new().await;
    let user = app.register_user("Ana", "ana@example.com", "11122233344").await;

    let res = app.request("POST", "/api/inscription", Some(json!({
        "userId": "missing-user",
        "eventId": "missing-event",
        "forAnotherOne": false
    }))).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.request("POST", "/api/inscription", Some(json!({
        "userId": user,
        "eventId": "missing-event",
        "forAnotherOne": false
    }))).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_document_for_same_event_is_conflict() {
    let app = TestApp::new().await;
    let user = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&user, "Rustconf Local").await;

    app.create_inscription_for(&user, &event, "22233344455").await;

    let res = app.request("POST", "/api/inscription", Some(json!({
        "userId": user,
        "eventId": event,
        "forAnotherOne": true,
        "participants": {
            "name": "Mesmo Documento",
            "email": "outro@example.com",
            "dateOfBirth": "1990-01-01",
            "document": "22233344455"
        }
    }))).await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_same_document_allowed_on_different_events() {
    let app = TestApp::new().await;
    let user = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event_a = app.create_event(&user, "Ev A").await;
    let event_b = app.create_event(&user, "Ev B").await;

    app.create_inscription_for(&user, &event_a, "22233344455").await;
    app.create_inscription_for(&user, &event_b, "22233344455").await;
}

#[tokio::test]
async fn test_cancel_expires_ticket_and_is_not_repeatable() {
    let app = TestApp::new().await;
    let user = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&user, "Rustconf Local").await;
    let inscription = app.create_inscription_for(&user, &event, "22233344455").await;

    let res = app.request("PATCH", &format!("/api/inscription/{}/cancel", inscription), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "EXPIRADO");
    assert_eq!(body["participation_status"], "NAO_COMPARECEU");

    let res = app.request("PATCH", &format!("/api/inscription/{}/cancel", inscription), None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("already expired"));
}

#[tokio::test]
async fn test_cancelled_ticket_frees_document_for_new_registration() {
    let app = TestApp::new().await;
    let user = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&user, "Rustconf Local").await;
    let inscription = app.create_inscription_for(&user, &event, "22233344455").await;

    let res = app.request("PATCH", &format!("/api/inscription/{}/cancel", inscription), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    // The expired ticket no longer blocks the document
    app.create_inscription_for(&user, &event, "22233344455").await;
}

#[tokio::test]
async fn test_get_and_list_inscriptions() {
    let app = TestApp::new().await;
    let user = app.register_user("Ana", "ana@example.com", "11122233344").await;
    let event = app.create_event(&user, "Rustconf Local").await;
    let inscription = app.create_inscription_for(&user, &event, "22233344455").await;

    let res = app.request("GET", &format!("/api/inscription/{}", inscription), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["eventId"], event.as_str());

    let res = app.request("GET", "/api/inscription", None).await;
    let list = parse_body(res).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let res = app.request("GET", "/api/inscription/missing-id", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
