// ABOUTME: Router-level tests for the HTTP API: health, login, and food search
// ABOUTME: Drives the assembled router in-process and asserts status codes and wire shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use gympulse::models::UserRole;
use gympulse::server::router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let database = common::create_test_database().await.unwrap();
    let app = router(common::test_resources(database));

    let response = app.oneshot(get_request("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "gympulse-api");
}

#[tokio::test]
async fn login_returns_valid_token_and_public_user() {
    let database = common::create_test_database().await.unwrap();
    common::create_test_user(&database, "maria", "segredo123", UserRole::Admin)
        .await
        .unwrap();
    let resources = common::test_resources(database);
    let app = router(resources.clone());

    let response = app
        .oneshot(login_request("maria", "segredo123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;

    let token = body["token"].as_str().unwrap();
    let claims = resources.auth.validate_token(token).unwrap();
    assert_eq!(claims.username, "maria");
    assert_eq!(claims.role, UserRole::Admin);

    assert_eq!(body["user"]["username"], "maria");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let database = common::create_test_database().await.unwrap();
    common::create_test_user(&database, "maria", "segredo123", UserRole::Member)
        .await
        .unwrap();
    let app = router(common::test_resources(database));

    let response = app.oneshot(login_request("maria", "errada")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body, json!({ "error": "usuário ou senha inválidos" }));
}

#[tokio::test]
async fn login_for_unknown_user_matches_wrong_password_response() {
    let database = common::create_test_database().await.unwrap();
    let app = router(common::test_resources(database));

    let response = app
        .oneshot(login_request("ninguem", "segredo123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "usuário ou senha inválidos");
}

#[tokio::test]
async fn login_with_blank_fields_is_a_bad_request() {
    let database = common::create_test_database().await.unwrap();
    let app = router(common::test_resources(database));

    for (username, password) in [("", "segredo"), ("maria", ""), ("  ", "  ")] {
        let response = app
            .clone()
            .oneshot(login_request(username, password))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.into_body()).await;
        assert_eq!(body, json!({ "error": "informe usuário e senha" }));
    }
}

#[tokio::test]
async fn search_with_empty_query_returns_empty_list() {
    let database = common::create_test_database().await.unwrap();
    common::seed_taco_foods(&database).await.unwrap();
    let app = router(common::test_resources(database));

    for uri in ["/search", "/search?q=", "/search?q=%20%20"] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn search_returns_local_items_with_source_tag() {
    let database = common::create_test_database().await.unwrap();
    common::seed_taco_foods(&database).await.unwrap();
    let app = router(common::test_resources(database));

    let response = app.oneshot(get_request("/search?q=arroz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    let items = body.as_array().unwrap();

    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["source"], "taco");
        assert_eq!(item["portion"], "100 g");
        assert!(item["calories"].is_number());
        assert!(item["fat"].is_number());
    }
}

#[tokio::test]
async fn search_failure_collapses_to_generic_error() {
    // No local match, and the external API base points at an unreachable
    // port, so the chain errors out
    let database = common::create_test_database().await.unwrap();
    common::seed_taco_foods(&database).await.unwrap();
    let app = router(common::test_resources(database));

    let response = app
        .oneshot(get_request("/search?q=inexistente"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Erro ao buscar alimentos" }));
}
