//! Integration tests for JWT protection of the API scopes

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use cg_api::create_app;
use cg_core::services::TokenService;
use cg_shared::config::{CorsConfig, JwtConfig};

use common::{bearer, TestContext};

#[actix_web::test]
async fn test_health_is_public() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/nowhere/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_profile_requires_token() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/me/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(
        body["message"],
        "Authentication credentials were not provided"
    );
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get()
        .uri("/api/me/")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_token_from_other_secret_is_rejected() {
    let ctx = TestContext::new();
    let user = ctx.customer("+998901112233").await;
    let foreign = TokenService::new(JwtConfig::new("some-other-secret"))
        .generate_user_tokens(&user)
        .unwrap();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get()
        .uri("/api/me/")
        .insert_header(bearer(&foreign.access))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_refresh_token_does_not_authenticate() {
    let ctx = TestContext::new();
    let user = ctx.customer("+998901112233").await;
    let tokens = ctx.state.token_service.generate_user_tokens(&user).unwrap();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get()
        .uri("/api/me/")
        .insert_header(bearer(&tokens.refresh))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_cashier_token_cannot_reach_customer_scope() {
    let ctx = TestContext::new();
    let restaurant = ctx.restaurant("Rayhon", 10).await;
    let cashier = ctx.cashier(restaurant.id, "+998905554433", "1234").await;
    let token = ctx.cashier_token(&cashier);
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    for uri in ["/api/me/", "/api/restaurant-admin/users/"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{}", uri);
    }
}

#[actix_web::test]
async fn test_user_token_cannot_record_transactions() {
    let ctx = TestContext::new();
    let user = ctx.customer("+998901112233").await;
    let token = ctx.user_token(&user);
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/cashier/transactions/")
        .insert_header(bearer(&token))
        .set_json(json!({ "user_id": user.id, "sum_before_discount": "1000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_booking_requires_token_but_listing_does_not() {
    let ctx = TestContext::new();
    ctx.restaurant("Rayhon", 10).await;
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/restaurants/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/restaurants/book-table/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
