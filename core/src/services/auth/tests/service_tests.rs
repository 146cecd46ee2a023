//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::token::Role;
use crate::errors::{AuthError, DomainError, OtpError, TokenError};
use crate::repositories::UserRepository;
use crate::services::auth::AuthService;
use crate::services::test_support::Fixture;

const PHONE: &str = "+998901234567";

fn auth_service(fixture: &Fixture) -> AuthService {
    AuthService::new(
        fixture.otp.clone(),
        fixture.tokens.clone(),
        fixture.hasher.clone(),
        Arc::new(fixture.users.clone()),
        Arc::new(fixture.restaurants.clone()),
    )
}

#[tokio::test]
async fn test_first_login_creates_user() {
    let fixture = Fixture::new();
    let service = auth_service(&fixture);

    service.request_otp(PHONE).await.unwrap();
    let code = fixture.notifier.last_code(PHONE).unwrap();
    let response = service.verify_otp(PHONE, &code).await.unwrap();

    assert!(response.is_new_user);
    assert_eq!(response.user.phone_number.as_deref(), Some(PHONE));
    assert!(response.user.full_name.is_empty());
    assert!(response.user.password_hash.is_none());
    assert_eq!(fixture.users.count().await, 1);

    let claims = fixture.tokens.verify_access_token(&response.tokens.access).unwrap();
    assert_eq!(claims.subject_id().unwrap(), response.user.id);
    assert_eq!(claims.role, Role::User);
}

#[tokio::test]
async fn test_returning_user_is_not_new() {
    let fixture = Fixture::new();
    let existing = fixture.customer(PHONE).await;
    let service = auth_service(&fixture);

    let issued = service.request_otp(PHONE).await.unwrap();
    let response = service.verify_otp(PHONE, &issued.code).await.unwrap();

    assert!(!response.is_new_user);
    assert_eq!(response.user.id, existing.id);
    assert_eq!(fixture.users.count().await, 1);
}

#[tokio::test]
async fn test_wrong_code_creates_nothing() {
    let fixture = Fixture::new();
    let service = auth_service(&fixture);

    service.request_otp(PHONE).await.unwrap();
    let result = service.verify_otp(PHONE, "000000").await;

    assert!(matches!(result, Err(DomainError::Otp(OtpError::InvalidCode))));
    assert_eq!(fixture.users.count().await, 0);
}

#[tokio::test]
async fn test_inactive_user_is_rejected() {
    let fixture = Fixture::new();
    let mut user = fixture.customer(PHONE).await;
    user.is_active = false;
    fixture.users.update(user).await.unwrap();
    let service = auth_service(&fixture);

    let issued = service.request_otp(PHONE).await.unwrap();
    let result = service.verify_otp(PHONE, &issued.code).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountDisabled))
    ));
}

#[tokio::test]
async fn test_refresh_returns_access_token() {
    let fixture = Fixture::new();
    let service = auth_service(&fixture);
    let issued = service.request_otp(PHONE).await.unwrap();
    let response = service.verify_otp(PHONE, &issued.code).await.unwrap();

    let access = service.refresh(&response.tokens.refresh).unwrap();

    let claims = fixture.tokens.verify_access_token(&access).unwrap();
    assert_eq!(claims.subject_id().unwrap(), response.user.id);
    assert!(matches!(
        service.refresh(&response.tokens.access),
        Err(DomainError::Token(TokenError::WrongTokenType))
    ));
}

#[tokio::test]
async fn test_admin_login_returns_restaurant() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    fixture.admin(PHONE, "s3cret", Some(restaurant.id)).await;
    let service = auth_service(&fixture);

    let response = service.admin_login(PHONE, "s3cret").await.unwrap();

    assert_eq!(response.restaurant_id, Some(restaurant.id));
    assert_eq!(response.restaurant_name.as_deref(), Some("Afsona"));
    assert!(fixture.tokens.verify_access_token(&response.tokens.access).is_ok());
}

#[tokio::test]
async fn test_admin_login_wrong_password() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    fixture.admin(PHONE, "s3cret", Some(restaurant.id)).await;
    let service = auth_service(&fixture);

    let result = service.admin_login(PHONE, "wrong").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_admin_login_unknown_phone_and_passwordless_user() {
    let fixture = Fixture::new();
    fixture.customer(PHONE).await;
    let service = auth_service(&fixture);

    for phone in [PHONE, "+998900000000"] {
        assert!(matches!(
            service.admin_login(phone, "anything").await,
            Err(DomainError::Auth(AuthError::InvalidCredentials))
        ));
    }
}

#[tokio::test]
async fn test_admin_login_requires_admin_profile() {
    let fixture = Fixture::new();
    fixture.admin(PHONE, "s3cret", None).await;
    let service = auth_service(&fixture);

    let result = service.admin_login(PHONE, "s3cret").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NotRestaurantAdmin))
    ));
}

#[tokio::test]
async fn test_superuser_without_restaurant_can_login() {
    let fixture = Fixture::new();
    let mut user = fixture.admin(PHONE, "s3cret", None).await;
    user.is_superuser = true;
    fixture.users.update(user).await.unwrap();
    let service = auth_service(&fixture);

    let response = service.admin_login(PHONE, "s3cret").await.unwrap();

    assert!(response.restaurant_id.is_none());
    assert!(response.restaurant_name.is_none());
}
