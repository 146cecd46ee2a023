//! Unit tests for the cashier service

use chrono::Duration;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::cashier::Cashier;
use crate::domain::entities::restaurant::Restaurant;
use crate::domain::entities::token::{Claims, TokenType};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{CashierRepository, RestaurantRepository, TransactionRepository};
use crate::services::cashier::CashierService;
use crate::services::test_support::Fixture;

const CASHIER_PHONE: &str = "+998901112233";
const PIN: &str = "0427";

fn cashier_service(fixture: &Fixture) -> CashierService {
    CashierService::new(
        Arc::new(fixture.cashiers.clone()),
        Arc::new(fixture.restaurants.clone()),
        Arc::new(fixture.users.clone()),
        Arc::new(fixture.transactions.clone()),
        fixture.tokens.clone(),
        fixture.hasher.clone(),
    )
}

async fn seed_cashier(fixture: &Fixture, restaurant: &Restaurant, active: bool) -> Cashier {
    let mut cashier = Cashier::new(
        restaurant.id,
        "Dilnoza".to_string(),
        CASHIER_PHONE.to_string(),
        fixture.hasher.hash(PIN).await.unwrap(),
    );
    cashier.is_active = active;
    fixture.cashiers.create(cashier).await.unwrap()
}

fn claims_for(fixture: &Fixture, cashier: &Cashier) -> Claims {
    let pair = fixture.tokens.generate_cashier_tokens(cashier).unwrap();
    fixture.tokens.verify_access_token(&pair.access).unwrap()
}

#[tokio::test]
async fn test_login_success() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let cashier = seed_cashier(&fixture, &restaurant, true).await;
    let service = cashier_service(&fixture);

    let response = service.login(restaurant.id, CASHIER_PHONE, PIN).await.unwrap();

    assert_eq!(response.cashier.id, cashier.id);
    assert_eq!(response.cashier.restaurant_name, "Afsona");
    let claims = fixture.tokens.verify_access_token(&response.tokens.access).unwrap();
    assert_eq!(claims.restaurant_uuid(), Some(restaurant.id));
    assert_eq!(claims.name.as_deref(), Some("Dilnoza"));
}

#[tokio::test]
async fn test_login_failures() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let other = fixture.restaurant("Caravan", 5).await;
    seed_cashier(&fixture, &restaurant, true).await;
    let service = cashier_service(&fixture);

    assert!(matches!(
        service.login(restaurant.id, CASHIER_PHONE, "9999").await,
        Err(DomainError::Auth(AuthError::InvalidPin))
    ));
    assert!(matches!(
        service.login(other.id, CASHIER_PHONE, PIN).await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login(restaurant.id, "+998900000000", PIN).await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_disabled_cashier_is_rejected_before_pin_check() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    seed_cashier(&fixture, &restaurant, false).await;
    let service = cashier_service(&fixture);

    for pin in [PIN, "9999"] {
        match service.login(restaurant.id, CASHIER_PHONE, pin).await {
            Err(DomainError::Auth(error)) => {
                assert_eq!(error, AuthError::CashierDisabled);
                assert_eq!(error.to_string(), "Cashier account is disabled");
            }
            other => panic!("Expected disabled, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_record_transaction_applies_discount() {
    let fixture = Fixture::new();
    let restaurant = fixture
        .restaurants
        .create(Restaurant::new("Afsona", Decimal::new(1250, 2)))
        .await
        .unwrap();
    let cashier = seed_cashier(&fixture, &restaurant, true).await;
    let customer = fixture.customer("+998901234567").await;
    let service = cashier_service(&fixture);

    let tx = service
        .record_transaction(
            &claims_for(&fixture, &cashier),
            customer.id,
            Decimal::new(1234567, 2),
        )
        .await
        .unwrap();

    assert_eq!(tx.discount_percentage, Decimal::new(1250, 2));
    assert_eq!(tx.discount_amount_uzs, Decimal::new(154321, 2));
    assert_eq!(tx.sum_after_discount, Decimal::new(1080246, 2));
    assert_eq!(tx.cashier_id, Some(cashier.id));
    assert_eq!(fixture.transactions.all().await.len(), 1);
    let (history, _) = fixture
        .transactions
        .list_by_user(customer.id, Default::default())
        .await
        .unwrap();
    assert_eq!(history[0].restaurant_name, "Afsona");
}

#[tokio::test]
async fn test_record_transaction_requires_cashier_role() {
    let fixture = Fixture::new();
    let customer = fixture.customer("+998901234567").await;
    let service = cashier_service(&fixture);
    let user_claims = Claims::for_user(customer.id, TokenType::Access, Duration::minutes(5), "chegirma");

    assert!(matches!(
        service
            .record_transaction(&user_claims, customer.id, Decimal::new(1000, 0))
            .await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    assert!(fixture.transactions.all().await.is_empty());
}

#[tokio::test]
async fn test_record_transaction_validates_input() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let cashier = seed_cashier(&fixture, &restaurant, true).await;
    let customer = fixture.customer("+998901234567").await;
    let service = cashier_service(&fixture);
    let claims = claims_for(&fixture, &cashier);

    for sum in [Decimal::ZERO, Decimal::new(-5, 0), Decimal::new(1001, 3)] {
        assert!(matches!(
            service.record_transaction(&claims, customer.id, sum).await,
            Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
        ));
    }
    assert!(matches!(
        service
            .record_transaction(&claims, Uuid::new_v4(), Decimal::new(1000, 0))
            .await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_disabled_cashier_cannot_record() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let mut cashier = seed_cashier(&fixture, &restaurant, true).await;
    let customer = fixture.customer("+998901234567").await;
    let claims = claims_for(&fixture, &cashier);
    cashier.is_active = false;
    fixture.cashiers.update(cashier).await.unwrap();
    let service = cashier_service(&fixture);

    assert!(matches!(
        service
            .record_transaction(&claims, customer.id, Decimal::new(1000, 0))
            .await,
        Err(DomainError::Auth(AuthError::CashierDisabled))
    ));
}
