//! Unit tests for the restaurant admin service

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use cg_shared::config::SecurityConfig;

use crate::domain::entities::cashier::CashierPatch;
use crate::domain::entities::restaurant::{Restaurant, RestaurantPatch};
use crate::domain::entities::transaction::{CustomerFilter, Transaction};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{CashierRepository, TransactionRepository, UserRepository};
use crate::services::restaurant_admin::{NewCashier, RestaurantAdminService};
use crate::services::test_support::Fixture;

use super::mocks::LineExporter;

fn admin_service(fixture: &Fixture) -> RestaurantAdminService {
    RestaurantAdminService::new(
        Arc::new(fixture.users.clone()),
        Arc::new(fixture.restaurants.clone()),
        Arc::new(fixture.cashiers.clone()),
        Arc::new(fixture.transactions.clone()),
        Arc::new(LineExporter),
        fixture.hasher.clone(),
        &SecurityConfig::default(),
    )
}

async fn admin_of(fixture: &Fixture, restaurant: &Restaurant) -> User {
    fixture
        .admin("+998901000000", "s3cret", Some(restaurant.id))
        .await
}

async fn purchase(fixture: &Fixture, user: &User, restaurant: &Restaurant, sum: i64, days_ago: i64) {
    let mut tx = Transaction::with_discount(
        user.id,
        restaurant.id,
        None,
        Decimal::new(sum, 0),
        restaurant.discount_percentage,
    );
    tx.created_at = Utc::now() - Duration::days(days_ago);
    fixture.transactions.create(tx).await.unwrap();
}

fn new_cashier(name: &str, phone: &str) -> NewCashier {
    NewCashier {
        name: name.to_string(),
        phone_number: phone.to_string(),
    }
}

#[tokio::test]
async fn test_resolve_restaurant_rules() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let customer = fixture.customer("+998901234567").await;
    let mut superuser = User::new_customer("+998909999999".to_string());
    superuser.is_superuser = true;
    let superuser = fixture.users.create(superuser).await.unwrap();
    let service = admin_service(&fixture);

    assert_eq!(service.resolve_restaurant(admin.id).await.unwrap().id, restaurant.id);
    assert!(matches!(
        service.resolve_restaurant(customer.id).await,
        Err(DomainError::Auth(AuthError::NotRestaurantAdmin))
    ));
    assert!(matches!(
        service.resolve_restaurant(superuser.id).await,
        Err(DomainError::Auth(AuthError::NoRestaurantAssociated))
    ));
}

#[tokio::test]
async fn test_customers_are_scoped_and_filtered() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let other = fixture.restaurant("Caravan", 5).await;
    let admin = admin_of(&fixture, &restaurant).await;

    let mut aziz = fixture.customer("+998901111111").await;
    aziz.full_name = "Aziz".to_string();
    let aziz = fixture.users.update(aziz).await.unwrap();
    let bobur = fixture.customer("+998902222222").await;

    purchase(&fixture, &aziz, &restaurant, 100_000, 3).await;
    purchase(&fixture, &aziz, &restaurant, 50_000, 1).await;
    purchase(&fixture, &bobur, &restaurant, 20_000, 10).await;
    purchase(&fixture, &bobur, &other, 900_000, 0).await;

    let service = admin_service(&fixture);
    let all = service.customers(admin.id, &CustomerFilter::default()).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].user_id, aziz.id);
    assert_eq!(all[0].total_transactions, 2);
    assert_eq!(all[0].total_before_discount, Decimal::new(150_000, 0));
    assert_eq!(all[0].total_discount, Decimal::new(15_000, 0));
    assert_eq!(all[0].total_after_discount, Decimal::new(135_000, 0));

    let big_spenders = CustomerFilter {
        min_spent: Some(Decimal::new(100_000, 0)),
        ..Default::default()
    };
    let rows = service.customers(admin.id, &big_spenders).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].full_name, "Aziz");

    let by_phone = CustomerFilter {
        search: Some("2222".to_string()),
        ..Default::default()
    };
    let rows = service.customers(admin.id, &by_phone).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, bobur.id);

    let recent = CustomerFilter {
        date_from: Some((Utc::now() - Duration::days(5)).date_naive()),
        ..Default::default()
    };
    assert_eq!(service.customers(admin.id, &recent).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_export_uses_restaurant_name_and_filter() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let customer = fixture.customer("+998901111111").await;
    purchase(&fixture, &customer, &restaurant, 10_000, 0).await;
    let service = admin_service(&fixture);

    let file = service
        .export_customers(admin.id, &CustomerFilter::default())
        .await
        .unwrap();

    assert_eq!(file.filename, "Afsona_users.txt");
    assert_eq!(file.content_type, "text/plain");
    assert_eq!(String::from_utf8(file.bytes).unwrap(), "+998901111111;;1");
}

#[tokio::test]
async fn test_create_cashier_returns_pin_once() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let service = admin_service(&fixture);

    let created = service
        .create_cashier(admin.id, new_cashier("Dilnoza", "+998901112233"))
        .await
        .unwrap();

    assert_eq!(created.pin_code.len(), 4);
    assert!(created.pin_code.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(created.message, "Save this PIN - it will not be shown again.");
    assert_eq!(created.cashier.restaurant_id, restaurant.id);

    let stored = fixture.cashiers.find_by_id(created.cashier.id).await.unwrap().unwrap();
    assert_ne!(stored.pin_hash, created.pin_code);
    assert!(fixture.hasher.verify(&created.pin_code, &stored.pin_hash).await.unwrap());

    let json = serde_json::to_value(&created).unwrap();
    assert!(json["cashier"].get("pin_hash").is_none());
}

#[tokio::test]
async fn test_create_cashier_validation_and_duplicates() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let service = admin_service(&fixture);

    assert!(matches!(
        service.create_cashier(admin.id, new_cashier("", "+998901112233")).await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));

    service
        .create_cashier(admin.id, new_cashier("Dilnoza", "+998901112233"))
        .await
        .unwrap();
    assert!(matches!(
        service.create_cashier(admin.id, new_cashier("Other", "+998901112233")).await,
        Err(DomainError::Conflict { .. })
    ));
}

#[tokio::test]
async fn test_cashiers_of_other_restaurants_are_hidden() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let other = fixture.restaurant("Caravan", 5).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let other_admin = fixture.admin("+998907777777", "pw", Some(other.id)).await;
    let service = admin_service(&fixture);

    let foreign = service
        .create_cashier(other_admin.id, new_cashier("Jasur", "+998903334455"))
        .await
        .unwrap();

    assert!(service.list_cashiers(admin.id).await.unwrap().is_empty());
    assert!(matches!(
        service
            .update_cashier(admin.id, foreign.cashier.id, CashierPatch::default())
            .await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.regenerate_pin(admin.id, foreign.cashier.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.regenerate_pin(admin.id, Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_and_regenerate_pin() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let service = admin_service(&fixture);
    let created = service
        .create_cashier(admin.id, new_cashier("Dilnoza", "+998901112233"))
        .await
        .unwrap();

    let updated = service
        .update_cashier(
            admin.id,
            created.cashier.id,
            CashierPatch {
                name: Some("Dilnoza R.".to_string()),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Dilnoza R.");
    assert!(!updated.is_active);
    assert_eq!(updated.phone_number, "+998901112233");

    let reissued = service.regenerate_pin(admin.id, created.cashier.id).await.unwrap();
    let stored = fixture.cashiers.find_by_id(created.cashier.id).await.unwrap().unwrap();
    assert!(fixture.hasher.verify(&reissued.pin_code, &stored.pin_hash).await.unwrap());
    assert_eq!(
        reissued.message,
        "New PIN generated. Save it - it will not be shown again."
    );
}

#[tokio::test]
async fn test_update_restaurant_settings() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let service = admin_service(&fixture);

    let updated = service
        .update_restaurant(
            admin.id,
            RestaurantPatch {
                description: Some("Family restaurant".to_string()),
                discount_percentage: Some(Decimal::new(1250, 2)),
                social_media: Some(serde_json::json!({"instagram": "@afsona"})),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Afsona");
    assert_eq!(updated.description, "Family restaurant");
    assert_eq!(updated.discount_percentage, Decimal::new(1250, 2));
    assert_eq!(service.restaurant(admin.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_restaurant_rejects_bad_discount() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let service = admin_service(&fixture);

    for pct in [Decimal::new(-1, 0), Decimal::new(101, 0), Decimal::new(10_001, 3)] {
        let patch = RestaurantPatch {
            discount_percentage: Some(pct),
            ..Default::default()
        };
        assert!(matches!(
            service.update_restaurant(admin.id, patch).await,
            Err(DomainError::ValidationErr(ValidationError::OutOfRange { .. }))
        ));
    }
}

#[tokio::test]
async fn test_add_gallery_image() {
    let fixture = Fixture::new();
    let restaurant = fixture.restaurant("Afsona", 10).await;
    let admin = admin_of(&fixture, &restaurant).await;
    let service = admin_service(&fixture);

    let image = service
        .add_gallery_image(admin.id, "restaurants/gallery/hall.jpg")
        .await
        .unwrap();

    assert_eq!(image.restaurant_id, restaurant.id);
    assert!(matches!(
        service.add_gallery_image(admin.id, " ").await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}
