//! MySQL repository tests against a live database

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use cg_core::domain::entities::cashier::Cashier;
use cg_core::domain::entities::otp::PhoneOtp;
use cg_core::domain::entities::restaurant::Restaurant;
use cg_core::domain::entities::transaction::Transaction;
use cg_core::domain::entities::user::User;
use cg_core::errors::DomainError;
use cg_core::repositories::{
    CashierRepository, OtpRepository, RestaurantRepository, TransactionRepository, UserRepository,
};
use cg_shared::types::Pagination;

use crate::database::{
    DatabasePool, MySqlCashierRepository, MySqlOtpRepository, MySqlRestaurantRepository,
    MySqlTransactionRepository, MySqlUserRepository,
};

async fn pool() -> DatabasePool {
    let pool = DatabasePool::new(super::test_config()).await.unwrap();
    pool.run_migrations().await.unwrap();
    pool
}

fn unique_phone() -> String {
    let digits = uuid::Uuid::new_v4().as_u128() % 10_000_000;
    format!("+99890{:07}", digits)
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_otp_conditional_updates() {
    let repo = MySqlOtpRepository::new(pool().await.get_pool().clone());
    let phone = unique_phone();
    let now = Utc::now();
    let otp = repo
        .create(PhoneOtp::new(phone.clone(), now, Duration::minutes(5)))
        .await
        .unwrap();

    assert_eq!(repo.count_created_since(&phone, now - Duration::minutes(1)).await.unwrap(), 1);
    let pending = repo.find_latest_pending(&phone, now).await.unwrap().unwrap();
    assert_eq!(pending.id, otp.id);

    assert!(repo.record_failed_attempt(otp.id, 0).await.unwrap());
    // Stale snapshot loses
    assert!(!repo.record_failed_attempt(otp.id, 0).await.unwrap());
    assert!(!repo.mark_verified(otp.id, 0, now).await.unwrap());
    assert!(repo.mark_verified(otp.id, 1, now).await.unwrap());
    assert!(!repo.mark_verified(otp.id, 1, now).await.unwrap());

    assert!(repo.find_latest_pending(&phone, now).await.unwrap().is_none());
    let stored = repo.find_by_id(otp.id).await.unwrap().unwrap();
    assert!(stored.is_verified);
    assert_eq!(stored.attempt_count, 1);
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_user_phone_is_unique_and_likes_round_trip() {
    let pool = pool().await;
    let users = MySqlUserRepository::new(pool.get_pool().clone());
    let restaurants = MySqlRestaurantRepository::new(pool.get_pool().clone());
    let phone = unique_phone();

    let user = users.create(User::new_customer(phone.clone())).await.unwrap();
    assert!(matches!(
        users.create(User::new_customer(phone.clone())).await,
        Err(DomainError::Conflict { .. })
    ));

    let restaurant = restaurants
        .create(Restaurant::new("Afsona", Decimal::new(10, 0)))
        .await
        .unwrap();
    users.add_liked_restaurant(user.id, restaurant.id).await.unwrap();
    users.add_liked_restaurant(user.id, restaurant.id).await.unwrap();
    assert_eq!(users.liked_restaurant_ids(user.id).await.unwrap(), vec![restaurant.id]);

    users.remove_liked_restaurant(user.id, restaurant.id).await.unwrap();
    assert!(users.liked_restaurant_ids(user.id).await.unwrap().is_empty());
    assert_eq!(users.find_by_phone(&phone).await.unwrap().unwrap().id, user.id);
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_cashier_phone_unique_per_restaurant() {
    let pool = pool().await;
    let restaurants = MySqlRestaurantRepository::new(pool.get_pool().clone());
    let cashiers = MySqlCashierRepository::new(pool.get_pool().clone());
    let restaurant = restaurants
        .create(Restaurant::new("Caravan", Decimal::new(5, 0)))
        .await
        .unwrap();
    let phone = unique_phone();

    let cashier = Cashier::new(restaurant.id, "Dilnoza".into(), phone.clone(), "hash".into());
    cashiers.create(cashier).await.unwrap();
    let duplicate = Cashier::new(restaurant.id, "Other".into(), phone, "hash".into());

    assert!(matches!(
        cashiers.create(duplicate).await,
        Err(DomainError::Conflict { .. })
    ));
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_transactions_page_and_summaries() {
    let pool = pool().await;
    let users = MySqlUserRepository::new(pool.get_pool().clone());
    let restaurants = MySqlRestaurantRepository::new(pool.get_pool().clone());
    let transactions = MySqlTransactionRepository::new(pool.get_pool().clone());

    let user = users.create(User::new_customer(unique_phone())).await.unwrap();
    let restaurant = restaurants
        .create(Restaurant::new("Plov Center", Decimal::new(1250, 2)))
        .await
        .unwrap();
    for sum in [100_000, 50_000, 20_000] {
        transactions
            .create(Transaction::with_discount(
                user.id,
                restaurant.id,
                None,
                Decimal::new(sum, 0),
                restaurant.discount_percentage,
            ))
            .await
            .unwrap();
    }

    let (page, count) = transactions
        .list_by_user(user.id, Pagination::new(1, 2))
        .await
        .unwrap();
    assert_eq!(count, 3);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].restaurant_name, "Plov Center");

    let summaries = transactions.customer_summaries(restaurant.id).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_transactions, 3);
    assert_eq!(summaries[0].total_before_discount, Decimal::new(170_000, 0));
}
