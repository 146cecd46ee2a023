//! Mock-backed application state shared by the API tests

#![allow(dead_code)]

use actix_web::http::header;
use actix_web::web;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use cg_api::{AppState, Repositories, ServiceSettings};
use cg_core::domain::entities::cashier::Cashier;
use cg_core::domain::entities::restaurant::Restaurant;
use cg_core::domain::entities::user::User;
use cg_core::repositories::{
    CashierRepository, MockBookingRepository, MockCashierRepository, MockOtpRepository,
    MockRestaurantRepository, MockTransactionRepository, MockUserRepository,
    RestaurantRepository, UserRepository,
};
use cg_core::services::otp::MockOtpNotifier;
use cg_core::services::SecretHasher;
use cg_infra::export::XlsxExporter;
use cg_shared::config::{JwtConfig, OtpConfig, SecurityConfig};

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub users: MockUserRepository,
    pub restaurants: MockRestaurantRepository,
    pub cashiers: MockCashierRepository,
    pub transactions: MockTransactionRepository,
    pub notifier: MockOtpNotifier,
    pub hasher: SecretHasher,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_otp_config(OtpConfig::default())
    }

    pub fn with_otp_config(otp: OtpConfig) -> Self {
        let users = MockUserRepository::new();
        let restaurants = MockRestaurantRepository::new();
        let cashiers = MockCashierRepository::new();
        let transactions = MockTransactionRepository::new(users.clone(), restaurants.clone());
        let notifier = MockOtpNotifier::new();
        let security = SecurityConfig::default().with_bcrypt_cost(4);

        let repositories = Repositories {
            users: Arc::new(users.clone()),
            restaurants: Arc::new(restaurants.clone()),
            cashiers: Arc::new(cashiers.clone()),
            bookings: Arc::new(MockBookingRepository::new()),
            transactions: Arc::new(transactions.clone()),
            otps: Arc::new(MockOtpRepository::new()),
        };
        let state = web::Data::new(AppState::new(
            repositories,
            Arc::new(notifier.clone()),
            Arc::new(XlsxExporter::new()),
            ServiceSettings {
                jwt: JwtConfig::new("api-test-secret"),
                otp,
                security: security.clone(),
            },
        ));

        Self {
            state,
            users,
            restaurants,
            cashiers,
            transactions,
            notifier,
            hasher: SecretHasher::new(&security),
        }
    }

    pub async fn restaurant(&self, name: &str, discount: i64) -> Restaurant {
        self.restaurants
            .create(Restaurant::new(name, Decimal::new(discount, 0)))
            .await
            .unwrap()
    }

    pub async fn customer(&self, phone: &str) -> User {
        self.users
            .create(User::new_customer(phone.to_string()))
            .await
            .unwrap()
    }

    /// Password user, linked as admin of `restaurant_id` when given
    pub async fn admin(&self, phone: &str, password: &str, restaurant_id: Option<Uuid>) -> User {
        let mut user = User::new_customer(phone.to_string());
        user.password_hash = Some(self.hasher.hash(password).await.unwrap());
        let user = self.users.create(user).await.unwrap();
        if let Some(restaurant_id) = restaurant_id {
            self.restaurants
                .assign_admin(user.id, restaurant_id)
                .await
                .unwrap();
        }
        user
    }

    pub async fn cashier(&self, restaurant_id: Uuid, phone: &str, pin: &str) -> Cashier {
        let pin_hash = self.hasher.hash(pin).await.unwrap();
        self.cashiers
            .create(Cashier::new(
                restaurant_id,
                "Dilnoza".to_string(),
                phone.to_string(),
                pin_hash,
            ))
            .await
            .unwrap()
    }

    pub fn user_token(&self, user: &User) -> String {
        self.state
            .token_service
            .generate_user_tokens(user)
            .unwrap()
            .access
    }

    pub fn cashier_token(&self, cashier: &Cashier) -> String {
        self.state
            .token_service
            .generate_cashier_tokens(cashier)
            .unwrap()
            .access
    }
}

/// Authorization header for a bearer token
pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
