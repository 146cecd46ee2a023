//! Shared wiring for service tests: every service over in-memory repositories

use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use cg_shared::config::{JwtConfig, OtpConfig, SecurityConfig};

use crate::domain::entities::restaurant::Restaurant;
use crate::domain::entities::user::User;
use crate::repositories::{
    MockBookingRepository, MockCashierRepository, MockOtpRepository, MockRestaurantRepository,
    MockTransactionRepository, MockUserRepository, RestaurantRepository, UserRepository,
};
use crate::services::otp::{MockOtpNotifier, OtpService};
use crate::services::security::SecretHasher;
use crate::services::token::TokenService;

pub(crate) struct Fixture {
    pub users: MockUserRepository,
    pub restaurants: MockRestaurantRepository,
    pub cashiers: MockCashierRepository,
    pub bookings: MockBookingRepository,
    pub transactions: MockTransactionRepository,
    pub otps: MockOtpRepository,
    pub notifier: MockOtpNotifier,
    pub hasher: SecretHasher,
    pub tokens: Arc<TokenService>,
    pub otp: Arc<OtpService>,
}

impl Fixture {
    pub fn new() -> Self {
        let users = MockUserRepository::new();
        let restaurants = MockRestaurantRepository::new();
        let otps = MockOtpRepository::new();
        let notifier = MockOtpNotifier::new();
        let otp = Arc::new(OtpService::new(
            Arc::new(otps.clone()),
            Arc::new(notifier.clone()),
            OtpConfig::default(),
        ));

        Self {
            transactions: MockTransactionRepository::new(users.clone(), restaurants.clone()),
            users,
            restaurants,
            cashiers: MockCashierRepository::new(),
            bookings: MockBookingRepository::new(),
            otps,
            notifier,
            hasher: SecretHasher::new(&SecurityConfig::default().with_bcrypt_cost(4)),
            tokens: Arc::new(TokenService::new(JwtConfig::new("test-secret"))),
            otp,
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

    /// User with a password, optionally linked as admin of `restaurant_id`
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
}
