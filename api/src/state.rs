//! Shared application state
//!
//! Services hold their collaborators as trait objects, so the same wiring
//! serves the MySQL repositories in `main` and the in-memory ones in tests.

use std::sync::Arc;

use cg_core::repositories::{
    BookingRepository, CashierRepository, OtpRepository, RestaurantRepository,
    TransactionRepository, UserRepository,
};
use cg_core::services::otp::OtpNotifier;
use cg_core::services::restaurant_admin::CustomerExporter;
use cg_core::services::{
    AuthService, BookingService, CashierService, OtpService, RestaurantAdminService,
    RestaurantService, SecretHasher, TokenService, TransactionService, UserService,
};
use cg_shared::config::{JwtConfig, OtpConfig, SecurityConfig};

/// Storage backends for every service
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub cashiers: Arc<dyn CashierRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub otps: Arc<dyn OtpRepository>,
}

/// Settings the services are built from
#[derive(Debug, Clone, Default)]
pub struct ServiceSettings {
    pub jwt: JwtConfig,
    pub otp: OtpConfig,
    pub security: SecurityConfig,
}

/// Application state that holds shared services
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub restaurant_service: Arc<RestaurantService>,
    pub booking_service: Arc<BookingService>,
    pub cashier_service: Arc<CashierService>,
    pub transaction_service: Arc<TransactionService>,
    pub admin_service: Arc<RestaurantAdminService>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// Wire every service over the given repositories and delivery channels
    pub fn new(
        repositories: Repositories,
        notifier: Arc<dyn OtpNotifier>,
        exporter: Arc<dyn CustomerExporter>,
        settings: ServiceSettings,
    ) -> Self {
        let Repositories {
            users,
            restaurants,
            cashiers,
            bookings,
            transactions,
            otps,
        } = repositories;

        let hasher = SecretHasher::new(&settings.security);
        let token_service = Arc::new(TokenService::new(settings.jwt));
        let otp_service = Arc::new(OtpService::new(otps, notifier, settings.otp));

        let auth_service = Arc::new(AuthService::new(
            otp_service,
            token_service.clone(),
            hasher.clone(),
            users.clone(),
            restaurants.clone(),
        ));
        let user_service = Arc::new(UserService::new(users.clone(), restaurants.clone()));
        let restaurant_service = Arc::new(RestaurantService::new(restaurants.clone()));
        let booking_service = Arc::new(BookingService::new(bookings, restaurants.clone()));
        let cashier_service = Arc::new(CashierService::new(
            cashiers.clone(),
            restaurants.clone(),
            users.clone(),
            transactions.clone(),
            token_service.clone(),
            hasher.clone(),
        ));
        let transaction_service = Arc::new(TransactionService::new(transactions.clone()));
        let admin_service = Arc::new(RestaurantAdminService::new(
            users,
            restaurants,
            cashiers,
            transactions,
            exporter,
            hasher,
            &settings.security,
        ));

        Self {
            auth_service,
            user_service,
            restaurant_service,
            booking_service,
            cashier_service,
            transaction_service,
            admin_service,
            token_service,
        }
    }
}
