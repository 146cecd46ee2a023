//! Main authentication service implementation

use std::sync::Arc;

use cg_shared::utils::phone::{mask_phone_number, normalize_phone_number};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AdminAuthResponse, AuthResponse};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RestaurantRepository, UserRepository};
use crate::services::otp::{IssuedOtp, OtpService};
use crate::services::security::SecretHasher;
use crate::services::token::TokenService;

/// Authentication service for the customer and admin login flows
pub struct AuthService {
    /// Issues and checks one-time codes
    otp_service: Arc<OtpService>,
    /// JWT issuing
    token_service: Arc<TokenService>,
    /// Admin password checks
    hasher: SecretHasher,
    user_repository: Arc<dyn UserRepository>,
    restaurant_repository: Arc<dyn RestaurantRepository>,
}

impl AuthService {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `otp_service` - Service for one-time codes
    /// * `token_service` - Service for JWT token management
    /// * `hasher` - bcrypt hasher for admin passwords
    /// * `user_repository` - Repository for user data persistence
    /// * `restaurant_repository` - Used to resolve an admin's restaurant
    pub fn new(
        otp_service: Arc<OtpService>,
        token_service: Arc<TokenService>,
        hasher: SecretHasher,
        user_repository: Arc<dyn UserRepository>,
        restaurant_repository: Arc<dyn RestaurantRepository>,
    ) -> Self {
        Self {
            otp_service,
            token_service,
            hasher,
            user_repository,
            restaurant_repository,
        }
    }

    /// Send a one-time code to a phone number
    ///
    /// Rate limiting and delivery are handled by the OTP service.
    pub async fn request_otp(&self, phone: &str) -> DomainResult<IssuedOtp> {
        self.otp_service.issue(phone).await
    }

    /// Verify a code and sign the customer in
    ///
    /// This method:
    /// 1. Verifies the code against the latest pending OTP
    /// 2. Finds the user by phone, or creates one with an empty name
    /// 3. Rejects inactive accounts
    /// 4. Issues an access/refresh pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Tokens, the user and whether it was just created
    /// * `Err(DomainError::Otp(_))` - Verification failed
    /// * `Err(DomainError::Auth(AuthError::AccountDisabled))` - User is inactive
    pub async fn verify_otp(&self, phone: &str, code: &str) -> DomainResult<AuthResponse> {
        let phone = normalize_phone_number(phone);
        self.otp_service.verify(&phone, code).await?;

        let (user, is_new_user) = self.find_or_create_user(&phone).await?;
        if !user.is_active {
            tracing::warn!(
                phone = %mask_phone_number(&phone),
                user_id = %user.id,
                event = "login_inactive_user",
                "Inactive user passed OTP verification"
            );
            return Err(AuthError::AccountDisabled.into());
        }

        let tokens = self.token_service.generate_user_tokens(&user)?;
        tracing::info!(
            user_id = %user.id,
            is_new_user = is_new_user,
            event = "login_success",
            "User signed in with OTP"
        );

        Ok(AuthResponse {
            user,
            tokens,
            is_new_user,
        })
    }

    async fn find_or_create_user(&self, phone: &str) -> DomainResult<(User, bool)> {
        if let Some(user) = self.user_repository.find_by_phone(phone).await? {
            return Ok((user, false));
        }

        match self
            .user_repository
            .create(User::new_customer(phone.to_string()))
            .await
        {
            Ok(user) => Ok((user, true)),
            // created by a concurrent login for the same phone
            Err(DomainError::Conflict { .. }) => self
                .user_repository
                .find_by_phone(phone)
                .await?
                .map(|user| (user, false))
                .ok_or_else(|| DomainError::internal("User vanished after conflicting insert")),
            Err(e) => Err(e),
        }
    }

    /// Exchange a refresh token for a new access token
    pub fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        self.token_service.refresh_access_token(refresh_token)
    }

    /// Password login for the restaurant admin panel
    ///
    /// # Returns
    ///
    /// * `Ok(AdminAuthResponse)` - Tokens plus the admin's restaurant, which is
    ///   `None` for a superuser without one
    /// * `Err(AuthError::InvalidCredentials)` - Unknown phone, inactive user,
    ///   no password set or wrong password
    /// * `Err(AuthError::NotRestaurantAdmin)` - Neither admin nor superuser
    pub async fn admin_login(&self, phone: &str, password: &str) -> DomainResult<AdminAuthResponse> {
        let phone = normalize_phone_number(phone);
        let masked = mask_phone_number(&phone);

        let user = match self.user_repository.find_by_phone(&phone).await? {
            Some(user) if user.is_active => user,
            _ => {
                tracing::info!(phone = %masked, event = "admin_login_failed", "Unknown or inactive user");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let hash = match user.password_hash.as_deref() {
            Some(hash) => hash,
            None => return Err(AuthError::InvalidCredentials.into()),
        };
        if !self.hasher.verify(password, hash).await? {
            tracing::info!(phone = %masked, event = "admin_login_failed", "Wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let restaurant = self.restaurant_repository.find_by_admin(user.id).await?;
        if restaurant.is_none() && !user.is_superuser {
            return Err(AuthError::NotRestaurantAdmin.into());
        }

        let tokens = self.token_service.generate_user_tokens(&user)?;
        tracing::info!(user_id = %user.id, event = "admin_login_success", "Admin signed in");

        Ok(AdminAuthResponse {
            user,
            tokens,
            restaurant_id: restaurant.as_ref().map(|r| r.id),
            restaurant_name: restaurant.map(|r| r.name),
        })
    }
}
