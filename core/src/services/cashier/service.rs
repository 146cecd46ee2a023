//! Cashier login and transaction recording

use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use cg_shared::utils::phone::{mask_phone_number, normalize_phone_number};

use crate::domain::entities::token::{Claims, Role};
use crate::domain::entities::transaction::Transaction;
use crate::domain::value_objects::{CashierAuthResponse, CashierProfile};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{
    CashierRepository, RestaurantRepository, TransactionRepository, UserRepository,
};
use crate::services::security::SecretHasher;
use crate::services::token::TokenService;

/// Largest amount a DECIMAL(12,2) column holds
fn max_sum() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

pub struct CashierService {
    cashier_repository: Arc<dyn CashierRepository>,
    restaurant_repository: Arc<dyn RestaurantRepository>,
    user_repository: Arc<dyn UserRepository>,
    transaction_repository: Arc<dyn TransactionRepository>,
    token_service: Arc<TokenService>,
    hasher: SecretHasher,
}

impl CashierService {
    pub fn new(
        cashier_repository: Arc<dyn CashierRepository>,
        restaurant_repository: Arc<dyn RestaurantRepository>,
        user_repository: Arc<dyn UserRepository>,
        transaction_repository: Arc<dyn TransactionRepository>,
        token_service: Arc<TokenService>,
        hasher: SecretHasher,
    ) -> Self {
        Self {
            cashier_repository,
            restaurant_repository,
            user_repository,
            transaction_repository,
            token_service,
            hasher,
        }
    }

    /// PIN login for a cashier of a given restaurant
    ///
    /// The active flag is checked before the PIN, so a disabled cashier is
    /// told so even with a wrong PIN.
    ///
    /// # Returns
    ///
    /// * `Err(AuthError::InvalidCredentials)` - No such cashier at the restaurant
    /// * `Err(AuthError::CashierDisabled)` - Cashier is inactive
    /// * `Err(AuthError::InvalidPin)` - PIN does not match
    pub async fn login(
        &self,
        restaurant_id: Uuid,
        phone: &str,
        pin: &str,
    ) -> DomainResult<CashierAuthResponse> {
        let phone = normalize_phone_number(phone);
        let masked = mask_phone_number(&phone);

        let cashier = self
            .cashier_repository
            .find_by_restaurant_and_phone(restaurant_id, &phone)
            .await?
            .ok_or_else(|| {
                tracing::info!(phone = %masked, event = "cashier_login_failed", "Unknown cashier");
                DomainError::from(AuthError::InvalidCredentials)
            })?;

        if !cashier.is_active {
            return Err(AuthError::CashierDisabled.into());
        }
        if !self.hasher.verify(pin, &cashier.pin_hash).await? {
            tracing::info!(
                cashier_id = %cashier.id,
                event = "cashier_login_failed",
                "Wrong PIN"
            );
            return Err(AuthError::InvalidPin.into());
        }

        let restaurant_name = self
            .restaurant_repository
            .find_by_id(cashier.restaurant_id)
            .await?
            .map(|r| r.name)
            .unwrap_or_default();
        let tokens = self.token_service.generate_cashier_tokens(&cashier)?;

        tracing::info!(cashier_id = %cashier.id, event = "cashier_login_success", "Cashier signed in");

        Ok(CashierAuthResponse {
            tokens,
            cashier: CashierProfile {
                id: cashier.id,
                name: cashier.name,
                restaurant_id: cashier.restaurant_id,
                restaurant_name,
            },
        })
    }

    /// Record a purchase by a customer at the cashier's restaurant
    ///
    /// The restaurant's current discount percentage is applied.
    pub async fn record_transaction(
        &self,
        claims: &Claims,
        user_id: Uuid,
        sum_before_discount: Decimal,
    ) -> DomainResult<Transaction> {
        if claims.role != Role::Cashier {
            return Err(AuthError::InsufficientPermissions.into());
        }
        let cashier_id = claims
            .subject_id()
            .map_err(|_| DomainError::from(AuthError::InsufficientPermissions))?;

        let cashier = self
            .cashier_repository
            .find_by_id(cashier_id)
            .await?
            .ok_or_else(|| DomainError::from(AuthError::InvalidCredentials))?;
        if !cashier.is_active {
            return Err(AuthError::CashierDisabled.into());
        }
        if claims.restaurant_uuid() != Some(cashier.restaurant_id) {
            return Err(AuthError::InsufficientPermissions.into());
        }

        if sum_before_discount <= Decimal::ZERO
            || sum_before_discount > max_sum()
            || sum_before_discount.normalize().scale() > 2
        {
            return Err(ValidationError::OutOfRange {
                field: "sum_before_discount".to_string(),
                min: "0.01".to_string(),
                max: max_sum().to_string(),
            }
            .into());
        }

        let restaurant = self
            .restaurant_repository
            .find_by_id(cashier.restaurant_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Restaurant"))?;
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        let transaction = self
            .transaction_repository
            .create(Transaction::with_discount(
                user_id,
                restaurant.id,
                Some(cashier.id),
                sum_before_discount,
                restaurant.discount_percentage,
            ))
            .await?;

        tracing::info!(
            transaction_id = %transaction.id,
            restaurant_id = %restaurant.id,
            cashier_id = %cashier.id,
            sum = %transaction.sum_before_discount,
            discount = %transaction.discount_amount_uzs,
            event = "transaction_recorded",
            "Transaction recorded"
        );

        Ok(transaction)
    }
}
