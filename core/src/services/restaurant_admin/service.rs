//! Restaurant admin operations

use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use cg_shared::config::SecurityConfig;
use cg_shared::utils::phone::MAX_PHONE_LENGTH;

use crate::domain::entities::cashier::{Cashier, CashierPatch, MAX_CASHIER_NAME_LENGTH};
use crate::domain::entities::restaurant::{
    Restaurant, RestaurantImage, RestaurantPatch, MAX_NAME_LENGTH,
};
use crate::domain::entities::transaction::{CustomerFilter, CustomerSummary};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{
    CashierRepository, RestaurantRepository, TransactionRepository, UserRepository,
};
use crate::services::security::SecretHasher;
use crate::services::validation::{bounded_text, required_text};

use super::traits::CustomerExporter;
use super::types::{ExportFile, NewCashier, PinIssued, NEW_PIN_MESSAGE, REGENERATED_PIN_MESSAGE};

/// Admin panel service scoped to the admin's restaurant
pub struct RestaurantAdminService {
    user_repository: Arc<dyn UserRepository>,
    restaurant_repository: Arc<dyn RestaurantRepository>,
    cashier_repository: Arc<dyn CashierRepository>,
    transaction_repository: Arc<dyn TransactionRepository>,
    exporter: Arc<dyn CustomerExporter>,
    hasher: SecretHasher,
    pin_length: usize,
}

impl RestaurantAdminService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        restaurant_repository: Arc<dyn RestaurantRepository>,
        cashier_repository: Arc<dyn CashierRepository>,
        transaction_repository: Arc<dyn TransactionRepository>,
        exporter: Arc<dyn CustomerExporter>,
        hasher: SecretHasher,
        security: &SecurityConfig,
    ) -> Self {
        Self {
            user_repository,
            restaurant_repository,
            cashier_repository,
            transaction_repository,
            exporter,
            hasher,
            pin_length: security.pin_length,
        }
    }

    /// Resolve the restaurant an admin manages
    ///
    /// # Returns
    ///
    /// * `Ok(Restaurant)` - The linked restaurant
    /// * `Err(AuthError::NotRestaurantAdmin)` - Not an admin and not a superuser
    /// * `Err(AuthError::NoRestaurantAssociated)` - Superuser without a restaurant
    pub async fn resolve_restaurant(&self, user_id: Uuid) -> DomainResult<Restaurant> {
        let user = match self.user_repository.find_by_id(user_id).await? {
            Some(user) if user.is_active => user,
            _ => return Err(AuthError::NotRestaurantAdmin.into()),
        };

        match self.restaurant_repository.find_by_admin(user.id).await? {
            Some(restaurant) => Ok(restaurant),
            None if user.is_superuser => Err(AuthError::NoRestaurantAssociated.into()),
            None => Err(AuthError::NotRestaurantAdmin.into()),
        }
    }

    /// Per-customer totals at the admin's restaurant, newest activity first
    pub async fn customers(
        &self,
        user_id: Uuid,
        filter: &CustomerFilter,
    ) -> DomainResult<Vec<CustomerSummary>> {
        let restaurant = self.resolve_restaurant(user_id).await?;
        self.filtered_customers(restaurant.id, filter).await
    }

    async fn filtered_customers(
        &self,
        restaurant_id: Uuid,
        filter: &CustomerFilter,
    ) -> DomainResult<Vec<CustomerSummary>> {
        let summaries = self
            .transaction_repository
            .customer_summaries(restaurant_id)
            .await?;
        Ok(summaries
            .into_iter()
            .filter(|summary| filter.matches(summary))
            .collect())
    }

    /// Same rows as `customers`, rendered as a downloadable file
    pub async fn export_customers(
        &self,
        user_id: Uuid,
        filter: &CustomerFilter,
    ) -> DomainResult<ExportFile> {
        let restaurant = self.resolve_restaurant(user_id).await?;
        let rows = self.filtered_customers(restaurant.id, filter).await?;
        let bytes = self.exporter.render(&rows)?;

        tracing::info!(
            restaurant_id = %restaurant.id,
            rows = rows.len(),
            event = "customers_exported",
            "Exported customer list"
        );

        Ok(ExportFile {
            filename: format!("{}_users.{}", restaurant.name, self.exporter.extension()),
            content_type: self.exporter.content_type(),
            bytes,
        })
    }

    /// Cashiers of the admin's restaurant, oldest first
    pub async fn list_cashiers(&self, user_id: Uuid) -> DomainResult<Vec<Cashier>> {
        let restaurant = self.resolve_restaurant(user_id).await?;
        self.cashier_repository.list_by_restaurant(restaurant.id).await
    }

    /// Create a cashier with a random PIN
    ///
    /// The plaintext PIN is only part of this response; storage keeps the
    /// bcrypt hash.
    pub async fn create_cashier(&self, user_id: Uuid, new: NewCashier) -> DomainResult<PinIssued> {
        let restaurant = self.resolve_restaurant(user_id).await?;
        let name = required_text("name", &new.name, MAX_CASHIER_NAME_LENGTH)?;
        let phone_number = required_text("phone_number", &new.phone_number, MAX_PHONE_LENGTH)?;

        let pin = Cashier::generate_pin(self.pin_length);
        let pin_hash = self.hasher.hash(&pin).await?;
        let cashier = self
            .cashier_repository
            .create(Cashier::new(restaurant.id, name, phone_number, pin_hash))
            .await?;

        tracing::info!(
            restaurant_id = %restaurant.id,
            cashier_id = %cashier.id,
            event = "cashier_created",
            "Cashier created"
        );

        Ok(PinIssued {
            cashier,
            pin_code: pin,
            message: NEW_PIN_MESSAGE.to_string(),
        })
    }

    async fn own_cashier(&self, restaurant_id: Uuid, cashier_id: Uuid) -> DomainResult<Cashier> {
        self.cashier_repository
            .find_by_id(cashier_id)
            .await?
            .filter(|cashier| cashier.restaurant_id == restaurant_id)
            .ok_or_else(|| DomainError::not_found("Cashier"))
    }

    /// Change a cashier's name, phone number or active flag
    pub async fn update_cashier(
        &self,
        user_id: Uuid,
        cashier_id: Uuid,
        mut patch: CashierPatch,
    ) -> DomainResult<Cashier> {
        let restaurant = self.resolve_restaurant(user_id).await?;
        let mut cashier = self.own_cashier(restaurant.id, cashier_id).await?;

        patch.name = patch
            .name
            .map(|name| required_text("name", &name, MAX_CASHIER_NAME_LENGTH))
            .transpose()?;
        patch.phone_number = patch
            .phone_number
            .map(|phone| required_text("phone_number", &phone, MAX_PHONE_LENGTH))
            .transpose()?;

        patch.apply(&mut cashier);
        self.cashier_repository.update(cashier).await
    }

    /// Replace a cashier's PIN and return the new one
    pub async fn regenerate_pin(&self, user_id: Uuid, cashier_id: Uuid) -> DomainResult<PinIssued> {
        let restaurant = self.resolve_restaurant(user_id).await?;
        let mut cashier = self.own_cashier(restaurant.id, cashier_id).await?;

        let pin = Cashier::generate_pin(self.pin_length);
        cashier.pin_hash = self.hasher.hash(&pin).await?;
        cashier.updated_at = chrono::Utc::now();
        let cashier = self.cashier_repository.update(cashier).await?;

        tracing::info!(cashier_id = %cashier.id, event = "cashier_pin_regenerated", "PIN regenerated");

        Ok(PinIssued {
            cashier,
            pin_code: pin,
            message: REGENERATED_PIN_MESSAGE.to_string(),
        })
    }

    /// Settings of the admin's restaurant
    pub async fn restaurant(&self, user_id: Uuid) -> DomainResult<Restaurant> {
        self.resolve_restaurant(user_id).await
    }

    /// Apply a partial update to the admin's restaurant
    pub async fn update_restaurant(
        &self,
        user_id: Uuid,
        mut patch: RestaurantPatch,
    ) -> DomainResult<Restaurant> {
        let mut restaurant = self.resolve_restaurant(user_id).await?;

        patch.name = patch
            .name
            .map(|name| required_text("name", &name, MAX_NAME_LENGTH))
            .transpose()?;
        if let Some(pct) = patch.discount_percentage {
            validate_discount(pct)?;
        }
        if let Some(logo) = patch.logo.as_deref() {
            bounded_text("logo", logo, 255)?;
        }

        patch.apply(&mut restaurant);
        restaurant.updated_at = chrono::Utc::now();
        let restaurant = self.restaurant_repository.update(restaurant).await?;

        tracing::info!(restaurant_id = %restaurant.id, event = "restaurant_updated", "Settings saved");
        Ok(restaurant)
    }

    /// Attach an image path to the restaurant's gallery
    pub async fn add_gallery_image(&self, user_id: Uuid, image: &str) -> DomainResult<RestaurantImage> {
        let restaurant = self.resolve_restaurant(user_id).await?;
        let image = required_text("image", image, 255)?;
        self.restaurant_repository
            .add_gallery_image(RestaurantImage::new(restaurant.id, image))
            .await
    }
}

fn validate_discount(pct: Decimal) -> DomainResult<()> {
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED || pct.normalize().scale() > 2 {
        return Err(ValidationError::OutOfRange {
            field: "discount_percentage".to_string(),
            min: "0".to_string(),
            max: "100".to_string(),
        }
        .into());
    }
    Ok(())
}
