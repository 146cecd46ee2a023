//! Restaurant admin panel, scoped to the admin's own restaurant
//!
//! Every handler resolves the restaurant through `RestaurantAdminService`,
//! which answers 403 for users who are neither admins nor superusers.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use cg_core::domain::entities::cashier::CashierPatch;
use cg_core::domain::entities::restaurant::RestaurantPatch;
use cg_core::domain::entities::transaction::CustomerFilter;

use crate::dto::{CreateCashierRequest, GalleryImageRequest};
use crate::handlers::{handle_domain_error, validation_failed, RequestIdExt};
use crate::middleware::AuthContext;
use crate::state::AppState;

/// GET /api/restaurant-admin/users/
///
/// Customers with their totals at this restaurant. Accepts `date_from`,
/// `date_to`, `min_spent`, `max_spent`, `min_transactions`,
/// `max_transactions` and `search`.
pub async fn list_customers(
    auth: AuthContext,
    state: web::Data<AppState>,
    filter: web::Query<CustomerFilter>,
) -> HttpResponse {
    match state.admin_service.customers(auth.subject_id, &filter).await {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/restaurant-admin/users/export/
///
/// Same rows as the list, as a spreadsheet attachment.
pub async fn export_customers(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState>,
    filter: web::Query<CustomerFilter>,
) -> HttpResponse {
    match state
        .admin_service
        .export_customers(auth.subject_id, &filter)
        .await
    {
        Ok(file) => {
            log::info!(
                "[{}] Exported {} bytes as {}",
                req.request_id(),
                file.bytes.len(),
                file.filename
            );
            HttpResponse::Ok()
                .content_type(file.content_type)
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(file.filename)],
                })
                .body(file.bytes)
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/restaurant-admin/cashiers/
pub async fn list_cashiers(auth: AuthContext, state: web::Data<AppState>) -> HttpResponse {
    match state.admin_service.list_cashiers(auth.subject_id).await {
        Ok(cashiers) => HttpResponse::Ok().json(cashiers),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/restaurant-admin/cashiers/
///
/// The generated PIN is part of this response only.
pub async fn create_cashier(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState>,
    request: web::Json<CreateCashierRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state
        .admin_service
        .create_cashier(auth.subject_id, request.into_inner().into())
        .await
    {
        Ok(issued) => {
            log::info!("[{}] Created cashier {}", req.request_id(), issued.cashier.id);
            HttpResponse::Created().json(issued)
        }
        Err(error) => handle_domain_error(error),
    }
}

/// PATCH /api/restaurant-admin/cashiers/{id}/
pub async fn update_cashier(
    auth: AuthContext,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    patch: web::Json<CashierPatch>,
) -> HttpResponse {
    match state
        .admin_service
        .update_cashier(auth.subject_id, path.into_inner(), patch.into_inner())
        .await
    {
        Ok(cashier) => HttpResponse::Ok().json(cashier),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/restaurant-admin/cashiers/{id}/regenerate-pin/
pub async fn regenerate_pin(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let cashier_id = path.into_inner();
    match state
        .admin_service
        .regenerate_pin(auth.subject_id, cashier_id)
        .await
    {
        Ok(issued) => {
            log::info!("[{}] Regenerated PIN of cashier {}", req.request_id(), cashier_id);
            HttpResponse::Ok().json(issued)
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/restaurant-admin/restaurant/
pub async fn get_restaurant(auth: AuthContext, state: web::Data<AppState>) -> HttpResponse {
    match state.admin_service.restaurant(auth.subject_id).await {
        Ok(restaurant) => HttpResponse::Ok().json(restaurant),
        Err(error) => handle_domain_error(error),
    }
}

/// PATCH /api/restaurant-admin/restaurant/
pub async fn update_restaurant(
    auth: AuthContext,
    state: web::Data<AppState>,
    patch: web::Json<RestaurantPatch>,
) -> HttpResponse {
    match state
        .admin_service
        .update_restaurant(auth.subject_id, patch.into_inner())
        .await
    {
        Ok(restaurant) => HttpResponse::Ok().json(restaurant),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/restaurant-admin/restaurant/gallery/
pub async fn add_gallery_image(
    auth: AuthContext,
    state: web::Data<AppState>,
    request: web::Json<GalleryImageRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state
        .admin_service
        .add_gallery_image(auth.subject_id, &request.image)
        .await
    {
        Ok(image) => HttpResponse::Created().json(image),
        Err(error) => handle_domain_error(error),
    }
}
