//! Public restaurant catalogue, cashier login and table booking

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use cg_shared::utils::phone::mask_phone_number;

use crate::dto::{
    BookTableRequest, CashierLoginRequest, CashierLoginResponse, RestaurantListItem,
    RestaurantListQuery,
};
use crate::handlers::{handle_domain_error, validation_failed, RequestIdExt};
use crate::middleware::AuthContext;
use crate::state::AppState;

/// GET /api/restaurants/?search=
///
/// Every whitespace or comma separated term must match the name, hashtags
/// or description.
pub async fn list_restaurants(
    state: web::Data<AppState>,
    query: web::Query<RestaurantListQuery>,
) -> HttpResponse {
    match state.restaurant_service.list(query.search.as_deref()).await {
        Ok(restaurants) => HttpResponse::Ok().json(
            restaurants
                .into_iter()
                .map(RestaurantListItem::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/restaurants/{id}/
pub async fn restaurant_detail(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.restaurant_service.detail(path.into_inner()).await {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/restaurants/cashier/auth/login/
///
/// ## Errors
/// - 401 Unauthorized: Unknown cashier or wrong PIN
/// - 403 Forbidden: Cashier account is disabled
pub async fn cashier_login(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<CashierLoginRequest>,
) -> HttpResponse {
    let request_id = req.request_id();
    log::info!(
        "[{}] Processing cashier login for phone: {} at restaurant {}",
        request_id,
        mask_phone_number(&request.phone_number),
        request.restaurant_id
    );

    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state
        .cashier_service
        .login(request.restaurant_id, &request.phone_number, &request.pin_code)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(CashierLoginResponse::from(response)),
        Err(error) => {
            log::info!("[{}] Cashier login failed: {}", request_id, error);
            handle_domain_error(error)
        }
    }
}

/// GET /api/restaurants/book-table/
pub async fn list_bookings(auth: AuthContext, state: web::Data<AppState>) -> HttpResponse {
    match state.booking_service.list_for_user(auth.subject_id).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/restaurants/book-table/
pub async fn book_table(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState>,
    request: web::Json<BookTableRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    log::info!(
        "[{}] Booking a table at {} for {}",
        req.request_id(),
        request.restaurant_id,
        auth.subject_id
    );
    match state
        .booking_service
        .book(auth.subject_id, request.into_inner().into())
        .await
    {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(error) => handle_domain_error(error),
    }
}
