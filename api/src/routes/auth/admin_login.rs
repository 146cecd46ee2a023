use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cg_shared::utils::phone::mask_phone_number;

use crate::dto::{AdminLoginRequest, AdminLoginResponse};
use crate::handlers::{handle_domain_error, validation_failed, RequestIdExt};
use crate::state::AppState;

/// Handler for POST /api/restaurant-admin/auth/login/
///
/// Phone and password login for restaurant admins and superusers.
///
/// ## Errors
/// - 401 Unauthorized: "Invalid credentials"
/// - 403 Forbidden: "Not a restaurant admin"
pub async fn admin_login(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<AdminLoginRequest>,
) -> HttpResponse {
    let request_id = req.request_id();
    log::info!(
        "[{}] Processing admin login for phone: {}",
        request_id,
        mask_phone_number(&request.phone_number)
    );

    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state
        .auth_service
        .admin_login(&request.phone_number, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(AdminLoginResponse::from(response)),
        Err(error) => {
            log::info!("[{}] Admin login failed: {}", request_id, error);
            handle_domain_error(error)
        }
    }
}
