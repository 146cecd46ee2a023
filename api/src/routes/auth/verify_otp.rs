use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cg_shared::utils::phone::mask_phone_number;

use crate::dto::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::{handle_domain_error, validation_failed, RequestIdExt};
use crate::state::AppState;

/// Handler for POST /api/auth/verify-otp/
///
/// Verifies the code sent to a phone number and signs the user in,
/// creating the account on first login.
///
/// # Request Body
///
/// ```json
/// {
///     "phone_number": "+998901234567",
///     "code": "123456"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user": { "id": "...", "phone_number": "+998901234567", "full_name": "", "date_joined": "..." },
///     "access": "eyJ...",
///     "refresh": "eyJ...",
///     "is_new_user": true
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: No pending code, wrong code or too many attempts
/// - 401 Unauthorized: The account is disabled
pub async fn verify_otp(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    let request_id = req.request_id();
    log::info!(
        "[{}] Processing verify_otp for phone: {}",
        request_id,
        mask_phone_number(&request.phone_number)
    );

    if let Err(errors) = request.validate() {
        log::warn!("[{}] Validation failed for verify_otp: {}", request_id, errors);
        return validation_failed(&errors);
    }

    match state
        .auth_service
        .verify_otp(&request.phone_number, &request.code)
        .await
    {
        Ok(response) => {
            log::info!(
                "[{}] User {} signed in (new: {})",
                request_id,
                response.user.id,
                response.is_new_user
            );
            HttpResponse::Ok().json(VerifyOtpResponse::from(response))
        }
        Err(error) => {
            log::info!("[{}] verify_otp failed: {}", request_id, error);
            handle_domain_error(error)
        }
    }
}
