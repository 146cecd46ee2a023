use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use cg_shared::types::MessageResponse;
use cg_shared::utils::phone::mask_phone_number;

use crate::dto::RequestOtpRequest;
use crate::handlers::{handle_domain_error, validation_failed, RequestIdExt};
use crate::state::AppState;

/// Handler for POST /api/auth/request-otp/
///
/// Issues a one-time code for the phone number and hands it to the
/// configured delivery channel. The code itself is never returned.
///
/// # Request Body
///
/// ```json
/// {
///     "phone_number": "+998901234567"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "OTP sent successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or overlong phone number
/// - 429 Too Many Requests: Resend interval or hourly quota hit
pub async fn request_otp(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<RequestOtpRequest>,
) -> HttpResponse {
    let request_id = req.request_id();
    log::info!(
        "[{}] Processing request_otp for phone: {}",
        request_id,
        mask_phone_number(&request.phone_number)
    );

    if let Err(errors) = request.validate() {
        log::warn!("[{}] Validation failed for request_otp: {}", request_id, errors);
        return validation_failed(&errors);
    }

    match state.auth_service.request_otp(&request.phone_number).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("OTP sent successfully")),
        Err(error) => {
            log::warn!("[{}] request_otp refused: {}", request_id, error);
            handle_domain_error(error)
        }
    }
}
