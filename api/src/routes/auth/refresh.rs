use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{RefreshTokenRequest, RefreshTokenResponse};
use crate::handlers::{handle_domain_error, validation_failed};
use crate::state::AppState;

/// Handler for POST /api/auth/token/refresh/
///
/// Exchanges a refresh token for a new access token. Works for user and
/// cashier refresh tokens alike.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Expired, malformed or non-refresh token
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state.auth_service.refresh(&request.refresh) {
        Ok(access) => HttpResponse::Ok().json(RefreshTokenResponse { access }),
        Err(error) => handle_domain_error(error),
    }
}
