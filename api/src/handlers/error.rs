//! Conversion of domain errors into HTTP responses
//!
//! Every handler funnels its failures through [`handle_domain_error`], and
//! the auth middleware and extractors go through [`ApiError`], so all error
//! bodies share the `ErrorResponse` envelope.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use cg_core::errors::{AuthError, DomainError, OtpError, TokenError};
use cg_shared::errors::{error_codes, ErrorResponse};

/// Status code and envelope for a domain error
pub fn error_parts(error: &DomainError) -> (StatusCode, ErrorResponse) {
    let message = error.to_string();

    let (status, code) = match error {
        DomainError::Otp(otp_error) => match otp_error {
            OtpError::RateLimited { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, error_codes::RATE_LIMIT_EXCEEDED)
            }
            OtpError::NotFound => (StatusCode::BAD_REQUEST, error_codes::OTP_NOT_FOUND),
            OtpError::TooManyAttempts => {
                (StatusCode::BAD_REQUEST, error_codes::OTP_TOO_MANY_ATTEMPTS)
            }
            OtpError::InvalidCode => (StatusCode::BAD_REQUEST, error_codes::OTP_INVALID_CODE),
        },
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials | AuthError::InvalidPin => {
                (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
            }
            AuthError::AccountDisabled => (StatusCode::UNAUTHORIZED, error_codes::ACCOUNT_DISABLED),
            AuthError::MissingCredentials => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
            AuthError::CashierDisabled => (StatusCode::FORBIDDEN, error_codes::ACCOUNT_DISABLED),
            AuthError::NotRestaurantAdmin
            | AuthError::NoRestaurantAssociated
            | AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
            TokenError::TokenGenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
            _ => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
        },
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
            (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR)
        }
        DomainError::Conflict { .. } => (StatusCode::BAD_REQUEST, error_codes::CONFLICT),
        DomainError::Forbidden { .. } => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR),
    };

    // Internal details stay in the log
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "An internal error occurred".to_string()
    } else {
        message
    };

    (status, ErrorResponse::new(code, message))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, body) = error_parts(&error);

    if status.is_server_error() {
        log::error!("Domain error: {:?}", error);
    } else {
        log::debug!("Request rejected ({}): {}", status.as_u16(), error);
    }

    HttpResponse::build(status).json(body)
}

/// 400 envelope for malformed request bodies, paths and queries
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message))
}

/// 400 envelope listing the fields that failed validation
pub fn validation_failed(errors: &validator::ValidationErrors) -> HttpResponse {
    let field_errors = errors.field_errors();
    let fields: Vec<&str> = field_errors.keys().map(|field| field.as_ref()).collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields)
            .add_detail("validation_errors", errors),
    )
}

/// Domain error usable as an `actix_web::Error`, for middleware and extractors
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        error_parts(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, body) = error_parts(&self.0);
        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_core::errors::RateLimitReason;
    use validator::Validate;

    fn status_of(error: impl Into<DomainError>) -> u16 {
        error_parts(&error.into()).0.as_u16()
    }

    #[test]
    fn test_otp_errors() {
        assert_eq!(
            status_of(OtpError::RateLimited {
                reason: RateLimitReason::TooSoon
            }),
            429
        );
        assert_eq!(status_of(OtpError::NotFound), 400);
        assert_eq!(status_of(OtpError::TooManyAttempts), 400);
        assert_eq!(status_of(OtpError::InvalidCode), 400);
    }

    #[test]
    fn test_auth_errors() {
        assert_eq!(status_of(AuthError::InvalidCredentials), 401);
        assert_eq!(status_of(AuthError::InvalidPin), 401);
        assert_eq!(status_of(AuthError::MissingCredentials), 401);
        assert_eq!(status_of(AuthError::CashierDisabled), 403);
        assert_eq!(status_of(AuthError::NotRestaurantAdmin), 403);
        assert_eq!(status_of(AuthError::NoRestaurantAssociated), 403);
        assert_eq!(status_of(TokenError::TokenExpired), 401);
        assert_eq!(status_of(TokenError::WrongTokenType), 401);
    }

    #[test]
    fn test_generic_errors() {
        assert_eq!(status_of(DomainError::not_found("Restaurant")), 404);
        assert_eq!(
            status_of(DomainError::Conflict {
                message: "cashier already exists".to_string()
            }),
            400
        );
        assert_eq!(status_of(DomainError::internal("db down")), 500);
    }

    #[derive(Debug, validator::Validate)]
    struct Signup {
        #[validate(length(min = 1))]
        phone_number: String,
        #[validate(length(max = 3))]
        full_name: String,
    }

    #[actix_web::test]
    async fn test_validation_failed_lists_fields() {
        let errors = Signup {
            phone_number: String::new(),
            full_name: "Aziza".to_string(),
        }
        .validate()
        .unwrap_err();

        let resp = validation_failed(&errors);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], error_codes::VALIDATION_ERROR);
        let mut fields: Vec<&str> = body["details"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f.as_str().unwrap())
            .collect();
        fields.sort_unstable();
        assert_eq!(fields, vec!["full_name", "phone_number"]);
    }

    #[test]
    fn test_message_is_user_facing() {
        let (_, body) = error_parts(&OtpError::InvalidCode.into());
        assert_eq!(body.message, "Invalid code");
        assert_eq!(body.error, error_codes::OTP_INVALID_CODE);

        let (_, body) = error_parts(&DomainError::internal("connection refused"));
        assert!(!body.message.contains("connection refused"));
    }
}
