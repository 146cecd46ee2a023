//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware extracts the bearer token from the Authorization header,
//! verifies it as an access token with the core `TokenService`, checks the
//! role the scope requires and injects an [`AuthContext`] into the request.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use cg_core::domain::entities::token::{Claims, Role};
use cg_core::errors::{AuthError, DomainError, TokenError};
use cg_core::services::TokenService;

use crate::handlers::{handle_domain_error, ApiError};

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id, or cashier id for cashier tokens
    pub subject_id: Uuid,
    pub role: Role,
    /// Restaurant of a cashier token
    pub restaurant_id: Option<Uuid>,
    /// Verified claims, needed by services that re-check them
    pub claims: Claims,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let subject_id = claims
            .subject_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;

        Ok(Self {
            subject_id,
            role: claims.role,
            restaurant_id: claims.restaurant_uuid(),
            claims,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
    role: Role,
}

impl JwtAuth {
    /// Require an access token with the given role
    pub fn new(token_service: Arc<TokenService>, role: Role) -> Self {
        Self {
            token_service,
            role,
        }
    }

    /// Customer and admin endpoints
    pub fn user(token_service: Arc<TokenService>) -> Self {
        Self::new(token_service, Role::User)
    }

    /// Cashier endpoints
    pub fn cashier(token_service: Arc<TokenService>) -> Self {
        Self::new(token_service, Role::Cashier)
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
            role: self.role,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    role: Role,
}

impl<S> JwtAuthMiddleware<S> {
    fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext, DomainError> {
        let token = extract_bearer_token(headers).ok_or(AuthError::MissingCredentials)?;
        let claims = self.token_service.verify_access_token(token)?;

        if claims.role != self.role {
            return Err(AuthError::InsufficientPermissions.into());
        }

        AuthContext::from_claims(claims)
    }
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let outcome = self.authenticate(req.headers());

        Box::pin(async move {
            let context = match outcome {
                Ok(context) => context,
                Err(e) => {
                    log::debug!("Rejected {} {}: {}", req.method(), req.path(), e);
                    let response = handle_domain_error(e);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(context);
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(AuthError::MissingCredentials).into());

        ready(result)
    }
}
