//! Signed-in customer endpoints under `/api/me/`

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::{LikePath, PageQuery, UpdateProfileRequest};
use crate::handlers::{handle_domain_error, validation_failed, RequestIdExt};
use crate::middleware::AuthContext;
use crate::state::AppState;

/// GET /api/me/
pub async fn get_profile(auth: AuthContext, state: web::Data<AppState>) -> HttpResponse {
    match state.user_service.profile(auth.subject_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(error),
    }
}

/// PATCH /api/me/
///
/// Only `full_name` can be changed; other fields are ignored.
pub async fn update_profile(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState>,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    log::info!("[{}] Updating profile of {}", req.request_id(), auth.subject_id);
    match state
        .user_service
        .update_profile(auth.subject_id, request.into_inner().full_name)
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/me/liked-restaurants/{restaurant_id}/{action}/
///
/// `action` is `add` or `remove`.
pub async fn like_restaurant(
    auth: AuthContext,
    state: web::Data<AppState>,
    path: web::Path<LikePath>,
) -> HttpResponse {
    match state
        .user_service
        .like_restaurant(auth.subject_id, path.restaurant_id, &path.action)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/me/transactions/?page=&page_size=
pub async fn list_transactions(
    auth: AuthContext,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    match state
        .transaction_service
        .list_for_user(auth.subject_id, query.pagination())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error),
    }
}
