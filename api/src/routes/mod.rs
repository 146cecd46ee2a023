//! Route table of the HTTP API
//!
//! Paths keep their trailing slash. Protected resources are wrapped in
//! [`JwtAuth`] with the role they require.

pub mod auth;
pub mod cashier;
pub mod me;
pub mod restaurant_admin;
pub mod restaurants;

use actix_web::web;
use std::sync::Arc;

use cg_core::services::TokenService;

use crate::middleware::JwtAuth;

/// Register every API route
pub fn configure(cfg: &mut web::ServiceConfig, tokens: Arc<TokenService>) {
    cfg.service(
        web::scope("/api/auth")
            .route("/request-otp/", web::post().to(auth::request_otp))
            .route("/verify-otp/", web::post().to(auth::verify_otp))
            .route("/token/refresh/", web::post().to(auth::refresh_token)),
    )
    .service(
        web::scope("/api/me")
            .wrap(JwtAuth::user(tokens.clone()))
            .service(
                web::resource("/")
                    .route(web::get().to(me::get_profile))
                    .route(web::patch().to(me::update_profile)),
            )
            .route(
                "/liked-restaurants/{restaurant_id}/{action}/",
                web::post().to(me::like_restaurant),
            )
            .route("/transactions/", web::get().to(me::list_transactions)),
    )
    .service(
        web::scope("/api/restaurants")
            .route("/", web::get().to(restaurants::list_restaurants))
            .route(
                "/cashier/auth/login/",
                web::post().to(restaurants::cashier_login),
            )
            .service(
                web::resource("/book-table/")
                    .wrap(JwtAuth::user(tokens.clone()))
                    .route(web::get().to(restaurants::list_bookings))
                    .route(web::post().to(restaurants::book_table)),
            )
            .route("/{id}/", web::get().to(restaurants::restaurant_detail)),
    )
    .service(
        web::scope("/api/cashier")
            .wrap(JwtAuth::cashier(tokens.clone()))
            .route("/transactions/", web::post().to(cashier::record_transaction)),
    )
    // Login sits outside the protected admin scope
    .route(
        "/api/restaurant-admin/auth/login/",
        web::post().to(auth::admin_login),
    )
    .service(
        web::scope("/api/restaurant-admin")
            .wrap(JwtAuth::user(tokens))
            .route("/users/", web::get().to(restaurant_admin::list_customers))
            .route(
                "/users/export/",
                web::get().to(restaurant_admin::export_customers),
            )
            .service(
                web::resource("/cashiers/")
                    .route(web::get().to(restaurant_admin::list_cashiers))
                    .route(web::post().to(restaurant_admin::create_cashier)),
            )
            .route(
                "/cashiers/{id}/",
                web::patch().to(restaurant_admin::update_cashier),
            )
            .route(
                "/cashiers/{id}/regenerate-pin/",
                web::post().to(restaurant_admin::regenerate_pin),
            )
            .service(
                web::resource("/restaurant/")
                    .route(web::get().to(restaurant_admin::get_restaurant))
                    .route(web::patch().to(restaurant_admin::update_restaurant)),
            )
            .route(
                "/restaurant/gallery/",
                web::post().to(restaurant_admin::add_gallery_image),
            ),
    );
}
