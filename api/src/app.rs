//! Application factory
//!
//! Builds the Actix-web application from a prepared [`AppState`], so the
//! server binary and the integration tests share one route table.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    web, App, HttpRequest, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use cg_shared::config::CorsConfig;
use cg_shared::errors::{error_codes, ErrorResponse};
use cg_shared::types::HealthResponse;

use crate::handlers::bad_request;
use crate::middleware::create_cors;
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let tokens = state.token_service.clone();

    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        // The last wrap runs first, so CORS answers preflights before tracing
        .wrap(TracingLogger::default())
        .wrap(create_cors(cors))
        .route("/health", web::get().to(health_check))
        .configure(|cfg| routes::configure(cfg, tokens))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "chegirma-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid JSON body: {}", err);
    InternalError::from_response(err, bad_request(message)).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid query string: {}", err);
    InternalError::from_response(err, bad_request(message)).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "Not found",
    ));
    InternalError::from_response(err, response).into()
}
