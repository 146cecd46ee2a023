pub mod error;

use actix_web::{HttpMessage, HttpRequest};
use tracing_actix_web::RequestId;
use uuid::Uuid;

pub use error::{bad_request, handle_domain_error, validation_failed, ApiError};

/// Access to the id `TracingLogger` assigns to every request
pub trait RequestIdExt {
    fn get_request_id(&self) -> Option<String>;

    /// The assigned id, or a fresh one when the logger is not mounted
    fn request_id(&self) -> String {
        self.get_request_id()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }
}

impl RequestIdExt for HttpRequest {
    fn get_request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.to_string())
    }
}
