use serde::{Deserialize, Serialize};
use validator::Validate;

use cg_core::services::restaurant_admin::NewCashier;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateCashierRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name and phone_number are required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "name and phone_number are required"))]
    pub phone_number: String,
}

impl From<CreateCashierRequest> for NewCashier {
    fn from(request: CreateCashierRequest) -> Self {
        NewCashier {
            name: request.name,
            phone_number: request.phone_number,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GalleryImageRequest {
    /// Stored path of an already uploaded image
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "image file is required"))]
    pub image: String,
}
