use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use cg_shared::types::Pagination;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 255))]
    pub full_name: Option<String>,
}

/// `?page=&page_size=`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_query(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikePath {
    pub restaurant_id: Uuid,
    pub action: String,
}
