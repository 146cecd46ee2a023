//! Profile and like types

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::ValidationError;

/// User as shown on their own profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub liked_restaurants: Vec<Uuid>,
}

/// Path segment of the like endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Add,
    Remove,
}

impl FromStr for LikeAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(LikeAction::Add),
            "remove" => Ok(LikeAction::Remove),
            other => Err(ValidationError::InvalidAction {
                action: other.to_string(),
            }),
        }
    }
}

/// Outcome of adding or removing a like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResult {
    pub status: String,
    pub message: String,
    pub liked_restaurants: Vec<Uuid>,
}
