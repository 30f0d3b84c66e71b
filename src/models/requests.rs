use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::UserId;

/// Request to create a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 8, max = 255))]
    pub password: String,
    #[validate(length(min = 1, max = 32))]
    pub gender: String,
    #[validate(range(min = 18, max = 120))]
    pub age: i32,
    pub location: LocationInput,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationInput {
    pub x: f64,
    pub y: f64,
}

/// Request to log in and obtain a token
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Query parameters for the discover endpoint
///
/// `genders` is a comma-separated list of accepted gender values; omitting it
/// means no gender constraint. Omitted age bounds default to 0 and the
/// service's open-ended maximum.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverQuery {
    pub user_id: UserId,
    #[serde(default)]
    pub genders: Option<String>,
    #[serde(default)]
    pub min_age: Option<i32>,
    #[serde(default)]
    pub max_age: Option<i32>,
}

/// Request to record a swipe decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: UserId,
    #[serde(alias = "swipee_id", rename = "swipeeId")]
    pub swipee_id: UserId,
    pub liked: bool,
}
