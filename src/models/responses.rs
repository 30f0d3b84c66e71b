use serde::{Deserialize, Serialize};

use crate::models::domain::{DiscoveredProfile, MatchOutcome, UserId};

/// Response for user creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedResponse {
    pub result: CreatedUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub gender: String,
    pub age: i32,
}

/// Response for login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response for the discover endpoint: candidates ordered by distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub results: Vec<DiscoveredProfile>,
}

/// Response for the swipe endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub results: MatchOutcome,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
