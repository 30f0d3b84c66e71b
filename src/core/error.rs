//! Error type shared by the discovery and swipe paths.

use thiserror::Error;

use crate::models::UserId;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("user {0} does not exist")]
    UnknownUser(UserId),

    #[error("invalid age range: min_age {min} is greater than max_age {max}")]
    InvalidAgeRange { min: i32, max: i32 },

    #[error("gender filter must contain at least one value")]
    EmptyGenderFilter,

    #[error("a user cannot swipe on themselves")]
    SelfSwipe,

    #[error("email {0} is already registered")]
    EmailInUse(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T, E = MatchError> = std::result::Result<T, E>;
