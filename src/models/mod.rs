// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DiscoveredProfile, MatchOutcome, NewUser, Position, SwipeDecision, UserId, UserRecord,
};
pub use requests::{DiscoverQuery, LoginRequest, RegisterRequest, SwipeRequest};
pub use responses::{
    DiscoverResponse, ErrorResponse, HealthResponse, SwipeResponse, TokenResponse,
    UserCreatedResponse,
};
