use serde::{Deserialize, Serialize};

/// User identifier assigned by the store on creation.
pub type UserId = i32;

/// A position on the app's coordinate plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A stored user row.
///
/// The credential secret is deliberately not part of this type; it never
/// leaves the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub position: Position,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Input for user creation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
    pub gender: String,
    pub age: i32,
    pub position: Position,
}

/// One entry of a discovery result: a candidate the requester has not yet
/// swiped on, with the distance computed from the requester's position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredProfile {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub distance: f64,
}

/// A recorded swipe decision for the ordered pair (swiper, swipee).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeDecision {
    #[serde(rename = "swiperId")]
    pub swiper_id: UserId,
    #[serde(rename = "swipeeId")]
    pub swipee_id: UserId,
    pub liked: bool,
    #[serde(rename = "swipedAt", default)]
    pub swiped_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Outcome of a swipe: whether a mutual match now exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub matched: bool,
    #[serde(rename = "matchedUserId", skip_serializing_if = "Option::is_none")]
    pub matched_user_id: Option<UserId>,
}

impl MatchOutcome {
    pub fn matched_with(user_id: UserId) -> Self {
        Self {
            matched: true,
            matched_user_id: Some(user_id),
        }
    }

    pub fn no_match() -> Self {
        Self {
            matched: false,
            matched_user_id: None,
        }
    }
}
