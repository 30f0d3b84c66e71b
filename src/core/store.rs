//! The storage contract behind the discovery and swipe paths.
//!
//! The traits are implemented by storage backends (`services::postgres` for
//! production, `services::memory` for tests and local runs). The engines in
//! this module depend on these abstractions, not on any concrete backend.
//!
//! All methods return `Send` futures so the traits can be used from
//! multi-threaded async runtimes.

use std::future::Future;

use crate::core::error::Result;
use crate::models::{DiscoveredProfile, NewUser, UserId, UserRecord};

// ─── Query type ─────────────────────────────────────────────────────────────

/// Validated parameters for [`CandidateStore::find_candidates`].
///
/// Built by the discovery engine; backends may assume the invariants hold:
/// `min_age <= max_age`, and `genders` is either `None` (no gender
/// constraint) or a non-empty list.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    /// Accepted gender values; `None` means all genders.
    pub genders: Option<Vec<String>>,
    pub min_age: i32,
    pub max_age: i32,
}

// ─── Traits ─────────────────────────────────────────────────────────────────

/// User creation and lookup.
pub trait UserRegistry {
    /// Persist a new user and return the stored record with its assigned id.
    /// Fails with `EmailInUse` if the email is already registered.
    fn create_user(
        &self,
        user: NewUser,
    ) -> impl Future<Output = Result<UserRecord>> + Send + '_;

    /// Retrieve a user by id. Returns `None` if not found.
    fn get_user(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<UserRecord>>> + Send + '_;

    /// Check a credential pair and return the matching user id, if any.
    fn authenticate<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> impl Future<Output = Result<Option<UserId>>> + Send + 'a;
}

/// The proximity-filtered candidate query.
pub trait CandidateStore {
    /// Return every user other than `requester` that satisfies `filter` and
    /// has not been swiped on by `requester`, ordered by distance from the
    /// requester's position ascending, ties broken by id ascending.
    ///
    /// The filtering, the exclusion of already-swiped users, and the
    /// ordering all happen inside the backend; callers never receive the
    /// unfiltered population. Fails with `UnknownUser` if `requester` does
    /// not exist.
    fn find_candidates<'a>(
        &'a self,
        requester: UserId,
        filter: &'a CandidateFilter,
    ) -> impl Future<Output = Result<Vec<DiscoveredProfile>>> + Send + 'a;
}

/// The append/overwrite store of directional swipe decisions.
pub trait SwipeLedger {
    /// Upsert the decision for the ordered pair (actor, target). Replaying
    /// the same triple leaves the ledger unchanged; swiping the same target
    /// again overwrites the prior decision. Fails with `SelfSwipe` if
    /// `actor == target`.
    fn record_swipe(
        &self,
        actor: UserId,
        target: UserId,
        liked: bool,
    ) -> impl Future<Output = Result<()>> + Send + '_;

    /// Current decision for the exact ordered pair, `None` if absent.
    fn decision(
        &self,
        actor: UserId,
        target: UserId,
    ) -> impl Future<Output = Result<Option<bool>>> + Send + '_;

    /// Upsert the forward decision and read the reverse decision as one
    /// atomic step with respect to other swipes on the same unordered pair.
    ///
    /// Used by the resolver's strict mode: under concurrency, exactly one of
    /// two racing mutual likes observes the other. Returns the reverse
    /// decision, `None` if the target has not swiped back.
    fn record_swipe_serialized(
        &self,
        actor: UserId,
        target: UserId,
        liked: bool,
    ) -> impl Future<Output = Result<Option<bool>>> + Send + '_;
}

/// Liveness probe used by the health endpoint.
pub trait StoreHealth {
    fn ping(&self) -> impl Future<Output = Result<()>> + Send + '_;
}

/// Everything a fully wired backend provides.
pub trait MatchStore:
    UserRegistry + CandidateStore + SwipeLedger + StoreHealth + Send + Sync + 'static
{
}

impl<T> MatchStore for T where
    T: UserRegistry + CandidateStore + SwipeLedger + StoreHealth + Send + Sync + 'static
{
}
