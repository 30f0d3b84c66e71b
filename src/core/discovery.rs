use std::sync::Arc;

use crate::core::error::{MatchError, Result};
use crate::core::store::{CandidateFilter, CandidateStore};
use crate::models::{DiscoveredProfile, UserId};

/// Sentinel upper bound used when the caller gives no max age.
pub const DEFAULT_MAX_AGE: i32 = 999;

/// Unvalidated discovery parameters as they arrive from the caller.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryRequest {
    /// Accepted gender values; `None` means the caller did not constrain
    /// gender at all. An explicitly empty list is rejected.
    pub genders: Option<Vec<String>>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

/// Orchestrates a discovery request: validates the filters, then delegates
/// the filtered, distance-ordered query to the candidate store.
///
/// The engine holds no state of its own beyond the store handle; ranking and
/// exclusion happen at the data layer so the unfiltered population is never
/// pulled into this process.
#[derive(Debug)]
pub struct DiscoveryEngine<S> {
    store: Arc<S>,
}

impl<S> Clone for DiscoveryEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CandidateStore> DiscoveryEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Find candidates for `requester`, nearest first.
    ///
    /// Age bounds default to `[0, DEFAULT_MAX_AGE]`; an inverted range is
    /// rejected rather than swapped. Candidates the requester has already
    /// swiped on never appear, and neither does the requester themselves.
    pub async fn discover(
        &self,
        requester: UserId,
        request: DiscoveryRequest,
    ) -> Result<Vec<DiscoveredProfile>> {
        let min_age = request.min_age.unwrap_or(0);
        let max_age = request.max_age.unwrap_or(DEFAULT_MAX_AGE);

        if min_age > max_age {
            return Err(MatchError::InvalidAgeRange {
                min: min_age,
                max: max_age,
            });
        }

        if let Some(genders) = &request.genders {
            if genders.is_empty() {
                return Err(MatchError::EmptyGenderFilter);
            }
        }

        let filter = CandidateFilter {
            genders: request.genders,
            min_age,
            max_age,
        };

        tracing::debug!(
            "Discovery for user {}: ages {}..={}, genders {:?}",
            requester,
            filter.min_age,
            filter.max_age,
            filter.genders
        );

        self.store.find_candidates(requester, &filter).await
    }
}
