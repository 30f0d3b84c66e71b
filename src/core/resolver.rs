use std::sync::Arc;

use crate::core::error::{MatchError, Result};
use crate::core::store::{SwipeLedger, UserRegistry};
use crate::models::{MatchOutcome, UserId};

/// Resolves swipes into match verdicts.
///
/// A match is never persisted; it is derived from the two directed ledger
/// entries on every swipe. The protocol is: upsert the forward edge, then
/// (only for a like) read the reverse edge. With two users liking each other
/// concurrently, the writes and reads may interleave so that both calls see
/// the match (each side notified once) or only the later call does. Strict
/// mode serializes the write and read per unordered pair, so exactly one of
/// two racing likes reports the match.
#[derive(Debug)]
pub struct MatchResolver<S> {
    store: Arc<S>,
    strict: bool,
}

impl<S> Clone for MatchResolver<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            strict: self.strict,
        }
    }
}

impl<S: UserRegistry + SwipeLedger> MatchResolver<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            strict: false,
        }
    }

    /// Enable per-pair serialization of the upsert + reverse read.
    pub fn with_strict_pair_locking(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Record that `actor` swiped on `target` and report whether a mutual
    /// match now exists.
    pub async fn swipe(
        &self,
        actor: UserId,
        target: UserId,
        liked: bool,
    ) -> Result<MatchOutcome> {
        if actor == target {
            return Err(MatchError::SelfSwipe);
        }

        self.store
            .get_user(actor)
            .await?
            .ok_or(MatchError::UnknownUser(actor))?;
        self.store
            .get_user(target)
            .await?
            .ok_or(MatchError::UnknownUser(target))?;

        if !liked {
            // A pass can never create a match; no reverse read needed.
            self.store.record_swipe(actor, target, false).await?;
            return Ok(MatchOutcome::no_match());
        }

        let reverse = if self.strict {
            self.store
                .record_swipe_serialized(actor, target, true)
                .await?
        } else {
            self.store.record_swipe(actor, target, true).await?;
            self.store.decision(target, actor).await?
        };

        if reverse == Some(true) {
            tracing::info!("Users {} and {} matched", actor, target);
            Ok(MatchOutcome::matched_with(target))
        } else {
            Ok(MatchOutcome::no_match())
        }
    }

    /// Whether `a` and `b` currently like each other.
    ///
    /// The same derivation the swipe path uses, exposed for listings that
    /// want to re-check mutuality from the ledger.
    pub async fn is_mutual(&self, a: UserId, b: UserId) -> Result<bool> {
        Ok(self.store.decision(a, b).await? == Some(true)
            && self.store.decision(b, a).await? == Some(true))
    }
}
