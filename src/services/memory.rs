use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::distance::euclidean_distance;
use crate::core::error::{MatchError, Result};
use crate::core::store::{CandidateFilter, CandidateStore, StoreHealth, SwipeLedger, UserRegistry};
use crate::models::{DiscoveredProfile, NewUser, SwipeDecision, UserId, UserRecord};

/// Hash-map backend implementing the full storage contract.
///
/// Used by the test suites and available for local runs without PostgreSQL.
/// All operations take the single lock, so per-key upsert atomicity and the
/// serialized write+read path hold trivially.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct StoredUser {
    record: UserRecord,
    password: String,
}

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, StoredUser>,
    ids_by_email: HashMap<String, UserId>,
    swipes: HashMap<(UserId, UserId), SwipeDecision>,
    next_id: UserId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of recorded swipe decisions, for test assertions.
    pub fn swipe_count(&self) -> usize {
        self.inner.read().expect("store lock poisoned").swipes.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRegistry for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<UserRecord> {
        let mut inner = self.inner.write().expect("store lock poisoned");

        if inner.ids_by_email.contains_key(&user.email) {
            return Err(MatchError::EmailInUse(user.email));
        }

        inner.next_id += 1;
        let id = inner.next_id;

        let record = UserRecord {
            id,
            email: user.email.clone(),
            name: user.name,
            gender: user.gender,
            age: user.age,
            position: user.position,
            created_at: Some(chrono::Utc::now()),
        };

        inner.ids_by_email.insert(user.email, id);
        inner.users.insert(
            id,
            StoredUser {
                record: record.clone(),
                password: user.password,
            },
        );

        Ok(record)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<UserRecord>> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.users.get(&id).map(|u| u.record.clone()))
    }

    async fn authenticate<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> Result<Option<UserId>> {
        let inner = self.inner.read().expect("store lock poisoned");
        let id = inner.ids_by_email.get(email).copied().filter(|id| {
            inner
                .users
                .get(id)
                .map_or(false, |u| u.password == password)
        });
        Ok(id)
    }
}

impl CandidateStore for MemoryStore {
    async fn find_candidates<'a>(
        &'a self,
        requester: UserId,
        filter: &'a CandidateFilter,
    ) -> Result<Vec<DiscoveredProfile>> {
        let inner = self.inner.read().expect("store lock poisoned");

        let origin = inner
            .users
            .get(&requester)
            .ok_or(MatchError::UnknownUser(requester))?
            .record
            .position;

        let mut results: Vec<DiscoveredProfile> = inner
            .users
            .values()
            .map(|u| &u.record)
            .filter(|r| r.id != requester)
            .filter(|r| r.age >= filter.min_age && r.age <= filter.max_age)
            .filter(|r| {
                filter
                    .genders
                    .as_ref()
                    .map_or(true, |genders| genders.contains(&r.gender))
            })
            .filter(|r| !inner.swipes.contains_key(&(requester, r.id)))
            .map(|r| DiscoveredProfile {
                id: r.id,
                name: r.name.clone(),
                age: r.age,
                gender: r.gender.clone(),
                distance: euclidean_distance(origin, r.position),
            })
            .collect();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance).then_with(|| a.id.cmp(&b.id)));

        Ok(results)
    }
}

impl SwipeLedger for MemoryStore {
    async fn record_swipe(&self, actor: UserId, target: UserId, liked: bool) -> Result<()> {
        if actor == target {
            return Err(MatchError::SelfSwipe);
        }
        let mut inner = self.inner.write().expect("store lock poisoned");
        upsert_swipe(&mut inner, actor, target, liked);
        Ok(())
    }

    async fn decision(&self, actor: UserId, target: UserId) -> Result<Option<bool>> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.swipes.get(&(actor, target)).map(|d| d.liked))
    }

    async fn record_swipe_serialized(
        &self,
        actor: UserId,
        target: UserId,
        liked: bool,
    ) -> Result<Option<bool>> {
        if actor == target {
            return Err(MatchError::SelfSwipe);
        }
        // One write lock spans the upsert and the reverse read.
        let mut inner = self.inner.write().expect("store lock poisoned");
        upsert_swipe(&mut inner, actor, target, liked);
        Ok(inner.swipes.get(&(target, actor)).map(|d| d.liked))
    }
}

fn upsert_swipe(inner: &mut Inner, actor: UserId, target: UserId, liked: bool) {
    inner.swipes.insert(
        (actor, target),
        SwipeDecision {
            swiper_id: actor,
            swipee_id: target,
            liked,
            swiped_at: Some(chrono::Utc::now()),
        },
    );
}

impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
