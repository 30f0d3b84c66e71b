// Integration tests for Ember Match
//
// Full discovery/swipe flows through the engines over the in-memory backend.

use ember_match::core::{
    DiscoveryEngine, DiscoveryRequest, MatchResolver, SwipeLedger, UserRegistry,
};
use ember_match::models::{MatchOutcome, NewUser, Position, UserId};
use ember_match::services::MemoryStore;
use std::sync::Arc;

struct TestApp {
    store: Arc<MemoryStore>,
    discovery: DiscoveryEngine<MemoryStore>,
    resolver: MatchResolver<MemoryStore>,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            discovery: DiscoveryEngine::new(Arc::clone(&store)),
            resolver: MatchResolver::new(Arc::clone(&store)),
            store,
        }
    }

    fn strict() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            discovery: DiscoveryEngine::new(Arc::clone(&store)),
            resolver: MatchResolver::new(Arc::clone(&store)).with_strict_pair_locking(true),
            store,
        }
    }

    async fn register(&self, name: &str, gender: &str, age: i32, x: f64, y: f64) -> UserId {
        self.store
            .create_user(NewUser {
                email: format!("{}@example.com", name),
                name: name.to_string(),
                password: "password123".to_string(),
                gender: gender.to_string(),
                age,
                position: Position::new(x, y),
            })
            .await
            .unwrap()
            .id
    }
}

#[tokio::test]
async fn test_discovery_ranks_by_proximity() {
    let app = TestApp::new();
    let alice = app.register("alice", "f", 25, 0.0, 0.0).await;
    let bob = app.register("bob", "m", 30, 3.0, 4.0).await;
    let carol = app.register("carol", "m", 30, 1.0, 0.0).await;

    let results = app
        .discovery
        .discover(
            alice,
            DiscoveryRequest {
                genders: Some(vec!["m".to_string()]),
                min_age: Some(0),
                max_age: Some(999),
            },
        )
        .await
        .unwrap();

    let ids: Vec<UserId> = results.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![carol, bob]);
    assert_eq!(results[0].distance, 1.0);
    assert_eq!(results[1].distance, 5.0);
}

#[tokio::test]
async fn test_swiped_profiles_leave_the_pool_for_good() {
    let app = TestApp::new();
    let alice = app.register("alice", "f", 25, 0.0, 0.0).await;
    let bob = app.register("bob", "m", 30, 1.0, 0.0).await;
    let carol = app.register("carol", "m", 28, 2.0, 0.0).await;

    app.resolver.swipe(alice, bob, true).await.unwrap();

    // Bob is gone for alice under any filter combination.
    for request in [
        DiscoveryRequest::default(),
        DiscoveryRequest {
            genders: Some(vec!["m".to_string()]),
            ..Default::default()
        },
        DiscoveryRequest {
            genders: None,
            min_age: Some(29),
            max_age: Some(31),
        },
    ] {
        let results = app.discovery.discover(alice, request).await.unwrap();
        assert!(results.iter().all(|p| p.id != bob));
    }

    // Carol is unaffected, and bob still sees alice.
    let results = app
        .discovery
        .discover(alice, DiscoveryRequest::default())
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, carol);

    let results = app
        .discovery
        .discover(bob, DiscoveryRequest::default())
        .await
        .unwrap();
    assert!(results.iter().any(|p| p.id == alice));
}

#[tokio::test]
async fn test_mutual_likes_resolve_exactly_once_per_side() {
    let app = TestApp::new();
    let alice = app.register("alice", "f", 25, 0.0, 0.0).await;
    let bob = app.register("bob", "m", 30, 3.0, 4.0).await;

    let first = app.resolver.swipe(alice, bob, true).await.unwrap();
    assert_eq!(first, MatchOutcome::no_match());

    let second = app.resolver.swipe(bob, alice, true).await.unwrap();
    assert_eq!(second, MatchOutcome::matched_with(alice));
}

#[tokio::test]
async fn test_pass_then_like_back_is_not_a_match() {
    let app = TestApp::new();
    let alice = app.register("alice", "f", 25, 0.0, 0.0).await;
    let bob = app.register("bob", "m", 30, 3.0, 4.0).await;

    app.resolver.swipe(alice, bob, false).await.unwrap();
    let outcome = app.resolver.swipe(bob, alice, true).await.unwrap();
    assert_eq!(outcome, MatchOutcome::no_match());
}

#[tokio::test]
async fn test_repeat_swipes_upsert_rather_than_accumulate() {
    let app = TestApp::new();
    let alice = app.register("alice", "f", 25, 0.0, 0.0).await;
    let bob = app.register("bob", "m", 30, 3.0, 4.0).await;

    app.resolver.swipe(alice, bob, true).await.unwrap();
    app.resolver.swipe(alice, bob, true).await.unwrap();
    app.resolver.swipe(alice, bob, false).await.unwrap();

    assert_eq!(app.store.swipe_count(), 1);
    assert_eq!(app.store.decision(alice, bob).await.unwrap(), Some(false));
}

#[tokio::test]
async fn test_full_journey_register_discover_swipe_match() {
    let app = TestApp::new();
    let alice = app.register("alice", "f", 25, 0.0, 0.0).await;
    let bob = app.register("bob", "m", 30, 0.5, 0.5).await;

    // Alice sees bob, likes him.
    let candidates = app
        .discovery
        .discover(alice, DiscoveryRequest::default())
        .await
        .unwrap();
    assert_eq!(candidates[0].id, bob);
    let outcome = app.resolver.swipe(alice, candidates[0].id, true).await.unwrap();
    assert!(!outcome.matched);

    // Bob sees alice, likes her back: match, and both pools are now empty.
    let candidates = app
        .discovery
        .discover(bob, DiscoveryRequest::default())
        .await
        .unwrap();
    assert_eq!(candidates[0].id, alice);
    let outcome = app.resolver.swipe(bob, candidates[0].id, true).await.unwrap();
    assert_eq!(outcome, MatchOutcome::matched_with(alice));

    for user in [alice, bob] {
        let left = app
            .discovery
            .discover(user, DiscoveryRequest::default())
            .await
            .unwrap();
        assert!(left.is_empty());
    }
}

#[tokio::test]
async fn test_strict_mode_end_to_end() {
    let app = TestApp::strict();
    let alice = app.register("alice", "f", 25, 0.0, 0.0).await;
    let bob = app.register("bob", "m", 30, 3.0, 4.0).await;

    assert_eq!(
        app.resolver.swipe(alice, bob, true).await.unwrap(),
        MatchOutcome::no_match()
    );
    assert_eq!(
        app.resolver.swipe(bob, alice, true).await.unwrap(),
        MatchOutcome::matched_with(alice)
    );
    assert!(app.resolver.is_mutual(alice, bob).await.unwrap());
}

#[tokio::test]
async fn test_concurrent_mutual_likes_notify_at_least_one_side() {
    // Non-strict mode promises at-least-one notification under the
    // interleavings the write-then-read protocol allows. Exercise the race
    // repeatedly from two tasks.
    for _ in 0..25 {
        let app = Arc::new(TestApp::new());
        let alice = app.register("alice", "f", 25, 0.0, 0.0).await;
        let bob = app.register("bob", "m", 30, 3.0, 4.0).await;

        let a = {
            let app = Arc::clone(&app);
            tokio::spawn(async move { app.resolver.swipe(alice, bob, true).await.unwrap() })
        };
        let b = {
            let app = Arc::clone(&app);
            tokio::spawn(async move { app.resolver.swipe(bob, alice, true).await.unwrap() })
        };

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        assert!(
            a.matched || b.matched,
            "at least one side must observe the mutual like"
        );
    }
}
