//! PostgreSQL driver tests.
//!
//! Skipped unless `TEST_DATABASE_URL` points at a reachable database.
//! Each test uses ids under a random prefix so runs do not interfere.

#![allow(clippy::panic)]

use events_gateway::config::DatabaseConfig;
use events_gateway::domain::{Event, EventChanges, EventId};
use events_gateway::persistence::{EventStore, PostgresStore, StoreError};

async fn store() -> Option<PostgresStore> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping postgres test");
        return None;
    };
    let config = DatabaseConfig {
        url,
        max_connections: 2,
        min_connections: 0,
        connect_timeout_secs: 5,
    };
    let Ok(store) = PostgresStore::connect(&config).await else {
        panic!("TEST_DATABASE_URL is set but unreachable");
    };
    if let Err(err) = store.init().await {
        panic!("migration failed: {err}");
    }
    Some(store)
}

fn prefixed(suffix: &str) -> String {
    format!("{}-{suffix}", uuid::Uuid::new_v4())
}

#[tokio::test]
async fn crud_round_trip() {
    let Some(store) = store().await else {
        return;
    };
    let id = EventId::from(prefixed("crud"));

    let created = store.create(Event::new(id.clone(), "A", "B")).await;
    assert!(created.is_ok());

    let Ok(found) = store.find(&id).await else {
        panic!("created event must be findable");
    };
    assert_eq!(found, Event::new(id.clone(), "A", "B"));

    let Ok(updated) = store.update(&id, EventChanges::new("C", "D")).await else {
        panic!("update failed");
    };
    assert_eq!(updated, Event::new(id.clone(), "C", "D"));

    assert!(store.delete(&id).await.is_ok());
    assert!(matches!(store.find(&id).await, Err(StoreError::NotFound(_))));
    assert!(matches!(store.delete(&id).await, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn find_all_keeps_insertion_order() {
    let Some(store) = store().await else {
        return;
    };
    let prefix = prefixed("order");
    for n in 0..3 {
        let event = Event::new(format!("{prefix}-{n}"), n.to_string(), "");
        assert!(store.create(event).await.is_ok());
    }

    let Ok(all) = store.find_all().await else {
        panic!("find_all failed");
    };
    let ours: Vec<String> = all
        .into_iter()
        .filter(|e| e.id.as_str().starts_with(&prefix))
        .map(|e| e.id.to_string())
        .collect();
    assert_eq!(
        ours,
        vec![
            format!("{prefix}-0"),
            format!("{prefix}-1"),
            format!("{prefix}-2"),
        ]
    );
}

#[tokio::test]
async fn update_targets_first_duplicate() {
    let Some(store) = store().await else {
        return;
    };
    let id = EventId::from(prefixed("dup"));
    assert!(store.create(Event::new(id.clone(), "one", "")).await.is_ok());
    assert!(store.create(Event::new(id.clone(), "two", "")).await.is_ok());

    let Ok(updated) = store.update(&id, EventChanges::new("changed", "")).await else {
        panic!("update failed");
    };
    assert_eq!(updated.title, "changed");

    let Ok(all) = store.find_all().await else {
        panic!("find_all failed");
    };
    let titles: Vec<String> = all
        .into_iter()
        .filter(|e| e.id == id)
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, ["changed", "two"]);

    assert!(store.delete(&id).await.is_ok());
    assert!(matches!(store.find(&id).await, Err(StoreError::NotFound(_))));
    let Ok(all) = store.find_all().await else {
        panic!("find_all failed");
    };
    assert!(all.iter().all(|e| e.id != id));
}
