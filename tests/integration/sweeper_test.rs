//! Inactivity sweeper integration tests

use std::time::Duration;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use roomchat::backend::sweeper::{sweep_once, SweepReport, Sweeper, SweeperConfig};
use roomchat::shared::participant::now_millis;
use roomchat::shared::{MessageKind, Participant};

use crate::common::TestApp;

const TOLERANCE: Duration = Duration::from_secs(10);

#[tokio::test]
async fn test_sweep_evicts_only_stale_participants() {
    let app = TestApp::new().await;
    let now = now_millis();

    app.store
        .participants()
        .insert(&Participant::new("sleepy", now - 20_000))
        .await
        .unwrap();
    app.store
        .participants()
        .insert(&Participant::new("awake", now - 1_000))
        .await
        .unwrap();

    let report = sweep_once(&app.store, now, TOLERANCE, 4).await.unwrap();
    assert_eq!(
        report,
        SweepReport {
            scanned: 1,
            evicted: 1,
            skipped: 0,
            failed: 0
        }
    );

    let names: Vec<String> = app
        .store
        .participants()
        .find()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["awake"]);

    let messages = app.store.messages().find().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].from, "sleepy");
    assert_eq!(messages[0].to, "Todos");
    assert_eq!(messages[0].text, "sai da sala...");
    assert_eq!(messages[0].kind, MessageKind::Status);
}

#[tokio::test]
async fn test_sweep_boundary_is_exclusive() {
    let app = TestApp::new().await;
    let now = now_millis();

    // Exactly at the tolerance is not yet stale.
    app.store
        .participants()
        .insert(&Participant::new("edge", now - 10_000))
        .await
        .unwrap();

    let report = sweep_once(&app.store, now, TOLERANCE, 1).await.unwrap();
    assert_eq!(report.scanned, 0);
    assert!(app.store.participants().find_one("edge").await.unwrap().is_some());
}

#[tokio::test]
async fn test_heartbeat_after_scan_keeps_participant() {
    let app = TestApp::new().await;
    let now = now_millis();
    app.store
        .participants()
        .insert(&Participant::new("late", now - 30_000))
        .await
        .unwrap();

    let cutoff = now - 10_000;
    let stale = app.store.participants().find_stale(cutoff).await.unwrap();
    assert_eq!(stale.len(), 1);

    // Heartbeat lands between the scan and the delete.
    let (status, _) = app.send(Method::POST, "/status", Some("late"), None).await;
    assert_eq!(status, StatusCode::OK);

    let evicted = app
        .store
        .evict("late", cutoff, &roomchat::shared::NewMessage::left("late"))
        .await
        .unwrap();
    assert!(evicted.is_none());
    assert!(app.store.participants().find_one("late").await.unwrap().is_some());
    assert!(app.store.messages().find().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_spawned_sweeper_evicts_and_stops() {
    let app = TestApp::new().await;
    app.store
        .participants()
        .insert(&Participant::new("gone", now_millis() - 60_000))
        .await
        .unwrap();

    let sweeper = Sweeper::spawn(
        app.store.clone(),
        SweeperConfig {
            interval: Duration::from_millis(20),
            tolerance: TOLERANCE,
            concurrency: 2,
        },
    );
    let stats = sweeper.stats();

    let mut evicted = false;
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if app.store.participants().find_one("gone").await.unwrap().is_none() {
            evicted = true;
            break;
        }
    }
    assert!(evicted, "sweeper did not evict the stale participant");

    sweeper.shutdown().await;

    let totals = stats.totals();
    assert!(totals.ticks >= 1);
    assert_eq!(totals.evicted, 1);
    assert_eq!(totals.failed, 0);

    let (_, list) = app.list_messages(None, "").await;
    assert_eq!(list[0]["text"], "sai da sala...");
}

#[tokio::test]
async fn test_sweeper_shutdown_before_first_tick() {
    let app = TestApp::new().await;
    let sweeper = Sweeper::spawn(
        app.store.clone(),
        SweeperConfig {
            interval: Duration::from_secs(3600),
            ..SweeperConfig::default()
        },
    );
    let stats = sweeper.stats();

    tokio::time::timeout(Duration::from_secs(5), sweeper.shutdown())
        .await
        .expect("shutdown should not wait for the next tick");
    assert_eq!(stats.totals().ticks, 0);
}
