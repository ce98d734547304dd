//! Polling loop behavior against an unreachable backend.

use std::path::PathBuf;
use std::time::Duration;

use reelparty::client::ApiClient;
use reelparty::config::{AuthEndpoints, Config};
use reelparty::error::ApiError;
use reelparty::poll::GameStatePoller;

/// A config pointing at a port nothing listens on, so every fetch fails
/// fast with a connection error.
fn unreachable_config() -> Config {
    Config {
        base_url: "http://127.0.0.1:9".to_string(),
        auth: AuthEndpoints::default(),
        log_level: "warn".to_string(),
        session_file: PathBuf::from("unused-session.json"),
        poll_interval: Duration::from_secs(3),
    }
}

#[tokio::test]
async fn first_tick_publishes_a_snapshot_immediately() {
    let client = ApiClient::new(unreachable_config());
    let poller = GameStatePoller::spawn(client, 1, Duration::from_secs(60));
    let mut rx = poller.subscribe();

    // The interval's first tick fires at once; the failed fetch publishes
    // None rather than staying silent.
    let changed = tokio::time::timeout(Duration::from_secs(10), rx.changed()).await;
    assert!(changed.is_ok(), "expected a snapshot within the timeout");
    assert!(rx.borrow_and_update().is_none());

    poller.stop();
}

#[tokio::test]
async fn refresh_now_triggers_an_out_of_band_fetch() {
    let client = ApiClient::new(unreachable_config());
    // Long interval: any update after the first must come from refresh_now.
    let poller = GameStatePoller::spawn(client, 1, Duration::from_secs(600));
    let mut rx = poller.subscribe();

    let first = tokio::time::timeout(Duration::from_secs(10), rx.changed()).await;
    assert!(first.is_ok());
    let _ = rx.borrow_and_update();

    poller.refresh_now();
    let second = tokio::time::timeout(Duration::from_secs(10), rx.changed()).await;
    assert!(second.is_ok(), "refresh_now should cause another fetch");

    poller.stop();
}

#[tokio::test]
async fn gateway_reports_unreachable_backend_with_url() {
    let client = ApiClient::new(unreachable_config());
    let result = client.game_state(1).await;
    match result {
        Err(ApiError::Network { url }) => {
            assert!(url.contains("/Game/rooms/1/state"));
        }
        other => unreachable!("expected a network error, got {other:?}"),
    }
}

#[tokio::test]
async fn my_rooms_fallback_still_surfaces_network_errors() {
    let client = ApiClient::new(unreachable_config());
    // Both the dedicated endpoint and the fallback are unreachable; the
    // caller sees the fallback's error.
    let result = client.my_rooms().await;
    match result {
        Err(ApiError::Network { url }) => assert!(url.ends_with("/Rooms")),
        other => unreachable!("expected a network error, got {other:?}"),
    }
}
