use crate::common::logged_in_client;
use lifeline_client::prelude::*;
use std::time::Duration;

async fn store_with_logout(server: &mut mockito::ServerGuard) -> Arc<AppStore> {
    server
        .mock("POST", "/auth/logout/")
        .with_status(205)
        .create_async()
        .await;
    Arc::new(AppStore::new(logged_in_client(server, "a1", "r1")))
}

#[tokio::test]
async fn test_idle_session_is_logged_out() {
    let mut server = mockito::Server::new_async().await;
    let store = store_with_logout(&mut server).await;

    let monitor = InactivityMonitor::start(store.clone(), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(monitor.is_finished());
    assert!(store.client().storage().access_token().is_none());
}

#[tokio::test]
async fn test_touch_postpones_logout() {
    let mut server = mockito::Server::new_async().await;
    let store = store_with_logout(&mut server).await;

    let monitor = InactivityMonitor::start(store.clone(), Duration::from_millis(300));
    for _ in 0..5 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        monitor.touch();
    }

    assert!(!monitor.is_finished());
    assert!(monitor.remaining() > Duration::from_millis(100));
    assert_eq!(store.client().storage().access_token().as_deref(), Some("a1"));
}

#[tokio::test]
async fn test_stop_keeps_session() {
    let mut server = mockito::Server::new_async().await;
    let store = store_with_logout(&mut server).await;

    let monitor = InactivityMonitor::start(store.clone(), Duration::from_millis(50));
    monitor.stop();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(store.client().storage().access_token().as_deref(), Some("a1"));
}
