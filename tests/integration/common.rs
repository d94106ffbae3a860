// Common utilities for integration tests

use lifeline_client::prelude::*;
use tracing::info;

/// Client over in-memory storage, configured from the environment
pub fn create_test_client() -> Arc<HttpClient> {
    setup_logger();
    let config = Config::new();
    Arc::new(
        HttpClient::new(config, Arc::new(AuthStorage::in_memory()))
            .expect("Failed to create client"),
    )
}

/// Logs in with the configured credentials and returns the store
pub async fn login() -> Arc<AppStore> {
    let client = create_test_client();
    let credentials = client
        .config()
        .credentials
        .clone()
        .expect("LIFELINE_USERNAME and LIFELINE_PASSWORD must be set");

    let store = Arc::new(AppStore::new(client));
    let user = store.login(&credentials).await.expect("Failed to login");
    info!("Logged in as {:?}", user.username);
    store
}
