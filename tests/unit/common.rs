// Shared helpers for the unit tests

use lifeline_client::prelude::*;
use mockito::ServerGuard;

/// Client pointed at the mock server, over in-memory storage
pub fn client_for(server: &ServerGuard) -> Arc<HttpClient> {
    let storage = Arc::new(AuthStorage::in_memory());
    Arc::new(HttpClient::new(Config::with_base_url(&server.url()), storage).expect("client"))
}

/// Same as [`client_for`] with tokens already stored
pub fn logged_in_client(server: &ServerGuard, access: &str, refresh: &str) -> Arc<HttpClient> {
    let client = client_for(server);
    client.storage().set_tokens(access, Some(refresh));
    client
}
