//! Shared helpers for wallet SDK integration tests.

use wallet_auth::ClientSettings;

/// Helper for testing the wallet API using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before
/// the test completes.
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        wallet_url: server.uri(),
        user_agent: "test-agent".to_string(),
    };

    (server, settings)
}
