use crate::ClientSettings;

/// Resolved request configuration shared by every endpoint call.
#[derive(Debug, Clone)]
pub(crate) struct ApiConfiguration {
    /// Base url of the wallet API, without a trailing slash.
    pub base_path: String,
    /// Sent as the `User-Agent` header on every request.
    pub user_agent: String,
    pub client: reqwest::Client,
}

impl ApiConfiguration {
    pub(crate) fn new(settings: &ClientSettings) -> Self {
        Self {
            base_path: settings.wallet_url.trim_end_matches('/').to_owned(),
            user_agent: settings.user_agent.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Starts a JSON `POST` to `{base_path}{path}` with the common headers.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_path, path))
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-store")
    }
}
