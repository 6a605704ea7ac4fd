use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These specify the targeted wallet backend
/// and are uneditable once the client is initialized.
///
/// Defaults to the production endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The wallet API url of the targeted instance. Defaults to
    /// `https://api.blockwallet.dev`
    pub wallet_url: String,
    /// The user_agent sent with every request. Defaults to `Wallet Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            wallet_url: "https://api.blockwallet.dev".into(),
            user_agent: "Wallet Rust-SDK".into(),
        }
    }
}
