use serde::Serialize;

use crate::{
    api::{parse_response, ApiConfiguration, CredentialsApiResponse},
    ApiError,
};

/// Payload for a credentials submission, with or without a second-factor code.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CredentialsApiRequest {
    /// The wallet GUID or email address the user identified with.
    pub guid_or_email: String,
    /// The wallet password.
    pub password: String,
    /// The second-factor code, present only when the account requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_code: Option<String>,
}

impl CredentialsApiRequest {
    pub(crate) async fn send(
        &self,
        config: &ApiConfiguration,
    ) -> Result<CredentialsApiResponse, ApiError> {
        let response = config.post("/sessions/login").json(self).send().await?;
        parse_response(response).await
    }
}
