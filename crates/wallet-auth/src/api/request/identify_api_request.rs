use serde::Serialize;

use crate::{
    api::{parse_response, ApiConfiguration, IdentifyApiResponse},
    ApiError,
};

/// Payload for the account identification call. The backend answers with the
/// second-factor configuration code for the account.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdentifyApiRequest {
    /// The wallet GUID or email address the user signed in with.
    pub guid_or_email: String,
}

impl IdentifyApiRequest {
    pub(crate) async fn send(
        &self,
        config: &ApiConfiguration,
    ) -> Result<IdentifyApiResponse, ApiError> {
        let response = config.post("/sessions").json(self).send().await?;
        parse_response(response).await
    }
}
