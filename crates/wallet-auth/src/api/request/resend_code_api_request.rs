use serde::Serialize;

use crate::{api::ApiConfiguration, ApiError};

/// Payload asking the backend to deliver a fresh SMS code.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResendCodeApiRequest {
    /// The wallet account identifier the code should be sent for.
    pub account_id: String,
}

impl ResendCodeApiRequest {
    pub(crate) async fn send(&self, config: &ApiConfiguration) -> Result<(), ApiError> {
        let response = config
            .post("/sessions/resend-code")
            .json(self)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::ResponseContent { status, message })
    }
}
