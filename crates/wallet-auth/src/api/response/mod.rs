mod credentials_api_response;
mod identify_api_response;

pub(crate) use credentials_api_response::CredentialsApiResponse;
pub(crate) use identify_api_response::IdentifyApiResponse;

use crate::ApiError;

/// Parses a response body as JSON on success, or captures the raw body text
/// as a [`ApiError::ResponseContent`] on a non-2xx status.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::ResponseContent { status, message })
}
