use serde::Deserialize;

/// Outcome of a credentials submission.
///
/// The backend reports both acceptance and rejection with a 2xx status; the
/// `success` flag and the free-text `error_message` carry the result. The
/// message is never structured, so classification happens downstream in
/// [`crate::signin::LoginErrorKind`].
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CredentialsApiResponse {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// The session token, present on acceptance.
    #[serde(default)]
    pub session: Option<String>,
    /// Free-text rejection message, present on rejection.
    #[serde(default)]
    pub error_message: Option<String>,
}
