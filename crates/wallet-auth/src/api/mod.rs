//! Wire types for the wallet authentication endpoints.
//!
//! Kept internal to the crate; hosts interact with the backend through the
//! sign-in flow, never with these payloads directly.

mod configuration;
mod request;
mod response;

pub(crate) use configuration::ApiConfiguration;
pub(crate) use request::{CredentialsApiRequest, IdentifyApiRequest, ResendCodeApiRequest};
pub(crate) use response::{parse_response, CredentialsApiResponse, IdentifyApiResponse};
