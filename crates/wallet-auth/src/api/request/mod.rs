mod credentials_api_request;
mod identify_api_request;
mod resend_code_api_request;

pub(crate) use credentials_api_request::CredentialsApiRequest;
pub(crate) use identify_api_request::IdentifyApiRequest;
pub(crate) use resend_code_api_request::ResendCodeApiRequest;
