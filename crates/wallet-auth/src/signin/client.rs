use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::{
    api::{ApiConfiguration, CredentialsApiRequest, IdentifyApiRequest, ResendCodeApiRequest},
    signin::{
        remove_whitespace, AttemptOutcome, AttemptTag, LoginError, PasswordSubmission,
        SigninSnapshot, SigninState, TransitionError, TwoFactorAuthType,
    },
    ApiError, ClientSettings,
};

/// Errors surfaced by [`SigninClient`] operations.
///
/// Rejected credentials are not errors: they land in the flow's login-error
/// slot and surface as [`SubmitResult::Rejected`].
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SigninError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result of a credentials submission as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The backend accepted the credentials; carries the session token. The
    /// host tears the flow down from here.
    Authenticated {
        /// Opaque session token for the authenticated wallet session.
        session: String,
    },
    /// A second factor is required; the flow moved to the code step without
    /// a network attempt.
    SecondFactorRequired,
    /// The backend rejected the attempt. The classified error is displayed
    /// in place and the step stays interactive for retry.
    Rejected,
    /// The response arrived for a step the user has since left and was
    /// discarded without touching the flow.
    Stale,
}

/// Drives the sign-in flow against the wallet backend.
///
/// Wraps the pure [`SigninState`] machine with the three boundary calls it
/// needs: account identification, credentials submission and second-factor
/// resend. State lives behind a mutex so a host can share the client across
/// UI callbacks; request tagging in the state machine makes late responses
/// harmless.
pub struct SigninClient {
    config: ApiConfiguration,
    state: Mutex<SigninState>,
}

impl SigninClient {
    /// Creates a client for the given settings, at the identification step.
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            config: ApiConfiguration::new(&settings),
            state: Mutex::new(SigninState::new()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SigninState> {
        self.state.lock().expect("sign-in state lock poisoned")
    }

    /// Renders the observable flow state for the host UI.
    ///
    /// `invalid` and `has_password` describe the host form's live fields.
    pub fn snapshot(&self, invalid: bool, has_password: bool) -> SigninSnapshot {
        self.lock_state().snapshot(invalid, has_password)
    }

    /// Navigates back to the identification step.
    pub fn go_back(&self) -> Result<(), TransitionError> {
        self.lock_state().go_back()
    }

    /// Completes the identification step and resolves the account's
    /// second-factor configuration.
    ///
    /// The flow advances to the password step even when the configuration
    /// fetch fails: an unresolved configuration defaults to no second factor
    /// rather than blocking the password step. The fetch error is still
    /// returned so the host can retry with
    /// [`SigninClient::refresh_auth_type`].
    pub async fn identify(&self, guid_or_email: &str) -> Result<TwoFactorAuthType, SigninError> {
        self.lock_state().identify(guid_or_email)?;
        self.refresh_auth_type().await
    }

    /// Re-fetches the second-factor configuration for the identified account.
    pub async fn refresh_auth_type(&self) -> Result<TwoFactorAuthType, SigninError> {
        let request = IdentifyApiRequest {
            guid_or_email: self.lock_state().form_values().guid_or_email.clone(),
        };
        match request.send(&self.config).await {
            Ok(response) => {
                let auth_type = TwoFactorAuthType::resolve(response.auth_type);
                self.lock_state().set_auth_type(auth_type);
                Ok(auth_type)
            }
            Err(error) => {
                log::debug!("second-factor configuration fetch failed: {error}");
                Err(SigninError::Api(error))
            }
        }
    }

    /// Submits the password step.
    pub async fn submit_password(&self, password: &str) -> Result<SubmitResult, SigninError> {
        let (tag, request) = {
            let mut state = self.lock_state();
            match state.submit_password(password)? {
                PasswordSubmission::AwaitTwoFactor => {
                    return Ok(SubmitResult::SecondFactorRequired)
                }
                PasswordSubmission::AttemptLogin(tag) => {
                    let request = CredentialsApiRequest {
                        guid_or_email: state.form_values().guid_or_email.clone(),
                        password: password.to_owned(),
                        two_factor_code: None,
                    };
                    (tag, request)
                }
            }
        };
        self.run_attempt(tag, request).await
    }

    /// Submits the second-factor code, whitespace-normalized, together with
    /// the credentials carried forward from the earlier steps.
    pub async fn submit_two_factor(&self, code: &str) -> Result<SubmitResult, SigninError> {
        let code = remove_whitespace(code);
        let (tag, request) = {
            let mut state = self.lock_state();
            let tag = state.submit_two_factor(&code)?;
            let request = CredentialsApiRequest {
                guid_or_email: state.form_values().guid_or_email.clone(),
                password: state.form_values().password.clone(),
                two_factor_code: Some(code),
            };
            (tag, request)
        };
        self.run_attempt(tag, request).await
    }

    /// Requests a fresh SMS code for the identified account.
    ///
    /// Fire-and-forget from the step's perspective: the flow stays
    /// interactive, repeated calls each issue a fresh request, and a failure
    /// surfaces through the same error slot as a submission failure, last
    /// write winning. A failure landing after the user left the step is
    /// discarded.
    pub async fn resend_code(&self, account_id: &str) {
        let tag = self.lock_state().begin_resend();
        let request = ResendCodeApiRequest {
            account_id: account_id.to_owned(),
        };
        if let Err(error) = request.send(&self.config).await {
            self.lock_state()
                .resolve_resend_failure(tag, normalize_api_error(error));
        }
    }

    async fn run_attempt(
        &self,
        tag: AttemptTag,
        request: CredentialsApiRequest,
    ) -> Result<SubmitResult, SigninError> {
        let outcome = match request.send(&self.config).await {
            Ok(response) if response.success => match response.session {
                Some(session) => Ok(session),
                None => Err(LoginError::new("Response was missing a session token")),
            },
            Ok(response) => Err(LoginError::new(response.error_message.unwrap_or_default())),
            // Transport failures reach the flow as an ordinary login error;
            // the core has no separate network-failure kind.
            Err(error) => Err(normalize_api_error(error)),
        };

        let mut state = self.lock_state();
        match outcome {
            Ok(session) => {
                if state.resolve_attempt(tag, AttemptOutcome::Success) {
                    Ok(SubmitResult::Authenticated { session })
                } else {
                    Ok(SubmitResult::Stale)
                }
            }
            Err(error) => {
                if state.resolve_attempt(tag, AttemptOutcome::Failure(error)) {
                    Ok(SubmitResult::Rejected)
                } else {
                    Ok(SubmitResult::Stale)
                }
            }
        }
    }
}

/// Normalizes a transport-level failure into the unstructured login-error
/// channel the flow displays from.
fn normalize_api_error(error: ApiError) -> LoginError {
    match error {
        ApiError::ResponseContent { message, .. } => LoginError::new(message),
        other => LoginError::new(other.to_string()),
    }
}
