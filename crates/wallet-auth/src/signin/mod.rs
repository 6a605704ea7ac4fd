//! The multi-step sign-in flow.
//!
//! [`SigninState`] is the step state machine, a plain value with pure
//! transitions; [`SigninClient`] drives it against the wallet backend. The
//! decision logic around it is split into small pure pieces: second-factor
//! resolution ([`TwoFactorAuthType`]), backend error classification
//! ([`LoginErrorKind`]), submission gating ([`can_submit`]) and second-factor
//! presentation ([`TwoFactorPrompt`]).

mod auth_type;
mod client;
mod form;
mod gate;
mod login_error;
mod prompt;
mod state;
mod step;

pub use auth_type::TwoFactorAuthType;
pub use client::{SigninClient, SigninError, SubmitResult};
pub use form::{remove_whitespace, FormValues};
pub use gate::{can_submit, shows_busy_indicator, SubmissionInput};
pub use login_error::{LoginError, LoginErrorKind};
pub use prompt::{offers_resend, TwoFactorEntryMode, TwoFactorPrompt};
pub use state::{
    AttemptOutcome, AttemptTag, PasswordSubmission, ResendTag, SigninSnapshot, SigninState,
    TransitionError,
};
pub use step::SigninStep;
