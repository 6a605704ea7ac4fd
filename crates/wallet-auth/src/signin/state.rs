use thiserror::Error;

use crate::signin::{
    can_submit, FormValues, LoginError, SigninStep, SubmissionInput, TwoFactorAuthType,
};

/// Identifies an in-flight submission so that its outcome can be matched back
/// to the flow that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptTag {
    epoch: u64,
    seq: u64,
}

/// Tag for an out-of-band resend request.
///
/// Resends do not occupy the busy slot, so only the flow epoch is checked
/// when their outcome lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendTag {
    epoch: u64,
}

/// Outcome of a tagged submission, as normalized by the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The backend accepted the credentials. The session itself is handled
    /// outside this core.
    Success,
    /// The backend rejected the attempt with the given message.
    Failure(LoginError),
}

/// What a password submission resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSubmission {
    /// No second factor is configured; a tagged login attempt went out.
    AttemptLogin(AttemptTag),
    /// A second factor is required; the flow advanced to the code step
    /// without a network attempt.
    AwaitTwoFactor,
}

/// An operation the current flow state does not allow.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// `identify` was called with an empty identifier.
    #[error("An email address or wallet GUID is required to continue")]
    MissingIdentifier,
    /// The operation is not valid for the step the flow is on.
    #[error("Operation not valid for the current step: {0:?}")]
    WrongStep(SigninStep),
    /// A submission is already in flight; the gate rejects a duplicate.
    #[error("A sign-in attempt is already in flight")]
    AttemptInFlight,
    /// The submission gate rejected the form in its current state.
    #[error("The form is not in a submittable state")]
    NotSubmittable,
}

/// The full externally observable state of the sign-in flow.
///
/// Any UI must be able to render correctly from exactly this tuple; the flow
/// keeps no other host-visible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigninSnapshot {
    /// The step currently presented.
    pub step: SigninStep,
    /// The resolved second-factor requirement.
    pub auth_type: TwoFactorAuthType,
    /// Values accumulated across completed steps.
    pub form_values: FormValues,
    /// The error from the most recent failed attempt, if any.
    pub login_error: Option<LoginError>,
    /// Whether the primary action is enabled.
    pub can_submit: bool,
    /// Whether an attempt is in flight.
    pub busy: bool,
}

/// The sign-in flow state machine.
///
/// A plain value with pure transitions: every mutation happens through a
/// method that either updates the state or returns a [`TransitionError`] and
/// leaves it untouched, so the flow is deterministic to drive and to test
/// without a rendering environment.
///
/// Every outbound request is tagged ([`AttemptTag`], [`ResendTag`]) with the
/// flow epoch it was issued for; an outcome whose tag no longer matches is
/// stale and discarded wholesale, so a late response can not apply its error
/// or success to a step the user has already left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigninState {
    step: SigninStep,
    form: FormValues,
    auth_type: TwoFactorAuthType,
    login_error: Option<LoginError>,
    busy: bool,
    /// Bumped on every step transition.
    epoch: u64,
    /// Bumped for every issued attempt.
    seq: u64,
}

impl Default for SigninState {
    fn default() -> Self {
        Self::new()
    }
}

impl SigninState {
    /// A fresh flow at the identification step.
    pub fn new() -> Self {
        Self {
            step: SigninStep::EnterEmailGuid,
            form: FormValues::default(),
            auth_type: TwoFactorAuthType::None,
            login_error: None,
            busy: false,
            epoch: 0,
            seq: 0,
        }
    }

    /// The step currently presented to the user.
    pub fn step(&self) -> SigninStep {
        self.step
    }

    /// The second-factor requirement resolved for the identified account.
    pub fn auth_type(&self) -> TwoFactorAuthType {
        self.auth_type
    }

    /// Values accumulated across completed steps.
    pub fn form_values(&self) -> &FormValues {
        &self.form
    }

    /// The error from the most recent failed attempt, if any.
    pub fn login_error(&self) -> Option<&LoginError> {
        self.login_error.as_ref()
    }

    /// Whether an attempt is in flight.
    pub fn busy(&self) -> bool {
        self.busy
    }

    fn advance(&mut self, step: SigninStep) {
        self.step = step;
        self.epoch += 1;
    }

    fn begin_attempt(&mut self) -> AttemptTag {
        self.busy = true;
        self.seq += 1;
        AttemptTag {
            epoch: self.epoch,
            seq: self.seq,
        }
    }

    /// Completes the identification step with the entered GUID or email.
    ///
    /// The caller resolves the account's second-factor configuration next and
    /// feeds it back through [`SigninState::set_auth_type`].
    pub fn identify(&mut self, guid_or_email: &str) -> Result<(), TransitionError> {
        if self.step != SigninStep::EnterEmailGuid {
            return Err(TransitionError::WrongStep(self.step));
        }
        if guid_or_email.trim().is_empty() {
            return Err(TransitionError::MissingIdentifier);
        }

        self.form.guid_or_email = guid_or_email.to_owned();
        self.login_error = None;
        self.advance(SigninStep::EnterPassword);
        Ok(())
    }

    /// Stores the second-factor configuration resolved for the account.
    pub fn set_auth_type(&mut self, auth_type: TwoFactorAuthType) {
        self.auth_type = auth_type;
    }

    /// Submits the password step.
    ///
    /// With no second factor configured this issues a tagged login attempt;
    /// otherwise the flow advances to the code step carrying the password
    /// forward, and no attempt goes out yet.
    pub fn submit_password(&mut self, password: &str) -> Result<PasswordSubmission, TransitionError> {
        if self.step != SigninStep::EnterPassword {
            return Err(TransitionError::WrongStep(self.step));
        }
        if self.busy {
            return Err(TransitionError::AttemptInFlight);
        }
        let input = SubmissionInput {
            busy: self.busy,
            invalid: false,
            has_password: !password.is_empty(),
        };
        if !can_submit(self.step, input) {
            return Err(TransitionError::NotSubmittable);
        }

        self.form.password = password.to_owned();
        if self.auth_type.requires_second_factor() {
            self.advance(SigninStep::EnterTwoFactor);
            return Ok(PasswordSubmission::AwaitTwoFactor);
        }
        Ok(PasswordSubmission::AttemptLogin(self.begin_attempt()))
    }

    /// Submits the second-factor code, issuing a tagged login attempt.
    ///
    /// The code is expected whitespace-normalized; an empty code fails the
    /// required-field rule.
    pub fn submit_two_factor(&mut self, code: &str) -> Result<AttemptTag, TransitionError> {
        if self.step != SigninStep::EnterTwoFactor {
            return Err(TransitionError::WrongStep(self.step));
        }
        if self.busy {
            return Err(TransitionError::AttemptInFlight);
        }
        if code.trim().is_empty() {
            return Err(TransitionError::NotSubmittable);
        }

        Ok(self.begin_attempt())
    }

    /// Returns to the identification step from any later step.
    ///
    /// Always lands on [`SigninStep::EnterEmailGuid`]; the identification
    /// step is the only correction point the flow offers. Form values and the
    /// resolved auth type are retained, so re-identifying with the same
    /// account does not require a configuration re-fetch. An in-flight
    /// attempt is abandoned: its late outcome no longer matches the epoch.
    pub fn go_back(&mut self) -> Result<(), TransitionError> {
        match self.step {
            SigninStep::EnterEmailGuid => Err(TransitionError::WrongStep(self.step)),
            SigninStep::EnterPassword | SigninStep::EnterTwoFactor => {
                self.busy = false;
                self.login_error = None;
                self.advance(SigninStep::EnterEmailGuid);
                Ok(())
            }
        }
    }

    /// Applies the outcome of a tagged submission.
    ///
    /// A failure stores its error (last write wins) and leaves the step
    /// unchanged and interactive for retry; a success clears the error and
    /// releases the busy flag, the terminal state lives outside this core.
    /// Returns `false` when the outcome was stale and discarded.
    pub fn resolve_attempt(&mut self, tag: AttemptTag, outcome: AttemptOutcome) -> bool {
        if !self.busy || tag.epoch != self.epoch || tag.seq != self.seq {
            log::debug!("discarding stale sign-in outcome for epoch {}", tag.epoch);
            return false;
        }

        self.busy = false;
        match outcome {
            AttemptOutcome::Success => self.login_error = None,
            AttemptOutcome::Failure(error) => self.login_error = Some(error),
        }
        true
    }

    /// Tags a resend request issued for the current step.
    ///
    /// Resends are fire-and-forget: they do not occupy the busy slot and do
    /// not move the step, so the flow stays interactive while the request is
    /// out and repeated presses each mint a fresh tag.
    pub fn begin_resend(&self) -> ResendTag {
        ResendTag { epoch: self.epoch }
    }

    /// Applies a resend failure to the shared error slot (last write wins).
    ///
    /// Returns `false` when the user has since left the step the resend was
    /// issued for and the failure was discarded.
    pub fn resolve_resend_failure(&mut self, tag: ResendTag, error: LoginError) -> bool {
        if tag.epoch != self.epoch {
            log::debug!("discarding stale resend failure for epoch {}", tag.epoch);
            return false;
        }
        self.login_error = Some(error);
        true
    }

    /// Renders the observable state surface for the host UI.
    ///
    /// `invalid` and `has_password` describe the host form's live fields,
    /// which this core does not own.
    pub fn snapshot(&self, invalid: bool, has_password: bool) -> SigninSnapshot {
        SigninSnapshot {
            step: self.step,
            auth_type: self.auth_type,
            form_values: self.form.clone(),
            login_error: self.login_error.clone(),
            can_submit: can_submit(
                self.step,
                SubmissionInput {
                    busy: self.busy,
                    invalid,
                    has_password,
                },
            ),
            busy: self.busy,
        }
    }
}
