use crate::signin::{LoginError, SigninStep};

/// The independently-changing signals the submission gate derives from.
///
/// `invalid` and `has_password` describe the host form's live fields, which
/// this core does not own; `busy` is the in-flight flag from the flow state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionInput {
    /// A sign-in attempt is currently in flight.
    pub busy: bool,
    /// The host form reports a validation failure.
    pub invalid: bool,
    /// The password field is non-empty.
    pub has_password: bool,
}

/// Whether the primary action is enabled for the given step.
///
/// `busy` suppresses submission unconditionally; nothing else in the flow
/// protects against a duplicate in-flight attempt.
pub fn can_submit(step: SigninStep, input: SubmissionInput) -> bool {
    match step {
        SigninStep::EnterEmailGuid => !input.busy && !input.invalid,
        SigninStep::EnterPassword => !input.busy && !input.invalid && input.has_password,
        // The code field is covered by the host form's required-field rule,
        // so only the shared busy/invalid guard applies here.
        SigninStep::EnterTwoFactor => !input.busy && !input.invalid,
    }
}

/// Whether the busy indicator replaces the primary action label.
///
/// A displayed error keeps the label even while a new attempt is in flight;
/// the two elements share one slot and the error wins it.
pub fn shows_busy_indicator(busy: bool, login_error: Option<&LoginError>) -> bool {
    busy && login_error.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_disables_submission_everywhere() {
        for step in [
            SigninStep::EnterEmailGuid,
            SigninStep::EnterPassword,
            SigninStep::EnterTwoFactor,
        ] {
            let input = SubmissionInput {
                busy: true,
                invalid: false,
                has_password: true,
            };
            assert!(!can_submit(step, input), "busy must gate {step:?}");
        }
    }

    #[test]
    fn password_step_requires_a_typed_password() {
        let input = SubmissionInput {
            busy: false,
            invalid: false,
            has_password: false,
        };
        assert!(!can_submit(SigninStep::EnterPassword, input));

        let input = SubmissionInput {
            has_password: true,
            ..input
        };
        assert!(can_submit(SigninStep::EnterPassword, input));
    }

    #[test]
    fn two_factor_step_ignores_the_password_field() {
        let input = SubmissionInput {
            busy: false,
            invalid: false,
            has_password: false,
        };
        assert!(can_submit(SigninStep::EnterTwoFactor, input));
    }

    #[test]
    fn invalid_form_disables_submission() {
        let input = SubmissionInput {
            busy: false,
            invalid: true,
            has_password: true,
        };
        assert!(!can_submit(SigninStep::EnterPassword, input));
        assert!(!can_submit(SigninStep::EnterTwoFactor, input));
    }

    #[test]
    fn error_takes_the_label_slot_over_the_busy_indicator() {
        let error = LoginError::new("wrong_wallet_password");
        assert!(shows_busy_indicator(true, None));
        assert!(!shows_busy_indicator(true, Some(&error)));
        assert!(!shows_busy_indicator(false, None));
        assert!(!shows_busy_indicator(false, Some(&error)));
    }
}
