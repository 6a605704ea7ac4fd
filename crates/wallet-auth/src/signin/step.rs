use serde::{Deserialize, Serialize};

/// The step of the sign-in flow currently presented to the user.
///
/// Ordered: forward transitions only proceed in declaration order. Back
/// navigation always returns to [`SigninStep::EnterEmailGuid`], never to the
/// immediately prior step; the identification step is the only correction
/// point the flow offers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SigninStep {
    /// The user enters their wallet GUID or email address.
    EnterEmailGuid,
    /// The user enters their wallet password.
    EnterPassword,
    /// The user completes the configured second factor.
    EnterTwoFactor,
}
