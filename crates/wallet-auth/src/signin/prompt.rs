use crate::signin::TwoFactorAuthType;

/// The label shown above the second-factor entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoFactorPrompt {
    /// "Verify with your hardware key".
    VerifyYubikey,
    /// "Enter your two-factor authentication code".
    EnterCode,
    /// No prompt; no second factor is configured and the step is not shown.
    None,
}

/// How the second-factor entry field captures input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoFactorEntryMode {
    /// Plain text entry.
    Text,
    /// Masked entry, used for SMS codes.
    Masked,
}

impl TwoFactorPrompt {
    /// Selects the prompt for a second-factor variant.
    ///
    /// Exhaustive on purpose: adding a second-factor kind without deciding
    /// its prompt is a compile error, not a silently blank label. Restores
    /// the intended label for authenticator-app accounts that the legacy web
    /// flow dropped (see the `legacy_web_behavior` tests).
    pub fn for_auth_type(auth_type: TwoFactorAuthType) -> Self {
        match auth_type {
            TwoFactorAuthType::None => Self::None,
            TwoFactorAuthType::Yubikey => Self::VerifyYubikey,
            TwoFactorAuthType::EmailCode
            | TwoFactorAuthType::AuthenticatorApp
            | TwoFactorAuthType::Sms => Self::EnterCode,
        }
    }
}

impl TwoFactorEntryMode {
    /// SMS codes use masked entry, every other factor a plain field.
    pub fn for_auth_type(auth_type: TwoFactorAuthType) -> Self {
        match auth_type {
            TwoFactorAuthType::Sms => Self::Masked,
            TwoFactorAuthType::None
            | TwoFactorAuthType::Yubikey
            | TwoFactorAuthType::EmailCode
            | TwoFactorAuthType::AuthenticatorApp => Self::Text,
        }
    }
}

/// Whether the resend link is offered for this factor. Only SMS codes can be
/// re-delivered.
pub fn offers_resend(auth_type: TwoFactorAuthType) -> bool {
    matches!(auth_type, TwoFactorAuthType::Sms)
}
