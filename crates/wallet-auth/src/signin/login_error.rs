/// Unstructured error text returned by the authentication backend.
///
/// The backend does not expose a structured error code at this boundary, so
/// the message is carried verbatim and classified by the substring heuristics
/// in [`LoginErrorKind::classify`]. Keeping the heuristic behind this single
/// type means a backend wording change requires an edit in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginError {
    raw: String,
}

impl LoginError {
    /// Wraps a raw backend message.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The verbatim backend message, for display.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Classifies the message.
    ///
    /// Re-derived from the raw text on every call, never cached, so a
    /// replaced error can not be read through a stale classification.
    pub fn kind(&self) -> LoginErrorKind {
        LoginErrorKind::classify(Some(&self.raw))
    }
}

/// Coarse classification of a backend login error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginErrorKind {
    /// No error present.
    None,
    /// The wallet password was rejected.
    WrongPassword,
    /// The account is locked server-side. Display-only: the server is the
    /// authority, no client-side lockout is enforced.
    AccountLocked,
    /// The second-factor code was rejected.
    SecondFactorInvalid,
    /// Any other non-empty message.
    Unknown,
}

impl LoginErrorKind {
    /// Classifies a raw backend message.
    ///
    /// Case-insensitive substring tests, first match wins. "this account has
    /// been locked" and "account is locked" are two independent backend
    /// phrasings, both checked before the generic fallthrough. Malformed text
    /// degrades to [`LoginErrorKind::Unknown`]; classification never fails.
    pub fn classify(message: Option<&str>) -> Self {
        let Some(message) = message else {
            return Self::None;
        };
        if message.is_empty() {
            return Self::None;
        }

        let message = message.to_lowercase();
        if message.contains("wrong_wallet_password") {
            return Self::WrongPassword;
        }
        if message.contains("this account has been locked")
            || message.contains("account is locked")
        {
            return Self::AccountLocked;
        }
        if message.contains("authentication code") {
            return Self::SecondFactorInvalid;
        }
        Self::Unknown
    }

    /// Whether the recovery-phrase link is offered alongside the message.
    pub fn offers_recovery(&self) -> bool {
        matches!(self, Self::WrongPassword)
    }

    /// Whether the raw backend message is displayed verbatim.
    pub fn displays_raw_message(&self) -> bool {
        matches!(self, Self::AccountLocked | Self::SecondFactorInvalid)
    }
}
