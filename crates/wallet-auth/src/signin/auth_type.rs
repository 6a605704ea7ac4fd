use serde_repr::{Deserialize_repr, Serialize_repr};

/// Represents the second-factor requirement a wallet account reports for
/// sign-in.
///
/// The backend encodes this as a small integer on the account configuration.
/// It is resolved once per flow, after the account has been identified, and
/// only changes on an explicit re-fetch.
#[derive(Serialize_repr, Deserialize_repr, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[repr(u8)]
pub enum TwoFactorAuthType {
    /// No second factor configured; the password alone signs the user in.
    #[default]
    None = 0,
    /// Hardware key challenge.
    Yubikey = 1,
    /// Code delivered by email.
    EmailCode = 2,
    /// Code from an authenticator app.
    AuthenticatorApp = 4,
    /// Code delivered by SMS.
    Sms = 5,
}

impl TwoFactorAuthType {
    /// Resolves a server-reported configuration code.
    ///
    /// Total over the integer domain: codes this client does not recognize
    /// resolve to [`TwoFactorAuthType::None`], so an unknown configuration
    /// never blocks the password step from rendering.
    pub fn resolve(code: u32) -> Self {
        match code {
            1 => Self::Yubikey,
            2 => Self::EmailCode,
            4 => Self::AuthenticatorApp,
            5 => Self::Sms,
            _ => Self::None,
        }
    }

    /// Whether a second factor is required after the password step.
    pub fn requires_second_factor(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes() {
        assert_eq!(TwoFactorAuthType::resolve(0), TwoFactorAuthType::None);
        assert_eq!(TwoFactorAuthType::resolve(1), TwoFactorAuthType::Yubikey);
        assert_eq!(TwoFactorAuthType::resolve(2), TwoFactorAuthType::EmailCode);
        assert_eq!(
            TwoFactorAuthType::resolve(4),
            TwoFactorAuthType::AuthenticatorApp
        );
        assert_eq!(TwoFactorAuthType::resolve(5), TwoFactorAuthType::Sms);
    }

    #[test]
    fn unknown_codes_resolve_to_none() {
        // 3 is unassigned by the backend, the rest are out of the known set.
        for code in [3, 6, 7, 42, u32::MAX] {
            assert_eq!(TwoFactorAuthType::resolve(code), TwoFactorAuthType::None);
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        for code in 0..16 {
            assert_eq!(
                TwoFactorAuthType::resolve(code),
                TwoFactorAuthType::resolve(code)
            );
        }
    }

    #[test]
    fn only_none_skips_the_second_factor() {
        assert!(!TwoFactorAuthType::None.requires_second_factor());
        assert!(TwoFactorAuthType::Yubikey.requires_second_factor());
        assert!(TwoFactorAuthType::EmailCode.requires_second_factor());
        assert!(TwoFactorAuthType::AuthenticatorApp.requires_second_factor());
        assert!(TwoFactorAuthType::Sms.requires_second_factor());
    }

    #[test]
    fn serializes_as_the_backend_code() {
        let json = serde_json::to_string(&TwoFactorAuthType::Sms).expect("serializable");
        assert_eq!(json, "5");
    }
}
