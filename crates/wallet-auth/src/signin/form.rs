/// Values accumulated as the sign-in steps complete.
///
/// Later steps read but never clear earlier values; back navigation keeps a
/// previously entered password unless the user overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    /// The wallet GUID or email the user identified with. Immutable once the
    /// flow has advanced past the identification step.
    pub guid_or_email: String,
    /// The password carried forward from the password step.
    pub password: String,
}

/// Strips all whitespace from a second-factor code before submission.
///
/// Codes pasted from SMS or authenticator apps routinely carry spaces.
pub fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
