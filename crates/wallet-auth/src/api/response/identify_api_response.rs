use serde::Deserialize;

/// Second-factor configuration reported for an identified account.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdentifyApiResponse {
    /// Integer second-factor configuration code. Codes this client does not
    /// recognize are resolved to "no second factor" downstream, so the type
    /// is deliberately wider than the known code set.
    pub auth_type: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let response: IdentifyApiResponse =
            serde_json::from_str(r#"{"authType": 5}"#).expect("valid payload");
        assert_eq!(response.auth_type, 5);
    }
}
