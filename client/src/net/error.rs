/// Failures talking to the hosted identity or document provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The bundle was built without the settings the call needs.
    #[error("provider not configured: {0}")]
    Config(String),

    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("provider rejected request ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// Provider calls exist only in the browser build.
    #[error("provider calls require the browser build")]
    Unavailable,
}

/// Human-readable message from a provider error body.
///
/// Both Google APIs answer with `{"error": {"message": "..."}}`. Known
/// identity codes are mapped to sentences; anything else passes through.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn provider_error_message(body: &str) -> String {
    let raw = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error")?.get("message")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned());

    match raw.as_str() {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Email or password is incorrect.".to_owned()
        }
        "USER_DISABLED" => "This account is disabled.".to_owned(),
        "" => "no details".to_owned(),
        other if other.starts_with("TOO_MANY_ATTEMPTS_TRY_LATER") => "Too many attempts, try again later.".to_owned(),
        _ => raw,
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
