use super::*;

#[test]
fn maps_credential_codes_to_one_message() {
    for code in ["EMAIL_NOT_FOUND", "INVALID_PASSWORD", "INVALID_LOGIN_CREDENTIALS"] {
        let body = format!(r#"{{"error":{{"code":400,"message":"{code}"}}}}"#);
        assert_eq!(provider_error_message(&body), "Email or password is incorrect.");
    }
}

#[test]
fn maps_throttling_prefix() {
    let body = r#"{"error":{"message":"TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"}}"#;
    assert_eq!(provider_error_message(body), "Too many attempts, try again later.");
}

#[test]
fn passes_through_unknown_messages() {
    let body = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
    assert_eq!(provider_error_message(body), "Missing or insufficient permissions.");
}

#[test]
fn non_json_body_is_used_verbatim() {
    assert_eq!(provider_error_message("  bad gateway \n"), "bad gateway");
    assert_eq!(provider_error_message(""), "no details");
}

#[test]
fn status_error_display_includes_code() {
    let err = ProviderError::Status { status: 403, message: "denied".into() };
    assert_eq!(err.to_string(), "provider rejected request (403): denied");
}
