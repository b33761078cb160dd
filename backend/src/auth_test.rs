use super::*;

fn session_json(extra: serde_json::Value) -> String {
    let mut base = serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "token_type": "bearer",
        "user": {
            "id": "u-1",
            "email": "a@x.com",
            "user_metadata": { "avatar_url": "https://img/a.png" }
        }
    });
    if let (Some(obj), Some(more)) = (base.as_object_mut(), extra.as_object()) {
        for (k, v) in more {
            obj.insert(k.clone(), v.clone());
        }
    }
    base.to_string()
}

// =============================================================================
// parse_session
// =============================================================================

#[test]
fn parse_session_stamps_expiry_from_expires_in() {
    let session = parse_session(&session_json(serde_json::json!({ "expires_in": 3600 })), 1_000).unwrap();
    assert_eq!(session.expires_at, Some(4_600));
    assert_eq!(session.user.id, "u-1");
    assert_eq!(session.user.email.as_deref(), Some("a@x.com"));
}

#[test]
fn parse_session_keeps_provider_expiry() {
    let body = session_json(serde_json::json!({ "expires_in": 3600, "expires_at": 99 }));
    let session = parse_session(&body, 1_000).unwrap();
    assert_eq!(session.expires_at, Some(99));
}

#[test]
fn parse_session_rejects_non_session_body() {
    let err = parse_session(r#"{"user":null}"#, 0).unwrap_err();
    assert!(matches!(err, BackendError::Parse(_)));
}

// =============================================================================
// expiry
// =============================================================================

#[test]
fn session_expires_inside_margin() {
    let session = parse_session(&session_json(serde_json::json!({ "expires_at": 1_000 })), 0).unwrap();
    assert!(!session.is_expired(900));
    assert!(session.is_expired(1_000 - EXPIRY_MARGIN_SECS));
    assert!(session.is_expired(2_000));
}

#[test]
fn session_without_expiry_never_expires() {
    let session = parse_session(&session_json(serde_json::json!({})), 0).unwrap();
    assert_eq!(session.expires_at, None);
    assert!(!session.is_expired(i64::MAX - EXPIRY_MARGIN_SECS));
}

// =============================================================================
// user metadata
// =============================================================================

#[test]
fn avatar_url_comes_from_metadata() {
    let session = parse_session(&session_json(serde_json::json!({})), 0).unwrap();
    assert_eq!(session.user.avatar_url().as_deref(), Some("https://img/a.png"));
}

#[test]
fn avatar_url_missing_or_empty_is_none() {
    let user: AuthUser = serde_json::from_str(r#"{"id":"u","user_metadata":{"avatar_url":""}}"#).unwrap();
    assert_eq!(user.avatar_url(), None);
    let user: AuthUser = serde_json::from_str(r#"{"id":"u"}"#).unwrap();
    assert_eq!(user.avatar_url(), None);
    assert_eq!(user.email, None);
}

// =============================================================================
// auth_error
// =============================================================================

#[test]
fn auth_error_prefers_description() {
    let err = auth_error(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#);
    assert_eq!(err, BackendError::Auth { status: 400, message: "Invalid login credentials".to_owned() });
    assert!(err.is_unauthorized());
}

#[test]
fn auth_error_reads_msg_key() {
    let err = auth_error(422, r#"{"code":422,"msg":"Email not confirmed"}"#);
    assert_eq!(err, BackendError::Auth { status: 422, message: "Email not confirmed".to_owned() });
}

#[test]
fn auth_error_falls_back_to_status() {
    assert_eq!(auth_error(503, ""), BackendError::Auth { status: 503, message: "status 503".to_owned() });
    assert_eq!(auth_error(500, "boom"), BackendError::Auth { status: 500, message: "boom".to_owned() });
}

#[test]
fn event_names_match_provider_vocabulary() {
    assert_eq!(AuthEvent::SignedIn.as_str(), "SIGNED_IN");
    assert_eq!(AuthEvent::SignedOut.as_str(), "SIGNED_OUT");
    assert_eq!(AuthEvent::TokenRefreshed.as_str(), "TOKEN_REFRESHED");
}
