use super::*;

// =============================================================
// Helpers
// =============================================================

const NOW_MS: i64 = 1_700_000_000_000;

fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_round_trips_subject_and_role() {
    let token = make_token(&serde_json::json!({"sub": "u1", "role": "ADMIN", "exp": 4_102_444_800_i64}));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.user_id().as_deref(), Some("u1"));
    assert_eq!(claims.role().as_deref(), Some("ADMIN"));
}

#[test]
fn decode_rejects_wrong_segment_counts() {
    let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"u1"}"#);
    let two = format!("h.{payload}");
    let four = format!("h.{payload}.s.extra");
    for token in ["", "abc", two.as_str(), four.as_str(), "...", "a.b"] {
        assert!(decode(token).is_none(), "expected None for {token:?}");
    }
}

#[test]
fn decode_rejects_empty_payload_segment() {
    assert!(decode("header..signature").is_none());
}

#[test]
fn decode_rejects_invalid_base64() {
    assert!(decode("header.!!not-base64!!.signature").is_none());
}

#[test]
fn decode_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode("not json");
    assert!(decode(&format!("h.{payload}.s")).is_none());
}

#[test]
fn decode_rejects_non_object_json() {
    let payload = URL_SAFE_NO_PAD.encode("[1,2,3]");
    assert!(decode(&format!("h.{payload}.s")).is_none());
}

#[test]
fn decode_accepts_padded_payload() {
    let payload = URL_SAFE.encode(r#"{"sub":"u12"}"#);
    assert!(payload.ends_with('='));
    let claims = decode(&format!("h.{payload}.s")).unwrap();
    assert_eq!(claims.user_id().as_deref(), Some("u12"));
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn past_expiry_is_expired() {
    let token = make_token(&serde_json::json!({"sub": "u1", "exp": NOW_MS / 1000 - 1}));
    assert!(is_expired_at(&token, NOW_MS));
}

#[test]
fn future_expiry_is_not_expired() {
    let token = make_token(&serde_json::json!({"sub": "u1", "exp": NOW_MS / 1000 + 3600}));
    assert!(!is_expired_at(&token, NOW_MS));
}

#[test]
fn expiry_equal_to_now_is_not_expired() {
    let token = make_token(&serde_json::json!({"exp": NOW_MS / 1000}));
    assert!(!is_expired_at(&token, NOW_MS));
}

#[test]
fn missing_expiry_is_expired() {
    let token = make_token(&serde_json::json!({"sub": "u1"}));
    assert!(is_expired_at(&token, NOW_MS));
}

#[test]
fn malformed_token_is_expired() {
    assert!(is_expired_at("garbage", NOW_MS));
    assert!(is_expired("garbage"));
}

#[test]
fn string_expiry_is_parsed() {
    let claims = decode(&make_token(&serde_json::json!({"exp": "1700000100"}))).unwrap();
    assert_eq!(claims.exp(), Some(1_700_000_100));
}

#[test]
fn fractional_expiry_is_floored() {
    let claims = decode(&make_token(&serde_json::json!({"exp": 1_700_000_100.9}))).unwrap();
    assert_eq!(claims.exp(), Some(1_700_000_100));
}

#[test]
fn is_expired_uses_wall_clock() {
    let token = make_token(&serde_json::json!({"exp": 4_102_444_800_i64}));
    assert!(!is_expired(&token));
}

// =============================================================
// Claim tables
// =============================================================

#[test]
fn role_claim_order_is_plain_capitalized_namespaced() {
    assert_eq!(
        ROLE_CLAIMS,
        &["role", "Role", "http://schemas.microsoft.com/ws/2008/06/identity/claims/role"]
    );
}

#[test]
fn user_id_claim_starts_with_sub() {
    assert_eq!(USER_ID_CLAIMS[0], "sub");
}

#[test]
fn plain_role_wins_over_capitalized() {
    let token = make_token(&serde_json::json!({"role": "ADMIN", "Role": "SUPPORT"}));
    assert_eq!(get_role(&token).as_deref(), Some("ADMIN"));
}

#[test]
fn capitalized_role_wins_over_namespaced() {
    let token = make_token(&serde_json::json!({
        "Role": "SUPPORT",
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "ADMIN",
    }));
    assert_eq!(get_role(&token).as_deref(), Some("SUPPORT"));
}

#[test]
fn namespaced_role_is_used_as_last_resort() {
    let token = make_token(&serde_json::json!({
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "ADMIN",
    }));
    assert_eq!(get_role(&token).as_deref(), Some("ADMIN"));
}

#[test]
fn array_role_yields_first_string() {
    let token = make_token(&serde_json::json!({"role": ["SUPPORT", "ADMIN"]}));
    assert_eq!(get_role(&token).as_deref(), Some("SUPPORT"));
}

#[test]
fn empty_role_falls_through_to_next_claim() {
    let token = make_token(&serde_json::json!({"role": "", "Role": "ADMIN"}));
    assert_eq!(get_role(&token).as_deref(), Some("ADMIN"));
}

#[test]
fn missing_role_is_none() {
    let token = make_token(&serde_json::json!({"sub": "u1"}));
    assert!(get_role(&token).is_none());
}

#[test]
fn numeric_user_id_is_stringified() {
    let token = make_token(&serde_json::json!({"userId": 42}));
    assert_eq!(get_user_id(&token).as_deref(), Some("42"));
}

#[test]
fn user_id_falls_back_to_nameidentifier() {
    let token = make_token(&serde_json::json!({
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": "abc",
    }));
    assert_eq!(get_user_id(&token).as_deref(), Some("abc"));
}

#[test]
fn email_and_name_are_probed() {
    let token = make_token(&serde_json::json!({
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress": "ops@homefix.test",
        "unique_name": "Ops Team",
    }));
    assert_eq!(get_email(&token).as_deref(), Some("ops@homefix.test"));
    assert_eq!(get_name(&token).as_deref(), Some("Ops Team"));
}

#[test]
fn accessors_on_malformed_token_are_none() {
    assert!(get_role("x").is_none());
    assert!(get_user_id("x").is_none());
    assert!(get_email("x").is_none());
    assert!(get_name("x").is_none());
}
