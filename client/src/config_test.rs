use super::*;

#[test]
fn normalize_trims_trailing_slashes_and_whitespace() {
    assert_eq!(normalize_base_url("  https://api.homefix.test/v1// "), "https://api.homefix.test/v1");
}

#[test]
fn normalize_blank_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_base_url("/"), DEFAULT_API_BASE_URL);
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
