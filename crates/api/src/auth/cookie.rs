//! Minimal cookie handling for the two cookies the portal sets.
//!
//! Only names and values are read back; attributes are only ever written.
//! Written values must pass [`is_cookie_safe`], so no quoting or
//! percent-encoding is needed.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Cookie holding the plaintext session token.
pub const SESSION_COOKIE: &str = "coop_session";

/// Cookie holding pending notice keys.
pub const FLASH_COOKIE: &str = "coop_flash";

/// Return the value of the named cookie from all `Cookie` headers.
///
/// Empty values count as absent.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Whether `value` can be written as a bare cookie value: ASCII
/// alphanumerics plus `-`, `.` and `_`.
pub fn is_cookie_safe(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'))
}

/// `Set-Cookie` value for a fresh session.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    debug_assert!(is_cookie_safe(token), "session token is not cookie-safe");
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value carrying notice keys to the next page view.
pub fn flash_cookie(value: &str) -> String {
    debug_assert!(is_cookie_safe(value), "flash value is not cookie-safe: {value:?}");
    format!("{FLASH_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that deletes the named cookie.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
