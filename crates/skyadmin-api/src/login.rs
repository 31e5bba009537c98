//! Login result detection
//!
//! `/login_post` always answers with a redirect. A failed login redirects back
//! to the login page with the reason in a `loginError` query parameter.

use percent_encoding::percent_decode_str;

const LOGIN_ERROR_PARAM: &str = "loginError=";

/// Rejection reason carried by a login redirect, `None` for a successful login
pub fn login_error_from_location(location: &str) -> Option<String> {
    let start = location.find(LOGIN_ERROR_PARAM)? + LOGIN_ERROR_PARAM.len();
    let raw = location[start..].split(['&', '#']).next().unwrap_or_default();
    let raw = raw.replace('+', " ");
    let reason = percent_decode_str(&raw).decode_utf8_lossy().into_owned();
    if reason.is_empty() {
        Some("Login failed".to_string())
    } else {
        Some(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_redirect() {
        assert_eq!(login_error_from_location("/"), None);
        assert_eq!(login_error_from_location("http://cms/?mode="), None);
    }

    #[test]
    fn test_decodes_multibyte_reason() {
        let location = "http://cms/login?loginError=%E3%83%AD%E3%82%B0%E3%82%A4%E3%83%B3%E5%A4%B1%E6%95%97";
        assert_eq!(
            login_error_from_location(location).as_deref(),
            Some("ログイン失敗")
        );
    }

    #[test]
    fn test_reason_stops_at_next_param() {
        let location = "/login?loginError=Invalid+password&x=1";
        assert_eq!(
            login_error_from_location(location).as_deref(),
            Some("Invalid password")
        );
    }

    #[test]
    fn test_empty_reason_still_fails() {
        assert_eq!(
            login_error_from_location("/login?loginError=").as_deref(),
            Some("Login failed")
        );
    }
}
