//! Endpoint paths and URL construction

use skyadmin_core::prelude::*;
use url::Url;

pub const AUTH: &str = "auth";
pub const GET_SESSION: &str = "get-session";
pub const GET_LIST: &str = "getlist";
pub const GET_LIST_USER: &str = "getlist-user";
pub const GET_CONTENT: &str = "getcontent";
pub const GET_USER: &str = "getuser";
pub const GET_TEMPLATE: &str = "gettemplate";
pub const GET_ELEMENT: &str = "getelement";
pub const GET_ELEMENT_ITEM: &str = "getElementItem";
pub const GET_SETTING: &str = "get-setting";
pub const URL_MATCHES: &str = "urlmatches";
pub const UPDATE_POST: &str = "update_post";
pub const DELETE_POST: &str = "delete_post";
pub const USER_POST: &str = "user_post";
pub const SETTING_POST: &str = "setting_post";
pub const LOGIN_POST: &str = "login_post";
pub const LOGOUT: &str = "logout";
pub const PREVIEW: &str = "preview";

/// Form field carrying the serialized color palette
pub const COLOR_SETTING_FIELD: &str = "elements-color-value";

/// Parse and normalize the API base URL
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base.trim()).map_err(|_| Error::invalid_base_url(base))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_base_url(base));
    }
    Ok(url)
}

/// `base/<path>?<query>` with every query value percent-encoded
pub fn endpoint_url(base: &Url, path: &str, query: &[(&str, String)]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::invalid_base_url(base.as_str()))?
        .pop_if_empty()
        .push(path);
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_onto_prefix() {
        let base = parse_base_url("http://localhost:8080/webadmin").unwrap();
        let url = endpoint_url(&base, GET_LIST, &[("mode", "template".into())]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/webadmin/getlist?mode=template"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let base = parse_base_url("http://cms.example/webadmin/").unwrap();
        let url = endpoint_url(&base, AUTH, &[]).unwrap();
        assert_eq!(url.as_str(), "http://cms.example/webadmin/auth");
    }

    #[test]
    fn test_query_values_are_encoded() {
        let base = parse_base_url("http://cms.example/webadmin").unwrap();
        let url = endpoint_url(
            &base,
            URL_MATCHES,
            &[("url", "a b&c".into()), ("myId", String::new())],
        )
        .unwrap();
        assert_eq!(url.query(), Some("url=a+b%26c&myId="));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://cms.example").is_err());
        assert!(parse_base_url("mailto:me@example.com").is_err());
    }
}
