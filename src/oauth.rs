//! OAuth Callback Parsing
//!
//! The auth backend redirects to the dashboard with `token`, `user`
//! (URL-encoded JSON) or `error` in the query string.

use percent_encoding::percent_decode_str;

use crate::models::{StoredAuth, User};

const CALLBACK_PARAMS: &[&str] = &["token", "user", "error"];

/// Outcome of reading the callback query
#[derive(Debug, Clone, PartialEq)]
pub enum OAuthCallback {
    /// No callback parameters present
    None,
    Success(StoredAuth),
    /// Provider reported an error
    Error(String),
    /// Parameters present but unusable
    Malformed(String),
}

/// Decode `a=1&b=x%20y` into pairs. A leading `?` is ignored.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

pub fn parse_callback(query: &str) -> OAuthCallback {
    let params = parse_query(query);
    if let Some(error) = param(&params, "error") {
        return OAuthCallback::Error(error.to_string());
    }
    match (param(&params, "token"), param(&params, "user")) {
        (None, None) => OAuthCallback::None,
        (Some(token), Some(user)) if !token.is_empty() => match serde_json::from_str::<User>(user) {
            Ok(user) => OAuthCallback::Success(StoredAuth {
                token: token.to_string(),
                user,
            }),
            Err(e) => OAuthCallback::Malformed(format!("invalid user payload: {}", e)),
        },
        _ => OAuthCallback::Malformed("incomplete callback parameters".to_string()),
    }
}

/// `path` plus whatever query parameters aren't part of the callback
pub fn strip_callback_params(path: &str, query: &str) -> String {
    let kept: Vec<&str> = query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            !CALLBACK_PARAMS.contains(&key)
        })
        .collect();
    if kept.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, kept.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_callback() {
        let query = "?token=abc.def&user=%7B%22id%22%3A%221%22%2C%22email%22%3A%22a%40b.com%22%2C%22name%22%3A%22Ann%20Lee%22%2C%22role%22%3A%22admin%22%7D";
        match parse_callback(query) {
            OAuthCallback::Success(auth) => {
                assert_eq!(auth.token, "abc.def");
                assert_eq!(auth.user.name, "Ann Lee");
                assert!(auth.user.is_admin());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_success_callback_with_numeric_user_id() {
        let query = "?token=t1&user=%7B%22id%22%3A7%2C%22email%22%3A%22a%40b.com%22%2C%22name%22%3A%22Ann%22%2C%22role%22%3A%22Admin%22%7D";
        match parse_callback(query) {
            OAuthCallback::Success(auth) => {
                assert_eq!(auth.user.id, "7");
                assert!(auth.user.is_admin());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_error_wins() {
        assert_eq!(
            parse_callback("token=t&error=access+denied"),
            OAuthCallback::Error("access denied".to_string())
        );
    }

    #[test]
    fn test_no_params_and_malformed() {
        assert_eq!(parse_callback(""), OAuthCallback::None);
        assert_eq!(parse_callback("?tab=orders"), OAuthCallback::None);
        assert!(matches!(parse_callback("?token=t"), OAuthCallback::Malformed(_)));
        assert!(matches!(parse_callback("?token=t&user=%7Bbad"), OAuthCallback::Malformed(_)));
    }

    #[test]
    fn test_strip_callback_params() {
        assert_eq!(
            strip_callback_params("/admin/dashboard", "?token=t&tab=orders&user=x"),
            "/admin/dashboard?tab=orders"
        );
        assert_eq!(strip_callback_params("/admin/dashboard", "?error=nope"), "/admin/dashboard");
    }
}
