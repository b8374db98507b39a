/**
 * Cookie Set/Get/Clear Operations
 *
 * This module implements the session cookie operations on top of two
 * small capability traits, so the helper itself has no dependency on
 * any particular framework's request or response types:
 *
 * - `CookieWriter` - anything that can accept a `Set-Cookie` header
 * - `CookieReader` - anything that can look up a request cookie by name
 *
 * Both traits are implemented for `axum::http::HeaderMap`, which is the
 * response-header and request-header type the handlers actually touch.
 *
 * # Wire Format
 *
 * Setting emits `name=value; Path=/; Max-Age=900; SameSite=Strict;
 * HttpOnly` plus `Secure` in production mode. Clearing emits the same
 * attributes with an empty value and `Max-Age=0`, so the browser matches
 * path and samesite when deleting.
 *
 * All operations are total: an absent cookie reads as `None`, and
 * writes have no failure mode beyond a logged skip for values that
 * cannot be encoded as a header.
 */

use axum::http::{
    header::{COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};

use crate::cookies::options::CookieOptions;

/// Capability to attach `Set-Cookie` headers to an outgoing response
pub trait CookieWriter {
    /// Append one `Set-Cookie` header value
    fn append_set_cookie(&mut self, value: String);
}

/// Capability to read cookies from an incoming request
pub trait CookieReader {
    /// Look up a cookie value by name, `None` when absent
    fn cookie(&self, name: &str) -> Option<String>;
}

impl CookieWriter for HeaderMap {
    fn append_set_cookie(&mut self, value: String) {
        match HeaderValue::from_str(&value) {
            Ok(header) => {
                self.append(SET_COOKIE, header);
            }
            Err(_) => {
                tracing::warn!("dropping Set-Cookie value that is not a valid header");
            }
        }
    }
}

impl CookieReader for HeaderMap {
    fn cookie(&self, name: &str) -> Option<String> {
        // A request may carry several Cookie headers; each holds
        // `; `-separated pairs. First match wins.
        self.get_all(COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| {
                let (k, v) = pair.trim().split_once('=')?;
                (k == name).then(|| v.to_string())
            })
            .next()
    }
}

/// Attach cookie `name=value` to the response with the given options
pub fn set<W: CookieWriter + ?Sized>(
    writer: &mut W,
    name: &str,
    value: &str,
    options: &CookieOptions,
) {
    writer.append_set_cookie(encode_set_cookie(name, value, options));
}

/// Expire cookie `name` on the client
///
/// Uses the same base attributes as `set` so the browser matches the
/// cookie's path and samesite scope when deleting it.
pub fn clear<W: CookieWriter + ?Sized>(writer: &mut W, name: &str, options: &CookieOptions) {
    let expired = options.clone().with_max_age(std::time::Duration::ZERO);
    writer.append_set_cookie(encode_set_cookie(name, "", &expired));
}

/// Read cookie `name` from the request, `None` when absent
pub fn get<R: CookieReader + ?Sized>(reader: &R, name: &str) -> Option<String> {
    reader.cookie(name)
}

/// Encode a `Set-Cookie` header value
fn encode_set_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut header = format!(
        "{}={}; Path={}; Max-Age={}; SameSite={}",
        name,
        value,
        options.path,
        options.max_age.as_secs(),
        options.same_site.as_str(),
    );
    if options.http_only {
        header.push_str("; HttpOnly");
    }
    if options.secure {
        header.push_str("; Secure");
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::options::{session_cookie_options, SameSite};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn set_cookie_values(headers: &HeaderMap) -> Vec<String> {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect()
    }

    /// Simulate a browser sending back the pair from a Set-Cookie header
    fn round_trip(response_headers: &HeaderMap) -> HeaderMap {
        let mut request_headers = HeaderMap::new();
        for value in set_cookie_values(response_headers) {
            let pair = value.split(';').next().unwrap().to_string();
            request_headers.append(COOKIE, pair.parse().unwrap());
        }
        request_headers
    }

    #[test]
    fn test_set_emits_expected_wire_format() {
        let mut headers = HeaderMap::new();
        set(&mut headers, "a", "b", &session_cookie_options(false));

        assert_eq!(
            set_cookie_values(&headers),
            vec!["a=b; Path=/; Max-Age=900; SameSite=Strict; HttpOnly"]
        );
    }

    #[test]
    fn test_set_includes_secure_in_production() {
        let mut headers = HeaderMap::new();
        set(&mut headers, "a", "b", &session_cookie_options(true));

        assert_eq!(
            set_cookie_values(&headers),
            vec!["a=b; Path=/; Max-Age=900; SameSite=Strict; HttpOnly; Secure"]
        );
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut response = HeaderMap::new();
        set(&mut response, "a", "b", &session_cookie_options(false));

        let request = round_trip(&response);
        assert_eq!(get(&request, "a"), Some("b".to_string()));
    }

    #[test]
    fn test_override_wins_in_wire_format() {
        let options = session_cookie_options(false).with_max_age(Duration::from_secs(1));
        let mut headers = HeaderMap::new();
        set(&mut headers, "a", "b", &options);

        let value = &set_cookie_values(&headers)[0];
        assert!(value.contains("Max-Age=1"));
        assert!(value.contains("SameSite=Strict"));
        assert!(value.contains("HttpOnly"));
    }

    #[test]
    fn test_clear_expires_with_matching_attributes() {
        let mut headers = HeaderMap::new();
        clear(&mut headers, "a", &session_cookie_options(false));

        assert_eq!(
            set_cookie_values(&headers),
            vec!["a=; Path=/; Max-Age=0; SameSite=Strict; HttpOnly"]
        );
    }

    #[test]
    fn test_get_absent_cookie_is_none() {
        let request = HeaderMap::new();
        assert_eq!(get(&request, "a"), None);
    }

    #[test]
    fn test_get_picks_named_cookie_among_many() {
        let mut request = HeaderMap::new();
        request.append(COOKIE, "first=1; second=2; third=3".parse().unwrap());

        assert_eq!(get(&request, "second"), Some("2".to_string()));
        assert_eq!(get(&request, "missing"), None);
    }

    #[test]
    fn test_same_site_override_changes_attribute() {
        let options = session_cookie_options(false).with_same_site(SameSite::Lax);
        let mut headers = HeaderMap::new();
        set(&mut headers, "a", "b", &options);

        assert!(set_cookie_values(&headers)[0].contains("SameSite=Lax"));
    }
}
