//! JA4H-style Fingerprinter
//!
//! Derives a JA4H-shaped fingerprint from stable HTTP request
//! properties: method, protocol version, cookie/referer presence, header
//! count, Accept-Language, and truncated hashes of header and cookie
//! material. The output has four sections joined by underscores, e.g.
//! `ge11cn05enus_8b2a56e9f3d1_000000000000_000000000000`.

use axum::extract::Request;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE, REFERER};
use axum::http::Version;
use sha2::{Digest, Sha256};

use crate::fingerprint::{Fingerprinter, FingerprintError};

/// Number of hex characters kept from each section hash
const HASH_LEN: usize = 12;

/// Hash section used when there is nothing to hash
const ZERO_HASH: &str = "000000000000";

// == JA4H Fingerprinter ==
/// Default fingerprinter producing a JA4H-style hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ja4hFingerprinter;

impl Ja4hFingerprinter {
    pub fn new() -> Self {
        Self
    }
}

impl Fingerprinter for Ja4hFingerprinter {
    fn fingerprint(&self, request: &Request) -> Result<String, FingerprintError> {
        let method = method_code(request)?;
        let version = version_code(request.version())?;

        let has_cookie = request.headers().contains_key(COOKIE);
        let has_referer = request.headers().contains_key(REFERER);
        let cookie_flag = if has_cookie { 'c' } else { 'n' };
        let referer_flag = if has_referer { 'r' } else { 'n' };

        // Cookie and Referer are flagged separately and excluded from the
        // header section, so toggling them moves only the flags
        let header_names: Vec<&str> = request
            .headers()
            .keys()
            .map(|name| name.as_str())
            .filter(|name| *name != "cookie" && *name != "referer")
            .collect();
        let header_count = header_names.len().min(99);

        let language = language_code(request);

        let header_hash = if header_names.is_empty() {
            ZERO_HASH.to_string()
        } else {
            truncated_sha256(&header_names.join(","))
        };

        let (cookie_names_hash, cookie_values_hash) = cookie_hashes(request);

        Ok(format!(
            "{}{}{}{}{:02}{}_{}_{}_{}",
            method,
            version,
            cookie_flag,
            referer_flag,
            header_count,
            language,
            header_hash,
            cookie_names_hash,
            cookie_values_hash
        ))
    }
}

// == Section Helpers ==

/// First two letters of the method, lowercased (`GET` -> `ge`).
fn method_code(request: &Request) -> Result<String, FingerprintError> {
    let method = request.method().as_str();
    if method.len() < 2 || !method.is_ascii() {
        return Err(FingerprintError::MalformedMethod(method.to_string()));
    }
    Ok(method[..2].to_ascii_lowercase())
}

/// Two-digit protocol version code.
fn version_code(version: Version) -> Result<&'static str, FingerprintError> {
    match version {
        Version::HTTP_10 => Ok("10"),
        Version::HTTP_11 => Ok("11"),
        Version::HTTP_2 => Ok("20"),
        Version::HTTP_3 => Ok("30"),
        other => Err(FingerprintError::UnsupportedVersion(format!("{:?}", other))),
    }
}

/// First four alphanumeric characters of Accept-Language, lowercased and
/// zero-padded (`en-US,en;q=0.9` -> `enus`); `0000` when absent.
fn language_code(request: &Request) -> String {
    let raw = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let mut code: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(4)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    while code.len() < 4 {
        code.push('0');
    }
    code
}

/// Truncated hashes over sorted cookie names and name=value pairs.
/// Both sections are zero-filled when the request carries no cookies.
fn cookie_hashes(request: &Request) -> (String, String) {
    let raw = request
        .headers()
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let mut names: Vec<&str> = Vec::new();
    let mut pairs: Vec<&str> = Vec::new();
    for cookie in raw.split(';') {
        let cookie = cookie.trim();
        if cookie.is_empty() {
            continue;
        }
        let name = cookie.split('=').next().unwrap_or(cookie);
        names.push(name);
        pairs.push(cookie);
    }

    if names.is_empty() {
        return (ZERO_HASH.to_string(), ZERO_HASH.to_string());
    }

    names.sort_unstable();
    pairs.sort_unstable();
    (
        truncated_sha256(&names.join(",")),
        truncated_sha256(&pairs.join(",")),
    )
}

/// SHA-256 of `input`, hex-encoded and truncated to [`HASH_LEN`] chars.
fn truncated_sha256(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(HASH_LEN);
    encoded
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_headers(headers: &[(&str, &str)]) -> Request {
        let mut builder = axum::http::Request::builder().method("GET").uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bare_get_request_shape() {
        let request = request_with_headers(&[]);
        let hash = Ja4hFingerprinter::new().fingerprint(&request).unwrap();

        assert_eq!(hash, "ge11nn000000_000000000000_000000000000_000000000000");
    }

    #[test]
    fn test_sections_have_fixed_widths() {
        let request = request_with_headers(&[
            ("user-agent", "curl/8.0"),
            ("accept", "*/*"),
            ("cookie", "session=abc"),
        ]);
        let hash = Ja4hFingerprinter::new().fingerprint(&request).unwrap();

        let sections: Vec<&str> = hash.split('_').collect();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].len(), 12);
        assert_eq!(sections[1].len(), HASH_LEN);
        assert_eq!(sections[2].len(), HASH_LEN);
        assert_eq!(sections[3].len(), HASH_LEN);
    }

    #[test]
    fn test_deterministic_for_identical_requests() {
        let fp = Ja4hFingerprinter::new();
        let headers = [("user-agent", "curl/8.0"), ("accept", "*/*")];

        let first = fp.fingerprint(&request_with_headers(&headers)).unwrap();
        let second = fp.fingerprint(&request_with_headers(&headers)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_cookie_and_referer_flags() {
        let fp = Ja4hFingerprinter::new();

        let bare = fp.fingerprint(&request_with_headers(&[])).unwrap();
        assert!(bare.starts_with("ge11nn"));

        let with_cookie = fp
            .fingerprint(&request_with_headers(&[("cookie", "a=1")]))
            .unwrap();
        assert!(with_cookie.starts_with("ge11cn"));

        let with_referer = fp
            .fingerprint(&request_with_headers(&[("referer", "https://example.com")]))
            .unwrap();
        assert!(with_referer.starts_with("ge11nr"));
    }

    #[test]
    fn test_cookie_and_referer_excluded_from_header_count() {
        let fp = Ja4hFingerprinter::new();

        let hash = fp
            .fingerprint(&request_with_headers(&[
                ("user-agent", "curl/8.0"),
                ("cookie", "a=1"),
                ("referer", "https://example.com"),
            ]))
            .unwrap();

        // One counted header: user-agent
        assert!(hash.starts_with("ge11cr01"));
    }

    #[test]
    fn test_accept_language_section() {
        let fp = Ja4hFingerprinter::new();

        let hash = fp
            .fingerprint(&request_with_headers(&[("accept-language", "en-US,en;q=0.9")]))
            .unwrap();
        assert!(hash.starts_with("ge11nn01enus"));

        let short = fp
            .fingerprint(&request_with_headers(&[("accept-language", "da")]))
            .unwrap();
        assert!(short.starts_with("ge11nn01da00"));
    }

    #[test]
    fn test_different_header_sets_change_hash_section() {
        let fp = Ja4hFingerprinter::new();

        let first = fp
            .fingerprint(&request_with_headers(&[("user-agent", "curl/8.0")]))
            .unwrap();
        let second = fp
            .fingerprint(&request_with_headers(&[("accept", "*/*")]))
            .unwrap();

        assert_ne!(
            first.split('_').nth(1).unwrap(),
            second.split('_').nth(1).unwrap()
        );
    }

    #[test]
    fn test_cookie_order_does_not_change_hash() {
        let fp = Ja4hFingerprinter::new();

        let first = fp
            .fingerprint(&request_with_headers(&[("cookie", "a=1; b=2")]))
            .unwrap();
        let second = fp
            .fingerprint(&request_with_headers(&[("cookie", "b=2; a=1")]))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_post_method_prefix() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let hash = Ja4hFingerprinter::new().fingerprint(&request).unwrap();

        assert!(hash.starts_with("po11"));
    }

    #[test]
    fn test_unsupported_version_errors() {
        let mut request = request_with_headers(&[]);
        *request.version_mut() = Version::HTTP_09;

        let result = Ja4hFingerprinter::new().fingerprint(&request);
        assert!(matches!(result, Err(FingerprintError::UnsupportedVersion(_))));
    }
}
