//! URL repair for image and thumbnail links.
//!
//! The remote API hands out protocol-relative links (`//cf.geekdo-images.com/...`).
//! They are repaired once, when an entity is built, so stored URLs are always
//! absolute.

use std::borrow::Cow;
use url::Url;

const PROTOCOL_RELATIVE_PREFIX: &str = "//";
const DEFAULT_SCHEME_PREFIX: &str = "https:";

/// Repairs a protocol-relative URL by prefixing `https:`.
///
/// Any other input, malformed or not, is returned unchanged. The function
/// never fails.
///
/// # Examples
///
/// ```
/// use boardgamegeek_core::utils::url_normalizer::fix_url;
///
/// assert_eq!(fix_url("//x.com/i.png"), "https://x.com/i.png");
/// assert_eq!(fix_url("http://x.com/i.png"), "http://x.com/i.png");
/// ```
pub fn fix_url(input: &str) -> Cow<'_, str> {
    if input.starts_with(PROTOCOL_RELATIVE_PREFIX) {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{input}"))
    } else {
        Cow::Borrowed(input)
    }
}

/// Repairs and parses a URL, returning `None` when the result is not a valid
/// absolute URL.
pub fn parse_fixed_url(input: &str) -> Option<Url> {
    Url::parse(&fix_url(input)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_protocol_relative() {
        assert_eq!(fix_url("//x.com/i.png"), "https://x.com/i.png");
    }

    #[test]
    fn test_fix_keeps_https() {
        let result = fix_url("https://example.com/pic.jpg");
        assert_eq!(result, "https://example.com/pic.jpg");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_fix_keeps_http() {
        assert_eq!(fix_url("http://example.com/pic.jpg"), "http://example.com/pic.jpg");
    }

    #[test]
    fn test_fix_keeps_single_slash_path() {
        assert_eq!(fix_url("/images/pic.jpg"), "/images/pic.jpg");
    }

    #[test]
    fn test_fix_keeps_malformed_input() {
        assert_eq!(fix_url("not a url"), "not a url");
        assert_eq!(fix_url(""), "");
    }

    #[test]
    fn test_fix_triple_slash_still_prefixed() {
        assert_eq!(fix_url("///odd"), "https:///odd");
    }

    #[test]
    fn test_fix_is_idempotent() {
        let once = fix_url("//cf.geekdo-images.com/thumb.png").into_owned();
        assert_eq!(fix_url(&once), once);
    }

    #[test]
    fn test_parse_fixed_url_protocol_relative() {
        let url = parse_fixed_url("//cf.geekdo-images.com/thumb.png").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("cf.geekdo-images.com"));
        assert_eq!(url.path(), "/thumb.png");
    }

    #[test]
    fn test_parse_fixed_url_rejects_garbage() {
        assert!(parse_fixed_url("not a valid url").is_none());
        assert!(parse_fixed_url("").is_none());
    }
}
