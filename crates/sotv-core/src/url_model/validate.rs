//! Validation of raw lookup input.

use thiserror::Error;
use url::Url;

/// Why raw input cannot be submitted. The display text is the status shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrl {
    #[error("Please enter a URL")]
    Empty,
    #[error("Invalid URL format")]
    Malformed(#[source] url::ParseError),
}

/// Trims `raw` and checks that it parses as an absolute URL.
///
/// Returns the trimmed text unchanged (not the normalized serialization) so
/// the lookup key matches what the user typed.
pub fn validate_lookup_url(raw: &str) -> Result<String, InvalidUrl> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidUrl::Empty);
    }
    Url::parse(trimmed).map_err(InvalidUrl::Malformed)?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_urls_and_trims() {
        assert_eq!(
            validate_lookup_url("  https://example.com/product/x \n").unwrap(),
            "https://example.com/product/x"
        );
        assert_eq!(
            validate_lookup_url("https://www.seedsman.com/us-en/foo-fem").unwrap(),
            "https://www.seedsman.com/us-en/foo-fem"
        );
    }

    #[test]
    fn keeps_input_unnormalized() {
        // Url would serialize this as "https://example.com/"; the inventory is keyed on raw text.
        assert_eq!(
            validate_lookup_url("https://EXAMPLE.com").unwrap(),
            "https://EXAMPLE.com"
        );
    }

    #[test]
    fn empty_and_blank_rejected() {
        assert_eq!(validate_lookup_url(""), Err(InvalidUrl::Empty));
        assert_eq!(validate_lookup_url("   \t"), Err(InvalidUrl::Empty));
        assert_eq!(InvalidUrl::Empty.to_string(), "Please enter a URL");
    }

    #[test]
    fn relative_and_garbage_rejected() {
        for raw in ["example.com/product", "/product/x", "not a url", "http://"] {
            let err = validate_lookup_url(raw).unwrap_err();
            assert!(matches!(err, InvalidUrl::Malformed(_)), "{raw}");
            assert_eq!(err.to_string(), "Invalid URL format");
        }
    }
}
