//! Short host labels for log fields.

/// Host of `url` for structured logging, or `"-"` when there is none.
pub fn host_label(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_or_dash() {
        assert_eq!(host_label("https://ilgm.com/products/x"), "ilgm.com");
        assert_eq!(host_label("mailto:someone@example.com"), "-");
        assert_eq!(host_label("nonsense"), "-");
    }
}
