//! Turn an HTTP status and body into a lookup result.

use serde::Deserialize;

use super::{LookupError, LookupResponse, GENERIC_FAILURE};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Reply {
    Failure { error: String },
    Success(LookupResponse),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Interpret a lookup reply.
///
/// Non-2xx replies fail with the body's `error` text when present. A 2xx
/// reply must carry the full success shape; a 2xx `{"error": ...}` is still a failure.
pub fn parse_response(status: u32, body: &[u8]) -> Result<LookupResponse, LookupError> {
    if !(200..300).contains(&status) {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let message = parsed
            .error
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(LookupError::failed(message, Some(status)));
    }

    match serde_json::from_slice::<Reply>(body) {
        Ok(Reply::Success(resp)) => Ok(resp),
        Ok(Reply::Failure { error }) if !error.trim().is_empty() => {
            Err(LookupError::failed(error.trim(), Some(status)))
        }
        Ok(Reply::Failure { .. }) => Err(LookupError::failed(GENERIC_FAILURE, Some(status))),
        Err(e) => {
            tracing::warn!(status, "malformed lookup reply: {}", e);
            Err(LookupError::failed(GENERIC_FAILURE, Some(status)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: LookupError) -> (String, Option<u32>) {
        match err {
            LookupError::LookupFailed { message, status } => (message, status),
            other => panic!("expected LookupFailed, got {other:?}"),
        }
    }

    #[test]
    fn success_body() {
        let body = br#"{"seed_bank":"Acme","collection_date":"2024-01-01","expires_in_minutes":10,"signed_url":"https://files/x"}"#;
        let resp = parse_response(200, body).unwrap();
        assert_eq!(resp.seed_bank, "Acme");
        assert_eq!(resp.collection_date, "2024-01-01");
        assert_eq!(resp.expires_in_minutes, serde_json::Number::from(10));
        assert_eq!(resp.signed_url, "https://files/x");
        assert!(resp.legal_notice.is_none());
    }

    #[test]
    fn success_body_with_legal_notice() {
        let body = br#"{"signed_url":"https://cdn/x","seed_bank":"Neptune","collection_date":"JS-rendered","expires_in_minutes":5,"legal_notice":"Use subject to disclaimer"}"#;
        let resp = parse_response(200, body).unwrap();
        assert_eq!(resp.collection_date, "JS-rendered");
        assert_eq!(resp.legal_notice.as_deref(), Some("Use subject to disclaimer"));
    }

    #[test]
    fn success_body_with_fractional_expiry() {
        for (raw, shown) in [("5.0", "5.0"), ("2.5", "2.5"), ("-1", "-1")] {
            let body = format!(
                r#"{{"seed_bank":"Acme","collection_date":"2024-01-01","expires_in_minutes":{raw},"signed_url":"https://files/x"}}"#
            );
            let resp = parse_response(200, body.as_bytes()).unwrap();
            assert_eq!(resp.expires_in_minutes.to_string(), shown);
            assert_eq!(resp.signed_url, "https://files/x");
        }
    }

    #[test]
    fn error_status_uses_server_text() {
        let (msg, status) = message(parse_response(404, br#"{"error":"not found"}"#).unwrap_err());
        assert_eq!(msg, "not found");
        assert_eq!(status, Some(404));
    }

    #[test]
    fn error_status_without_text_is_generic() {
        for body in [&b"{}"[..], b"<html>bad gateway</html>", b"", br#"{"error":"  "}"#] {
            let (msg, _) = message(parse_response(502, body).unwrap_err());
            assert_eq!(msg, GENERIC_FAILURE);
        }
    }

    #[test]
    fn ok_status_with_error_body_fails() {
        let (msg, status) =
            message(parse_response(200, br#"{"error":"URL not found in inventory"}"#).unwrap_err());
        assert_eq!(msg, "URL not found in inventory");
        assert_eq!(status, Some(200));
    }

    #[test]
    fn ok_status_with_partial_body_fails() {
        let (msg, _) = message(parse_response(200, br#"{"seed_bank":"Acme"}"#).unwrap_err());
        assert_eq!(msg, GENERIC_FAILURE);
    }
}
