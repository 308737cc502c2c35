//! Resolver interface: turn a product URL into archive metadata and a signed link.
//!
//! The session only depends on this trait; the HTTP endpoint is one
//! implementation and tests substitute their own.

use crate::lookup::{LookupError, LookupRequest, LookupResponse};

/// Remote lookup collaborator. One call is one network request.
pub trait Resolver: Send + Sync {
    fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Resolver for Fixed {
        fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, LookupError> {
            Ok(LookupResponse {
                seed_bank: "Acme".to_string(),
                collection_date: "2024-01-01".to_string(),
                expires_in_minutes: 5.into(),
                signed_url: format!("https://files/?src={}", request.url),
                legal_notice: None,
            })
        }
    }

    #[test]
    fn resolver_is_object_safe() {
        let r: Box<dyn Resolver> = Box::new(Fixed);
        let resp = r
            .lookup(&LookupRequest {
                url: "https://a/b".to_string(),
            })
            .unwrap();
        assert_eq!(resp.signed_url, "https://files/?src=https://a/b");
    }
}
