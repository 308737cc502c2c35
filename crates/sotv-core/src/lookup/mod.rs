//! Lookup wire types and the curl-backed resolver.
//!
//! One request per lookup: `POST {"url": ...}` to the configured endpoint.
//! The reply is either inventory metadata plus a signed, time-limited URL,
//! or `{"error": ...}` with a non-2xx status.

mod http;
mod parse;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::url_model::InvalidUrl;

pub use http::HttpResolver;
pub use parse::parse_response;

/// Status shown when a failed lookup carries no usable error text.
pub const GENERIC_FAILURE: &str = "Failed to lookup URL";

/// Body of the lookup POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub url: String,
}

/// Successful lookup reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub seed_bank: String,
    /// Collection date as sent by the server (`JS-rendered` for script-rendered captures).
    pub collection_date: String,
    /// Any JSON number; shown as sent and only turned into a duration when it drives the countdown.
    pub expires_in_minutes: serde_json::Number,
    pub signed_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_notice: Option<String>,
}

#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// Input rejected before any network call.
    #[error(transparent)]
    InvalidInput(#[from] InvalidUrl),
    /// Transport failure or non-2xx reply; `message` is the server's error text or a generic one.
    #[error("{message}")]
    LookupFailed {
        message: String,
        status: Option<u32>,
    },
}

impl LookupError {
    pub fn failed(message: impl Into<String>, status: Option<u32>) -> Self {
        LookupError::LookupFailed {
            message: message.into(),
            status,
        }
    }

    /// Status line for this error as displayed by the session.
    pub fn status_text(&self) -> String {
        match self {
            LookupError::InvalidInput(e) => e.to_string(),
            LookupError::LookupFailed { message, .. } => format!("Error: {message}"),
        }
    }
}
