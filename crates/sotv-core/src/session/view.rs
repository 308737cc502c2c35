//! Everything the user sees, as one value.
//!
//! The session publishes a fresh `ViewState` on every change; front ends
//! render it and never mutate it.

use crate::lookup::LookupResponse;
use crate::search::SearchResults;

/// Label of the lookup control while idle.
pub const IDLE_LABEL: &str = "View Source";
/// Label of the lookup control while a lookup is in flight.
pub const LOADING_LABEL: &str = "Loading...";

pub(crate) const LOADING_TEXT: &str = "Looking up strain in inventory...";
pub(crate) const SUCCESS_TEXT: &str = "Source HTML found! Loading archive...";
pub(crate) const EXPIRED_TEXT: &str = "Signed URL expired. Please request a new one.";

/// Where a single lookup cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Displaying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// The control that triggers a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub label: String,
}

impl ControlState {
    pub(crate) fn idle() -> Self {
        Self {
            enabled: true,
            label: IDLE_LABEL.to_string(),
        }
    }

    pub(crate) fn busy() -> Self {
        Self {
            enabled: false,
            label: LOADING_LABEL.to_string(),
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Metadata block of a successful lookup, copied verbatim from the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub seed_bank: String,
    pub collection_date: String,
    /// Server-advertised link lifetime, e.g. `10 minutes`.
    pub server_expiry: String,
    pub legal_notice: Option<String>,
}

impl Metadata {
    pub(crate) fn from_response(resp: &LookupResponse) -> Self {
        Self {
            seed_bank: resp.seed_bank.clone(),
            collection_date: resp.collection_date.clone(),
            server_expiry: format!("{} minutes", resp.expires_in_minutes),
            legal_notice: resp.legal_notice.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub phase: Phase,
    /// `None` when the status line is hidden.
    pub status: Option<StatusLine>,
    pub control: ControlState,
    pub metadata: Option<Metadata>,
    /// Countdown label (`M:SS`) while a signed URL is on display.
    pub expiry_label: Option<String>,
    /// Signed URL currently embedded; cleared on expiry.
    pub embedded_url: Option<String>,
    pub search_results: Option<SearchResults>,
    pub consent_prompt_visible: bool,
    /// Filter option labels in display order.
    pub filter_options: Vec<String>,
    pub selected_bank: Option<String>,
    /// Bumped whenever the displayed result changes; countdown events carrying
    /// an older value are ignored.
    pub(crate) countdown_generation: u64,
}

impl ViewState {
    pub(crate) fn show_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind,
            text: text.into(),
        });
    }

    pub(crate) fn hide_result(&mut self) {
        self.metadata = None;
        self.expiry_label = None;
        self.embedded_url = None;
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }
}
