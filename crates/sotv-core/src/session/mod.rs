//! Lookup session: the single controller behind the viewer.
//!
//! A session is built once at startup and owns all mutable state: the
//! published [`ViewState`], the consent store and the one countdown slot.
//! `submit` runs one lookup cycle:
//!
//! `Idle -> Validating -> (InvalidInput -> Idle) | Pending -> (error -> Idle) | Displaying`
//!
//! and from `Displaying` either the countdown expires (back to `Idle`) or a new
//! valid lookup supersedes the countdown.

mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use crate::analytics::AnalyticsSink;
use crate::config::SotvConfig;
use crate::consent::ConsentStore;
use crate::countdown::{format_remaining, CountdownEvent, CountdownSlot, ExpiryTimer};
use crate::inventory::{filter_event_value, filter_status};
use crate::lookup::{LookupError, LookupRequest, LookupResponse};
use crate::resolver::Resolver;
use crate::search::{normalize_query, SearchResults};
use crate::url_model::{host_label, validate_lookup_url};

pub use view::{
    ControlState, Metadata, Phase, StatusKind, StatusLine, ViewState, IDLE_LABEL, LOADING_LABEL,
};

use view::{EXPIRED_TEXT, LOADING_TEXT, SUCCESS_TEXT};

pub struct LookupSession {
    cfg: SotvConfig,
    resolver: Arc<dyn Resolver>,
    analytics: Arc<dyn AnalyticsSink>,
    consent: ConsentStore,
    view: Arc<watch::Sender<ViewState>>,
    countdown: CountdownSlot,
}

impl LookupSession {
    /// Build the session and its initial view. Reads the consent flag once.
    pub fn new(
        cfg: SotvConfig,
        resolver: Arc<dyn Resolver>,
        analytics: Arc<dyn AnalyticsSink>,
        consent: ConsentStore,
    ) -> Self {
        let accepted = consent.is_accepted().unwrap_or_else(|e| {
            tracing::warn!("consent flag unreadable, prompting again: {:#}", e);
            false
        });
        let initial = ViewState {
            consent_prompt_visible: !accepted,
            filter_options: cfg.seed_banks.iter().map(|b| b.option_label()).collect(),
            ..ViewState::default()
        };
        let (tx, _rx) = watch::channel(initial);

        Self {
            cfg,
            resolver,
            analytics,
            consent,
            view: Arc::new(tx),
            countdown: CountdownSlot::new(),
        }
    }

    pub fn config(&self) -> &SotvConfig {
        &self.cfg
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Receiver that is notified on every view change (including countdown ticks).
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    pub fn has_active_countdown(&self) -> bool {
        self.countdown.is_running()
    }

    /// Countdown tasks not yet torn down by the runtime. At most one once aborts settle.
    pub fn live_countdowns(&self) -> usize {
        self.countdown.live_tasks()
    }

    /// Validate `raw_url`, look it up, and display the result.
    ///
    /// Invalid input fails with [`LookupError::InvalidInput`] before any network
    /// call and leaves the current display alone. Otherwise exactly one
    /// resolver call is made and any running countdown is cancelled first.
    pub async fn submit(&mut self, raw_url: &str) -> Result<LookupResponse, LookupError> {
        let url = match validate_lookup_url(raw_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("rejected lookup input: {}", e);
                let err = LookupError::from(e);
                let text = err.status_text();
                self.view
                    .send_modify(|v| v.show_status(StatusKind::Error, text));
                return Err(err);
            }
        };

        self.countdown.cancel();
        self.view.send_modify(|v| {
            v.countdown_generation += 1;
            v.phase = Phase::Pending;
            v.control = ControlState::busy();
            v.show_status(StatusKind::Loading, LOADING_TEXT);
            v.hide_result();
        });

        let host = host_label(&url);
        tracing::info!(host = %host, "lookup started");
        let request = LookupRequest { url: url.clone() };
        let resolver = Arc::clone(&self.resolver);
        let result = match tokio::task::spawn_blocking(move || resolver.lookup(&request)).await {
            Ok(result) => result,
            Err(e) => Err(LookupError::failed(format!("lookup task failed: {e}"), None)),
        };

        match &result {
            Ok(resp) => self.display(&url, resp),
            Err(err) => self.fail(&url, err),
        }
        result
    }

    fn display(&mut self, url: &str, resp: &LookupResponse) {
        tracing::info!(host = %host_label(url), seed_bank = %resp.seed_bank, "lookup succeeded");
        self.analytics.track(
            "lookup_success",
            &[("seed_bank", resp.seed_bank.as_str()), ("url", url)],
        );

        let window = self.cfg.countdown_window(&resp.expires_in_minutes);
        let timer = ExpiryTimer::new(window);
        let mut generation = 0;
        self.view.send_modify(|v| {
            v.countdown_generation += 1;
            generation = v.countdown_generation;
            v.phase = Phase::Displaying;
            v.show_status(StatusKind::Success, SUCCESS_TEXT);
            v.metadata = Some(Metadata::from_response(resp));
            v.embedded_url = Some(resp.signed_url.clone());
            v.expiry_label = Some(timer.label());
            v.control = ControlState::idle();
        });

        let view = Arc::clone(&self.view);
        self.countdown.start(window, move |event| {
            apply_countdown_event(&view, generation, event);
        });
    }

    fn fail(&mut self, url: &str, err: &LookupError) {
        tracing::warn!(host = %host_label(url), "lookup failed: {}", err);
        let message = err.to_string();
        self.analytics
            .track("lookup_error", &[("error", message.as_str()), ("url", url)]);
        let text = err.status_text();
        self.view.send_modify(|v| {
            v.phase = Phase::Idle;
            v.show_status(StatusKind::Error, text);
            v.control = ControlState::idle();
        });
    }

    /// Apply a filter selection. `None` (or an empty name) is "all seed banks".
    pub fn select_filter(&mut self, selected: Option<&str>) {
        self.analytics.track(
            "seed_bank_filter",
            &[("seed_bank", filter_event_value(selected))],
        );
        let status = filter_status(selected);
        let selected = selected.filter(|s| !s.is_empty()).map(str::to_string);
        self.view.send_modify(|v| {
            v.selected_bank = selected;
            match status {
                Some(text) => v.show_status(StatusKind::Success, text),
                None => v.status = None,
            }
            v.search_results = None;
        });
    }

    /// React to search input. Returns what the results area now shows.
    pub fn search(&mut self, input: &str) -> Option<SearchResults> {
        let results = normalize_query(input, self.cfg.search_min_chars).map(|query| {
            self.analytics
                .track("strain_search", &[("query", query.as_str())]);
            SearchResults::Placeholder { query }
        });
        let shown = results.clone();
        self.view.send_modify(|v| v.search_results = shown);
        results
    }

    /// Persist consent and hide the prompt.
    pub fn accept_consent(&mut self) -> Result<()> {
        self.consent.accept()?;
        self.view.send_modify(|v| v.consent_prompt_visible = false);
        self.analytics
            .track("legal_acceptance", &[("action", "accepted")]);
        tracing::info!(path = %self.consent.path().display(), "legal disclaimer accepted");
        Ok(())
    }
}

fn apply_countdown_event(view: &watch::Sender<ViewState>, generation: u64, event: CountdownEvent) {
    view.send_if_modified(|v| {
        if v.countdown_generation != generation {
            return false;
        }
        match event {
            CountdownEvent::Tick { remaining_secs } => {
                v.expiry_label = Some(format_remaining(remaining_secs));
            }
            CountdownEvent::Expired => {
                tracing::info!("signed URL expired");
                v.phase = Phase::Idle;
                v.expiry_label = Some(format_remaining(0));
                v.embedded_url = None;
                v.show_status(StatusKind::Expired, EXPIRED_TEXT);
            }
        }
        true
    });
}
