//! CLI command handlers, one per file.

mod accept;
mod banks;
mod completions;
mod lookup;
mod samples;
mod search;
mod watch;

pub use accept::run_accept;
pub use banks::run_banks;
pub use completions::{run_completions, run_man};
pub use lookup::run_lookup;
pub use samples::run_samples;
pub use search::run_search;
pub use watch::run_watch;
#[cfg(test)]
pub(crate) use lookup::lookup_outcome;
#[cfg(test)]
pub(crate) use watch::{parse_input, WatchInput};

use anyhow::{bail, Result};
use sotv_core::session::LookupSession;

use super::render::DISCLAIMER;

/// Refuse to look anything up until the disclaimer is accepted, unless `accept_legal`.
pub(crate) fn ensure_consent(session: &mut LookupSession, accept_legal: bool) -> Result<()> {
    if !session.view().consent_prompt_visible {
        return Ok(());
    }
    println!("{DISCLAIMER}\n");
    if accept_legal {
        session.accept_consent()?;
        println!("Legal disclaimer accepted.");
        return Ok(());
    }
    bail!("legal disclaimer not accepted; run `sotv accept` or pass --accept-legal")
}
