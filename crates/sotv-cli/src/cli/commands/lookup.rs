//! `sotv lookup` – one lookup, then follow the countdown until the link expires.

use anyhow::{bail, Result};
use sotv_core::lookup::{LookupError, LookupResponse};
use sotv_core::session::{LookupSession, Phase};
use std::io::Write;

use super::ensure_consent;
use crate::cli::render::{render_status, render_view};

pub async fn run_lookup(
    mut session: LookupSession,
    url: &str,
    accept_legal: bool,
    no_wait: bool,
) -> Result<()> {
    ensure_consent(&mut session, accept_legal)?;

    let mut rx = session.subscribe();
    let result = session.submit(url).await;
    let view = rx.borrow_and_update().clone();
    print!("{}", render_view(&view));
    lookup_outcome(result)?;

    if no_wait {
        return Ok(());
    }

    while rx.changed().await.is_ok() {
        let view = rx.borrow_and_update().clone();
        if view.phase != Phase::Displaying {
            println!();
            if let Some(status) = render_status(&view) {
                println!("{status}");
            }
            break;
        }
        if let Some(label) = &view.expiry_label {
            print!("\r  expires in {label}  ");
            std::io::stdout().flush()?;
        }
    }
    Ok(())
}

/// The status line already carries the reason, so the returned error only
/// reports which step failed.
pub(crate) fn lookup_outcome(result: Result<LookupResponse, LookupError>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(LookupError::InvalidInput(_)) => bail!("invalid lookup URL"),
        Err(LookupError::LookupFailed { status, .. }) => match status {
            Some(code) => bail!("lookup failed (HTTP {code})"),
            None => bail!("lookup failed"),
        },
    }
}
