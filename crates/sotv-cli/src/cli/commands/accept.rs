//! `sotv accept` – accept the legal disclaimer.

use anyhow::Result;
use sotv_core::session::LookupSession;

use crate::cli::render::DISCLAIMER;

pub fn run_accept(mut session: LookupSession) -> Result<()> {
    if !session.view().consent_prompt_visible {
        println!("Legal disclaimer already accepted.");
        return Ok(());
    }
    println!("{DISCLAIMER}\n");
    session.accept_consent()?;
    println!("Legal disclaimer accepted.");
    Ok(())
}
