//! `sotv banks` – list the seed-bank filter or select an entry.

use anyhow::{bail, Result};
use sotv_core::session::LookupSession;

use crate::cli::render::render_status;

pub fn run_banks(mut session: LookupSession, select: Option<&str>) -> Result<()> {
    let Some(wanted) = select else {
        println!("All seed banks");
        for label in session.view().filter_options {
            println!("  {label}");
        }
        return Ok(());
    };

    let name = match session
        .config()
        .seed_banks
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(wanted.trim()))
    {
        Some(bank) => bank.name.clone(),
        None => bail!("unknown seed bank: {wanted} (see `sotv banks`)"),
    };
    session.select_filter(Some(&name));
    if let Some(status) = render_status(&session.view()) {
        println!("{status}");
    }
    Ok(())
}
