//! `sotv search` – strain search by name.

use anyhow::Result;
use sotv_core::session::LookupSession;

pub fn run_search(mut session: LookupSession, query: &str) -> Result<()> {
    match session.search(query) {
        Some(results) => println!("{}", results.render()),
        None => println!(
            "Enter at least {} characters to search.",
            session.config().search_min_chars
        ),
    }
    Ok(())
}
