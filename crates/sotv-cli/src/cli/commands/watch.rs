//! `sotv watch` – interactive loop over stdin.
//!
//! Each line is a lookup that supersedes the previous countdown. Lines starting
//! with `/` drive the other controls:
//! `/search <text>`, `/filter <name>`, `/filter` (all banks), `/accept`.

use anyhow::Result;
use sotv_core::session::{LookupSession, StatusKind};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::ensure_consent;
use crate::cli::render::{render_status, render_view};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum WatchInput<'a> {
    Lookup(&'a str),
    Search(&'a str),
    Filter(Option<&'a str>),
    Accept,
}

pub(crate) fn parse_input(line: &str) -> WatchInput<'_> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return WatchInput::Lookup(line);
    };
    let (cmd, arg) = match rest.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (rest, ""),
    };
    match cmd {
        "search" => WatchInput::Search(arg),
        "filter" if arg.is_empty() => WatchInput::Filter(None),
        "filter" => WatchInput::Filter(Some(arg)),
        "accept" => WatchInput::Accept,
        _ => WatchInput::Lookup(line),
    }
}

pub async fn run_watch(mut session: LookupSession, accept_legal: bool) -> Result<()> {
    ensure_consent(&mut session, accept_legal)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rx = session.subscribe();
    println!("Enter a product URL per line (Ctrl-D to quit).");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    WatchInput::Lookup(url) => {
                        if let Err(e) = session.submit(url).await {
                            tracing::debug!("lookup did not complete: {}", e);
                        }
                    }
                    WatchInput::Search(query) => {
                        session.search(query);
                    }
                    WatchInput::Filter(name) => session.select_filter(name),
                    WatchInput::Accept => session.accept_consent()?,
                }
                let view = rx.borrow_and_update().clone();
                print!("{}", render_view(&view));
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = rx.borrow_and_update().clone();
                if view.status.as_ref().is_some_and(|s| s.kind == StatusKind::Expired) {
                    if let Some(status) = render_status(&view) {
                        println!("{status}");
                    }
                }
            }
        }
    }
    Ok(())
}
