//! CLI for the SOTV source-of-truth viewer.

mod commands;
mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sotv_core::analytics;
use sotv_core::config::{self, SotvConfig};
use sotv_core::consent::ConsentStore;
use sotv_core::lookup::HttpResolver;
use sotv_core::session::LookupSession;

use commands::{
    run_accept, run_banks, run_completions, run_lookup, run_man, run_samples, run_search,
    run_watch,
};

/// Top-level CLI for the source-of-truth viewer.
#[derive(Debug, Parser)]
#[command(name = "sotv")]
#[command(about = "SOTV: look up archived product pages by URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up a product URL and follow the signed link's countdown.
    Lookup {
        /// Product page URL as it appears in the inventory.
        url: String,
        /// Accept the legal disclaimer if not yet accepted.
        #[arg(long)]
        accept_legal: bool,
        /// Print the result and exit instead of following the countdown.
        #[arg(long)]
        no_wait: bool,
    },

    /// Read URLs from stdin, one lookup per line. `/search`, `/filter` and `/accept` are also understood.
    Watch {
        /// Accept the legal disclaimer if not yet accepted.
        #[arg(long)]
        accept_legal: bool,
    },

    /// Accept the legal disclaimer.
    Accept,

    /// List seed banks in the inventory, or select one as the filter.
    Banks {
        /// Seed bank to filter to (case-insensitive).
        #[arg(long, value_name = "NAME")]
        select: Option<String>,
    },

    /// Search strains by name.
    Search {
        /// Query text (at least 3 characters by default).
        query: String,
    },

    /// Print sample product URLs to try.
    Samples,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Lookup {
                url,
                accept_legal,
                no_wait,
            } => run_lookup(build_session(cfg)?, &url, accept_legal, no_wait).await?,
            CliCommand::Watch { accept_legal } => {
                run_watch(build_session(cfg)?, accept_legal).await?
            }
            CliCommand::Accept => run_accept(build_session(cfg)?)?,
            CliCommand::Banks { select } => run_banks(build_session(cfg)?, select.as_deref())?,
            CliCommand::Search { query } => run_search(build_session(cfg)?, &query)?,
            CliCommand::Samples => run_samples(&cfg),
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

fn build_session(cfg: SotvConfig) -> Result<LookupSession> {
    let resolver = Arc::new(HttpResolver::from_config(&cfg));
    let sink = analytics::sink_for(cfg.analytics);
    let consent = ConsentStore::open_default()?;
    Ok(LookupSession::new(cfg, resolver, sink, consent))
}

#[cfg(test)]
mod tests;
