//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{DraftId, LeagueId, Season, TrendDirection};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List a user's leagues for a season.
    Leagues {
        /// Sleeper username (or user id).
        username: String,

        /// Season year (e.g. 2025). Defaults to the configured season.
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// Show a user's roster in a league, with players resolved.
    Roster {
        /// Sleeper username (or user id).
        username: String,

        league_id: LeagueId,
    },

    /// Most added or dropped players across Sleeper.
    Trending {
        /// `add` or `drop`.
        #[clap(long = "type", short = 't', value_enum, default_value_t = TrendDirection::default())]
        direction: TrendDirection,

        /// Lookback window in hours.
        #[clap(long)]
        hours: Option<u32>,

        /// Number of players to return.
        #[clap(long, short)]
        limit: Option<u32>,
    },

    /// List every draft attached to a league.
    Drafts { league_id: LeagueId },

    /// Show one draft with its picks resolved to players.
    Draft { draft_id: DraftId },

    /// Show the league's current draft and who is on the clock.
    LiveDraft { league_id: LeagueId },
}

#[derive(Debug, Parser)]
#[clap(name = "sleepy", about = "Sleeper Fantasy Football CLI", version)]
pub struct Sleepy {
    /// Debug-level logging on stderr (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Sleeper
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Serve the views as a JSON HTTP API.
    Serve {
        /// Listen address (or set `SLEEPY_BIND`).
        #[clap(long)]
        bind: Option<String>,
    },
}
