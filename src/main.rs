//! Entry point: parse CLI, load config, and dispatch to command handlers.

use std::{process, sync::Arc};

use anyhow::Context;
use clap::Parser;
use sleepy_ffl::{
    cli::{Commands, GetCmd, Sleepy},
    commands::{
        drafts::{handle_draft, handle_league_drafts, handle_live_draft},
        leagues::handle_leagues,
        roster::handle_roster,
        serve::handle_serve,
        trending::handle_trending,
    },
    sleeper::SleeperClient,
    Assembler, EngineConfig, SleepyError,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sleepy_ffl=debug,tower_http=debug"
    } else {
        "sleepy_ffl=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries JSON views; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(app: Sleepy) -> anyhow::Result<()> {
    let config = EngineConfig::load().context("loading configuration")?;
    let client = SleeperClient::new(&config).context("building the Sleeper client")?;
    let assembler = Assembler::new(Arc::new(client), config);

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Leagues { username, season } => {
                handle_leagues(&assembler, &username, season).await?
            }
            GetCmd::Roster {
                username,
                league_id,
            } => handle_roster(&assembler, &username, &league_id).await?,
            GetCmd::Trending {
                direction,
                hours,
                limit,
            } => handle_trending(&assembler, direction, hours, limit).await?,
            GetCmd::Drafts { league_id } => handle_league_drafts(&assembler, &league_id).await?,
            GetCmd::Draft { draft_id } => handle_draft(&assembler, &draft_id).await?,
            GetCmd::LiveDraft { league_id } => handle_live_draft(&assembler, &league_id).await?,
        },

        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| assembler.config().bind.clone());
            handle_serve(assembler, &bind)
                .await
                .with_context(|| format!("serving on {bind}"))?
        }
    }

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = Sleepy::parse();
    init_tracing(app.verbose);

    if let Err(err) = run(app).await {
        // Engine failures already printed their `{"error"}` body on stdout.
        let code = match err.downcast_ref::<SleepyError>() {
            Some(e) if matches!(e, SleepyError::Engine(_)) => e.exit_code(),
            Some(e) => {
                eprintln!("Error: {err:#}");
                e.exit_code()
            }
            None => {
                eprintln!("Error: {err:#}");
                1
            }
        };
        process::exit(code);
    }
}
