//! FinMate CLI - Savings projections and finance chat
//!
//! Usage:
//!   finmate init                      Write a sample profile
//!   finmate project --years 10        Project savings growth
//!   finmate chat "how am I doing?"    Ask the assistant
//!   finmate theme toggle              Flip the display theme

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init { out, force } => commands::cmd_init(&out, force),
        Commands::Project {
            savings,
            income,
            expenses,
            monthly_savings,
            rate,
            inflation,
            years,
            timeline,
        } => commands::cmd_project(
            savings,
            income,
            expenses,
            monthly_savings,
            rate,
            inflation,
            years,
            timeline,
        ),
        Commands::Chat {
            message,
            profile,
            json,
        } => {
            let store = commands::open_theme_store(cli.theme_file.as_deref())?;
            match message {
                Some(message) => {
                    commands::cmd_chat_once(profile.as_deref(), &store, &message, json)
                }
                None => commands::cmd_chat_repl(profile.as_deref(), &store),
            }
        }
        Commands::Health { profile } => commands::cmd_health(profile.as_deref()),
        Commands::Theme { action } => {
            let store = commands::open_theme_store(cli.theme_file.as_deref())?;
            match action {
                None | Some(ThemeAction::Show) => commands::cmd_theme_show(&store),
                Some(ThemeAction::Set { theme }) => commands::cmd_theme_set(&store, &theme),
                Some(ThemeAction::Toggle) => commands::cmd_theme_toggle(&store),
            }
        }
    }
}
