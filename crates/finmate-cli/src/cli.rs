//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// FinMate - Personal finance assistant
#[derive(Parser)]
#[command(name = "finmate")]
#[command(about = "Savings projections and a rule-based finance chat assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path of the persisted theme preference file
    ///
    /// Defaults to the platform data directory
    /// (e.g. ~/.local/share/finmate/theme).
    #[arg(long, global = true)]
    pub theme_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample profile JSON to get started
    Init {
        /// Where to write the profile
        #[arg(long, default_value = "profile.json")]
        out: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Project savings growth into the future
    Project {
        /// Current savings balance
        #[arg(long, default_value_t = 0.0)]
        savings: f64,

        /// Monthly income
        #[arg(long, default_value_t = 0.0)]
        income: f64,

        /// Monthly expenses
        #[arg(long, default_value_t = 0.0)]
        expenses: f64,

        /// Monthly contribution override (defaults to income - expenses)
        #[arg(long)]
        monthly_savings: Option<f64>,

        /// Annual investment return in percent
        #[arg(long, default_value_t = 7.0)]
        rate: f64,

        /// Annual inflation in percent
        #[arg(long, default_value_t = 3.0)]
        inflation: f64,

        /// Horizon in whole years
        #[arg(long, default_value_t = 10)]
        years: u32,

        /// Print the year-by-year timeline table
        #[arg(long)]
        timeline: bool,
    },

    /// Talk to the assistant (one-shot with MESSAGE, interactive without)
    Chat {
        /// Message to classify; omit for an interactive session
        message: Option<String>,

        /// Profile JSON with income, expenses, and goals
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Print the raw classified response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the financial health summary
    Health {
        /// Profile JSON with income, expenses, and goals
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Inspect or change the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Show,

    /// Set the theme directly
    Set {
        /// light or dark
        theme: String,
    },

    /// Flip between light and dark
    Toggle,
}
