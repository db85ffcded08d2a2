//! Profile commands and the shared loading helper

use std::path::Path;

use anyhow::{Context, Result};
use finmate_core::{format_currency, format_pct, savings_rate, HealthBand, Profile};
use tracing::debug;

/// Load the given profile, or fall back to the built-in sample
pub fn load_profile(path: Option<&Path>) -> Result<Profile> {
    match path {
        Some(path) => {
            let profile = Profile::load(path)
                .with_context(|| format!("Failed to load profile from {}", path.display()))?;
            debug!(
                expenses = profile.expenses.len(),
                goals = profile.goals.len(),
                "loaded profile from {}",
                path.display()
            );
            Ok(profile)
        }
        None => {
            println!("   (no --profile given, using the built-in sample profile)");
            Ok(Profile::sample())
        }
    }
}

pub fn cmd_init(out: &Path, force: bool) -> Result<()> {
    if out.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            out.display()
        );
    }

    let profile = Profile::sample();
    profile
        .save(out)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!();
    println!("✅ Wrote sample profile to {}", out.display());
    println!("   Edit it with your own income, expenses, and goals, then try:");
    println!("   finmate chat \"how am I doing?\" --profile {}", out.display());

    Ok(())
}

pub fn cmd_health(profile_path: Option<&Path>) -> Result<()> {
    let profile = load_profile(profile_path)?;

    let total_expenses = profile.total_expenses();
    let savings = profile.monthly_income - total_expenses;
    let rate = savings_rate(profile.monthly_income, total_expenses);
    let band = HealthBand::classify(rate);

    println!();
    println!("🩺 Financial Health for {}", profile.username);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Income:       {:>12}", format_currency(profile.monthly_income));
    println!("   Expenses:     {:>12}", format_currency(total_expenses));
    println!("   Savings:      {:>12}", format_currency(savings));
    println!("   Savings rate: {:>12}", format_pct(rate));
    println!();
    println!("   Status: {}", band);
    println!("   {}", band.narrative());
    println!("   💡 {}", band.advice());

    Ok(())
}
