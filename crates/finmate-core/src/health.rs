//! Financial health classification
//!
//! Bands a savings rate into a coarse health signal with a fixed advice
//! sentence per band. Shared by the chat assistant's health query and the
//! `finmate health` command.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Savings rate as a percentage of income (0 when income is 0)
pub fn savings_rate(monthly_income: f64, total_expenses: f64) -> f64 {
    if monthly_income == 0.0 {
        return 0.0;
    }
    (monthly_income - total_expenses) / monthly_income * 100.0
}

/// Coarse health signal derived from the savings rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    /// Spending exceeds income
    Critical,
    /// Saving less than 10% of income
    Concerning,
    /// Saving 10–20% of income
    Fair,
    /// Saving 20% of income or more
    Healthy,
}

impl HealthBand {
    /// Classify a savings rate (in percent) into a band
    pub fn classify(rate_pct: f64) -> Self {
        if rate_pct < 0.0 {
            Self::Critical
        } else if rate_pct < 10.0 {
            Self::Concerning
        } else if rate_pct < 20.0 {
            Self::Fair
        } else {
            Self::Healthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Concerning => "concerning",
            Self::Fair => "fair",
            Self::Healthy => "healthy",
        }
    }

    /// One-line description of what the band means for the user
    pub fn narrative(&self) -> &'static str {
        match self {
            Self::Critical => "You're spending more than you earn right now.",
            Self::Concerning => "You're staying afloat, but your savings rate is on the low side.",
            Self::Fair => "You're in decent shape and building a cushion.",
            Self::Healthy => "You're in great shape financially.",
        }
    }

    /// Fixed advice sentence for the band
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Critical => {
                "List every recurring expense and cut the ones you don't use before anything else."
            }
            Self::Concerning => "Aim to set aside at least 10% of your income each month.",
            Self::Fair => "Try nudging your savings rate toward 20% to build momentum.",
            Self::Healthy => "Keep it up, and consider putting the surplus to work in investments.",
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HealthBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "concerning" => Ok(Self::Concerning),
            "fair" => Ok(Self::Fair),
            "healthy" => Ok(Self::Healthy),
            _ => Err(format!("Unknown health band: {}", s)),
        }
    }
}
