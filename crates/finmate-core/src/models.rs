//! Domain models for FinMate

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    /// Amount spent (positive)
    pub amount: f64,
    /// Free-text category label (e.g. "Groceries", "Transport")
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl Expense {
    pub fn new(id: i64, amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub completed: bool,
}

impl Goal {
    pub fn new(id: i64, name: impl Into<String>, target_amount: f64, current_amount: f64) -> Self {
        Self {
            id,
            name: name.into(),
            target_amount,
            current_amount,
            deadline: None,
            completed: false,
        }
    }

    /// Percent progress toward the target (0 when the target is 0)
    pub fn progress_pct(&self) -> f64 {
        if self.target_amount == 0.0 {
            return 0.0;
        }
        self.current_amount / self.target_amount * 100.0
    }
}

/// Display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme
    pub fn flipped(&self) -> Theme {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user's financial data as supplied by the host application
///
/// The engines never mutate a profile; the CLI loads one from a JSON file and
/// hosts assemble one from whatever storage they own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub monthly_income: f64,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Profile {
    /// Load a profile from a JSON file
    ///
    /// The engines themselves never validate, so range checks happen here at
    /// the boundary: amounts and income must be non-negative.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&data)?;

        if profile.monthly_income < 0.0 {
            return Err(Error::InvalidData(format!(
                "monthly_income must be non-negative, got {}",
                profile.monthly_income
            )));
        }
        if let Some(expense) = profile.expenses.iter().find(|e| e.amount < 0.0) {
            return Err(Error::InvalidData(format!(
                "expense {} has a negative amount",
                expense.id
            )));
        }

        Ok(profile)
    }

    /// Save a profile as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Sum of all recorded expenses
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// A small example profile used by `finmate init` and tests
    pub fn sample() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        Self {
            username: "alex".to_string(),
            monthly_income: 3000.0,
            expenses: vec![
                Expense::new(1, 650.0, "Rent", d(2026, 7, 1)),
                Expense::new(2, 240.0, "Groceries", d(2026, 7, 6)),
                Expense::new(3, 60.0, "Transport", d(2026, 7, 12)),
                Expense::new(4, 85.0, "Dining", d(2026, 7, 19)).with_note("birthday dinner"),
                Expense::new(5, 45.0, "Entertainment", d(2026, 7, 23)),
            ],
            goals: vec![
                Goal::new(1, "Emergency fund", 5000.0, 1500.0),
                Goal::new(2, "New laptop", 1200.0, 900.0),
            ],
        }
    }
}
