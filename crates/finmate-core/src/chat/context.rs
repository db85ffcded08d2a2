//! Per-call context for the chat assistant
//!
//! The classifier holds no state of its own; everything it reads arrives in a
//! `ChatContext` assembled fresh by the caller. The only carried-over piece
//! is a short rolling memory of prior exchange lines, used to loosen matching
//! for terse follow-ups.

use chrono::{NaiveDate, Utc};

use crate::models::{Expense, Goal};

/// Maximum number of remembered exchange lines
const MEMORY_CAPACITY: usize = 10;

/// Rolling history of recent chat lines, capped at [`MEMORY_CAPACITY`]
#[derive(Debug, Clone, Default)]
pub struct ContextMemory {
    lines: Vec<String>,
}

impl ContextMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, dropping the oldest once the cap is reached
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        if self.lines.len() > MEMORY_CAPACITY {
            let excess = self.lines.len() - MEMORY_CAPACITY;
            self.lines.drain(..excess);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Everything the classifier may read for one call
#[derive(Debug, Clone)]
pub struct ChatContext {
    pub username: String,
    pub monthly_income: f64,
    pub expenses: Vec<Expense>,
    pub goals: Vec<Goal>,
    /// Reference date for "this month" filtering; injected so classification
    /// stays a pure function of its inputs
    pub today: NaiveDate,
    pub memory: ContextMemory,
}

impl ChatContext {
    pub fn new(username: impl Into<String>, monthly_income: f64) -> Self {
        Self {
            username: username.into(),
            monthly_income,
            expenses: Vec::new(),
            goals: Vec::new(),
            today: Utc::now().date_naive(),
            memory: ContextMemory::new(),
        }
    }

    pub fn with_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.expenses = expenses;
        self
    }

    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = goals;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Sum of all recorded expenses
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Build a context from a profile
    pub fn from_profile(profile: &crate::models::Profile) -> Self {
        Self::new(profile.username.clone(), profile.monthly_income)
            .with_expenses(profile.expenses.clone())
            .with_goals(profile.goals.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_caps_at_ten_lines() {
        let mut memory = ContextMemory::new();
        assert!(memory.is_empty());

        for i in 0..15 {
            memory.push(format!("line {}", i));
        }

        assert_eq!(memory.lines().len(), 10);
        assert_eq!(memory.lines()[0], "line 5");
        assert_eq!(memory.lines()[9], "line 14");
    }

    #[test]
    fn test_context_from_profile() {
        let profile = crate::models::Profile::sample();
        let ctx = ChatContext::from_profile(&profile);

        assert_eq!(ctx.username, profile.username);
        assert_eq!(ctx.expenses.len(), profile.expenses.len());
        assert!((ctx.total_expenses() - profile.total_expenses()).abs() < 1e-9);
        assert!(ctx.memory.is_empty());
    }
}
