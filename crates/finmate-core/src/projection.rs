//! Future-value projection engine
//!
//! Answers "where will my money be in N years": monthly-compounded growth of
//! the current balance plus a recurring monthly contribution, with an
//! inflation-adjusted view of the result. Pure computation, no I/O; callers
//! validate ranges before invoking.

use serde::{Deserialize, Serialize};

/// Inputs for one projection run
///
/// Immutable per computation; build a fresh snapshot whenever an input
/// changes. No validation is performed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub current_savings: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Amount set aside each month; negative when expenses exceed income
    pub monthly_savings: f64,
    /// Annual investment return, in percent (e.g. 7.0)
    pub annual_return_pct: f64,
    /// Annual inflation, in percent (e.g. 3.0)
    pub annual_inflation_pct: f64,
    /// Horizon in whole years
    pub years: u32,
}

impl FinancialSnapshot {
    /// Build a snapshot, deriving `monthly_savings` from income and expenses
    pub fn new(
        current_savings: f64,
        monthly_income: f64,
        monthly_expenses: f64,
        annual_return_pct: f64,
        annual_inflation_pct: f64,
        years: u32,
    ) -> Self {
        Self {
            current_savings,
            monthly_income,
            monthly_expenses,
            monthly_savings: monthly_income - monthly_expenses,
            annual_return_pct,
            annual_inflation_pct,
            years,
        }
    }

    /// Override the derived monthly savings amount
    pub fn with_monthly_savings(mut self, monthly_savings: f64) -> Self {
        self.monthly_savings = monthly_savings;
        self
    }
}

/// Output of one projection run, derived deterministically from a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Future value before inflation
    pub nominal_future_value: f64,
    /// Future value expressed in today's purchasing power
    pub inflation_adjusted_value: f64,
    /// Sum of monthly contributions over the horizon (not compounded)
    pub total_contributions: f64,
    /// Growth beyond the starting balance and contributions
    pub interest_earned: f64,
}

/// One point of a year-by-year projection timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: u32,
    #[serde(flatten)]
    pub result: ProjectionResult,
}

/// Project a snapshot forward to its horizon
///
/// Monthly compounding for the balance and contributions, single annual
/// compounding for the inflation discount. Contributions are applied at the
/// start of each month.
pub fn project(snapshot: &FinancialSnapshot) -> ProjectionResult {
    let monthly_rate = snapshot.annual_return_pct / 100.0 / 12.0;
    let months = snapshot.years * 12;

    let lump_sum_fv = snapshot.current_savings * (1.0 + monthly_rate).powi(months as i32);
    let contributions_fv = annuity_future_value(snapshot.monthly_savings, monthly_rate, months);

    let nominal_future_value = lump_sum_fv + contributions_fv;
    let inflation_adjusted_value = nominal_future_value
        / (1.0 + snapshot.annual_inflation_pct / 100.0).powi(snapshot.years as i32);

    let total_contributions = snapshot.monthly_savings * months as f64;
    let interest_earned = nominal_future_value - snapshot.current_savings - total_contributions;

    ProjectionResult {
        nominal_future_value,
        inflation_adjusted_value,
        total_contributions,
        interest_earned,
    }
}

/// Project a snapshot at every horizon from one year up to its own
///
/// Feeds timeline views; empty when the snapshot's horizon is zero.
pub fn project_timeline(snapshot: &FinancialSnapshot) -> Vec<YearProjection> {
    (1..=snapshot.years)
        .map(|year| {
            let point = FinancialSnapshot {
                years: year,
                ..*snapshot
            };
            YearProjection {
                year,
                result: project(&point),
            }
        })
        .collect()
}

/// Future value of a monthly contribution made at the start of each month
///
/// Closed-form annuity-due. The rate-zero case degenerates to the plain sum,
/// which also keeps the division safe.
fn annuity_future_value(monthly_amount: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return monthly_amount * months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(months as i32);
    monthly_amount * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate)
}
