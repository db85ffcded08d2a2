//! Projection command implementation

use anyhow::Result;
use finmate_core::{format_currency, project, project_timeline, FinancialSnapshot};

#[allow(clippy::too_many_arguments)]
pub fn cmd_project(
    savings: f64,
    income: f64,
    expenses: f64,
    monthly_savings: Option<f64>,
    rate: f64,
    inflation: f64,
    years: u32,
    timeline: bool,
) -> Result<()> {
    let mut snapshot = FinancialSnapshot::new(savings, income, expenses, rate, inflation, years);
    if let Some(monthly) = monthly_savings {
        snapshot = snapshot.with_monthly_savings(monthly);
    }

    let result = project(&snapshot);

    println!();
    println!("🚀 Time Travel: {} year(s) ahead", years);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Starting from {} with {} set aside monthly",
        format_currency(snapshot.current_savings),
        format_currency(snapshot.monthly_savings)
    );
    println!(
        "   Assuming {:.1}% annual return, {:.1}% inflation",
        snapshot.annual_return_pct, snapshot.annual_inflation_pct
    );
    println!();
    println!(
        "   Future value:        {:>14}",
        format_currency(result.nominal_future_value)
    );
    println!(
        "   In today's money:    {:>14}",
        format_currency(result.inflation_adjusted_value)
    );
    println!(
        "   Total contributions: {:>14}",
        format_currency(result.total_contributions)
    );
    println!(
        "   Interest earned:     {:>14}",
        format_currency(result.interest_earned)
    );

    if timeline {
        let points = project_timeline(&snapshot);
        if !points.is_empty() {
            println!();
            println!(
                "   {:>4} │ {:>14} │ {:>14} │ {:>14}",
                "Year", "Future value", "Today's money", "Interest"
            );
            println!("   ─────┼────────────────┼────────────────┼────────────────");
            for point in points {
                println!(
                    "   {:>4} │ {:>14} │ {:>14} │ {:>14}",
                    point.year,
                    format_currency(point.result.nominal_future_value),
                    format_currency(point.result.inflation_adjusted_value),
                    format_currency(point.result.interest_earned)
                );
            }
        }
    }

    Ok(())
}
