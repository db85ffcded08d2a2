//! Data-query handlers for the chat assistant
//!
//! Read-only aggregates over the caller's expenses, goals, and income. Each
//! handler returns a complete response; nothing here mutates the context.

use chrono::Datelike;
use std::collections::HashMap;

use crate::format::{format_currency, format_pct};
use crate::health::{savings_rate, HealthBand};

use super::context::ChatContext;
use super::types::{ChartPayload, ChartRow, ClassifiedResponse};

/// Trigger phrases that make an utterance a data query (a detected follow-up
/// qualifies as well, handled by the classifier)
const DATA_QUERY_TRIGGERS: &[&str] = &["how much", "what is my", "show my", "tell me about my"];

/// The specific aggregate a data query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataQuery {
    Income,
    Expenses,
    Savings,
    Goals,
    Health,
}

/// Keyword table in match order
const QUERY_KEYWORDS: &[(DataQuery, &[&str])] = &[
    (DataQuery::Income, &["income", "earn", "salary"]),
    (DataQuery::Expenses, &["expense", "spend", "cost"]),
    (DataQuery::Savings, &["saving", "saved", "save"]),
    (DataQuery::Goals, &["goal", "target"]),
    (
        DataQuery::Health,
        &[
            "financial health",
            "how am i doing",
            "financial status",
            "financial situation",
        ],
    ),
];

/// Whether a normalized utterance contains a data-query trigger phrase
pub fn has_data_query_trigger(utterance: &str) -> bool {
    DATA_QUERY_TRIGGERS.iter().any(|t| utterance.contains(t))
}

/// First query whose keyword appears in the normalized utterance
pub fn match_data_query(utterance: &str) -> Option<DataQuery> {
    for (query, keywords) in QUERY_KEYWORDS {
        if keywords.iter().any(|k| utterance.contains(k)) {
            return Some(*query);
        }
    }
    None
}

/// Dispatch a matched query to its handler
pub fn handle(query: DataQuery, utterance: &str, ctx: &ChatContext) -> ClassifiedResponse {
    match query {
        DataQuery::Income => income_response(ctx),
        DataQuery::Expenses => expenses_response(utterance, ctx),
        DataQuery::Savings => savings_response(ctx),
        DataQuery::Goals => goals_response(ctx),
        DataQuery::Health => health_response(ctx),
    }
}

fn income_response(ctx: &ChatContext) -> ClassifiedResponse {
    ClassifiedResponse::text(format!(
        "Your monthly income is {}.",
        format_currency(ctx.monthly_income)
    ))
}

fn expenses_response(utterance: &str, ctx: &ChatContext) -> ClassifiedResponse {
    let this_month = utterance.contains("this month") || utterance.contains("current month");

    if !this_month {
        return ClassifiedResponse::text(format!(
            "You've spent {} in total across {} recorded expenses.",
            format_currency(ctx.total_expenses()),
            ctx.expenses.len()
        ));
    }

    let monthly: Vec<_> = ctx
        .expenses
        .iter()
        .filter(|e| e.date.year() == ctx.today.year() && e.date.month() == ctx.today.month())
        .collect();

    if monthly.is_empty() {
        return ClassifiedResponse::text(
            "You haven't recorded any expenses this month. Nice and quiet!",
        );
    }

    let total: f64 = monthly.iter().map(|e| e.amount).sum();

    let mut by_category: HashMap<&str, f64> = HashMap::new();
    for expense in &monthly {
        *by_category.entry(expense.category.as_str()).or_default() += expense.amount;
    }

    let mut rows: Vec<ChartRow> = by_category
        .into_iter()
        .map(|(category, amount)| ChartRow::new(category, amount))
        .collect();
    // Largest slice first; tie-break on label so output is deterministic
    rows.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    ClassifiedResponse::chart(
        format!(
            "You've spent {} so far this month. Here's the breakdown by category:",
            format_currency(total)
        ),
        ChartPayload::pie(rows, "category", "amount"),
    )
}

fn savings_response(ctx: &ChatContext) -> ClassifiedResponse {
    let savings = ctx.monthly_income - ctx.total_expenses();
    let rate = savings_rate(ctx.monthly_income, ctx.total_expenses());

    ClassifiedResponse::text(format!(
        "You've saved {} so far, a savings rate of {}.",
        format_currency(savings),
        format_pct(rate)
    ))
}

fn goals_response(ctx: &ChatContext) -> ClassifiedResponse {
    if ctx.goals.is_empty() {
        return ClassifiedResponse::text(
            "You don't have any savings goals yet. Creating one is a great way to stay motivated!",
        );
    }

    let completed = ctx.goals.iter().filter(|g| g.completed).count();
    let active = ctx.goals.len() - completed;

    let rows: Vec<ChartRow> = ctx
        .goals
        .iter()
        .filter(|g| !g.completed)
        .map(|g| ChartRow::new(g.name.clone(), g.progress_pct()))
        .collect();

    ClassifiedResponse::chart(
        format!(
            "You have {} active goal(s) and {} completed. Here's your progress:",
            active, completed
        ),
        ChartPayload::bar(rows, "goal", "progress_pct"),
    )
}

fn health_response(ctx: &ChatContext) -> ClassifiedResponse {
    let total_expenses = ctx.total_expenses();
    let savings = ctx.monthly_income - total_expenses;
    let rate = savings_rate(ctx.monthly_income, total_expenses);
    let band = HealthBand::classify(rate);

    let rows = vec![
        ChartRow::new("Income", ctx.monthly_income),
        ChartRow::new("Expenses", total_expenses),
        ChartRow::new("Savings", savings),
    ];

    ClassifiedResponse::chart(
        format!(
            "{} Your savings rate is {}. {}",
            band.narrative(),
            format_pct(rate),
            band.advice()
        ),
        ChartPayload::bar(rows, "metric", "amount"),
    )
}
