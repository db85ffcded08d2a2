//! FinMate Core Library
//!
//! Shared functionality for the FinMate personal finance assistant:
//! - Future-value projection engine with inflation-adjusted results
//! - Rule-based chat intent classifier (navigation, data queries,
//!   educational explanations, theme commands)
//! - Financial health banding from the savings rate
//! - Theme preference storage with pluggable backends
//! - Currency/percent formatting shared by responses and CLI output

pub mod chat;
pub mod error;
pub mod format;
pub mod health;
pub mod models;
pub mod projection;
pub mod theme;

pub use chat::{
    ChartPayload, ChartRow, ChatAction, ChatContext, ClassifiedResponse, ContextMemory,
    IntentClassifier, ResponseKind,
};
pub use error::{Error, Result};
pub use format::{format_currency, format_pct};
pub use health::{savings_rate, HealthBand};
pub use models::{Expense, Goal, Profile, Theme};
pub use projection::{project, project_timeline, FinancialSnapshot, ProjectionResult, YearProjection};
pub use theme::{FileThemeStore, InMemoryThemeStore, ThemeStore};
