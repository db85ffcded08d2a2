//! Rule-based chat assistant
//!
//! Classifies a free-text utterance into a structured response: a navigation
//! action, a data query over the caller's records, a canned educational
//! explanation, a theme command, or a fallback. Matching is a cascade of
//! substring checks over fixed phrase tables, expressed as an explicit
//! ordered rule chain so the first-match-wins ordering stays auditable and
//! testable rule by rule.
//!
//! The classifier is a pure mapping from (normalized utterance, context) to
//! response, except for reading/writing the display theme through the
//! injected [`ThemeStore`].

pub mod context;
pub mod education;
pub mod navigation;
pub mod queries;
pub mod types;

pub use context::{ChatContext, ContextMemory};
pub use types::{ChartPayload, ChartRow, ChatAction, ClassifiedResponse, ResponseKind};

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::Theme;
use crate::theme::ThemeStore;

/// Fixed reply when nothing matched
const FALLBACK_TEXT: &str =
    "I'm still learning! Try asking about your income, expenses, savings, or goals.";

/// Prefixes that mark a terse follow-up when there is prior conversation
const FOLLOW_UP_PREFIXES: &[&str] = &["what about", "how about", "and", "what else", "can you"];

/// Words that put an utterance in the theme branch at all
const THEME_TRIGGERS: &[&str] = &["theme", "mode", "dark", "light", "bright", "night"];

/// Phrases that request a plain toggle
const TOGGLE_PHRASES: &[&str] = &["toggle theme", "switch theme", "change theme"];

/// A normalized utterance plus what the pipeline has derived about it
struct Utterance {
    text: String,
    follow_up: bool,
}

/// One entry of the classification cascade
struct Rule {
    name: &'static str,
    applies: fn(&Utterance) -> bool,
    handle: fn(&Utterance, &ChatContext, &dyn ThemeStore) -> ClassifiedResponse,
}

/// The cascade, in contract order: navigation, data query, education, theme.
/// First match wins; anything else falls through to the fallback text.
const RULES: &[Rule] = &[
    Rule {
        name: "navigation",
        applies: navigation_applies,
        handle: navigation_handle,
    },
    Rule {
        name: "data_query",
        applies: data_query_applies,
        handle: data_query_handle,
    },
    Rule {
        name: "education",
        applies: education_applies,
        handle: education_handle,
    },
    Rule {
        name: "theme",
        applies: theme_applies,
        handle: theme_handle,
    },
];

/// The chat assistant's intent classifier
///
/// Holds only the injected theme store; all other inputs arrive per call.
pub struct IntentClassifier<'a> {
    themes: &'a dyn ThemeStore,
}

impl<'a> IntentClassifier<'a> {
    pub fn new(themes: &'a dyn ThemeStore) -> Self {
        Self { themes }
    }

    /// Classify one utterance against the caller's context
    ///
    /// Never fails; an unmatched utterance is the normal fallback branch,
    /// not an error.
    pub fn classify(&self, input: &str, ctx: &ChatContext) -> ClassifiedResponse {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            // Nothing to match against; skip the cascade entirely
            return fallback_response();
        }

        let utterance = Utterance {
            follow_up: is_follow_up(&normalized, &ctx.memory),
            text: normalized,
        };

        for rule in RULES {
            if (rule.applies)(&utterance) {
                debug!(rule = rule.name, "chat rule matched");
                return (rule.handle)(&utterance, ctx, self.themes);
            }
        }

        debug!("no chat rule matched");
        fallback_response()
    }
}

fn fallback_response() -> ClassifiedResponse {
    ClassifiedResponse::text(FALLBACK_TEXT)
}

/// Loosened-matching heuristic for short continuations of a conversation
fn is_follow_up(normalized: &str, memory: &ContextMemory) -> bool {
    if memory.is_empty() {
        return false;
    }
    FOLLOW_UP_PREFIXES.iter().any(|p| normalized.starts_with(p))
        || normalized == "why"
        || normalized == "how"
        || normalized.chars().count() < 10
}

// ---------------------------------------------------------------------------
// Navigation rule
// ---------------------------------------------------------------------------

fn navigation_applies(utterance: &Utterance) -> bool {
    navigation::has_navigation_trigger(&utterance.text)
        && navigation::match_destination(&utterance.text).is_some()
}

fn navigation_handle(
    utterance: &Utterance,
    _ctx: &ChatContext,
    _themes: &dyn ThemeStore,
) -> ClassifiedResponse {
    match navigation::match_destination(&utterance.text) {
        Some(destination) => ClassifiedResponse::action(
            destination.confirmation(),
            ChatAction::Navigate {
                path: destination.path().to_string(),
            },
        ),
        None => fallback_response(),
    }
}

// ---------------------------------------------------------------------------
// Data-query rule
// ---------------------------------------------------------------------------

fn data_query_applies(utterance: &Utterance) -> bool {
    (queries::has_data_query_trigger(&utterance.text) || utterance.follow_up)
        && queries::match_data_query(&utterance.text).is_some()
}

fn data_query_handle(
    utterance: &Utterance,
    ctx: &ChatContext,
    _themes: &dyn ThemeStore,
) -> ClassifiedResponse {
    match queries::match_data_query(&utterance.text) {
        Some(query) => queries::handle(query, &utterance.text, ctx),
        None => fallback_response(),
    }
}

// ---------------------------------------------------------------------------
// Education rule
// ---------------------------------------------------------------------------

fn education_applies(utterance: &Utterance) -> bool {
    education::has_education_trigger(&utterance.text)
}

fn education_handle(
    utterance: &Utterance,
    _ctx: &ChatContext,
    _themes: &dyn ThemeStore,
) -> ClassifiedResponse {
    match education::match_topic(&utterance.text) {
        Some(topic) => ClassifiedResponse::text(topic.content().trim_end()),
        None => ClassifiedResponse::text(education::topic_menu()),
    }
}

// ---------------------------------------------------------------------------
// Theme rule
// ---------------------------------------------------------------------------

fn theme_applies(utterance: &Utterance) -> bool {
    THEME_TRIGGERS.iter().any(|t| utterance.text.contains(t))
}

/// Explicit light request: switch-verb + light/bright, a literal "light
/// mode", or turning dark mode off
fn light_request_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:switch|change|enable|turn on).*(?:light|bright)|light mode|turn off.*dark")
            .unwrap()
    })
}

/// Explicit dark request: switch-verb + dark, or a literal "dark mode" /
/// "night mode"
fn dark_request_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:switch|change|enable|turn on).*dark|dark mode|night mode").unwrap()
    })
}

/// Theme sub-classification. Light is checked before dark so "turn off dark
/// mode" resolves to light even though it contains "dark mode"; toggle comes
/// after both so "switch theme to dark" is an explicit request.
fn theme_handle(
    utterance: &Utterance,
    _ctx: &ChatContext,
    themes: &dyn ThemeStore,
) -> ClassifiedResponse {
    if light_request_re().is_match(&utterance.text) {
        return set_theme(themes, Theme::Light);
    }
    if dark_request_re().is_match(&utterance.text) {
        return set_theme(themes, Theme::Dark);
    }
    if TOGGLE_PHRASES.iter().any(|p| utterance.text.contains(p)) {
        return set_theme(themes, themes.get().flipped());
    }

    ClassifiedResponse::text(format!(
        "The current theme is {} mode. Say 'toggle theme' to switch.",
        themes.get()
    ))
}

fn set_theme(themes: &dyn ThemeStore, target: Theme) -> ClassifiedResponse {
    if themes.get() == target {
        return ClassifiedResponse::text(format!("You're already using {} mode.", target));
    }
    if let Err(e) = themes.set(target) {
        warn!(error = %e, "failed to persist theme preference");
        return ClassifiedResponse::text("I couldn't save your theme preference right now.");
    }
    ClassifiedResponse::action(
        format!("Theme switched to {} mode.", target),
        ChatAction::Theme { theme: target },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Goal};
    use crate::theme::InMemoryThemeStore;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ctx() -> ChatContext {
        ChatContext::new("alex", 3000.0)
            .with_expenses(vec![
                Expense::new(1, 1200.0, "Rent", d(2026, 8, 1)),
                Expense::new(2, 600.0, "Groceries", d(2026, 8, 5)),
            ])
            .with_goals(vec![Goal::new(1, "Emergency fund", 5000.0, 2000.0)])
            .with_today(d(2026, 8, 15))
    }

    fn classify(input: &str, ctx: &ChatContext) -> ClassifiedResponse {
        let store = InMemoryThemeStore::default();
        IntentClassifier::new(&store).classify(input, ctx)
    }

    #[test]
    fn test_navigation_to_expenses() {
        let response = classify("take me to my expenses", &ctx());
        assert_eq!(response.kind, ResponseKind::Action);
        assert_eq!(
            response.action,
            Some(ChatAction::Navigate {
                path: "/expenses".to_string()
            })
        );
    }

    #[test]
    fn test_navigation_needs_both_trigger_and_destination() {
        // Trigger without destination falls through to fallback
        let response = classify("open the pod bay doors", &ctx());
        assert_eq!(response.text, FALLBACK_TEXT);

        // Destination without trigger is not navigation either
        let response = classify("dashboard", &ctx());
        assert_eq!(response.text, FALLBACK_TEXT);
    }

    #[test]
    fn test_navigation_wins_over_data_query() {
        // "show me" + destination keyword is navigation even though
        // "expense" is also a data-query keyword
        let response = classify("show me my expenses", &ctx());
        assert_eq!(response.kind, ResponseKind::Action);
    }

    #[test]
    fn test_savings_query_scenario() {
        let response = classify("how much have I saved?", &ctx());
        assert_eq!(response.kind, ResponseKind::Text);
        assert!(response.text.contains("1,200"));
        assert!(response.text.contains("40.0%"));
    }

    #[test]
    fn test_data_query_wins_over_education() {
        // "tell me about my goals" hits both the data-query and education
        // triggers; the data query comes first in the cascade
        let response = classify("tell me about my goals", &ctx());
        assert_eq!(response.kind, ResponseKind::Chart);
    }

    #[test]
    fn test_education_scenario() {
        let response = classify("what is compound interest?", &ctx());
        assert_eq!(response.kind, ResponseKind::Text);
        assert!(response.text.contains("Compound interest"));
    }

    #[test]
    fn test_education_unknown_topic_lists_menu() {
        let response = classify("what is a blockchain", &ctx());
        assert!(response.text.contains("Which one are you curious about?"));
    }

    #[test]
    fn test_fallback_scenario() {
        let response = classify("asdkjasdkj", &ctx());
        assert_eq!(response.kind, ResponseKind::Text);
        assert_eq!(response.text, FALLBACK_TEXT);
    }

    #[test]
    fn test_empty_input_short_circuits() {
        for input in ["", "   ", "\t\n"] {
            let response = classify(input, &ctx());
            assert_eq!(response.text, FALLBACK_TEXT);
        }
    }

    #[test]
    fn test_follow_up_loosens_data_query() {
        let mut with_memory = ctx();

        // Without memory, a terse "and my goals?" matches nothing
        let response = classify("and my goals?", &with_memory);
        assert_eq!(response.text, FALLBACK_TEXT);

        with_memory.memory.push("user: how much have I saved?");
        let response = classify("and my goals?", &with_memory);
        assert_eq!(response.kind, ResponseKind::Chart);

        // Short utterances count as follow-ups too
        let response = classify("expenses?", &with_memory);
        assert!(response.text.contains("recorded expenses"));
    }

    #[test]
    fn test_theme_toggle_pair_restores_original() {
        let store = InMemoryThemeStore::default();
        let classifier = IntentClassifier::new(&store);
        let ctx = ctx();

        let original = store.get();
        let first = classifier.classify("toggle theme", &ctx);
        assert_eq!(
            first.action,
            Some(ChatAction::Theme {
                theme: original.flipped()
            })
        );
        assert_eq!(store.get(), original.flipped());

        classifier.classify("toggle theme", &ctx);
        assert_eq!(store.get(), original);
    }

    #[test]
    fn test_explicit_dark_and_already_using() {
        let store = InMemoryThemeStore::default();
        let classifier = IntentClassifier::new(&store);
        let ctx = ctx();

        let response = classifier.classify("switch to dark mode", &ctx);
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(response.kind, ResponseKind::Action);

        // Asking again does not toggle back
        let response = classifier.classify("enable dark mode please", &ctx);
        assert_eq!(store.get(), Theme::Dark);
        assert!(response.text.contains("already using dark"));
    }

    #[test]
    fn test_turn_off_dark_means_light() {
        let store = InMemoryThemeStore::new(Theme::Dark);
        let classifier = IntentClassifier::new(&store);

        let response = classifier.classify("turn off dark mode", &ctx());
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(
            response.action,
            Some(ChatAction::Theme {
                theme: Theme::Light
            })
        );
    }

    #[test]
    fn test_theme_status_without_sub_match() {
        let response = classify("light", &ctx());
        assert!(response.text.contains("current theme is light"));
    }

    #[test]
    fn test_data_query_beats_theme_on_night_mention() {
        // "night" is a theme trigger, but the data-query rule comes first
        let response = classify("how much do i spend at night", &ctx());
        assert_eq!(response.kind, ResponseKind::Text);
        assert!(response.text.contains("recorded expenses"));
    }
}
