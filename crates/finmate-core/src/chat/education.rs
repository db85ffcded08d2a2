//! Educational explanations for the chat assistant
//!
//! Canned multi-paragraph answers embedded at compile time from the
//! top-level `content/` directory. A topic is selected by keyword presence;
//! no computation happens here.

/// Embedded default explanations (compiled into the binary)
mod defaults {
    pub const EMERGENCY_FUND: &str = include_str!("../../../../content/emergency_fund.md");
    pub const COMPOUND_INTEREST: &str = include_str!("../../../../content/compound_interest.md");
    pub const RULE_50_30_20: &str = include_str!("../../../../content/rule_50_30_20.md");
    pub const BUDGETING: &str = include_str!("../../../../content/budgeting.md");
    pub const DEBT_PAYOFF: &str = include_str!("../../../../content/debt_payoff.md");
}

/// Trigger phrases that make an utterance an educational question at all
const EDUCATION_TRIGGERS: &[&str] = &["what is", "how does", "explain", "tell me about"];

/// Known explanation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    EmergencyFund,
    CompoundInterest,
    /// The 50/30/20 budgeting rule
    Rule503020,
    Budgeting,
    DebtPayoff,
}

/// Keyword table in match order; 50/30/20 precedes the generic budget
/// keyword so "the 50/30/20 budgeting rule" resolves to the rule itself.
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::EmergencyFund,
        &["emergency fund", "emergency savings", "rainy day"],
    ),
    (Topic::CompoundInterest, &["compound interest", "compounding"]),
    (Topic::Rule503020, &["50/30/20", "50-30-20", "50 30 20"]),
    (Topic::Budgeting, &["budget"]),
    (Topic::DebtPayoff, &["snowball", "avalanche", "debt"]),
];

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "emergency_fund",
            Self::CompoundInterest => "compound_interest",
            Self::Rule503020 => "rule_50_30_20",
            Self::Budgeting => "budgeting",
            Self::DebtPayoff => "debt_payoff",
        }
    }

    /// Human-readable topic title for the menu text
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "emergency funds",
            Self::CompoundInterest => "compound interest",
            Self::Rule503020 => "the 50/30/20 rule",
            Self::Budgeting => "budgeting",
            Self::DebtPayoff => "debt snowball vs. avalanche",
        }
    }

    /// Get all known topics
    pub fn all() -> &'static [Topic] {
        &[
            Self::EmergencyFund,
            Self::CompoundInterest,
            Self::Rule503020,
            Self::Budgeting,
            Self::DebtPayoff,
        ]
    }

    /// The embedded explanation for this topic
    pub fn content(&self) -> &'static str {
        match self {
            Self::EmergencyFund => defaults::EMERGENCY_FUND,
            Self::CompoundInterest => defaults::COMPOUND_INTEREST,
            Self::Rule503020 => defaults::RULE_50_30_20,
            Self::Budgeting => defaults::BUDGETING,
            Self::DebtPayoff => defaults::DEBT_PAYOFF,
        }
    }
}

/// Whether a normalized utterance asks an educational question
pub fn has_education_trigger(utterance: &str) -> bool {
    EDUCATION_TRIGGERS.iter().any(|t| utterance.contains(t))
}

/// First topic whose keyword appears in the normalized utterance
pub fn match_topic(utterance: &str) -> Option<Topic> {
    for (topic, keywords) in TOPIC_KEYWORDS {
        if keywords.iter().any(|k| utterance.contains(k)) {
            return Some(*topic);
        }
    }
    None
}

/// Menu text returned when the question matched no known topic
pub fn topic_menu() -> String {
    let titles: Vec<&str> = Topic::all().iter().map(|t| t.title()).collect();
    format!(
        "I can explain a few personal-finance basics: {}. Which one are you curious about?",
        titles.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers() {
        assert!(has_education_trigger("what is compound interest"));
        assert!(has_education_trigger("explain budgeting to me"));
        assert!(has_education_trigger("how does the snowball method work"));
        assert!(!has_education_trigger("toggle theme"));
    }

    #[test]
    fn test_every_topic_has_content() {
        for topic in Topic::all() {
            let content = topic.content();
            assert!(!content.trim().is_empty(), "{} is empty", topic.as_str());
            // Multi-paragraph canned text
            assert!(
                content.trim().split("\n\n").count() >= 2,
                "{} is a single paragraph",
                topic.as_str()
            );
        }
    }

    #[test]
    fn test_topic_matching() {
        assert_eq!(match_topic("what is an emergency fund"), Some(Topic::EmergencyFund));
        assert_eq!(match_topic("how does compounding work"), Some(Topic::CompoundInterest));
        assert_eq!(match_topic("explain the 50/30/20 rule"), Some(Topic::Rule503020));
        assert_eq!(match_topic("how does budgeting work"), Some(Topic::Budgeting));
        assert_eq!(match_topic("snowball or avalanche?"), Some(Topic::DebtPayoff));
        assert_eq!(match_topic("what is a blockchain"), None);
    }

    #[test]
    fn test_rule_beats_generic_budget_keyword() {
        assert_eq!(
            match_topic("explain the 50/30/20 budgeting rule"),
            Some(Topic::Rule503020)
        );
    }

    #[test]
    fn test_menu_lists_all_topics() {
        let menu = topic_menu();
        for topic in Topic::all() {
            assert!(menu.contains(topic.title()));
        }
    }
}
