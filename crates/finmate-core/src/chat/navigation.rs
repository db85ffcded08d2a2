//! Navigation destinations for the chat assistant
//!
//! Maps destination keywords in an utterance to an application route. The
//! keyword table is ordered; the first destination with a matching keyword
//! wins, so overlapping vocabulary ("savings goal" vs "saving") resolves the
//! same way every time.

/// Application routes the assistant can point the host at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Expenses,
    Goals,
    Challenges,
    Reports,
    Insights,
    TimeTravel,
    Wishes,
}

/// Trigger phrases that make an utterance a navigation request at all
const NAVIGATION_TRIGGERS: &[&str] = &["go to", "take me to", "navigate to", "show me", "open"];

/// Keyword table in fixed priority order
const DESTINATION_KEYWORDS: &[(Destination, &[&str])] = &[
    (Destination::Dashboard, &["dashboard", "home", "main page"]),
    (Destination::Expenses, &["expense", "spending", "transactions"]),
    (Destination::Goals, &["goal", "saving", "target"]),
    (Destination::Challenges, &["challenge", "game", "achievement"]),
    (Destination::Reports, &["report", "analytics", "analysis"]),
    (Destination::Insights, &["insight", "advice", "recommendation"]),
    (Destination::TimeTravel, &["time travel", "future", "projection"]),
    (Destination::Wishes, &["wish", "dream", "jar"]),
];

impl Destination {
    /// Route the host should navigate to
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Expenses => "/expenses",
            Self::Goals => "/goals",
            Self::Challenges => "/challenges",
            Self::Reports => "/reports",
            Self::Insights => "/financial-insights",
            Self::TimeTravel => "/time-travel",
            Self::Wishes => "/wishes",
        }
    }

    /// Fixed confirmation sentence shown while navigating
    pub fn confirmation(&self) -> &'static str {
        match self {
            Self::Dashboard => "Taking you to your dashboard!",
            Self::Expenses => "Opening your expense tracker!",
            Self::Goals => "Let's look at your savings goals!",
            Self::Challenges => "Time to level up! Opening your challenges.",
            Self::Reports => "Opening your spending reports!",
            Self::Insights => "Let's see what insights I have for you!",
            Self::TimeTravel => "Buckle up, we're traveling to your financial future!",
            Self::Wishes => "Opening your wish jar!",
        }
    }
}

/// Whether a normalized utterance contains a navigation trigger phrase
pub fn has_navigation_trigger(utterance: &str) -> bool {
    NAVIGATION_TRIGGERS.iter().any(|t| utterance.contains(t))
}

/// First destination whose keyword appears in the normalized utterance
pub fn match_destination(utterance: &str) -> Option<Destination> {
    for (destination, keywords) in DESTINATION_KEYWORDS {
        if keywords.iter().any(|k| utterance.contains(k)) {
            return Some(*destination);
        }
    }
    None
}
