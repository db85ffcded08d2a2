//! Response types for the chat assistant

use serde::{Deserialize, Serialize};

/// What kind of response the host should render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Plain text only
    Text,
    /// Text plus a chart payload
    Chart,
    /// Text plus an action for the host to perform
    Action,
}

/// One row of chart data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub label: String,
    pub value: f64,
}

impl ChartRow {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Chart payload as a discriminated shape so renderers can handle each kind
/// exhaustively
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartPayload {
    Bar {
        rows: Vec<ChartRow>,
        x_key: String,
        y_key: String,
    },
    Line {
        rows: Vec<ChartRow>,
        x_key: String,
        y_key: String,
    },
    Pie {
        rows: Vec<ChartRow>,
        x_key: String,
        y_key: String,
    },
}

impl ChartPayload {
    pub fn bar(rows: Vec<ChartRow>, x_key: impl Into<String>, y_key: impl Into<String>) -> Self {
        Self::Bar {
            rows,
            x_key: x_key.into(),
            y_key: y_key.into(),
        }
    }

    pub fn line(rows: Vec<ChartRow>, x_key: impl Into<String>, y_key: impl Into<String>) -> Self {
        Self::Line {
            rows,
            x_key: x_key.into(),
            y_key: y_key.into(),
        }
    }

    pub fn pie(rows: Vec<ChartRow>, x_key: impl Into<String>, y_key: impl Into<String>) -> Self {
        Self::Pie {
            rows,
            x_key: x_key.into(),
            y_key: y_key.into(),
        }
    }

    pub fn rows(&self) -> &[ChartRow] {
        match self {
            Self::Bar { rows, .. } | Self::Line { rows, .. } | Self::Pie { rows, .. } => rows,
        }
    }
}

/// Action the host should carry out
///
/// The classifier never performs the action itself; navigation in particular
/// is returned as a path and executed by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ChatAction {
    Navigate { path: String },
    Theme { theme: crate::models::Theme },
}

/// A classified chat response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedResponse {
    pub text: String,
    pub kind: ResponseKind,
    pub chart: Option<ChartPayload>,
    pub action: Option<ChatAction>,
}

impl ClassifiedResponse {
    /// Plain text response
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ResponseKind::Text,
            chart: None,
            action: None,
        }
    }

    /// Text plus chart data
    pub fn chart(text: impl Into<String>, chart: ChartPayload) -> Self {
        Self {
            text: text.into(),
            kind: ResponseKind::Chart,
            chart: Some(chart),
            action: None,
        }
    }

    /// Text plus a host-side action
    pub fn action(text: impl Into<String>, action: ChatAction) -> Self {
        Self {
            text: text.into(),
            kind: ResponseKind::Action,
            chart: None,
            action: Some(action),
        }
    }
}
