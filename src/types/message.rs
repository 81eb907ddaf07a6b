//! Message model for conversation history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Action, RiskFactor, Severity};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "ai")]
    Assistant,
}

/// A single entry in a conversation history.
///
/// Messages are immutable once appended. The one exception is the session
/// welcome message, which is rebuilt whole when the active language
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_factors: Option<Vec<RiskFactor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
}

impl Message {
    /// Create a plain message with no analysis attached
    pub fn new(
        id: impl Into<String>,
        author: Author,
        text: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author,
            text: text.into(),
            timestamp: Utc::now(),
            language: language.into(),
            severity: None,
            confidence: None,
            triggers: None,
            risk_factors: None,
            actions: None,
        }
    }
}
