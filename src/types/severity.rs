//! Severity and sentiment classifications

use serde::{Deserialize, Serialize};

/// The four risk tiers a single message can classify into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No crisis indicators; mild or neutral mood
    Low,
    /// Sustained negative mood, worth a check-in
    Medium,
    /// Significant distress, professional support recommended
    High,
    /// Crisis indicators present, immediate intervention
    Crisis,
}

impl Severity {
    /// Human-readable concern label for UI badges
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Mild Concern",
            Severity::Medium => "Moderate Concern",
            Severity::High => "High Concern",
            Severity::Crisis => "Crisis Level",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Crisis => "CRISIS",
        };
        write!(f, "{}", name)
    }
}

/// Overall mood polarity of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        write!(f, "{}", name)
    }
}
