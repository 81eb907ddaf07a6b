//! Risk analysis: the scorer's output for a single message

use serde::{Deserialize, Serialize};

use crate::types::{Sentiment, Severity};
use crate::NEUTRAL_CONFIDENCE;

/// Categories of the language-independent crisis lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisCategory {
    Suicide,
    SelfHarm,
    Despair,
    /// Terms signalling intent within hours ("tonight", "right now")
    Immediacy,
}

/// Coarse life-context categories inferred from risk-factor terms.
///
/// Distinct from crisis triggers: a risk factor describes circumstances
/// (isolation, academic pressure), not expressed intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskFactor {
    Isolation,
    Substance,
    Trauma,
    Loss,
    Financial,
    Relationship,
    Academic,
}

impl RiskFactor {
    /// Stable string code, used in reply text and serialized output
    pub fn code(&self) -> &'static str {
        match self {
            RiskFactor::Isolation => "isolation",
            RiskFactor::Substance => "substance",
            RiskFactor::Trauma => "trauma",
            RiskFactor::Loss => "loss",
            RiskFactor::Financial => "financial",
            RiskFactor::Relationship => "relationship",
            RiskFactor::Academic => "academic",
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Classification of a single message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub severity: Severity,
    pub sentiment: Sentiment,
    /// 0.0-1.0, grows with the amount of matched evidence
    pub confidence: f64,
    /// Literal crisis-lexicon substrings found in the input
    pub triggers: Vec<String>,
    /// Deduplicated risk-factor categories found in the input
    pub risk_factors: Vec<RiskFactor>,
}

impl RiskAnalysis {
    /// The nothing-matched result: low severity, neutral mood
    pub fn neutral() -> Self {
        Self {
            severity: Severity::Low,
            sentiment: Sentiment::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
            triggers: Vec::new(),
            risk_factors: Vec::new(),
        }
    }
}
