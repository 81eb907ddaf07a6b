//! Response selector: maps a risk analysis to a localized reply
//!
//! Dispatch is an exhaustive match over the severity tier, terminal per
//! call -- no memory beyond the analysis passed in. Template lookups
//! that miss fall back to fixed English sentences rather than failing.

use serde::Serialize;

use crate::core::LexiconStore;
use crate::types::{Action, ActionKind, RiskAnalysis, RiskFactor, Sentiment, Severity};

/// Confidence above which the high-tier reply is strengthened
const STRONG_CONFIDENCE: f64 = 0.7;

// Fallback sentences for languages missing a template
const MEDIUM_FALLBACK: &str = "I understand you're going through a challenging time.";
const LOW_FALLBACK: &str = "Thank you for sharing. How would you describe your overall mood today?";
const POSITIVE_FALLBACK: &str = "That's wonderful to hear! What's been helping you feel this way?";

const CRISIS_CLOSING: &str =
    "Please reach out for immediate support. You are not alone, and there are people who want to help you right now.";

/// Localized reply text plus recommended actions
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub actions: Vec<Action>,
}

/// Response selector over an injected lexicon store
#[derive(Debug, Default)]
pub struct ResponseSelector;

impl ResponseSelector {
    /// Create new selector
    pub fn new() -> Self {
        Self
    }

    /// Select the reply and action set for an analysis.
    ///
    /// Pure and total: unknown languages resolve through the store's
    /// default fallback, missing templates fall back to fixed sentences.
    pub fn select(&self, analysis: &RiskAnalysis, language: &str, lexicons: &LexiconStore) -> Reply {
        let lexicon = lexicons.get(language);

        match analysis.severity {
            Severity::Crisis => {
                let mut text = format!("{}\n\n", lexicon.templates.crisis);
                if !analysis.risk_factors.is_empty() {
                    let factors: Vec<&str> =
                        analysis.risk_factors.iter().map(RiskFactor::code).collect();
                    text.push_str(&format!(
                        "I notice you're dealing with {} issues. ",
                        factors.join(", ")
                    ));
                }
                text.push_str(CRISIS_CLOSING);

                Reply {
                    text,
                    actions: vec![
                        Action::urgent(ActionKind::Emergency, "Emergency Helpline"),
                        Action::urgent(ActionKind::Counselor, "Immediate Counselor"),
                        Action::new(ActionKind::Resources, "Crisis Resources"),
                    ],
                }
            }

            Severity::High => {
                let mut text = String::from("I'm genuinely concerned about what you're sharing.");
                if analysis.confidence > STRONG_CONFIDENCE {
                    text.push_str(
                        " Based on what you've told me, it sounds like you're experiencing significant distress.",
                    );
                }
                if analysis.risk_factors.contains(&RiskFactor::Isolation) {
                    text.push_str(" Feeling isolated can make everything seem worse.");
                }
                text.push_str(
                    " It's important that you connect with professional support. Would you like me to help you find immediate resources?",
                );

                Reply {
                    text,
                    actions: vec![
                        Action::new(ActionKind::Counselor, "Book Counselor"),
                        Action::new(ActionKind::Resources, "Support Resources"),
                        Action::new(ActionKind::Emergency, "Crisis Helpline"),
                    ],
                }
            }

            Severity::Medium => {
                let mut text = lexicon
                    .tier_text(Severity::Medium)
                    .unwrap_or(MEDIUM_FALLBACK)
                    .to_string();
                if analysis.risk_factors.contains(&RiskFactor::Academic) {
                    text.push_str(
                        " Academic stress can feel overwhelming, but there are effective ways to manage it.",
                    );
                } else if analysis.risk_factors.contains(&RiskFactor::Relationship) {
                    text.push_str(" Relationship difficulties can be very painful.");
                }
                text.push_str(
                    " Have these feelings been persistent, or are they related to specific recent events?",
                );

                Reply {
                    text,
                    actions: vec![
                        Action::new(ActionKind::Resources, "Coping Resources"),
                        Action::new(ActionKind::Counselor, "Schedule Session"),
                    ],
                }
            }

            Severity::Low => {
                if analysis.sentiment == Sentiment::Positive {
                    Reply {
                        text: lexicon
                            .follow_up_text(Sentiment::Positive)
                            .unwrap_or(POSITIVE_FALLBACK)
                            .to_string(),
                        actions: vec![Action::new(ActionKind::Resources, "Wellness Tips")],
                    }
                } else {
                    Reply {
                        text: lexicon
                            .tier_text(Severity::Low)
                            .unwrap_or(LOW_FALLBACK)
                            .to_string(),
                        actions: vec![Action::new(ActionKind::Resources, "Self-Care Resources")],
                    }
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
