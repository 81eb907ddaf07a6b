//! Per-language lexicon bundle: localized crisis terms and response templates

use serde::Serialize;

use crate::types::{CrisisCategory, Sentiment, Severity};

/// Response template for one severity tier
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierTemplate {
    pub severity: Severity,
    pub text: &'static str,
    /// Mood words this tier was written around. Informational only;
    /// matching is done by the scorer's own tables.
    pub keywords: &'static [&'static str],
}

/// Follow-up template keyed by the sentiment that triggers it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FollowUpTemplate {
    pub trigger: Sentiment,
    pub text: &'static str,
}

/// Full template set for one language
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResponseTemplates {
    pub welcome: &'static str,
    /// Low / medium / high tier responses
    pub tiers: &'static [TierTemplate],
    /// Positive / neutral / negative follow-ups
    pub follow_ups: &'static [FollowUpTemplate],
    pub offline: &'static str,
    pub disclaimer: &'static str,
    pub crisis: &'static str,
}

/// Everything the engine knows about one language.
///
/// `crisis_terms` holds localized terms scanned in addition to the
/// language-independent crisis table; it is empty for the default
/// language, whose terms live in that table already.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Lexicon {
    pub code: &'static str,
    pub crisis_terms: &'static [(CrisisCategory, &'static [&'static str])],
    pub templates: ResponseTemplates,
}

impl Lexicon {
    /// Template text for a severity tier, if this language carries one
    pub fn tier_text(&self, severity: Severity) -> Option<&'static str> {
        self.templates
            .tiers
            .iter()
            .find(|t| t.severity == severity)
            .map(|t| t.text)
    }

    /// Follow-up text for a sentiment trigger, if this language carries one
    pub fn follow_up_text(&self, trigger: Sentiment) -> Option<&'static str> {
        self.templates
            .follow_ups
            .iter()
            .find(|f| f.trigger == trigger)
            .map(|f| f.text)
    }
}
