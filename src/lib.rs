//! MindTriage: conversational risk-triage engine for student mental-health chat
//!
//! Free-text messages are scored against crisis, risk-factor, and sentiment
//! lexicons, classified into a severity tier, and answered with a localized
//! reply plus recommended support actions (emergency line, counselor booking,
//! resource catalog, follow-up prompt).

pub mod core;
pub mod types;

// =============================================================================
// SCORING WEIGHTS
// =============================================================================

/// Score added per matched immediacy term when crisis content is present
pub const IMMEDIACY_TERM_WEIGHT: u32 = 3;

/// Score added per matched crisis pattern outside the immediacy category
pub const CRISIS_TERM_WEIGHT: u32 = 2;

/// Score added per matched localized crisis term (flat, no immediacy tier)
pub const LOCALIZED_TERM_WEIGHT: u32 = 2;

/// Score added per matched risk-factor pattern
pub const RISK_FACTOR_WEIGHT: u32 = 1;

// =============================================================================
// CLASSIFICATION THRESHOLDS
// =============================================================================

/// Crisis score at or above which a message classifies as CRISIS
pub const CRISIS_SCORE_THRESHOLD: u32 = 4;

/// Crisis score at or above which a message classifies as HIGH
pub const HIGH_SCORE_THRESHOLD: u32 = 2;

/// Negative-word count above which the sentiment path classifies HIGH
pub const NEGATIVE_HIGH_COUNT: usize = 3;

/// Negative-word count above which the sentiment path classifies MEDIUM
pub const NEGATIVE_MEDIUM_COUNT: usize = 1;

// =============================================================================
// CONFIDENCE CURVE
// =============================================================================
// Per tier: confidence = min(cap, base + step * evidence)

/// Crisis tier confidence base
pub const CRISIS_CONFIDENCE_BASE: f64 = 0.7;
/// Crisis tier confidence step per score point
pub const CRISIS_CONFIDENCE_STEP: f64 = 0.05;
/// Crisis tier confidence cap
pub const CRISIS_CONFIDENCE_CAP: f64 = 0.95;

/// High tier confidence base
pub const HIGH_CONFIDENCE_BASE: f64 = 0.5;
/// High tier confidence step per score point
pub const HIGH_CONFIDENCE_STEP: f64 = 0.1;
/// High tier confidence cap
pub const HIGH_CONFIDENCE_CAP: f64 = 0.85;

/// Sentiment-path confidence base
pub const SENTIMENT_CONFIDENCE_BASE: f64 = 0.4;
/// Sentiment-path confidence step per matched word
pub const SENTIMENT_CONFIDENCE_STEP: f64 = 0.1;
/// Sentiment-path confidence cap
pub const SENTIMENT_CONFIDENCE_CAP: f64 = 0.8;

/// Confidence assigned when no lexicon entry matches at all
pub const NEUTRAL_CONFIDENCE: f64 = 0.3;

// =============================================================================
// LOCALES
// =============================================================================

/// Language code every unknown-locale lookup falls back to
pub const DEFAULT_LANGUAGE: &str = "en";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
