//! Risk scorer: classifies a single message into a severity tier
//!
//! Matching is case-insensitive substring containment throughout -- no
//! tokenization, no stemming. The categorized crisis table, risk-factor
//! table, and sentiment word lists below are language-independent
//! English; localized crisis terms come from the lexicon store. Two
//! asymmetries are intentional, carried-over classification behavior:
//! localized crisis terms score a flat weight with no immediacy tier,
//! and sentiment words are not localized.

use crate::core::LexiconStore;
use crate::types::{CrisisCategory, RiskAnalysis, RiskFactor, Sentiment, Severity};
use crate::{
    CRISIS_CONFIDENCE_BASE, CRISIS_CONFIDENCE_CAP, CRISIS_CONFIDENCE_STEP, CRISIS_SCORE_THRESHOLD,
    CRISIS_TERM_WEIGHT, HIGH_CONFIDENCE_BASE, HIGH_CONFIDENCE_CAP, HIGH_CONFIDENCE_STEP,
    HIGH_SCORE_THRESHOLD, IMMEDIACY_TERM_WEIGHT, LOCALIZED_TERM_WEIGHT, NEGATIVE_HIGH_COUNT,
    NEGATIVE_MEDIUM_COUNT, NEUTRAL_CONFIDENCE, RISK_FACTOR_WEIGHT, SENTIMENT_CONFIDENCE_BASE,
    SENTIMENT_CONFIDENCE_CAP, SENTIMENT_CONFIDENCE_STEP,
};

// =============================================================================
// Crisis patterns (language-independent)
// =============================================================================
// Immediacy terms are everyday words on their own ("see you today"); they
// only add weight once suicide/self-harm/despair content has matched.

static CRISIS_PATTERNS: &[(CrisisCategory, &[&str])] = &[
    (
        CrisisCategory::Suicide,
        &[
            "suicide",
            "kill myself",
            "end it all",
            "no point living",
            "better off dead",
            "hurt myself",
            "don't want to live",
            "want to die",
        ],
    ),
    (
        CrisisCategory::SelfHarm,
        &[
            "cut myself",
            "hurt myself",
            "self harm",
            "self-harm",
            "want to hurt",
            "pain will stop",
        ],
    ),
    (
        CrisisCategory::Despair,
        &[
            "no hope left",
            "nothing matters",
            "can't go on",
            "give up",
            "no way out",
            "trapped",
        ],
    ),
    (
        CrisisCategory::Immediacy,
        &[
            "tonight",
            "today",
            "right now",
            "immediately",
            "can't wait",
            "this minute",
        ],
    ),
];

// =============================================================================
// Risk-factor patterns
// =============================================================================

static RISK_FACTOR_PATTERNS: &[(RiskFactor, &[&str])] = &[
    (
        RiskFactor::Isolation,
        &["alone", "lonely", "no friends", "nobody cares", "abandoned"],
    ),
    (
        RiskFactor::Substance,
        &["drinking", "drugs", "pills", "alcohol", "drunk"],
    ),
    (
        RiskFactor::Trauma,
        &["abused", "trauma", "ptsd", "flashbacks", "nightmares"],
    ),
    (
        RiskFactor::Loss,
        &["lost someone", "death", "died", "funeral", "grief"],
    ),
    (
        RiskFactor::Financial,
        &["broke", "homeless", "unemployed", "debt", "money problems"],
    ),
    (
        RiskFactor::Relationship,
        &["breakup", "divorce", "cheated", "left me", "rejected"],
    ),
    (
        RiskFactor::Academic,
        &["failed", "expelled", "grades", "exams", "exam stress", "college pressure"],
    ),
];

// =============================================================================
// Sentiment words (English only)
// =============================================================================

static NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "depressed",
    "anxious",
    "stressed",
    "worried",
    "overwhelmed",
    "tired",
    "exhausted",
    "hopeless",
    "worthless",
];

static POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "happy",
    "better",
    "improving",
    "hopeful",
    "excited",
    "grateful",
    "peaceful",
];

/// Risk scorer over an injected lexicon store
#[derive(Debug, Default)]
pub struct RiskScorer;

impl RiskScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Score a message and classify its severity tier.
    ///
    /// Pure and total: identical input yields identical output, nothing
    /// matching is itself a valid (neutral, low-confidence) result, and
    /// no input can make this fail.
    pub fn score(&self, text: &str, language: &str, lexicons: &LexiconStore) -> RiskAnalysis {
        let text = text.to_lowercase();
        if text.trim().is_empty() {
            return RiskAnalysis::neutral();
        }

        let mut crisis_score: u32 = 0;
        let mut triggers: Vec<String> = Vec::new();
        let mut risk_factors: Vec<RiskFactor> = Vec::new();
        let mut suicide_hit = false;

        // Base crisis scan: suicide, self-harm, despair
        for (category, patterns) in CRISIS_PATTERNS {
            if *category == CrisisCategory::Immediacy {
                continue;
            }
            for pattern in *patterns {
                if text.contains(pattern) {
                    crisis_score += CRISIS_TERM_WEIGHT;
                    triggers.push((*pattern).to_string());
                    if *category == CrisisCategory::Suicide {
                        suicide_hit = true;
                    }
                }
            }
        }

        // Localized crisis scan: flat weight, no immediacy tier
        for (category, terms) in lexicons.get(language).crisis_terms {
            for term in *terms {
                if text.contains(term) {
                    crisis_score += LOCALIZED_TERM_WEIGHT;
                    triggers.push((*term).to_string());
                    if *category == CrisisCategory::Suicide {
                        suicide_hit = true;
                    }
                }
            }
        }

        // Immediacy amplifies matched crisis content
        if !triggers.is_empty() {
            for (category, patterns) in CRISIS_PATTERNS {
                if *category != CrisisCategory::Immediacy {
                    continue;
                }
                for pattern in *patterns {
                    if text.contains(pattern) {
                        crisis_score += IMMEDIACY_TERM_WEIGHT;
                        triggers.push((*pattern).to_string());
                    }
                }
            }
        }

        // Risk-factor scan: categories deduplicated, every hit scores
        for (factor, patterns) in RISK_FACTOR_PATTERNS {
            for pattern in *patterns {
                if text.contains(pattern) {
                    crisis_score += RISK_FACTOR_WEIGHT;
                    if !risk_factors.contains(factor) {
                        risk_factors.push(*factor);
                    }
                }
            }
        }

        if crisis_score >= CRISIS_SCORE_THRESHOLD || suicide_hit {
            return RiskAnalysis {
                severity: Severity::Crisis,
                sentiment: Sentiment::Negative,
                confidence: (CRISIS_CONFIDENCE_BASE + CRISIS_CONFIDENCE_STEP * crisis_score as f64)
                    .min(CRISIS_CONFIDENCE_CAP),
                triggers,
                risk_factors,
            };
        }

        if crisis_score >= HIGH_SCORE_THRESHOLD {
            return RiskAnalysis {
                severity: Severity::High,
                sentiment: Sentiment::Negative,
                confidence: (HIGH_CONFIDENCE_BASE + HIGH_CONFIDENCE_STEP * crisis_score as f64)
                    .min(HIGH_CONFIDENCE_CAP),
                triggers,
                risk_factors,
            };
        }

        // Sentiment fallback over the fixed English word lists
        let neg_count = NEGATIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
        let pos_count = POSITIVE_WORDS.iter().filter(|w| text.contains(*w)).count();

        if neg_count > pos_count {
            // A matched risk factor lifts a single negative word from
            // low to medium: negative mood plus life-context evidence
            // warrants a check-in.
            let severity = if neg_count > NEGATIVE_HIGH_COUNT {
                Severity::High
            } else if neg_count > NEGATIVE_MEDIUM_COUNT || !risk_factors.is_empty() {
                Severity::Medium
            } else {
                Severity::Low
            };
            RiskAnalysis {
                severity,
                sentiment: Sentiment::Negative,
                confidence: (SENTIMENT_CONFIDENCE_BASE
                    + SENTIMENT_CONFIDENCE_STEP * neg_count as f64)
                    .min(SENTIMENT_CONFIDENCE_CAP),
                triggers,
                risk_factors,
            }
        } else if pos_count > 0 {
            RiskAnalysis {
                severity: Severity::Low,
                sentiment: Sentiment::Positive,
                confidence: (SENTIMENT_CONFIDENCE_BASE
                    + SENTIMENT_CONFIDENCE_STEP * pos_count as f64)
                    .min(SENTIMENT_CONFIDENCE_CAP),
                triggers,
                risk_factors,
            }
        } else {
            RiskAnalysis {
                severity: Severity::Low,
                sentiment: Sentiment::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
                triggers,
                risk_factors,
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str, language: &str) -> RiskAnalysis {
        RiskScorer::new().score(text, language, LexiconStore::global())
    }

    #[test]
    fn test_empty_input_is_neutral() {
        let analysis = score("", "en");
        assert_eq!(analysis.severity, Severity::Low);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert!((analysis.confidence - NEUTRAL_CONFIDENCE).abs() < 1e-10);
        assert!(analysis.triggers.is_empty());

        let analysis = score("   \t  ", "en");
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_determinism() {
        let text = "I feel so tired and worthless, nobody cares about me";
        let a = score(text, "en");
        let b = score(text, "en");
        assert_eq!(a.severity, b.severity);
        assert!((a.confidence - b.confidence).abs() < 1e-10);
        assert_eq!(a.triggers, b.triggers);
        assert_eq!(a.risk_factors, b.risk_factors);
    }

    #[test]
    fn test_suicide_term_always_classifies_crisis() {
        for text in [
            "I want to kill myself",
            "sometimes I think about suicide",
            "everyone would be better off dead without me, but classes are fine",
            "I don't want to live",
        ] {
            let analysis = score(text, "en");
            assert_eq!(analysis.severity, Severity::Crisis, "input: {}", text);
            assert_eq!(analysis.sentiment, Sentiment::Negative);
        }
    }

    #[test]
    fn test_immediacy_amplifies_crisis_content() {
        let analysis = score("I want to kill myself tonight", "en");
        assert_eq!(analysis.severity, Severity::Crisis);
        assert!(analysis.triggers.iter().any(|t| t == "kill myself"));
        assert!(analysis.triggers.iter().any(|t| t == "tonight"));
        assert!((analysis.confidence - 0.95).abs() < 1e-10);
    }

    #[test]
    fn test_immediacy_alone_is_not_a_trigger() {
        let analysis = score("I'm doing great today, thank you!", "en");
        assert_eq!(analysis.severity, Severity::Low);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert!(analysis.triggers.is_empty(), "got {:?}", analysis.triggers);
    }

    #[test]
    fn test_accumulated_despair_reaches_crisis() {
        // Two despair matches reach the crisis score threshold
        let analysis = score("nothing matters anymore and I feel trapped", "en");
        assert_eq!(analysis.severity, Severity::Crisis);
        assert!(analysis.triggers.len() >= 2);
    }

    #[test]
    fn test_single_despair_term_classifies_high() {
        let analysis = score("I just want to give up", "en");
        assert_eq!(analysis.severity, Severity::High);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_localized_suicide_terms_classify_crisis() {
        let analysis = score("estoy muy triste y no quiero vivir", "es");
        assert_eq!(analysis.severity, Severity::Crisis);
        assert!(analysis.triggers.iter().any(|t| t == "no quiero vivir"));
    }

    #[test]
    fn test_localized_terms_ignored_for_other_languages() {
        // The Spanish terms are not scanned for an English session
        let analysis = score("no quiero vivir", "en");
        assert_ne!(analysis.severity, Severity::Crisis);
    }

    #[test]
    fn test_stress_with_academic_factor_is_medium() {
        let analysis = score("I'm feeling a bit stressed about exams", "en");
        assert_eq!(analysis.severity, Severity::Medium);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert!(analysis.risk_factors.contains(&RiskFactor::Academic));
    }

    #[test]
    fn test_single_negative_word_alone_is_low() {
        let analysis = score("I'm a little sad", "en");
        assert_eq!(analysis.severity, Severity::Low);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_many_negative_words_classify_high() {
        let analysis = score("I'm sad, anxious, exhausted and feel worthless", "en");
        assert_eq!(analysis.severity, Severity::High);
        assert!((analysis.confidence - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_risk_factor_categories_deduplicated() {
        let analysis = score("I'm alone and lonely, nobody cares", "en");
        let isolation_count = analysis
            .risk_factors
            .iter()
            .filter(|f| **f == RiskFactor::Isolation)
            .count();
        assert_eq!(isolation_count, 1);
    }

    #[test]
    fn test_multiple_risk_factors_reach_high() {
        // Three factor matches pass the high score threshold
        let analysis = score("I'm drinking alone since the breakup", "en");
        assert_eq!(analysis.severity, Severity::High);
        assert!(analysis.risk_factors.contains(&RiskFactor::Substance));
        assert!(analysis.risk_factors.contains(&RiskFactor::Isolation));
        assert!(analysis.risk_factors.contains(&RiskFactor::Relationship));
    }

    #[test]
    fn test_confidence_bounds_hold_for_a_corpus() {
        let inputs = [
            "",
            "hello",
            "I want to kill myself tonight right now immediately",
            "suicide suicide suicide",
            "sad depressed anxious stressed worried overwhelmed tired exhausted hopeless worthless",
            "good great happy better improving hopeful excited grateful peaceful",
            "nothing matters, no way out, trapped, can't go on, give up",
            "estoy muy triste y no quiero vivir",
        ];
        for (text, lang) in inputs.into_iter().zip(["en"; 8]) {
            let analysis = score(text, lang);
            assert!(
                (0.0..=0.95).contains(&analysis.confidence),
                "confidence {} out of bounds for {:?}",
                analysis.confidence,
                text
            );
        }
    }

    #[test]
    fn test_confidence_grows_with_evidence() {
        let one = score("I'm sad", "en");
        let two = score("I'm sad and worried", "en");
        assert!(two.confidence > one.confidence);
    }

    #[test]
    fn test_unknown_language_scores_like_english() {
        let text = "I feel hopeless and alone";
        let unknown = score(text, "no-such-lang");
        let english = score(text, "en");
        assert_eq!(unknown.severity, english.severity);
        assert_eq!(unknown.triggers, english.triggers);
        assert!((unknown.confidence - english.confidence).abs() < 1e-10);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let analysis = score("I WANT TO KILL MYSELF", "en");
        assert_eq!(analysis.severity, Severity::Crisis);
    }
}
