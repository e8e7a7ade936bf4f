//! Keyword-based risk classification
//!
//! A snippet is lowercased once and checked against two keyword sets in a
//! fixed order. The first tier with any matching keyword wins; nothing is
//! scored or accumulated, so a snippet that hits both a High and a Medium
//! keyword is High.

pub mod keywords;

pub use keywords::{KeywordSet, DEFAULT_HIGH_KEYWORDS, DEFAULT_MEDIUM_KEYWORDS};

use crate::core::RiskTier;
use serde::Serialize;
use std::sync::LazyLock;

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Classify a snippet with the compiled-in keyword sets.
pub fn classify(snippet: &str) -> RiskTier {
    DEFAULT_CLASSIFIER.classify(snippet)
}

/// Outcome of a classification along with the keyword that decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tier: RiskTier,
    /// `None` for Low, which is the fallthrough tier
    pub matched_keyword: Option<String>,
}

/// Stateless classifier over an immutable pair of keyword sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    high: KeywordSet,
    medium: KeywordSet,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            high: KeywordSet::default_high(),
            medium: KeywordSet::default_medium(),
        }
    }
}

impl Classifier {
    pub fn new(high: KeywordSet, medium: KeywordSet) -> Self {
        Self { high, medium }
    }

    pub fn classify(&self, snippet: &str) -> RiskTier {
        self.explain(snippet).tier
    }

    /// Classify and report which keyword fired.
    pub fn explain(&self, snippet: &str) -> Classification {
        let folded = snippet.to_lowercase();

        if let Some(keyword) = self.high.first_match(&folded) {
            return Classification {
                tier: RiskTier::High,
                matched_keyword: Some(keyword.to_string()),
            };
        }

        if let Some(keyword) = self.medium.first_match(&folded) {
            return Classification {
                tier: RiskTier::Medium,
                matched_keyword: Some(keyword.to_string()),
            };
        }

        Classification {
            tier: RiskTier::Low,
            matched_keyword: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn literal_cases() {
        assert_eq!(classify("employee plans to quit and leak data"), RiskTier::High);
        assert_eq!(
            classify("used a personal drive to transfer files"),
            RiskTier::Medium
        );
        assert_eq!(classify("had lunch with the team"), RiskTier::Low);
    }

    #[test]
    fn empty_and_plain_text_default_to_low() {
        assert_eq!(classify(""), RiskTier::Low);
        assert_eq!(classify("just a normal note"), RiskTier::Low);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("Steal the file"), classify("STEAL THE FILE"));
        assert_eq!(classify("STEAL THE FILE"), RiskTier::High);
        assert_eq!(classify("Plugged in a USB stick"), RiskTier::Medium);
    }

    #[test]
    fn high_wins_over_medium() {
        assert_eq!(classify("download the confidential file"), RiskTier::High);
        let result = Classifier::default().explain("download the confidential file");
        assert_eq!(result.matched_keyword.as_deref(), Some("confidential"));
    }

    #[test]
    fn multi_word_keywords_need_the_literal_phrase() {
        assert_eq!(classify("sent my Credit Card number"), RiskTier::High);
        assert_eq!(classify("crediting cards to accounts"), RiskTier::Low);
    }

    #[test]
    fn substring_false_positive_is_preserved() {
        assert_eq!(classify("grabbing a ssnack"), RiskTier::High);
    }

    #[test]
    fn low_has_no_matched_keyword() {
        let result = Classifier::default().explain("quarterly review");
        assert_eq!(result.tier, RiskTier::Low);
        assert_eq!(result.matched_keyword, None);
    }

    #[test]
    fn custom_keyword_sets_replace_defaults() {
        let classifier = Classifier::new(
            KeywordSet::new(["wire transfer"]).unwrap(),
            KeywordSet::new(["Dropbox"]).unwrap(),
        );
        assert_eq!(classifier.classify("set up a WIRE TRANSFER"), RiskTier::High);
        assert_eq!(classifier.classify("uploaded to dropbox"), RiskTier::Medium);
        assert_eq!(classifier.classify("going to leak it"), RiskTier::Low);
    }

    #[test]
    fn unicode_and_punctuation_do_not_panic() {
        assert_eq!(classify("¿Qué? 🚀 ---"), RiskTier::Low);
        assert_eq!(classify("ÉXTERNAL share"), RiskTier::Low);
        assert_eq!(classify("EXTERNAL!!!"), RiskTier::Medium);
    }

    proptest! {
        #[test]
        fn classification_is_total_and_deterministic(snippet in ".{0,200}") {
            let first = classify(&snippet);
            let second = classify(&snippet);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn case_folding_never_changes_tier(snippet in "[a-zA-Z ]{0,80}") {
            prop_assert_eq!(
                classify(&snippet.to_uppercase()),
                classify(&snippet.to_lowercase())
            );
        }

        #[test]
        fn any_high_keyword_forces_high(
            prefix in "[a-z ]{0,20}",
            idx in 0..DEFAULT_HIGH_KEYWORDS.len(),
            suffix in "[a-z ]{0,20}",
        ) {
            let snippet = format!("{prefix}{}{suffix} via usb", DEFAULT_HIGH_KEYWORDS[idx]);
            prop_assert_eq!(classify(&snippet), RiskTier::High);
        }
    }
}
