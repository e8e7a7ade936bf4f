use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Trigger words that escalate a snippet straight to High.
pub const DEFAULT_HIGH_KEYWORDS: &[&str] = &[
    "unreleased",
    "quit",
    "steal",
    "confidential",
    "ssn",
    "credit card",
    "hack",
    "leak",
];

/// Trigger words for Medium, checked only when no High keyword matched.
pub const DEFAULT_MEDIUM_KEYWORDS: &[&str] = &[
    "download",
    "personal drive",
    "usb",
    "bypass",
    "external",
];

/// An immutable set of lowercase trigger substrings.
///
/// Matching is raw substring containment against the lowercased snippet, so
/// short keywords also fire inside longer words (`ssn` in `ssnack`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set, lowercasing every keyword.
    ///
    /// Empty or whitespace-only keywords are rejected: the empty string is a
    /// substring of everything and would put every snippet in this tier.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref();
            if keyword.trim().is_empty() {
                return Err(Error::Configuration(
                    "keyword sets may not contain empty keywords".to_string(),
                ));
            }
            let lowered = keyword.to_lowercase();
            if !normalized.contains(&lowered) {
                normalized.push(lowered);
            }
        }
        Ok(Self {
            keywords: normalized,
        })
    }

    pub fn default_high() -> Self {
        Self::from_static(DEFAULT_HIGH_KEYWORDS)
    }

    pub fn default_medium() -> Self {
        Self::from_static(DEFAULT_MEDIUM_KEYWORDS)
    }

    // Compiled-in lists are already lowercase and non-empty.
    fn from_static(words: &[&str]) -> Self {
        Self {
            keywords: words.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// First keyword contained in an already-lowercased snippet.
    pub fn first_match(&self, folded: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|kw| folded.contains(kw.as_str()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl TryFrom<Vec<String>> for KeywordSet {
    type Error = Error;

    fn try_from(value: Vec<String>) -> Result<Self> {
        KeywordSet::new(value)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_lowercased_and_deduplicated() {
        let set = KeywordSet::new(["USB", "usb", "Personal Drive"]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["usb", "personal drive"]);
    }

    #[test]
    fn empty_keyword_is_rejected() {
        assert!(KeywordSet::new(["leak", "  "]).is_err());
        assert!(KeywordSet::new([""]).is_err());
    }

    #[test]
    fn an_empty_set_never_matches() {
        let set = KeywordSet::new(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.first_match("anything at all"), None);
    }

    #[test]
    fn substring_matches_inside_words() {
        let set = KeywordSet::default_high();
        assert_eq!(set.first_match("grab an ssnack"), Some("ssn"));
        assert_eq!(set.first_match("hackathon tonight"), Some("hack"));
    }

    #[test]
    fn defaults_match_published_lists() {
        assert_eq!(KeywordSet::default_high().len(), 8);
        assert_eq!(KeywordSet::default_medium().len(), 5);
    }

    #[test]
    fn deserialization_validates_keywords() {
        assert!(serde_json::from_str::<KeywordSet>(r#"["leak", ""]"#).is_err());
        let set: KeywordSet = serde_json::from_str(r#"["Leak"]"#).unwrap();
        assert_eq!(set.first_match("leak"), Some("leak"));
    }
}
