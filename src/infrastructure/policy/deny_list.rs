//! Substring deny-list content policy.

use crate::domain::policy::ContentPolicy;

/// Rejects text containing any term from a configured list.
///
/// Matching is case-insensitive substring containment. Terms are lowercased
/// once at construction.
pub struct DenyListPolicy {
    terms: Vec<String>,
}

impl DenyListPolicy {
    /// Builds a policy from an iterator of terms. Empty terms are discarded.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Self { terms }
    }

    /// Builds a policy from a comma-separated list, the format used by the
    /// `POLICY_DENYLIST` environment variable.
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }
}

impl ContentPolicy for DenyListPolicy {
    fn is_allowed(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        !self.terms.iter().any(|term| lowered.contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_matching_substring() {
        let policy = DenyListPolicy::new(["badword"]);

        assert!(!policy.is_allowed("https://example.com/badword/page"));
        assert!(!policy.is_allowed("my-badword-code"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let policy = DenyListPolicy::new(["BadWord"]);

        assert!(!policy.is_allowed("https://example.com/BADWORD"));
        assert!(!policy.is_allowed("badword"));
    }

    #[test]
    fn test_allows_clean_text() {
        let policy = DenyListPolicy::new(["badword1", "badword2"]);

        assert!(policy.is_allowed("https://example.com/page"));
        assert!(policy.is_allowed("promo"));
    }

    #[test]
    fn test_from_csv_trims_and_skips_empty_terms() {
        let policy = DenyListPolicy::from_csv("badword1, badword2 ,,  ");

        assert!(!policy.is_allowed("xbadword2x"));
        // An empty term would match everything; make sure it was dropped.
        assert!(policy.is_allowed("anything"));
    }
}
