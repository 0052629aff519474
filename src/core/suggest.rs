//! Token-based substring filter behind the gallery's suggestion box.
//!
//! A query is lowercased and split on whitespace. A candidate matches when
//! its lowercased form contains every token, so each added word can only
//! narrow the result. Candidate order is preserved; there is no ranking.
//!
//! Filtering is a linear scan (`candidates x tokens x length`). That is fine
//! for the gallery's lists of a few hundred names; a larger corpus would want
//! a precomputed token index here.

/// Placeholder shown when a non-empty query matches nothing.
pub const NO_RESULTS: &str = "No results found";

/// A raw query as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    raw_text: String,
}

impl SuggestionQuery {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Lowercased, whitespace-separated tokens, empty tokens dropped.
    pub fn tokens(&self) -> Vec<String> {
        self.raw_text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }

    /// Whether `candidate` contains every token (case-insensitive).
    pub fn matches(&self, candidate: &str) -> bool {
        matches_tokens(&candidate.to_lowercase(), &self.tokens())
    }
}

/// Outcome of filtering a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterResult<'a> {
    /// The query had no tokens; the popup should close.
    Empty,
    /// Matching candidates in their original order (never empty).
    Matches(Vec<&'a str>),
    /// Tokens were given but nothing matched.
    NoResults,
}

impl<'a> FilterResult<'a> {
    /// The entries to display. [`FilterResult::NoResults`] renders as the
    /// single [`NO_RESULTS`] placeholder.
    pub fn items(&self) -> Vec<&'a str> {
        match self {
            Self::Empty => Vec::new(),
            Self::Matches(found) => found.clone(),
            Self::NoResults => vec![NO_RESULTS],
        }
    }

    /// Whether the suggestion popup should be shown.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Number of real matches (the placeholder does not count).
    pub fn match_count(&self) -> usize {
        match self {
            Self::Matches(found) => found.len(),
            Self::Empty | Self::NoResults => 0,
        }
    }
}

/// Filters `candidates` by `query`.
///
/// # Examples
///
/// ```
/// use gallery::core::suggest::filter;
///
/// let cats = ["Maine Coon", "Manx", "Persian"];
/// assert_eq!(filter("ma", &cats).items(), vec!["Maine Coon", "Manx"]);
/// assert_eq!(filter("ma coon", &cats).items(), vec!["Maine Coon"]);
/// assert!(filter("   ", &cats).items().is_empty());
/// ```
pub fn filter<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> FilterResult<'a> {
    let tokens = SuggestionQuery::new(query).tokens();
    if tokens.is_empty() {
        return FilterResult::Empty;
    }

    let found: Vec<&'a str> = candidates
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|candidate| matches_tokens(&candidate.to_lowercase(), &tokens))
        .collect();

    if found.is_empty() {
        FilterResult::NoResults
    } else {
        FilterResult::Matches(found)
    }
}

fn matches_tokens(candidate_lowercase: &str, tokens: &[String]) -> bool {
    tokens
        .iter()
        .all(|token| candidate_lowercase.contains(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATS: [&str; 3] = ["Maine Coon", "Manx", "Persian"];

    #[test]
    fn test_tokens() {
        let q = SuggestionQuery::new("  Maine\tCOON  ");
        assert_eq!(q.tokens(), vec!["maine", "coon"]);
        assert!(SuggestionQuery::new(" \t\n").tokens().is_empty());
        assert!(SuggestionQuery::new("").tokens().is_empty());
    }

    #[test]
    fn test_blank_query_is_empty() {
        assert_eq!(filter("", &CATS), FilterResult::Empty);
        assert_eq!(filter("   ", &CATS), FilterResult::Empty);
        assert!(!filter("", &CATS).is_open());
    }

    #[test]
    fn test_no_candidates_gives_sentinel() {
        let none: [&str; 0] = [];
        let result = filter("abc", &none);
        assert_eq!(result, FilterResult::NoResults);
        assert_eq!(result.items(), vec![NO_RESULTS]);
        assert!(result.is_open());
        assert_eq!(result.match_count(), 0);
    }

    #[test]
    fn test_prefix_match_preserves_order() {
        assert_eq!(filter("ma", &CATS).items(), vec!["Maine Coon", "Manx"]);
    }

    #[test]
    fn test_tokens_are_anded() {
        assert_eq!(filter("ma coon", &CATS).items(), vec!["Maine Coon"]);
        assert_eq!(filter("manx coon", &CATS), FilterResult::NoResults);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(filter("MAINE", &CATS), filter("maine", &CATS));
        assert_eq!(filter("pErSiAn", &CATS).items(), vec!["Persian"]);
    }

    #[test]
    fn test_substring_not_word_boundary() {
        // "sia" is inside "Persian"
        assert_eq!(filter("sia", &CATS).items(), vec!["Persian"]);
    }

    #[test]
    fn test_owned_candidates() {
        let owned: Vec<String> = CATS.iter().map(|s| (*s).to_string()).collect();
        assert_eq!(filter("an", &owned).items(), vec!["Manx", "Persian"]);
    }

    #[test]
    fn test_query_matches() {
        let q = SuggestionQuery::new("coon MAINE");
        assert!(q.matches("Maine Coon"));
        assert!(!q.matches("Manx"));
        assert_eq!(q.raw_text(), "coon MAINE");
    }
}
