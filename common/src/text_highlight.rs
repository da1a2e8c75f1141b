//! Resolves an extracted field's source text to the rendered text runs of a page.
//!
//! The source text reported by the extraction agent is often a paraphrase, or a
//! span that the PDF renderer split into several runs. Resolution therefore
//! falls back through three tiers, stopping at the first one that matches
//! anything:
//!
//! 1. a single run contains the whole query,
//! 2. runs contain any significant (3+ character) word of the query,
//! 3. the query is found in the space-joined text of the whole page and is
//!    mapped back to the runs it overlaps.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Attribute carried by every annotated run in rendered page html.
pub const RUN_INDEX_ATTRIBUTE: &str = "data-run-index";

const MIN_SIGNIFICANT_WORD_LEN: usize = 3;

/// A fragment of rendered text with its own DOM identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: String,
    pub order_index: u32,
    pub page_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightQuery {
    pub source_text: String,
    pub page_number: u32,
}

impl HighlightQuery {
    pub fn new(source_text: impl Into<String>, page_number: u32) -> Self {
        Self { source_text: source_text.into(), page_number }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    ExactSubstring,
    SignificantWord,
    WindowedConcatenation,
}

impl MatchTier {
    /// Only the exact tier pinpoints the source text; the others are best effort.
    pub fn is_approximate(&self) -> bool {
        !matches!(self, MatchTier::ExactSubstring)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightResult {
    pub matched_run_indices: BTreeSet<u32>,
    pub tier: Option<MatchTier>,
}

impl HighlightResult {
    pub fn is_empty(&self) -> bool {
        self.matched_run_indices.is_empty()
    }

    pub fn is_approximate(&self) -> bool {
        self.tier.map(|tier| tier.is_approximate()).unwrap_or(false)
    }
}

static STRIPPED_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9a-z_\s.,@$%()\-]").unwrap());
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lowercases, drops punctuation other than `. , @ $ % ( ) -`, collapses
/// whitespace and trims.
///
/// Characters are dropped before whitespace is collapsed, otherwise removing a
/// symbol between two spaces would leave a double space behind and the result
/// would change on a second pass.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = STRIPPED_CHARACTERS.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRun {
    pub order_index: u32,
    pub text: String,
}

type MatchStrategy = fn(&str, &[NormalizedRun]) -> BTreeSet<u32>;

const MATCH_STRATEGIES: [(MatchTier, MatchStrategy); 3] = [
    (MatchTier::ExactSubstring, match_exact_substring),
    (MatchTier::SignificantWord, match_significant_words),
    (MatchTier::WindowedConcatenation, match_windowed_concatenation),
];

/// Finds the runs of the query's page that should be marked as matching.
///
/// Runs on other pages are ignored. The result never depends on earlier
/// resolutions; callers replace their marks with it wholesale.
pub fn resolve(query: &HighlightQuery, runs: &[TextRun]) -> HighlightResult {
    let normalized_query = normalize_text(&query.source_text);
    if normalized_query.is_empty() {
        return HighlightResult::default();
    }

    let page_runs = runs
        .iter()
        .filter(|run| run.page_number == query.page_number)
        .map(|run| NormalizedRun { order_index: run.order_index, text: normalize_text(&run.content) })
        .collect::<Vec<_>>();
    if page_runs.is_empty() {
        return HighlightResult::default();
    }

    for (tier, strategy) in MATCH_STRATEGIES {
        let matched_run_indices = strategy(&normalized_query, &page_runs);
        if !matched_run_indices.is_empty() {
            return HighlightResult { matched_run_indices, tier: Some(tier) };
        }
    }
    HighlightResult::default()
}

/// Convenience for callers holding an optional query (no field selected).
pub fn resolve_optional(query: Option<&HighlightQuery>, runs: &[TextRun]) -> HighlightResult {
    match query {
        Some(query) => resolve(query, runs),
        None => HighlightResult::default(),
    }
}

pub fn match_exact_substring(query: &str, runs: &[NormalizedRun]) -> BTreeSet<u32> {
    runs.iter()
        .filter(|run| run.text.contains(query))
        .map(|run| run.order_index)
        .collect()
}

pub fn match_significant_words(query: &str, runs: &[NormalizedRun]) -> BTreeSet<u32> {
    let significant_words = query
        .split(' ')
        .filter(|word| word.len() >= MIN_SIGNIFICANT_WORD_LEN)
        .collect::<Vec<_>>();
    if significant_words.is_empty() {
        return BTreeSet::new();
    }
    runs.iter()
        .filter(|run| significant_words.iter().any(|word| run.text.contains(word)))
        .map(|run| run.order_index)
        .collect()
}

pub fn match_windowed_concatenation(query: &str, runs: &[NormalizedRun]) -> BTreeSet<u32> {
    let page_text = runs.iter().map(|run| run.text.as_str()).collect::<Vec<_>>().join(" ");
    let Some(match_start) = page_text.find(query) else {
        return BTreeSet::new();
    };
    let match_end = match_start + query.len();

    run_offsets(runs)
        .into_iter()
        .zip(runs)
        .filter(|((run_start, run_end), _)| *run_end > match_start && *run_start < match_end)
        .map(|(_, run)| run.order_index)
        .collect()
}

/// Byte range of each run inside the space-joined page text. Every run owns
/// the separator that follows it.
fn run_offsets(runs: &[NormalizedRun]) -> Vec<(usize, usize)> {
    let mut cursor = 0;
    runs.iter()
        .map(|run| {
            let start = cursor;
            cursor += run.text.len() + 1;
            (start, cursor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_runs(contents: &[&str]) -> Vec<TextRun> {
        contents
            .iter()
            .enumerate()
            .map(|(i, content)| TextRun { content: content.to_string(), order_index: i as u32, page_number: 1 })
            .collect()
    }

    fn normalized(contents: &[&str]) -> Vec<NormalizedRun> {
        contents
            .iter()
            .enumerate()
            .map(|(i, content)| NormalizedRun { order_index: i as u32, text: normalize_text(content) })
            .collect()
    }

    fn indices(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn normalize_lowercases_strips_and_collapses() {
        assert_eq!(normalize_text("  Total\tAmount:\n\n $1,234.56 "), "total amount $1,234.56");
        assert_eq!(normalize_text("Jane ~ Doe"), "jane doe");
        assert_eq!(normalize_text("email@example.com (50%)"), "email@example.com (50%)");
        assert_eq!(normalize_text("Café—Nº 7"), "cafn 7");
    }

    #[test]
    fn normalize_is_idempotent() {
        for text in ["Jane ~ Doe", "  A\u{a0}B  ", "INV-2024-001", "x # y # z", "", "!!!", "Total:  $5"] {
            let once = normalize_text(text);
            assert_eq!(normalize_text(&once), once, "input {text:?}");
        }
    }

    #[test]
    fn exact_tier_matches_single_run() {
        let runs = page_runs(&["Invoice Number:", "INV-2024-001"]);
        let result = resolve(&HighlightQuery::new("INV-2024-001", 1), &runs);
        assert_eq!(result.matched_run_indices, indices(&[1]));
        assert_eq!(result.tier, Some(MatchTier::ExactSubstring));
        assert!(!result.is_approximate());
    }

    #[test]
    fn exact_tier_marks_every_containing_run() {
        let runs = page_runs(&["Net 30", "terms: net 30 days", "other"]);
        let result = resolve(&HighlightQuery::new("NET 30", 1), &runs);
        assert_eq!(result.matched_run_indices, indices(&[0, 1]));
        assert_eq!(result.tier, Some(MatchTier::ExactSubstring));
    }

    #[test]
    fn exact_tier_excludes_later_tiers() {
        // "amount" alone would pull in run 1 under the word tier.
        let runs = page_runs(&["Total Amount", "Amount Paid"]);
        let result = resolve(&HighlightQuery::new("total amount", 1), &runs);
        assert_eq!(result.matched_run_indices, indices(&[0]));
    }

    #[test]
    fn word_tier_matches_runs_with_significant_words() {
        let runs = page_runs(&["Total Amount", "Due:", "$1,234.56"]);
        let result = resolve(&HighlightQuery::new("total amount due $1234.56", 1), &runs);
        assert_eq!(result.matched_run_indices, indices(&[0, 1]));
        assert_eq!(result.tier, Some(MatchTier::SignificantWord));
        assert!(result.is_approximate());
    }

    #[test]
    fn word_tier_skipped_without_significant_words() {
        let runs = normalized(&["ab", "cd"]);
        assert!(match_significant_words("ab cd", &runs).is_empty());
    }

    #[test]
    fn split_name_and_date_marks_all_fragments() {
        let runs = page_runs(&["Jane ", "Doe", " signed on", " 2024-01-15"]);
        let result = resolve(&HighlightQuery::new("jane doe signed on 2024-01-15", 1), &runs);
        assert_eq!(result.matched_run_indices, indices(&[0, 1, 2, 3]));
        // every fragment already holds a significant word, so the window is never needed
        assert_eq!(result.tier, Some(MatchTier::SignificantWord));
    }

    #[test]
    fn windowed_tier_maps_match_back_to_runs() {
        let runs = normalized(&["Jane ", "Doe", " signed on", " 2024-01-15"]);
        let matched = match_windowed_concatenation("jane doe signed on 2024-01-15", &runs);
        assert_eq!(matched, indices(&[0, 1, 2, 3]));
    }

    #[test]
    fn windowed_tier_only_marks_overlapping_runs() {
        let runs = normalized(&["header", "po", "no", "12", "footer"]);
        let matched = match_windowed_concatenation("po no 12", &runs);
        assert_eq!(matched, indices(&[1, 2, 3]));
    }

    #[test]
    fn windowed_tier_uses_first_occurrence_only() {
        let runs = normalized(&["a", "b", "x", "a", "b"]);
        assert_eq!(match_windowed_concatenation("a b", &runs), indices(&[0, 1]));
    }

    #[test]
    fn windowed_tier_is_reached_when_words_are_short() {
        // every word is under three characters, so only the page text can match
        let runs = page_runs(&["to", "be", "or", "no"]);
        let result = resolve(&HighlightQuery::new("be or", 1), &runs);
        assert_eq!(result.matched_run_indices, indices(&[1, 2]));
        assert_eq!(result.tier, Some(MatchTier::WindowedConcatenation));
    }

    #[test]
    fn windowed_tier_handles_empty_runs_in_offsets() {
        let runs = normalized(&["po", "!!!", "no"]);
        // the page text is "po  no", so "po no" cannot be found
        assert!(match_windowed_concatenation("po no", &runs).is_empty());
        assert_eq!(match_windowed_concatenation("no", &runs), indices(&[2]));
    }

    #[test]
    fn whitespace_query_is_empty() {
        let runs = page_runs(&["anything", "at all"]);
        assert!(resolve(&HighlightQuery::new("   ", 1), &runs).is_empty());
        assert!(resolve(&HighlightQuery::new("", 1), &runs).is_empty());
        assert!(resolve(&HighlightQuery::new("~~~", 1), &runs).is_empty());
    }

    #[test]
    fn no_runs_is_empty() {
        assert!(resolve(&HighlightQuery::new("invoice", 1), &[]).is_empty());
    }

    #[test]
    fn runs_on_other_pages_are_ignored() {
        let mut runs = page_runs(&["Invoice"]);
        runs.push(TextRun { content: "Invoice".to_string(), order_index: 0, page_number: 2 });
        let result = resolve(&HighlightQuery::new("invoice", 2), &runs);
        assert_eq!(result.matched_run_indices, indices(&[0]));
        assert!(resolve(&HighlightQuery::new("invoice", 3), &runs).is_empty());
    }

    #[test]
    fn unmatched_query_is_empty_result() {
        let runs = page_runs(&["alpha", "beta"]);
        let result = resolve(&HighlightQuery::new("gamma delta", 1), &runs);
        assert_eq!(result, HighlightResult::default());
        assert!(!result.is_approximate());
    }

    #[test]
    fn results_are_valid_indices() {
        let runs = page_runs(&["one two", "three", "four five six", "seven"]);
        for query in ["one", "two three", "five six seven", "nothing here", "e"] {
            let result = resolve(&HighlightQuery::new(query, 1), &runs);
            assert!(result.matched_run_indices.iter().all(|i| (*i as usize) < runs.len()));
        }
    }

    #[test]
    fn resolution_is_repeatable() {
        let runs = page_runs(&["Total Amount", "Due:", "$1,234.56"]);
        let first = resolve(&HighlightQuery::new("due", 1), &runs);
        let _other = resolve(&HighlightQuery::new("total", 1), &runs);
        assert_eq!(resolve(&HighlightQuery::new("due", 1), &runs), first);
    }

    #[test]
    fn missing_query_resolves_to_nothing() {
        let runs = page_runs(&["Invoice"]);
        assert!(resolve_optional(None, &runs).is_empty());
        assert!(!resolve_optional(Some(&HighlightQuery::new("invoice", 1)), &runs).is_empty());
    }
}
