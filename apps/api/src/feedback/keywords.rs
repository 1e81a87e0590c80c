//! Keyword-density fallback for when only raw résumé text is available.
//!
//! Terms are extracted by frequency after stopword removal. Fewer than
//! `KEYWORD_FLOOR` distinct terms means the résumé is too thin to match well.

use std::collections::HashMap;

use crate::feedback::{FeedbackReport, FeedbackStrategy};

/// Minimum distinct non-stopword terms for "good coverage".
pub const KEYWORD_FLOOR: usize = 10;

const TOP_KEYWORDS: usize = 10;

/// Characters kept inside tokens so "c++", "c#" and "node.js" survive.
const TOKEN_INNER_CHARS: &[char] = &['+', '#', '.'];

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "us", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours",
];

/// Result of frequency-based keyword extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordStats {
    pub distinct_terms: usize,
    /// (term, count), by count descending then term ascending.
    pub top_terms: Vec<(String, usize)>,
}

pub fn extract_keywords(text: &str) -> KeywordStats {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }

    let distinct_terms = counts.len();
    let mut terms: Vec<(String, usize)> = counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(TOP_KEYWORDS);

    KeywordStats {
        distinct_terms,
        top_terms: terms,
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || TOKEN_INNER_CHARS.contains(&c)))
        .map(|t| t.trim_matches('.').to_lowercase())
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit() || c == '.'))
        .filter(|t| !STOPWORDS.contains(&t.as_str()))
}

/// Feedback from raw text alone. Blank text short-circuits without extraction.
pub fn keyword_feedback(raw_text: &str) -> FeedbackReport {
    if raw_text.trim().is_empty() {
        return report(
            vec!["Your résumé appears to be empty. Upload a résumé with readable text.".to_string()],
            Vec::new(),
        );
    }

    let stats = extract_keywords(raw_text);
    let keywords: Vec<String> = stats.top_terms.iter().map(|(t, _)| t.clone()).collect();

    let item = if stats.distinct_terms < KEYWORD_FLOOR {
        "Your résumé lacks relevant keywords. Add more role-specific skills and technologies."
            .to_string()
    } else {
        let preview: Vec<&str> = keywords.iter().take(5).map(String::as_str).collect();
        format!(
            "Your résumé has good keyword coverage. Verify that your top terms ({}) are relevant to the roles you target.",
            preview.join(", ")
        )
    };

    report(vec![item], keywords)
}

fn report(items: Vec<String>, keywords: Vec<String>) -> FeedbackReport {
    FeedbackReport {
        strategy: FeedbackStrategy::KeywordDensity,
        summary: None,
        verdict: None,
        items,
        checklist: Vec::new(),
        keywords,
    }
}
