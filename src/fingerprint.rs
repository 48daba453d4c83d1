//! Style fingerprint extraction.
//!
//! Tokenization is purely lexical: words are whitespace-delimited
//! tokens that keep their punctuation, sentences are whatever sits between
//! runs of `.`, `!` and `?`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Phrase list
// ---------------------------------------------------------------------------

/// Formal transitional phrases counted into `ai_phrase_count`.
pub const AI_PHRASES: &[&str] = &[
    "furthermore",
    "moreover",
    "in addition",
    "consequently",
    "therefore",
    "it is worth noting",
    "it should be noted",
    "in conclusion",
    "the aforementioned",
    "the subsequent",
    "in light of this",
    "to summarize",
    "in essence",
    "ultimately",
    "nevertheless",
    "as previously mentioned",
    "as noted above",
    "needless to say",
    "in any case",
    "in point of fact",
    "it can be argued that",
    "it is evident that",
    "it is clear that",
    "it is important to note",
];

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

// ---------------------------------------------------------------------------
// Tokenizers
// ---------------------------------------------------------------------------

pub(crate) fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Non-empty, trimmed segments between runs of sentence terminators.
pub(crate) fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Non-empty, trimmed blocks separated by a blank line.
pub(crate) fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

pub(crate) fn count_occurrences(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().map(|n| haystack.matches(n).count()).sum()
}

pub(crate) fn count_present(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|n| haystack.contains(*n)).count()
}

// ---------------------------------------------------------------------------
// Numeric helpers
// ---------------------------------------------------------------------------

pub(crate) fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

/// Population standard deviation. The rule thresholds are tuned against
/// this, not against the variance itself.
pub(crate) fn spread(values: &[usize]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|&v| (v as f64 - avg).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// One decimal place, exact ties to even (14.25 -> 14.2, 0.75 -> 0.8).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

// ---------------------------------------------------------------------------
// Fingerprint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleFingerprint {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    /// Percentage (0-100) of case-folded words that are distinct.
    pub vocabulary_diversity: f64,
    pub ai_phrase_count: usize,
    /// Percentage of distinct words that occur more than twice.
    pub repetition_ratio: f64,
    /// Same value as `vocabulary_diversity`.
    pub unique_word_ratio: f64,
}

impl StyleFingerprint {
    /// Returns `None` for empty or whitespace-only text.
    pub fn extract(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }

        let tokens = words(text);
        let word_count = tokens.len();

        let sentence_lengths: Vec<usize> = sentences(text)
            .iter()
            .map(|s| s.split_whitespace().count())
            .collect();

        let word_lengths: Vec<usize> = tokens.iter().map(|w| w.chars().count()).collect();

        let lower = text.to_lowercase();
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for w in lower.split_whitespace() {
            *frequency.entry(w).or_insert(0) += 1;
        }
        let unique = frequency.len();
        let repeated = frequency.values().filter(|&&c| c > 2).count();

        let diversity = round1(percent(unique, word_count));

        Some(Self {
            word_count,
            sentence_count: sentence_lengths.len(),
            avg_word_length: round1(mean(&word_lengths)),
            avg_sentence_length: round1(mean(&sentence_lengths)),
            vocabulary_diversity: diversity,
            ai_phrase_count: count_present(&lower, AI_PHRASES),
            repetition_ratio: round1(percent(repeated, unique)),
            unique_word_ratio: diversity,
        })
    }
}
