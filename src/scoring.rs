use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::fingerprint::{
    count_occurrences, count_present, paragraphs, round1, sentences, spread, StyleFingerprint,
};

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    pub min_text_chars: usize,
    phrase_density_scale: f64,
    phrase_density_cap: f64,
    passive_scale: f64,
    passive_cap: f64,
    uniformity_min_sentences: usize,
    uniformity_tiers: &'static [(f64, f64)],
    formal_step: f64,
    formal_cap: f64,
    repetition_min_words: usize,
    repetition_top_n: usize,
    repetition_min_word_len: usize,
    repetition_ratio_threshold: f64,
    repetition_scale: f64,
    repetition_cap: f64,
    contraction_min_words: usize,
    contraction_penalty: f64,
    pronoun_absent_min_words: usize,
    pronoun_absent_penalty: f64,
    pronoun_sparse_max: usize,
    pronoun_sparse_min_words: usize,
    pronoun_sparse_penalty: f64,
    casual_min_words: usize,
    casual_penalty: f64,
    emotional_min_words: usize,
    emotional_penalty: f64,
    paragraph_min_count: usize,
    paragraph_spread_threshold: f64,
    paragraph_penalty: f64,
    transition_min_count: usize,
    transition_step: f64,
    transition_cap: f64,
    vocabulary_threshold: f64,
    vocabulary_min_words: usize,
    vocabulary_penalty: f64,
    ai_score_cap: f64,
    drift_phrase_weight: f64,
    drift_opener_min_sentences: usize,
    drift_opener_weight: f64,
    drift_scale: f64,
    drift_max: f64,
    confidence_floor_base: f64,
    confidence_words_per_point: f64,
    confidence_base_max: f64,
    confidence_extreme_high: f64,
    confidence_extreme_low: f64,
    confidence_extreme_penalty: f64,
    confidence_edge_high: f64,
    confidence_edge_low: f64,
    confidence_edge_penalty: f64,
    confidence_min: f64,
    confidence_max: f64,
    band_moderate_min: f64,
    band_balanced_min: f64,
    band_strong_min: f64,
    band_outstanding_min: f64,
    pub suggestion_phrase_min: usize,
    pub suggestion_passive_min: usize,
    pub suggestion_voice_max_score: f64,
    pub suggestion_short_words: usize,
    pub suggestion_long_words: usize,
    pub suggestion_cap: usize,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    min_text_chars: 10,
    phrase_density_scale: 2.5,
    phrase_density_cap: 50.0,
    passive_scale: 0.8,
    passive_cap: 40.0,
    uniformity_min_sentences: 3,
    uniformity_tiers: &[(2.0, 30.0), (4.0, 20.0), (8.0, 10.0)],
    formal_step: 7.0,
    formal_cap: 35.0,
    repetition_min_words: 21,
    repetition_top_n: 5,
    repetition_min_word_len: 4,
    repetition_ratio_threshold: 3.0,
    repetition_scale: 1.5,
    repetition_cap: 25.0,
    contraction_min_words: 31,
    contraction_penalty: 22.0,
    pronoun_absent_min_words: 51,
    pronoun_absent_penalty: 18.0,
    pronoun_sparse_max: 2,
    pronoun_sparse_min_words: 101,
    pronoun_sparse_penalty: 12.0,
    casual_min_words: 41,
    casual_penalty: 15.0,
    emotional_min_words: 61,
    emotional_penalty: 14.0,
    paragraph_min_count: 3,
    paragraph_spread_threshold: 30.0,
    paragraph_penalty: 10.0,
    transition_min_count: 4,
    transition_step: 3.0,
    transition_cap: 15.0,
    vocabulary_threshold: 80.0,
    vocabulary_min_words: 101,
    vocabulary_penalty: 8.0,
    ai_score_cap: 100.0,
    drift_phrase_weight: 2.0,
    drift_opener_min_sentences: 3,
    drift_opener_weight: 10.0,
    drift_scale: 1.5,
    drift_max: 100.0,
    confidence_floor_base: 40.0,
    confidence_words_per_point: 10.0,
    confidence_base_max: 95.0,
    confidence_extreme_high: 90.0,
    confidence_extreme_low: 10.0,
    confidence_extreme_penalty: 15.0,
    confidence_edge_high: 80.0,
    confidence_edge_low: 20.0,
    confidence_edge_penalty: 10.0,
    confidence_min: 20.0,
    confidence_max: 99.0,
    band_moderate_min: 30.0,
    band_balanced_min: 50.0,
    band_strong_min: 70.0,
    band_outstanding_min: 85.0,
    suggestion_phrase_min: 5,
    suggestion_passive_min: 4,
    suggestion_voice_max_score: 75.0,
    suggestion_short_words: 50,
    suggestion_long_words: 2000,
    suggestion_cap: 6,
};

// ---------------------------------------------------------------------------
// Fixed lists
// ---------------------------------------------------------------------------

const PASSIVE_MARKERS: &[&str] = &[
    " was ",
    " were ",
    " is being ",
    " are being ",
    " be ",
    " been ",
];

/// Narrower passive set used by style drift and suggestions.
pub(crate) const DRIFT_PASSIVE_MARKERS: &[&str] = &[" was ", " were ", " is being ", " are being"];

const FORMAL_PHRASES: &[&str] = &[
    "it is worth noting",
    "it should be noted",
    "in conclusion",
    "to summarize",
    "in essence",
    "in light of the fact",
    "furthermore",
    "moreover",
    "nevertheless",
    "however",
    "it is evident",
    "it is clear",
    "it is important to note",
    "the aforementioned",
    "as previously mentioned",
    "as noted above",
    "in any case",
    "in point of fact",
    "needless to say",
    "as a result",
    "consequently",
    "therefore",
    "thus",
    // Listed twice: a closing summary weighs double.
    "in conclusion",
    "ultimately",
    "essentially",
    "notably",
];

const CONTRACTIONS: &[&str] = &[
    "don't", "can't", "won't", "isn't", "doesn't", "aren't", "haven't", "hadn't", "wasn't",
    "weren't", "i'm", "you're", "it's", "we're", "they're", "i've", "you've", "we've",
    "they've", "i'll", "you'll", "we'll", "they'll",
];

const PERSONAL_PRONOUNS: &[&str] = &[
    " i ", " i'", " me ", " my ", " mine ", " we ", " us ", " our ", " ours ",
];

const CASUAL_MARKERS: &[&str] = &[
    "like", "just", "really", "actually", "literally", "honestly", "you know", "i think",
    "i feel", "kinda", "sorta", "lol", "btw", "imo", "tbh", "ngl",
];

const EMOTIONAL_PUNCTUATION: &[&str] = &["!", "?", "..."];

const TRANSITIONS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "additionally",
    "conversely",
    "consequently",
    "subsequently",
    "ultimately",
    "notably",
];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "is", "was",
        "are", "be", "it", "that", "this", "with", "by", "as", "from",
    ]
    .into_iter()
    .collect()
});

// ---------------------------------------------------------------------------
// Well-known content
// ---------------------------------------------------------------------------

/// Categories of text that are recognised as published or protected
/// material rather than scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownContent {
    Anthem,
    LiteraryQuotation,
    RightsMarker,
    LicenseBoilerplate,
}

impl KnownContent {
    pub fn as_str(self) -> &'static str {
        match self {
            KnownContent::Anthem => "anthem",
            KnownContent::LiteraryQuotation => "literary_quotation",
            KnownContent::RightsMarker => "rights_marker",
            KnownContent::LicenseBoilerplate => "license_boilerplate",
        }
    }
}

static KNOWN_CONTENT_PATTERNS: Lazy<Vec<(KnownContent, Regex)>> = Lazy::new(|| {
    vec![
        (
            KnownContent::Anthem,
            Regex::new(r"(?i)\b(national anthem|pledge of allegiance|star-spangled banner)\b")
                .unwrap(),
        ),
        (
            KnownContent::LiteraryQuotation,
            Regex::new(r"(?i)\b(to be or not to be|hamlet|shakespeare)\b").unwrap(),
        ),
        (
            KnownContent::RightsMarker,
            Regex::new(r"(?i)copyright|\x{00A9}|\x{00AE}|\btrademark\b").unwrap(),
        ),
        (
            KnownContent::LicenseBoilerplate,
            Regex::new(r"(?i)\b(all rights reserved|licensed under)\b").unwrap(),
        ),
    ]
});

pub(crate) fn detect_known_content(text: &str) -> Option<KnownContent> {
    KNOWN_CONTENT_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(kind, _)| *kind)
}

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    HighAi,
    ModerateAi,
    Balanced,
    Strong,
    Outstanding,
}

impl Band {
    pub fn for_score(originality: f64) -> Self {
        if originality < HP.band_moderate_min {
            Band::HighAi
        } else if originality < HP.band_balanced_min {
            Band::ModerateAi
        } else if originality < HP.band_strong_min {
            Band::Balanced
        } else if originality < HP.band_outstanding_min {
            Band::Strong
        } else {
            Band::Outstanding
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Band::HighAi => "high_ai",
            Band::ModerateAi => "moderate_ai",
            Band::Balanced => "balanced",
            Band::Strong => "strong",
            Band::Outstanding => "outstanding",
        }
    }
}

// ---------------------------------------------------------------------------
// Originality signals
// ---------------------------------------------------------------------------

/// Capped AI-likeness points contributed by a single signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalContribution {
    pub signal: &'static str,
    pub points: f64,
}

/// Per-signal account of how an originality score was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub signals: Vec<SignalContribution>,
    pub ai_score: f64,
    pub originality_score: f64,
}

/// Inputs shared by every signal, computed once per document.
struct Scan<'a> {
    text: &'a str,
    lower: &'a str,
    words: Vec<&'a str>,
    sentences: Vec<&'a str>,
    fingerprint: &'a StyleFingerprint,
}

impl Scan<'_> {
    fn word_count(&self) -> usize {
        self.words.len()
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn signal_phrase_density(scan: &Scan) -> f64 {
    let density = ratio(scan.fingerprint.ai_phrase_count, scan.word_count()) * 100.0;
    (density * HP.phrase_density_scale).min(HP.phrase_density_cap)
}

fn signal_passive_voice(scan: &Scan) -> f64 {
    let passive = count_occurrences(scan.lower, PASSIVE_MARKERS);
    let per_sentence = ratio(passive, scan.sentences.len());
    (per_sentence * HP.passive_scale).min(HP.passive_cap)
}

fn signal_sentence_uniformity(scan: &Scan) -> f64 {
    let lengths: Vec<usize> = scan
        .sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    if lengths.len() < HP.uniformity_min_sentences {
        return 0.0;
    }
    let spread = spread(&lengths);
    HP.uniformity_tiers
        .iter()
        .find(|(below, _)| spread < *below)
        .map_or(0.0, |(_, points)| *points)
}

fn signal_formal_phrases(scan: &Scan) -> f64 {
    let present = count_present(scan.lower, FORMAL_PHRASES);
    (present as f64 * HP.formal_step).min(HP.formal_cap)
}

fn signal_content_repetition(scan: &Scan) -> f64 {
    let total = scan.word_count();
    if total < HP.repetition_min_words {
        return 0.0;
    }

    // First-appearance order keeps ties stable between runs.
    let mut order: Vec<&str> = Vec::new();
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for &w in &scan.words {
        let count = frequency.entry(w).or_insert(0);
        if *count == 0 {
            order.push(w);
        }
        *count += 1;
    }

    let mut content: Vec<(&str, usize)> = order
        .into_iter()
        .filter(|w| !STOPWORDS.contains(*w) && w.chars().count() >= HP.repetition_min_word_len)
        .map(|w| (w, frequency[w]))
        .collect();
    content.sort_by(|a, b| b.1.cmp(&a.1));

    let top: f64 = content
        .iter()
        .take(HP.repetition_top_n)
        .map(|&(_, count)| ratio(count, total) * 100.0)
        .filter(|&pct| pct > HP.repetition_ratio_threshold)
        .sum();
    (top * HP.repetition_scale).min(HP.repetition_cap)
}

fn signal_missing_contractions(scan: &Scan) -> f64 {
    // A second tier (< 1 contraction past 50 words) is fully shadowed by
    // this one, so only the first is checked.
    if count_occurrences(scan.lower, CONTRACTIONS) == 0
        && scan.word_count() >= HP.contraction_min_words
    {
        HP.contraction_penalty
    } else {
        0.0
    }
}

fn signal_missing_pronouns(scan: &Scan) -> f64 {
    let pronouns = count_occurrences(scan.lower, PERSONAL_PRONOUNS);
    let wc = scan.word_count();
    if pronouns == 0 && wc >= HP.pronoun_absent_min_words {
        HP.pronoun_absent_penalty
    } else if pronouns < HP.pronoun_sparse_max && wc >= HP.pronoun_sparse_min_words {
        HP.pronoun_sparse_penalty
    } else {
        0.0
    }
}

fn signal_missing_casual_markers(scan: &Scan) -> f64 {
    if count_present(scan.lower, CASUAL_MARKERS) == 0 && scan.word_count() >= HP.casual_min_words
    {
        HP.casual_penalty
    } else {
        0.0
    }
}

fn signal_missing_emotional_punctuation(scan: &Scan) -> f64 {
    if count_occurrences(scan.text, EMOTIONAL_PUNCTUATION) == 0
        && scan.word_count() >= HP.emotional_min_words
    {
        HP.emotional_penalty
    } else {
        0.0
    }
}

fn signal_paragraph_uniformity(scan: &Scan) -> f64 {
    let lengths: Vec<usize> = paragraphs(scan.text)
        .iter()
        .map(|p| p.split_whitespace().count())
        .collect();
    if lengths.len() >= HP.paragraph_min_count && spread(&lengths) < HP.paragraph_spread_threshold
    {
        HP.paragraph_penalty
    } else {
        0.0
    }
}

fn signal_transition_overuse(scan: &Scan) -> f64 {
    let transitions = count_occurrences(scan.lower, TRANSITIONS);
    if transitions >= HP.transition_min_count {
        (transitions as f64 * HP.transition_step).min(HP.transition_cap)
    } else {
        0.0
    }
}

/// Diversity is stored as a percentage, so the threshold is one too.
pub(crate) fn signal_vocabulary_excess(fingerprint: &StyleFingerprint) -> f64 {
    if fingerprint.vocabulary_diversity > HP.vocabulary_threshold
        && fingerprint.word_count >= HP.vocabulary_min_words
    {
        HP.vocabulary_penalty
    } else {
        0.0
    }
}

fn signal_vocabulary(scan: &Scan) -> f64 {
    signal_vocabulary_excess(scan.fingerprint)
}

type Signal = fn(&Scan) -> f64;

static SIGNALS: &[(&str, Signal)] = &[
    ("ai_phrase_density", signal_phrase_density),
    ("passive_voice", signal_passive_voice),
    ("sentence_uniformity", signal_sentence_uniformity),
    ("formal_phrases", signal_formal_phrases),
    ("content_repetition", signal_content_repetition),
    ("missing_contractions", signal_missing_contractions),
    ("missing_pronouns", signal_missing_pronouns),
    ("missing_casual_markers", signal_missing_casual_markers),
    ("missing_emotional_punctuation", signal_missing_emotional_punctuation),
    ("paragraph_uniformity", signal_paragraph_uniformity),
    ("transition_overuse", signal_transition_overuse),
    ("vocabulary_excess", signal_vocabulary),
];

/// Runs every signal and converts the capped total into an originality
/// score, rounded to one decimal.
pub(crate) fn calculate_originality(text: &str, fingerprint: &StyleFingerprint) -> ScoreBreakdown {
    let lower = text.to_lowercase();
    let scan = Scan {
        text,
        lower: &lower,
        words: lower.split_whitespace().collect(),
        sentences: sentences(text),
        fingerprint,
    };

    let signals: Vec<SignalContribution> = SIGNALS
        .iter()
        .map(|&(signal, run)| SignalContribution {
            signal,
            points: run(&scan),
        })
        .collect();

    let ai_score: f64 = signals.iter().map(|s| s.points).sum();
    let originality_score = round1(100.0 - ai_score.min(HP.ai_score_cap));

    ScoreBreakdown {
        signals,
        ai_score,
        originality_score,
    }
}

// ---------------------------------------------------------------------------
// Secondary metrics
// ---------------------------------------------------------------------------

/// AI-likeness from phrase use, passive constructions and repeated
/// sentence openers. Independent of the originality score.
pub(crate) fn calculate_style_drift(text: &str, fingerprint: &StyleFingerprint) -> f64 {
    let lower = text.to_lowercase();
    let mut drift = fingerprint.ai_phrase_count as f64 * HP.drift_phrase_weight;
    drift += count_occurrences(&lower, DRIFT_PASSIVE_MARKERS) as f64;

    let openers: Vec<&str> = sentences(&lower)
        .into_iter()
        .filter_map(|s| s.split_whitespace().next())
        .collect();
    if openers.len() >= HP.drift_opener_min_sentences {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &w in &openers {
            *counts.entry(w).or_insert(0) += 1;
        }
        let most = counts.values().copied().max().unwrap_or(0);
        drift += ratio(most, openers.len()) * HP.drift_opener_weight;
    }

    (drift * HP.drift_scale).clamp(0.0, HP.drift_max)
}

/// More words raise confidence; scores near either extreme lower it.
pub(crate) fn calculate_confidence(word_count: usize, originality: f64) -> f64 {
    let mut confidence = (HP.confidence_floor_base
        + word_count as f64 / HP.confidence_words_per_point)
        .min(HP.confidence_base_max);

    if originality > HP.confidence_extreme_high || originality < HP.confidence_extreme_low {
        confidence -= HP.confidence_extreme_penalty;
    } else if originality > HP.confidence_edge_high || originality < HP.confidence_edge_low {
        confidence -= HP.confidence_edge_penalty;
    }

    confidence.clamp(HP.confidence_min, HP.confidence_max)
}
