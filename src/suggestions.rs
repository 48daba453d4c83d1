use std::collections::HashSet;

use crate::fingerprint::{count_occurrences, StyleFingerprint};
use crate::scoring::{Band, DRIFT_PASSIVE_MARKERS, HP};

pub(crate) const TOO_SHORT: &str = "Text too short to analyze properly";
pub(crate) const TRY_AGAIN: &str = "Unable to analyze text, please try again";
const ANALYSIS_COMPLETE: &str = "✅ Text analysis complete - Continue with your natural writing";

pub(crate) const KNOWN_CONTENT: &[&str] = &[
    "⚠️ This appears to be copyrighted or well-known content",
    "📝 Paraphrase in your own words to make it original",
    "📚 Use proper citations for referencing published material",
];

// Advice checks a narrower set of forms than the scorer.
const ADVICE_CONTRACTIONS: &[&str] = &[
    "don't", "can't", "won't", "isn't", "i'm", "you're", "it's", "i've",
];
const ADVICE_PRONOUNS: &[&str] = &["i ", " i ", " me ", " my ", " we "];

fn band_messages(band: Band) -> [&'static str; 3] {
    match band {
        Band::HighAi => [
            "🤖 High AI detection: Too many formal patterns detected",
            "📝 Add personal anecdotes and real experience",
            "💬 Use casual language: contractions, conversational phrases",
        ],
        Band::ModerateAi => [
            "⚠️ Moderate AI patterns: Some formal language detected",
            "✍️ Increase conversational tone and personal voice",
            "💡 Add I/we perspective instead of passive voice",
        ],
        Band::Balanced => [
            "✅ Good originality: Mostly human-generated detected",
            "📚 Continue with your natural writing style",
            "💪 Slightly increase casual tone for even more originality",
        ],
        Band::Strong => [
            "⭐ Excellent originality: Very authentic voice detected",
            "💬 Natural conversational flow detected",
            "🎯 Strong personal perspective evident",
        ],
        Band::Outstanding => [
            "🌟 Outstanding originality: Authentic human voice",
            "✨ Highly personalized and conversational",
            "🏆 Unique writing style and perspective",
        ],
    }
}

fn deduplicate(advice: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in advice {
        if seen.insert(item.clone()) {
            unique.push(item);
        }
    }
    unique
}

/// Band guidance first, then targeted advice, deduplicated and capped.
pub(crate) fn generate_suggestions(
    text: &str,
    originality: f64,
    fingerprint: &StyleFingerprint,
) -> Vec<String> {
    let lower = text.to_lowercase();
    let word_count = fingerprint.word_count;

    let mut advice: Vec<String> = band_messages(Band::for_score(originality))
        .iter()
        .map(|m| m.to_string())
        .collect();

    if fingerprint.ai_phrase_count >= HP.suggestion_phrase_min {
        advice.push(
            "⚠️ Reduce formal transitions (furthermore, moreover, in addition, etc.)".to_string(),
        );
    }

    if count_occurrences(&lower, DRIFT_PASSIVE_MARKERS) >= HP.suggestion_passive_min {
        advice.push("💭 Replace passive voice with active voice for authenticity".to_string());
    }

    let wants_voice = originality < HP.suggestion_voice_max_score;
    if wants_voice && count_occurrences(&lower, ADVICE_CONTRACTIONS) == 0 {
        advice.push("💬 Add contractions (don't, can't, I'm) for natural tone".to_string());
    }
    if wants_voice && count_occurrences(&lower, ADVICE_PRONOUNS) == 0 {
        advice.push("👤 Use first-person perspective (I, me, we)".to_string());
    }

    if word_count < HP.suggestion_short_words {
        advice.push("📏 Expand text with more details and examples".to_string());
    } else if word_count > HP.suggestion_long_words {
        advice.push("✂️ Consider breaking into multiple shorter sections".to_string());
    }

    let mut advice = deduplicate(advice);
    advice.truncate(HP.suggestion_cap);
    if advice.is_empty() {
        advice.push(ANALYSIS_COMPLETE.to_string());
    }
    advice
}
