//! Heuristic originality scoring for prose.
//!
//! [`analyze`] turns a block of text into an [`AnalysisResult`]: an
//! originality score (100 reads as human-written, 0 as formulaic or
//! machine-generated), its complement, a style-drift indicator, a confidence
//! value and a short list of suggestions. Scoring is purely lexical: word and
//! sentence counts, fixed phrase lists, punctuation and length spread. The
//! same input always produces the same output.

mod batch;
mod error;
mod fingerprint;
mod scoring;
mod suggestions;

use std::any::Any;
use std::panic;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

pub use batch::BatchSummary;
pub use error::AnalysisError;
pub use fingerprint::{StyleFingerprint, AI_PHRASES};
pub use scoring::{Band, KnownContent, ScoreBreakdown, SignalContribution};

use fingerprint::round1;
use scoring::{
    calculate_confidence, calculate_originality, calculate_style_drift, detect_known_content, HP,
};
use suggestions::generate_suggestions;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Fingerprint fields that explain the style-drift score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DriftDetails {
    pub ai_phrase_count: usize,
    pub avg_sentence_length: f64,
    pub vocabulary_diversity: f64,
    pub repetition_ratio: f64,
}

impl From<&StyleFingerprint> for DriftDetails {
    fn from(fp: &StyleFingerprint) -> Self {
        Self {
            ai_phrase_count: fp.ai_phrase_count,
            avg_sentence_length: fp.avg_sentence_length,
            vocabulary_diversity: fp.vocabulary_diversity,
            repetition_ratio: fp.repetition_ratio,
        }
    }
}

/// The fingerprint as reported to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FingerprintReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub vocabulary_diversity: f64,
    pub avg_sentence_length: f64,
    pub ai_phrase_count: usize,
    pub unique_word_ratio: f64,
}

impl From<&StyleFingerprint> for FingerprintReport {
    fn from(fp: &StyleFingerprint) -> Self {
        Self {
            word_count: fp.word_count,
            sentence_count: fp.sentence_count,
            vocabulary_diversity: fp.vocabulary_diversity,
            avg_sentence_length: fp.avg_sentence_length,
            ai_phrase_count: fp.ai_phrase_count,
            unique_word_ratio: fp.unique_word_ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub originality_score: f64,
    pub ai_similarity: f64,
    pub style_drift: f64,
    pub confidence: f64,
    /// Serialized as `{}` when absent.
    #[serde(serialize_with = "empty_map_if_none")]
    pub drift_details: Option<DriftDetails>,
    pub suggestions: Vec<String>,
    /// Serialized as `{}` when absent.
    #[serde(serialize_with = "empty_map_if_none")]
    pub style_fingerprint: Option<FingerprintReport>,
}

fn empty_map_if_none<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

impl AnalysisResult {
    fn too_short() -> Self {
        Self {
            originality_score: 0.0,
            ai_similarity: 100.0,
            style_drift: 0.0,
            confidence: 30.0,
            drift_details: Some(DriftDetails::default()),
            suggestions: vec![suggestions::TOO_SHORT.to_string()],
            style_fingerprint: Some(FingerprintReport::default()),
        }
    }

    fn known_content() -> Self {
        Self {
            originality_score: 5.0,
            ai_similarity: 95.0,
            style_drift: 10.0,
            confidence: 95.0,
            drift_details: Some(DriftDetails::default()),
            suggestions: suggestions::KNOWN_CONTENT
                .iter()
                .map(|s| s.to_string())
                .collect(),
            style_fingerprint: None,
        }
    }

    /// Neutral result returned in place of a failed analysis.
    pub fn fallback() -> Self {
        Self {
            originality_score: 50.0,
            ai_similarity: 50.0,
            style_drift: 25.0,
            confidence: 60.0,
            drift_details: None,
            suggestions: vec![suggestions::TRY_AGAIN.to_string()],
            style_fingerprint: None,
        }
    }

    pub fn band(&self) -> Band {
        Band::for_score(self.originality_score)
    }
}

/// How an analysis concluded. Both variants carry a complete result.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Scored(AnalysisResult),
    Fallback {
        result: AnalysisResult,
        error: AnalysisError,
    },
}

impl Outcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            Outcome::Scored(result) | Outcome::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            Outcome::Scored(result) | Outcome::Fallback { result, .. } => result,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            Outcome::Scored(_) => None,
            Outcome::Fallback { error, .. } => Some(error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_too_short(text: &str) -> bool {
    text.trim().chars().count() < HP.min_text_chars
}

fn finite(metric: &'static str, value: f64) -> Result<f64, AnalysisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalysisError::NonFinite { metric })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Scores `text`, reporting broken invariants as errors.
///
/// Short text and recognised published material are not errors; they
/// produce their own fixed results.
pub fn try_analyze(text: &str) -> Result<AnalysisResult, AnalysisError> {
    if is_too_short(text) {
        debug!(chars = text.trim().chars().count(), "text below minimum length");
        return Ok(AnalysisResult::too_short());
    }

    if let Some(kind) = detect_known_content(&text.to_lowercase()) {
        debug!(kind = kind.as_str(), "known content override");
        return Ok(AnalysisResult::known_content());
    }

    let fingerprint = StyleFingerprint::extract(text).unwrap_or_default();
    let breakdown = calculate_originality(text, &fingerprint);

    let originality = finite("originality_score", breakdown.originality_score)?;
    if !(0.0..=100.0).contains(&originality) {
        return Err(AnalysisError::OutOfRange {
            metric: "originality_score",
            value: originality,
        });
    }
    let style_drift = finite("style_drift", calculate_style_drift(text, &fingerprint))?;
    let confidence = finite(
        "confidence",
        calculate_confidence(fingerprint.word_count, originality),
    )?;

    debug!(
        word_count = fingerprint.word_count,
        ai_score = breakdown.ai_score,
        originality,
        "scored text"
    );

    Ok(AnalysisResult {
        originality_score: originality,
        ai_similarity: round1(100.0 - originality),
        style_drift: round1(style_drift),
        confidence: round1(confidence),
        drift_details: Some(DriftDetails::from(&fingerprint)),
        suggestions: generate_suggestions(text, originality, &fingerprint),
        style_fingerprint: Some(FingerprintReport::from(&fingerprint)),
    })
}

/// Scores `text`, substituting the neutral fallback for any failure,
/// including a panic inside the pipeline.
pub fn analyze_outcome(text: &str) -> Outcome {
    let attempt = panic::catch_unwind(|| try_analyze(text)).unwrap_or_else(|payload| {
        Err(AnalysisError::Panicked(panic_message(payload.as_ref())))
    });

    match attempt {
        Ok(result) => Outcome::Scored(result),
        Err(error) => {
            warn!(%error, "analysis failed, returning neutral result");
            Outcome::Fallback {
                result: AnalysisResult::fallback(),
                error,
            }
        }
    }
}

/// Scores `text`. Never fails; see [`analyze_outcome`] to tell a fallback
/// apart from a normal score.
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_outcome(text).into_result()
}

/// Per-signal contributions behind the originality score, or `None` when
/// the text is too short or recognised as published material.
pub fn explain(text: &str) -> Option<ScoreBreakdown> {
    if is_too_short(text) || detect_known_content(&text.to_lowercase()).is_some() {
        return None;
    }
    let fingerprint = StyleFingerprint::extract(text)?;
    let mut breakdown = calculate_originality(text, &fingerprint);
    for signal in &mut breakdown.signals {
        signal.points = round1(signal.points);
    }
    breakdown.ai_score = round1(breakdown.ai_score);
    Some(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_serializes_empty_diagnostics() {
        let json = serde_json::to_value(AnalysisResult::fallback()).unwrap();
        assert_eq!(json["originality_score"], 50.0);
        assert_eq!(json["ai_similarity"], 50.0);
        assert_eq!(json["style_drift"], 25.0);
        assert_eq!(json["confidence"], 60.0);
        assert_eq!(json["drift_details"], serde_json::json!({}));
        assert_eq!(json["style_fingerprint"], serde_json::json!({}));
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn outcome_accessors() {
        let fallback = Outcome::Fallback {
            result: AnalysisResult::fallback(),
            error: AnalysisError::NonFinite { metric: "confidence" },
        };
        assert!(fallback.is_fallback());
        assert_eq!(fallback.result().originality_score, 50.0);
        assert_eq!(
            fallback.error().map(ToString::to_string).as_deref(),
            Some("metric `confidence` is not a finite number")
        );

        let scored = analyze_outcome("A plain sentence that is long enough to score.");
        assert!(!scored.is_fallback());
        assert!(scored.error().is_none());
    }

    #[test]
    fn panic_payloads_become_messages() {
        let caught = panic::catch_unwind(|| panic!("boom {}", 7)).unwrap_err();
        assert_eq!(panic_message(caught.as_ref()), "boom 7");
        let caught = panic::catch_unwind(|| panic!("static")).unwrap_err();
        assert_eq!(panic_message(caught.as_ref()), "static");
    }

    #[test]
    fn explain_matches_analysis() {
        let text = "Moreover, the results were reviewed by the board. \
                    Therefore, the plan was approved without changes.";
        let breakdown = explain(text).unwrap();
        assert_eq!(breakdown.originality_score, analyze(text).originality_score);
        assert!(explain("short").is_none());
        assert!(explain("All rights reserved by the publisher.").is_none());
    }

    #[test]
    fn known_content_result_shape() {
        let result = analyze("Licensed under the Apache License, Version 2.0.");
        assert_eq!(result.originality_score, 5.0);
        assert_eq!(result.style_drift, 10.0);
        assert_eq!(result.suggestions.len(), 3);
        assert!(result.style_fingerprint.is_none());
        assert_eq!(result.drift_details, Some(DriftDetails::default()));
    }
}
