use originality::{analyze, analyze_outcome, explain, try_analyze, Band, BatchSummary};

const AI_PARAGRAPH: &str = "Furthermore, it is worth noting that in light of contemporary technological \
    advancement, artificial intelligence has become increasingly prevalent in modern society. \
    Consequently, the implications of this technological evolution are manifold and multifaceted. \
    Moreover, as previously mentioned, it should be noted that the aforementioned developments \
    warrant careful consideration. In conclusion, therefore, it is evident that the subsequent \
    era shall present novel challenges and opportunities. Nevertheless, it is important to \
    highlight that the cumulative effects of these technological innovations remain uncertain.";

const CASUAL_PARAGRAPH: &str = "So like, I was thinking about how technology has changed everything, right? \
    I mean, honestly, when I was younger, we didn't have smartphones and stuff. Now I literally \
    can't imagine living without my phone! It's crazy how fast things change. Don't you think? \
    Anyway, I really believe that AI is going to be important in the future, but I'm not sure \
    if it'll be all good, you know?";

// Line-broken copies of the two reference texts, exactly as they were
// captured (trailing space before each break).
const AI_REFERENCE: &str = concat!(
    "Furthermore, it is worth noting that in light of contemporary technological advancement, \n",
    "artificial intelligence has become increasingly prevalent in modern society. Consequently, \n",
    "the implications of this technological evolution are manifold and multifaceted. Moreover, \n",
    "as previously mentioned, it should be noted that the aforementioned developments warrant \n",
    "careful consideration. In conclusion, therefore, it is evident that the subsequent era \n",
    "shall present novel challenges and opportunities. Nevertheless, it is important to highlight \n",
    "that the cumulative effects of these technological innovations remain uncertain."
);

const HUMAN_REFERENCE: &str = concat!(
    "So like, I was thinking about how technology has changed everything, right? \n",
    "I mean, honestly, when I was younger, we didn't have smartphones and stuff. \n",
    "Now I literally can't imagine living without my phone! It's crazy how fast things change. \n",
    "Don't you think? Anyway, I really believe that AI is going to be important in the future."
);

const FORMAL_REPORT: &str = "Furthermore, the proposed framework offers measurable benefits for the organization. \
    Moreover, the framework improves coordination across every operational division. \
    Consequently, the framework reduces overhead for each affected department today. \
    Therefore, the framework deserves serious consideration from the executive board. \
    In conclusion, the framework represents a sound investment for the coming fiscal year. \
    Nevertheless, the framework requires careful oversight from senior management.";

const CHATTY_NOTE: &str = "Honestly, I don't know why we keep doing this. I'm tired of it, and my \
    friends think it's silly too! We just sat there last night, really confused about what \
    happened. Isn't that weird? I guess we'll figure it out eventually.";

fn corpus() -> Vec<String> {
    vec![
        String::new(),
        "   ".to_string(),
        "Hi there.".to_string(),
        "abcdefghij".to_string(),
        AI_PARAGRAPH.to_string(),
        CASUAL_PARAGRAPH.to_string(),
        AI_REFERENCE.to_string(),
        HUMAN_REFERENCE.to_string(),
        FORMAL_REPORT.to_string(),
        CHATTY_NOTE.to_string(),
        "Short opening paragraph with a few words.\n\nAnother paragraph, about the same size \
         here.\n\nA third paragraph closes out the small note."
            .to_string(),
        "Caf\u{e9} na\u{ef}ve r\u{e9}sum\u{e9} \u{2014} \u{6771}\u{4eac}! \u{1f389} We went there \
         and it's honestly amazing."
            .to_string(),
        "!!!???...".repeat(20),
        "The river bends past the old mill and I like it. ".repeat(250),
        "This document is Copyright 2024 by the authors.".to_string(),
    ]
}

#[test]
fn ai_paragraph_scores_low() {
    let result = analyze(AI_PARAGRAPH);
    assert!(
        result.originality_score < 40.0,
        "AI paragraph should score < 40, got {}",
        result.originality_score
    );
    assert_eq!(result.originality_score, 0.0);
    assert_eq!(result.ai_similarity, 100.0);
    assert_eq!(result.style_drift, 39.0);
    assert_eq!(result.confidence, 32.9);
    assert_eq!(result.band(), Band::HighAi);
}

#[test]
fn casual_paragraph_scores_high() {
    let result = analyze(CASUAL_PARAGRAPH);
    assert!(
        result.originality_score > 65.0,
        "Casual paragraph should score > 65, got {}",
        result.originality_score
    );
    assert_eq!(result.originality_score, 89.5);
    assert_eq!(result.ai_similarity, 10.5);
    assert_eq!(result.confidence, 36.8);
}

#[test]
fn ai_reference_scores_below_forty() {
    let result = analyze(AI_REFERENCE);
    assert!(
        result.originality_score < 40.0,
        "AI reference should score < 40, got {}",
        result.originality_score
    );
    assert_eq!(result.originality_score, 0.0);
    assert_eq!(result.style_drift, 39.0);
    assert_eq!(result.confidence, 32.9);
    let fingerprint = result.style_fingerprint.as_ref().unwrap();
    assert_eq!(fingerprint.word_count, 79);
    assert_eq!(fingerprint.sentence_count, 5);
    assert_eq!(fingerprint.ai_phrase_count, 12);
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.contains("Reduce formal transitions")));
}

#[test]
fn human_reference_scores_above_sixty_five() {
    let result = analyze(HUMAN_REFERENCE);
    assert!(
        result.originality_score > 65.0,
        "Human reference should score > 65, got {}",
        result.originality_score
    );
    assert_eq!(result.originality_score, 79.6);
    assert_eq!(result.ai_similarity, 20.4);
    assert_eq!(result.style_drift, 5.5);
    assert_eq!(result.confidence, 45.7);
    assert_eq!(result.band(), Band::Strong);
    assert_eq!(result.style_fingerprint.as_ref().unwrap().word_count, 57);
    assert_eq!(
        result.suggestions,
        vec![
            "⭐ Excellent originality: Very authentic voice detected",
            "💬 Natural conversational flow detected",
            "🎯 Strong personal perspective evident",
        ]
    );
}

#[test]
fn formal_report_scores_below_forty() {
    let result = analyze(FORMAL_REPORT);
    let fingerprint = result.style_fingerprint.as_ref().unwrap();
    assert!(fingerprint.word_count > 60);
    assert!(fingerprint.ai_phrase_count >= 5);
    assert!(result.originality_score < 40.0);
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.contains("Reduce formal transitions")));
}

#[test]
fn chatty_note_scores_above_sixty() {
    let result = analyze(CHATTY_NOTE);
    assert!(result.style_fingerprint.as_ref().unwrap().word_count > 40);
    assert!(
        result.originality_score > 60.0,
        "Chatty note should score > 60, got {}",
        result.originality_score
    );
}

#[test]
fn short_text_floor() {
    for text in ["", "   ", "Hi there.", "  123456789  ", "\u{1f389}\u{1f389}\u{1f389}"] {
        let result = analyze(text);
        assert_eq!(result.originality_score, 0.0, "input {text:?}");
        assert_eq!(result.ai_similarity, 100.0);
        assert_eq!(result.confidence, 30.0);
        assert_eq!(result.suggestions, vec!["Text too short to analyze properly"]);
        assert_eq!(result.style_fingerprint.unwrap().word_count, 0);
    }
}

#[test]
fn ten_characters_is_enough_to_score() {
    let result = analyze("abcdefghij");
    assert_eq!(result.originality_score, 100.0);
    assert_eq!(result.confidence, 25.1);
}

#[test]
fn copyright_overrides_everything() {
    for text in [
        "This document is Copyright 2024 by the authors.",
        "COPYRIGHT NOTICE: reproduction prohibited.",
        format!("{CASUAL_PARAGRAPH} (c) copyright me").as_str(),
    ] {
        let result = analyze(text);
        assert_eq!(result.originality_score, 5.0);
        assert_eq!(result.ai_similarity, 95.0);
        assert_eq!(result.confidence, 95.0);
        assert!(result.suggestions[0].contains("copyrighted or well-known"));
    }
}

#[test]
fn analysis_is_deterministic() {
    for text in corpus() {
        let first = serde_json::to_string(&analyze(&text)).unwrap();
        let second = serde_json::to_string(&analyze(&text)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn analysis_is_deterministic_across_threads() {
    let expected = serde_json::to_string(&analyze(CASUAL_PARAGRAPH)).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| serde_json::to_string(&analyze(CASUAL_PARAGRAPH)).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn scores_stay_in_range() {
    for text in corpus() {
        let result = analyze(&text);
        assert!((0.0..=100.0).contains(&result.originality_score));
        assert!((0.0..=100.0).contains(&result.ai_similarity));
        assert!((result.originality_score + result.ai_similarity - 100.0).abs() < 0.05);
        assert!((0.0..=100.0).contains(&result.style_drift));
        assert!((20.0..=99.0).contains(&result.confidence));
    }
}

#[test]
fn suggestions_are_capped_and_never_empty() {
    for text in corpus() {
        let result = analyze(&text);
        assert!(!result.suggestions.is_empty());
        assert!(result.suggestions.len() <= 6);
        let mut unique = result.suggestions.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), result.suggestions.len());
    }
}

#[test]
fn long_text_suggests_splitting() {
    let text = "The river bends past the old mill and I like it. ".repeat(250);
    let result = analyze(&text);
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.contains("Consider breaking into")));
}

#[test]
fn corpus_never_falls_back() {
    for text in corpus() {
        let outcome = analyze_outcome(&text);
        assert!(!outcome.is_fallback(), "unexpected fallback for {text:?}");
        assert_eq!(outcome.result(), &try_analyze(&text).unwrap());
    }
}

#[test]
fn explain_reports_signals() {
    let breakdown = explain(AI_PARAGRAPH).unwrap();
    assert_eq!(breakdown.originality_score, 0.0);
    assert!(breakdown.ai_score > 100.0);
    let formal = breakdown
        .signals
        .iter()
        .find(|s| s.signal == "formal_phrases")
        .unwrap();
    assert_eq!(formal.points, 35.0);
    assert!(explain("Hi there.").is_none());
}

#[test]
fn batch_summary_over_results() {
    let results: Vec<_> = [AI_PARAGRAPH, CASUAL_PARAGRAPH].iter().map(|t| analyze(t)).collect();
    let summary = BatchSummary::from_results(&results);
    assert_eq!(summary.documents, 2);
    assert_eq!(summary.lowest_originality, 0.0);
    assert_eq!(summary.highest_originality, 89.5);
    assert_eq!(summary.average_originality, 44.8);
    assert_eq!(summary.band, Band::ModerateAi);
}

#[test]
fn json_output_has_expected_shape() {
    let result = analyze(CASUAL_PARAGRAPH);
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let keys: Vec<&str> = parsed
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for key in [
        "originality_score",
        "ai_similarity",
        "style_drift",
        "confidence",
        "drift_details",
        "suggestions",
        "style_fingerprint",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(keys.len(), 7);

    let drift = parsed["drift_details"].as_object().unwrap();
    for key in [
        "ai_phrase_count",
        "avg_sentence_length",
        "vocabulary_diversity",
        "repetition_ratio",
    ] {
        assert!(drift.contains_key(key), "missing drift_details.{key}");
    }

    let fingerprint = parsed["style_fingerprint"].as_object().unwrap();
    assert_eq!(fingerprint.len(), 6);
    assert_eq!(fingerprint["word_count"], 68);
    assert_eq!(fingerprint["sentence_count"], 6);
    assert_eq!(fingerprint["vocabulary_diversity"], 88.2);
    assert_eq!(fingerprint["unique_word_ratio"], 88.2);
}
