use faq_core::faq::FaqEntry;
use faq_core::selection::config::DEFAULT_FALLBACK_TEXT;
use faq_core::selection::{
    AnswerSelector, KeywordOverlapScorer, Scorer, SelectorConfig, SelectorConfigError,
    ThresholdBasis, Utterance,
};
use faq_core::types::{FallbackReason, ScoreDetails, SelectionOutcome};

fn entry(id: &str, answer: &str, keywords: &[&str], priority: u32) -> FaqEntry {
    FaqEntry::new(id, format!("question for {id}"), answer)
        .with_keywords(keywords.iter().copied())
        .with_priority(priority)
}

/// Returns a fixed relevance and no priority term.
struct FixedScorer(f64);

impl Scorer for FixedScorer {
    fn score(&self, _entry: &FaqEntry, _utterance: &Utterance) -> ScoreDetails {
        ScoreDetails {
            relevance: self.0,
            ..ScoreDetails::default()
        }
    }
}

#[test]
fn invariant_empty_candidates_return_fallback_exactly() {
    let selection = AnswerSelector::default().select("任何問題", &[]);
    assert_eq!(selection.reply, DEFAULT_FALLBACK_TEXT);
    assert_eq!(
        selection.outcome,
        SelectionOutcome::Fallback(FallbackReason::EmptyCandidateSet)
    );
}

#[test]
fn invariant_reply_is_never_empty() {
    let selector = AnswerSelector::default();
    let pools = vec![
        vec![],
        vec![entry("a", "answer a", &["退貨"], 1)],
        vec![entry("b", "answer b", &[], 9)],
        vec![entry("blank", "   ", &["退貨"], 1)],
    ];
    let messages = ["", "   ", "退貨", "unrelated words here"];

    for pool in &pools {
        for message in messages {
            let reply = selector.select_answer(message, pool);
            assert!(!reply.trim().is_empty(), "empty reply for {message:?}");
        }
    }
}

#[test]
fn invariant_keyword_hit_scores_at_least_one_plus_priority_term() {
    let scorer = KeywordOverlapScorer;
    let utterance = Utterance::new("我想申請退款");

    let hit = entry("hit", "h", &["退款"], 2);
    let miss = entry("miss", "m", &["配送"], 2);

    let hit_score = scorer.score_value(&scorer.score(&hit, &utterance));
    let miss_score = scorer.score_value(&scorer.score(&miss, &utterance));

    assert!(hit_score >= 1.0 + 0.5);
    assert!(hit_score > miss_score);
}

#[test]
fn invariant_ties_resolve_to_earliest_candidate() {
    let first = entry("first", "first answer", &["付款"], 2);
    let second = entry("second", "second answer", &["付款"], 2);
    let selector = AnswerSelector::default();

    let forward = vec![first.clone(), second.clone()];
    assert_eq!(selector.select_answer("付款方式", &forward), "first answer");

    let reversed = vec![second, first];
    assert_eq!(selector.select_answer("付款方式", &reversed), "second answer");
}

#[test]
fn invariant_lower_priority_value_breaks_ties() {
    // Listed second, but 1/1 > 1/2.
    let candidates = vec![
        entry("p2", "priority two", &["配送"], 2),
        entry("p1", "priority one", &["配送"], 1),
    ];
    assert_eq!(
        AnswerSelector::default().select_answer("配送要多久", &candidates),
        "priority one"
    );
}

#[test]
fn invariant_score_exactly_at_threshold_is_accepted() {
    // No textual match; 1/2 == 0.5.
    let candidates = vec![entry("half", "accepted", &["退貨"], 2)];
    let selection = AnswerSelector::default().select("hello", &candidates);

    assert_eq!(selection.reply, "accepted");
    assert_eq!(selection.matched_id().map(|id| id.as_str()), Some("half"));
}

#[test]
fn invariant_score_just_below_threshold_is_rejected() {
    let selector = AnswerSelector::new(FixedScorer(0.49999));
    let candidates = vec![entry("almost", "rejected", &[], 1)];
    let selection = selector.select("anything", &candidates);

    assert_eq!(selection.reply, DEFAULT_FALLBACK_TEXT);
    assert!(matches!(
        selection.outcome,
        SelectionOutcome::Fallback(FallbackReason::BelowThreshold { .. })
    ));
}

#[test]
fn relevance_basis_ignores_priority_for_threshold() {
    let config = SelectorConfig {
        threshold_basis: ThresholdBasis::Relevance,
        ..SelectorConfig::v0()
    };
    let selector = AnswerSelector::with_config(KeywordOverlapScorer, config).unwrap();
    let candidates = vec![entry("hours", "A1", &["營業時間"], 1)];

    assert_eq!(selector.select_answer("今天天氣如何", &candidates), DEFAULT_FALLBACK_TEXT);
    assert_eq!(selector.select_answer("請問營業時間", &candidates), "A1");
}

#[test]
fn relevance_basis_lets_relevant_candidate_beat_priority_only_candidate() {
    let config = SelectorConfig {
        threshold_basis: ThresholdBasis::Relevance,
        ..SelectorConfig::v0()
    };
    let selector = AnswerSelector::with_config(KeywordOverlapScorer, config).unwrap();
    // top: relevance 0, total 1.0; reset: relevance 0.5, total 0.75
    let candidates = vec![
        FaqEntry::new("top", "opening hours", "We open at nine.").with_priority(1),
        FaqEntry::new("reset", "How do I reset my password", "Use the reset link.")
            .with_priority(4),
    ];

    let selection = selector.select("reset", &candidates);
    assert_eq!(selection.reply, "Use the reset link.");
    assert_eq!(selection.matched_id().map(|id| id.as_str()), Some("reset"));
}

#[test]
fn relevance_basis_still_breaks_ties_by_priority() {
    let config = SelectorConfig {
        threshold_basis: ThresholdBasis::Relevance,
        ..SelectorConfig::v0()
    };
    let selector = AnswerSelector::with_config(KeywordOverlapScorer, config).unwrap();
    let candidates = vec![
        entry("p3", "priority three", &["退款"], 3),
        entry("p1", "priority one", &["退款"], 1),
        entry("unrelated", "unrelated", &[], 1),
    ];

    assert_eq!(selector.select_answer("退款進度", &candidates), "priority one");
}

#[test]
fn custom_fallback_text_is_used() {
    let config = SelectorConfig {
        fallback_text: "Please contact support.".into(),
        ..SelectorConfig::v0()
    };
    let selector = AnswerSelector::with_config(KeywordOverlapScorer, config).unwrap();
    assert_eq!(selector.select_answer("hi", &[]), "Please contact support.");
}

#[test]
fn invalid_configs_are_rejected() {
    let blank = SelectorConfig {
        fallback_text: "  ".into(),
        ..SelectorConfig::v0()
    };
    assert!(matches!(
        AnswerSelector::with_config(KeywordOverlapScorer, blank),
        Err(SelectorConfigError::BlankFallback)
    ));

    let nan = SelectorConfig {
        match_threshold: f64::NAN,
        ..SelectorConfig::v0()
    };
    assert!(matches!(
        AnswerSelector::with_config(KeywordOverlapScorer, nan),
        Err(SelectorConfigError::InvalidThreshold(_))
    ));

    let negative = SelectorConfig {
        match_threshold: -0.1,
        ..SelectorConfig::v0()
    };
    assert!(matches!(
        negative.validate(),
        Err(SelectorConfigError::InvalidThreshold(t)) if t == -0.1
    ));
}

#[test]
fn invalid_config_files_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let garbled = dir.path().join("garbled.json");
    std::fs::write(&garbled, "{ not json").unwrap();
    assert!(matches!(
        SelectorConfig::load(&garbled),
        Err(SelectorConfigError::Serialization(_))
    ));

    let blank_fallback = dir.path().join("blank.json");
    std::fs::write(&blank_fallback, r#"{"fallback_text":"   "}"#).unwrap();
    assert!(matches!(
        SelectorConfig::load(&blank_fallback),
        Err(SelectorConfigError::BlankFallback)
    ));

    let negative = dir.path().join("negative.json");
    std::fs::write(&negative, r#"{"match_threshold":-1.0}"#).unwrap();
    assert!(matches!(
        SelectorConfig::load(&negative),
        Err(SelectorConfigError::InvalidThreshold(_))
    ));

    assert!(matches!(
        SelectorConfig::load(&dir.path().join("missing.json")),
        Err(SelectorConfigError::Io(_))
    ));
}

#[test]
fn malformed_keywords_do_not_block_other_candidates() {
    let raw = r#"[
        {"id": "broken", "question": "壞掉的資料", "answer": "broken", "keywords": {"not": "a list"}, "priority": 1},
        {"id": "good", "question": "退貨", "answer": "good", "keywords": "[\"退貨\"]", "priority": 2}
    ]"#;
    let candidates: Vec<FaqEntry> = serde_json::from_str(raw).unwrap();

    assert!(candidates[0].keywords.is_empty());
    assert_eq!(candidates[1].keywords, vec!["退貨"]);
    // broken: 1.0 from priority only; good: 1.0 keyword + 0.5 priority
    assert_eq!(
        AnswerSelector::default().select_answer("我要退貨", &candidates),
        "good"
    );
}

#[test]
fn selection_is_deterministic() {
    let candidates = faq_core::faq::default_faqs();
    let selector = AnswerSelector::default();
    let first = selector.select("商品多久會送到", &candidates);
    let second = selector.select("商品多久會送到", &candidates);
    assert_eq!(first, second);
}
