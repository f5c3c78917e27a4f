// ttsfilter-core/tests/pipeline_tests.rs
//! End-to-end checks of the filter pipeline against the behaviour expected
//! by the speech path: exact outputs for representative replies, stage order,
//! failure isolation around translation, and idempotence on clean text.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use test_log::test;

use ttsfilter_core::{
    filter_angle_brackets, filter_asterisks, filter_brackets, filter_numbered_lists,
    filter_parentheses, filter_special_formatting, remove_special_characters, strip,
    FilterConfig, Stage, StageOutcome, Translator, TtsFilter,
};

/// Counts calls and fails on every one of them.
struct FlakyTranslator {
    calls: AtomicUsize,
}

#[async_trait]
impl Translator for FlakyTranslator {
    async fn translate(&self, _text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(anyhow!("upstream timed out"))
    }

    fn name(&self) -> &str {
        "flaky"
    }
}

struct PrefixTranslator;

#[async_trait]
impl Translator for PrefixTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(format!("[ja] {text}"))
    }

    fn name(&self) -> &str {
        "prefix"
    }
}

#[test]
fn nested_span_examples() {
    assert_eq!(strip("a[b[c]d]e", '[', ']').unwrap(), "ae");
    assert_eq!(strip("x(y", '(', ')').unwrap(), "x");
    assert_eq!(strip("a>b<c>d", '<', '>').unwrap(), "abd");
}

#[test]
fn asterisk_example() {
    assert_eq!(filter_asterisks("**bold** and *italic* text"), "and text");
}

#[test]
fn formatting_example_preserves_expression() {
    let out = filter_special_formatting("[smile] *happy* ## Header\n- item");
    assert!(out.contains("[smile]"));
    assert!(!out.contains("happy"));
    assert!(!out.contains('#'));
    assert!(!out.contains('-'));
    assert_eq!(out, "[smile] Header item");
}

#[test]
fn special_characters_example() {
    assert_eq!(remove_special_characters("Hello 😀 World #1!"), "Hello  World #1!");
}

#[test]
fn numbered_list_example() {
    assert_eq!(
        filter_numbered_lists("1. First\n(2) Second\n3、Third"),
        "First Second Third"
    );
}

#[test]
fn each_stage_is_idempotent_on_clean_text() {
    let clean = "The weather today is sunny, with a high of 25 degrees.";
    let stages: [fn(&str) -> String; 7] = [
        filter_asterisks,
        filter_brackets,
        filter_parentheses,
        filter_angle_brackets,
        remove_special_characters,
        filter_numbered_lists,
        filter_special_formatting,
    ];
    for stage in stages {
        assert_eq!(stage(clean), clean);
        let once = stage("  spaced   out\ttext ");
        assert_eq!(stage(&once), once);
    }
}

#[test]
fn typical_reply_is_cleaned_for_speech() {
    let reply = "*tilts head* Oh, really? (I didn't know that!) <break time=\"1s\"/> [curious] Tell me more~ ✨";
    let report = TtsFilter::new(FilterConfig::default()).filter(reply);
    // '~' is a math symbol and goes with the emoji; no collapse happens after the last stage.
    assert_eq!(report.text, "Oh, really? Tell me more ");
    assert!(report.failed_stages().is_empty());
}

#[test]
fn gated_stage_order_is_fixed() {
    let report = TtsFilter::new(FilterConfig::default()).filter("x");
    let order: Vec<Stage> = report.stages.iter().map(|r| r.stage).collect();
    assert_eq!(
        order,
        vec![
            Stage::Asterisks,
            Stage::Brackets,
            Stage::Parentheses,
            Stage::AngleBrackets,
            Stage::SpecialCharacters,
        ]
    );
}

#[test]
fn caller_text_is_not_mutated() {
    let original = String::from("keep *this* safe");
    let filter = TtsFilter::new(FilterConfig::default());
    let _ = filter.filter(&original);
    assert_eq!(original, "keep *this* safe");
}

#[test(tokio::test)]
async fn translation_failure_is_not_fatal() {
    let translator = Arc::new(FlakyTranslator {
        calls: AtomicUsize::new(0),
    });
    let filter = TtsFilter::new(FilterConfig::default()).with_translator(translator.clone());

    let report = filter.sanitize_with_report("Hello (aside) there").await;

    assert_eq!(report.text, "Hello there");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    match report.outcome(Stage::Translation) {
        Some(StageOutcome::Failed { error }) => assert!(error.contains("upstream timed out")),
        other => panic!("expected translation failure, got {other:?}"),
    }
}

#[test(tokio::test)]
async fn translator_sees_fully_filtered_text() {
    let filter = TtsFilter::new(FilterConfig::default()).with_translator(Arc::new(PrefixTranslator));
    let out = filter.sanitize("*bows* Good evening 🌙").await;
    // The translator output is not re-filtered, so its brackets survive.
    assert_eq!(out, "[ja] Good evening ");
}

#[test]
fn concurrent_filters_do_not_interfere() {
    let filter = Arc::new(TtsFilter::new(FilterConfig::default()));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let filter = Arc::clone(&filter);
            std::thread::spawn(move || filter.filter(&format!("item {i} (note {i}) *x*")).text)
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("item {i}"));
    }
}

#[test]
fn report_serializes_with_stage_status() -> Result<()> {
    let mut config = FilterConfig::default();
    config.ignore_parentheses = false;
    let report = TtsFilter::new(config).filter("*hi* there");
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["text"], "there");
    assert_eq!(json["stages"][0]["stage"], "asterisks");
    assert_eq!(json["stages"][0]["outcome"]["status"], "applied");
    assert_eq!(json["stages"][0]["outcome"]["chars_before"], 10);
    assert_eq!(json["stages"][0]["outcome"]["chars_after"], 5);
    assert_eq!(json["stages"][2]["outcome"]["status"], "skipped");
    Ok(())
}
