//! End-to-end ingest-then-verify runs against tantivy.

use super::common::{Workspace, ELSINORE, ELSINORE_LINES};
use linedex::testing::RecordingObserver;
use linedex::{
    ingest, run_index, verify, DocumentSink, IndexConfig, LineIndex, NoopObserver, Sample,
    ScriptedDraws, StopWords, TermSearcher, VerifyOutcome,
};
use std::io::Cursor;

#[test]
fn test_scenario_lands_on_dog() {
    let ws = Workspace::new();
    let index = LineIndex::open_or_create(&ws.index_dir()).unwrap();
    let writer = index.writer(15_000_000).unwrap();

    let summary = ingest(
        Cursor::new("the cat sat\n\na dog ran\n"),
        &StopWords::from_list(&["the", "a"]),
        writer,
        ScriptedDraws::landing_on(3),
        &mut NoopObserver,
    )
    .unwrap();

    assert_eq!(summary.lines, 2);
    assert_eq!(summary.eligible_tokens, 4);
    let sample = summary.sample.expect("sample");
    assert_eq!(
        sample,
        Sample {
            word: "dog".to_string(),
            line_index: 1
        }
    );

    let reader = index.reader().unwrap();
    assert_eq!(reader.num_docs(), 2);
    assert_eq!(reader.document(1).unwrap().as_deref(), Some("a dog ran"));

    let outcome = verify(&reader, Some(&sample), 10, &mut NoopObserver).unwrap();
    let VerifyOutcome::Verified(v) = outcome else {
        panic!("expected verification, got {:?}", outcome);
    };
    assert_eq!(v.doc_id, 1);
    assert_eq!(v.total_hits, 1);
}

#[test]
fn test_oversized_word_does_not_break_round_trip() {
    let index = LineIndex::create_in_ram().unwrap();
    let corpus = format!("{} walks\nghost\n", "b".repeat(70_000));
    let summary = ingest(
        Cursor::new(corpus),
        &StopWords::empty(),
        index.writer(15_000_000).unwrap(),
        ScriptedDraws::landing_on(1),
        &mut NoopObserver,
    )
    .unwrap();

    assert_eq!(summary.eligible_tokens, 2);
    let sample = summary.sample.expect("sample");
    assert_eq!(sample.word, "walks");
    assert_eq!(sample.line_index, 0);

    let reader = index.reader().unwrap();
    assert_eq!(reader.num_docs(), 2);
    let outcome = verify(&reader, Some(&sample), 1000, &mut NoopObserver).unwrap();
    assert!(matches!(outcome, VerifyOutcome::Verified(v) if v.doc_id == 0));
}

#[test]
fn test_fixture_verifies_for_many_seeds() {
    let ws = Workspace::new();
    for seed in 0..8 {
        let config = IndexConfig::new(ELSINORE)
            .with_index_dir(ws.index_dir())
            .with_seed(seed);
        let report = run_index(&config, &mut NoopObserver).unwrap();

        assert_eq!(report.lines, ELSINORE_LINES);
        assert!(report.is_verified(), "seed {} not verified", seed);
        let sample = report.sample.as_ref().unwrap();
        assert!(sample.line_index < ELSINORE_LINES);
        assert!(!StopWords::english().contains(&sample.word));
    }
}

#[test]
fn test_same_seed_same_sample() {
    let ws = Workspace::new();
    let a = ws.run("one two three\nfour five\n\nsix seven eight nine\n", 11);
    let b = ws.run("one two three\nfour five\n\nsix seven eight nine\n", 11);
    assert_eq!(a.sample, b.sample);
    assert_eq!(a.eligible_tokens, 9);
}

#[test]
fn test_zero_eligible_tokens_skips_verification() {
    let ws = Workspace::new();
    let report = ws.run("the a\n\nThe, and 1234\n\n", 3);

    assert_eq!(report.lines, 2);
    assert_eq!(report.eligible_tokens, 0);
    assert!(report.sample.is_none());
    assert_eq!(report.outcome, "skipped");
    assert!(report.search_ms.is_none());

    // lines are indexed even though nothing was eligible
    let reader = LineIndex::open(&ws.index_dir()).unwrap().reader().unwrap();
    assert_eq!(reader.num_docs(), 2);
    assert_eq!(reader.document(1).unwrap().as_deref(), Some("The, and 1234"));
}

#[test]
fn test_empty_corpus() {
    let ws = Workspace::new();
    let report = ws.run("", 1);
    assert_eq!(report.lines, 0);
    assert_eq!(report.outcome, "skipped");
}

#[test]
fn test_rerun_replaces_previous_index() {
    let ws = Workspace::new();
    ws.run("ghost of elsinore\nmidnight watch\n", 1);
    let report = ws.run("a mouse stirring\n", 1);
    assert_eq!(report.lines, 1);

    let reader = LineIndex::open(&ws.index_dir()).unwrap().reader().unwrap();
    assert_eq!(reader.num_docs(), 1);
    assert_eq!(reader.search_term("ghost", 10).unwrap().total_hits, 0);
    assert!(reader.search_term("mouse", 10).unwrap().contains(0));
}

#[test]
fn test_custom_stop_words_file() {
    let ws = Workspace::new();
    let stop_path = ws.dir.path().join("stop.txt");
    std::fs::write(&stop_path, "# everything but one word\nghost\nof\n").unwrap();
    let corpus = ws.corpus("ghost of\n\nghost of elsinore\n");

    let mut config = ws.config(&corpus).with_seed(5);
    config.stop_words = Some(stop_path);
    let report = run_index(&config, &mut NoopObserver).unwrap();

    assert_eq!(report.eligible_tokens, 1);
    assert_eq!(
        report.sample,
        Some(Sample {
            word: "elsinore".to_string(),
            line_index: 1
        })
    );
    assert!(report.is_verified());
}

#[test]
fn test_observer_sees_every_stage() {
    let ws = Workspace::new();
    let corpus = ws.corpus("the cat sat\n\na dog ran\n");
    let mut observer = RecordingObserver::default();
    run_index(&ws.config(&corpus).with_seed(2), &mut observer).unwrap();

    assert_eq!(observer.lines, vec![0, 1]);
    assert_eq!(observer.summaries.len(), 1);
    assert!(!observer.samples.is_empty());
    assert_eq!(observer.stages, vec!["reopened", "queried", "checked"]);
    assert_eq!(observer.outcomes, vec!["verified"]);
}

#[test]
fn test_uncommitted_writer_leaves_index_empty() {
    let ws = Workspace::new();
    let index = LineIndex::open_or_create(&ws.index_dir()).unwrap();
    {
        let mut writer = index.writer(15_000_000).unwrap();
        writer
            .add(&linedex::LineDocument::new(0, "dropped before commit"))
            .unwrap();
    }
    let reader = index.reader().unwrap();
    assert_eq!(reader.num_docs(), 0);

    // the lock was released on drop
    let writer = index.writer(15_000_000).unwrap();
    writer.close().unwrap();
}
