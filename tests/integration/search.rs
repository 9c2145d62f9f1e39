//! Free-form search over a built index.

use super::common::{Workspace, ELSINORE};
use linedex::{run_index, run_search, ErrorCategory, IndexConfig, NoopObserver, Stage};

fn build_fixture(ws: &Workspace) {
    let config = IndexConfig::new(ELSINORE)
        .with_index_dir(ws.index_dir())
        .with_seed(0);
    run_index(&config, &mut NoopObserver).unwrap();
}

#[test]
fn test_search_single_term() {
    let ws = Workspace::new();
    build_fixture(&ws);

    let hits = run_search(&ws.index_dir(), "horatio", 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc_id, 26);
    assert_eq!(hits[0].text, "If you do meet Horatio and Marcellus,");
}

#[test]
fn test_search_counts_speaker_lines() {
    let ws = Workspace::new();
    build_fixture(&ws);

    let mut ids: Vec<u64> = run_search(&ws.index_dir(), "bernardo", 100)
        .unwrap()
        .iter()
        .map(|h| h.doc_id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3, 7, 10, 11, 15, 20, 24]);
}

#[test]
fn test_search_respects_limit() {
    let ws = Workspace::new();
    build_fixture(&ws);

    let hits = run_search(&ws.index_dir(), "bernardo", 3).unwrap();
    assert_eq!(hits.len(), 3);
}

#[test]
fn test_search_boolean_query() {
    let ws = Workspace::new();
    build_fixture(&ws);

    let hits = run_search(&ws.index_dir(), "mouse OR horatio", 10).unwrap();
    let mut ids: Vec<u64> = hits.iter().map(|h| h.doc_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![23, 26]);
}

#[test]
fn test_search_missing_index() {
    let ws = Workspace::new();
    let err = run_search(&ws.index_dir(), "ghost", 10).unwrap_err();
    assert_eq!(err.stage(), Stage::Reopen);
    assert_eq!(err.category(), ErrorCategory::Io);
}

#[test]
fn test_search_unknown_field() {
    let ws = Workspace::new();
    build_fixture(&ws);

    let err = run_search(&ws.index_dir(), "speaker:bernardo", 10).unwrap_err();
    assert_eq!(err.stage(), Stage::Search);
}
