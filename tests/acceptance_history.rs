//! Acceptance tests for search history and term persistence.

use hnsb::session::{SearchSession, DEFAULT_QUERY, HISTORY_CAPACITY};
use hnsb::storage::{FileTermSlot, MemoryTermSlot, TermSlot, ACTIVE_TERM_KEY};
use std::fs;
use std::path::PathBuf;

// ===== Test Helpers =====

fn temp_slot_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("hnsb_acceptance").join(name);
    let _ = fs::remove_dir_all(&dir);
    dir.join("slots.json")
}

fn history_of(session: &SearchSession) -> Vec<String> {
    session.history().terms().map(str::to_string).collect()
}

// ===== History bound and ordering =====

#[test]
fn six_distinct_terms_leave_exactly_five_most_recent_first() {
    let mut session = SearchSession::new(Box::new(MemoryTermSlot::new()));

    for term in ["one", "two", "three", "four", "five", "six"] {
        session.submit_query(term).expect("accepted");
    }

    let history = history_of(&session);
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history, vec!["five", "four", "three", "two", "one"]);
    assert!(
        !history.contains(&DEFAULT_QUERY.to_string()),
        "the oldest term was evicted"
    );
}

#[test]
fn resubmitting_an_old_term_produces_no_duplicate_entries() {
    let mut session = SearchSession::new(Box::new(MemoryTermSlot::new()));

    session.submit_query("alpha").expect("accepted");
    session.submit_query("beta").expect("accepted");
    session.submit_query("gamma").expect("accepted");
    session.submit_query("alpha").expect("accepted");
    session.submit_query("delta").expect("accepted");

    let history = history_of(&session);
    assert_eq!(history, vec!["alpha", "gamma", "beta", DEFAULT_QUERY]);

    let mut deduped = history.clone();
    deduped.dedup();
    assert_eq!(deduped, history, "no term appears twice");
}

#[test]
fn active_term_is_never_listed() {
    let mut session = SearchSession::new(Box::new(MemoryTermSlot::new()));
    session.submit_query("alpha").expect("accepted");
    session.submit_query("beta").expect("accepted");

    assert_eq!(session.query(), "beta");
    assert!(!history_of(&session).contains(&"beta".to_string()));

    session.select_history_entry("alpha").expect("accepted");
    assert_eq!(session.query(), "alpha");
    assert!(!history_of(&session).contains(&"alpha".to_string()));
    assert!(history_of(&session).contains(&"beta".to_string()));
}

#[test]
fn blank_submissions_leave_history_untouched() {
    let mut session = SearchSession::new(Box::new(MemoryTermSlot::new()));
    session.submit_query("alpha").expect("accepted");

    assert!(session.submit_query("").is_none());
    assert!(session.submit_query("   ").is_none());

    assert_eq!(history_of(&session), vec![DEFAULT_QUERY]);
}

// ===== Persistence =====

#[test]
fn accepted_submission_persists_the_term() {
    let path = temp_slot_path("persists_term");
    let mut session = SearchSession::new(Box::new(FileTermSlot::new(&path)));

    session.submit_query("Cypress").expect("accepted");

    let slot = FileTermSlot::new(&path);
    assert_eq!(
        slot.get(ACTIVE_TERM_KEY).expect("readable").as_deref(),
        Some("Cypress")
    );
}

#[test]
fn selecting_a_history_entry_updates_the_slot() {
    let path = temp_slot_path("selection_updates");
    let mut session = SearchSession::new(Box::new(FileTermSlot::new(&path)));

    session.submit_query("Cypress").expect("accepted");
    session.select_history_entry(DEFAULT_QUERY).expect("accepted");

    let slot = FileTermSlot::new(&path);
    assert_eq!(
        slot.get(ACTIVE_TERM_KEY).expect("readable").as_deref(),
        Some(DEFAULT_QUERY)
    );
}

#[test]
fn persisted_term_seeds_the_next_session() {
    let path = temp_slot_path("seeds_next_session");

    {
        let mut session = SearchSession::new(Box::new(FileTermSlot::new(&path)));
        session.submit_query("Cypress").expect("accepted");
    }

    let reloaded = SearchSession::new(Box::new(FileTermSlot::new(&path)));
    assert_eq!(reloaded.query(), "Cypress");
}

#[test]
fn missing_slot_file_seeds_the_default_query() {
    let path = temp_slot_path("missing_file");
    let session = SearchSession::new(Box::new(FileTermSlot::new(&path)));
    assert_eq!(session.query(), DEFAULT_QUERY);
}

#[test]
fn rejected_submission_does_not_touch_the_slot() {
    let path = temp_slot_path("rejected_untouched");
    let mut session = SearchSession::new(Box::new(FileTermSlot::new(&path)));

    assert!(session.submit_query("   ").is_none());

    let slot = FileTermSlot::new(&path);
    assert_eq!(slot.get(ACTIVE_TERM_KEY).expect("readable"), None);
}
