use super::*;
use crate::model::{Page, Story, StoryId};

// ===== Test Helpers =====

fn story(id: &str, title: &str) -> Story {
    Story::new(
        StoryId::new(id).expect("valid id"),
        title,
        Some(format!("https://example.com/{id}")),
        "author",
        0,
        0,
    )
}

fn page(query: &str, number: u32, ids: &[&str]) -> Page {
    Page {
        query: query.to_string(),
        number,
        stories: ids.iter().map(|id| story(id, &format!("title-{id}"))).collect(),
    }
}

fn id(raw: &str) -> StoryId {
    StoryId::new(raw).expect("valid id")
}

// ===== replace =====

#[test]
fn replace_installs_page_in_arrival_order() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a", "b", "c"]));

    assert_eq!(set.query(), "react");
    assert_eq!(set.last_page(), Some(0));
    let ids: Vec<&str> = set.stories().iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn replace_discards_previous_query_entirely() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a", "b"]));
    set.replace(page("rust", 0, &["x"]));

    assert_eq!(set.query(), "rust");
    assert_eq!(set.len(), 1);
    assert_eq!(set.stories()[0].id().as_str(), "x");
}

// ===== append =====

#[test]
fn append_merges_after_existing_stories() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a", "b"]));
    set.append(page("react", 1, &["c", "d"])).expect("same query");

    let ids: Vec<&str> = set.stories().iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
    assert_eq!(set.last_page(), Some(1));
    assert_eq!(set.next_page(), Some(2));
}

#[test]
fn append_overwrites_duplicate_id_in_place() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a", "b", "c"]));

    let mut dup = page("react", 1, &["b", "d"]);
    dup.stories[0] = story("b", "updated-title");
    set.append(dup).expect("same query");

    let ids: Vec<&str> = set.stories().iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"], "duplicate keeps its position");
    assert_eq!(set.stories()[1].title(), "updated-title");
}

#[test]
fn append_is_idempotent() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a", "b"]));
    set.append(page("react", 1, &["c"])).expect("same query");
    set.append(page("react", 1, &["c"])).expect("same query");

    assert_eq!(set.len(), 3);
}

#[test]
fn append_rejects_mismatched_query() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a"]));

    let err = set.append(page("rust", 1, &["b"])).expect_err("query mismatch");
    assert_eq!(err.store_query, "react");
    assert_eq!(err.page_query, "rust");
    assert_eq!(set.len(), 1, "failed append leaves the set untouched");
    assert_eq!(set.last_page(), Some(0));
}

// ===== remove =====

#[test]
fn remove_drops_exactly_one_story() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a", "b", "c"]));

    assert!(set.remove(&id("b")));

    let ids: Vec<&str> = set.stories().iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn remove_is_noop_for_absent_id() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a"]));

    assert!(!set.remove(&id("zzz")));
    assert_eq!(set.len(), 1);
}

#[test]
fn remove_leaves_other_stories_unchanged() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a", "b", "c"]));
    let before: Vec<Story> = set
        .stories()
        .iter()
        .filter(|s| s.id().as_str() != "b")
        .cloned()
        .collect();

    set.remove(&id("b"));

    assert_eq!(set.stories(), &before[..]);
}

// ===== empty / clear =====

#[test]
fn new_set_is_empty_with_no_pages() {
    let set = ResultSet::new();
    assert!(set.is_empty());
    assert_eq!(set.last_page(), None);
    assert_eq!(set.next_page(), None);
}

#[test]
fn empty_page_still_counts_as_a_page() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &[]));

    assert!(set.is_empty());
    assert_eq!(set.last_page(), Some(0));
    assert_eq!(set.next_page(), Some(1));
}

#[test]
fn clear_resets_query_and_pages() {
    let mut set = ResultSet::new();
    set.replace(page("react", 0, &["a"]));
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.query(), "");
    assert_eq!(set.next_page(), None);
}
