//! Un-sorted result set for the active query.
//!
//! The store keeps arrival order across merged pages; presentation order is
//! a projection computed elsewhere (see [`crate::session::sort`]).

use crate::model::{Page, Story, StoryId};
use thiserror::Error;

/// A page was merged into a result set holding a different query.
///
/// The controller's tag check makes this unreachable in normal operation;
/// it exists to fail the operation loudly instead of mixing result sets.
/// Never user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot merge page for query {page_query:?} into results for {store_query:?}")]
pub struct ConsistencyError {
    /// Query the store currently holds.
    pub store_query: String,
    /// Query the offending page was fetched for.
    pub page_query: String,
}

/// Stories for exactly one query, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    query: String,
    stories: Vec<Story>,
    last_page: Option<u32>,
}

impl ResultSet {
    /// Empty set, bound to no query yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set with a fresh page. Used for page 0 of a query.
    pub fn replace(&mut self, page: Page) {
        self.query = page.query;
        self.stories = page.stories;
        self.last_page = Some(page.number);
    }

    /// Merge a follow-up page after the existing stories.
    ///
    /// New identities append in arrival order. An id that is already present
    /// is overwritten in place without changing position, so the merge is
    /// idempotent.
    pub fn append(&mut self, page: Page) -> Result<(), ConsistencyError> {
        if page.query != self.query {
            return Err(ConsistencyError {
                store_query: self.query.clone(),
                page_query: page.query,
            });
        }
        for story in page.stories {
            match self.stories.iter().position(|s| s.id() == story.id()) {
                Some(idx) => self.stories[idx] = story,
                None => self.stories.push(story),
            }
        }
        self.last_page = Some(page.number);
        Ok(())
    }

    /// Remove one story. Returns whether anything was removed.
    pub fn remove(&mut self, id: &StoryId) -> bool {
        match self.stories.iter().position(|s| s.id() == id) {
            Some(idx) => {
                self.stories.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Stored stories in insertion order.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Query the set belongs to. Empty until the first page lands.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of the most recently merged page.
    pub fn last_page(&self) -> Option<u32> {
        self.last_page
    }

    /// Page number a "More" request should ask for.
    pub fn next_page(&self) -> Option<u32> {
        self.last_page.map(|n| n + 1)
    }

    /// Story count.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the set holds no stories.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Drop everything, e.g. when the active query changes.
    pub fn clear(&mut self) {
        self.query.clear();
        self.stories.clear();
        self.last_page = None;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
