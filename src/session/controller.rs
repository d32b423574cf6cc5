//! Search session controller.
//!
//! [`SearchSession`] owns the active query, the result set, the search
//! history, and the request lifecycle. User intents produce tagged
//! [`FetchRequest`] commands for the shell to execute; completions come back
//! through [`SearchSession::apply_fetch`], which drops anything but the
//! single outstanding request so a late response can never clobber a newer
//! search.

use crate::model::{Story, StoryId};
use crate::session::history::SearchHistory;
use crate::session::lifecycle::{FetchErrorKind, RequestLifecycle};
use crate::session::results::{ConsistencyError, ResultSet};
use crate::session::sort::{self, SortKey, SortSpec};
use crate::storage::{TermSlot, ACTIVE_TERM_KEY};
use tracing::{debug, warn};

/// Search term used when the persisted slot holds nothing.
pub const DEFAULT_QUERY: &str = "React";

/// Message shown for any failed fetch, server and network alike.
pub const ERROR_MESSAGE: &str = "Something went wrong ...";

// ===== Commands and completions =====

/// Identity of one issued fetch.
///
/// The token keeps identical (query, page) pairs from different submissions
/// distinguishable; query and page say what the shell should actually ask
/// the gateway for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTag {
    /// Monotonic request token.
    pub token: u64,
    /// Query the request was issued for.
    pub query: String,
    /// Zero-based page number requested.
    pub page: u32,
}

/// Command for the shell: perform this fetch and deliver the outcome back
/// with the same tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Tag to echo back through [`SearchSession::apply_fetch`].
    pub tag: FetchTag,
}

/// Resolution of a fetch as reported by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The gateway delivered a page.
    Page(crate::model::Page),
    /// The gateway failed.
    Failed(FetchErrorKind),
}

/// What [`SearchSession::apply_fetch`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The completion matched the outstanding request and was applied.
    Updated,
    /// The completion was for a superseded request and was dropped.
    Stale,
}

// ===== SearchSession =====

/// The search-session state engine.
///
/// Single logical actor: intents and completions arrive one at a time, and
/// at most one fetch result per (query, page) is ever applied. The injected
/// [`TermSlot`] is the only side channel; everything else is plain state.
pub struct SearchSession {
    query: String,
    results: ResultSet,
    history: SearchHistory,
    lifecycle: RequestLifecycle,
    sort: Option<SortSpec>,
    outstanding: Option<FetchTag>,
    next_token: u64,
    slot: Box<dyn TermSlot>,
}

impl SearchSession {
    /// Build a session seeded from the persisted term slot.
    ///
    /// A missing or unreadable slot falls back to [`DEFAULT_QUERY`]; a read
    /// failure is logged, never fatal.
    pub fn new(slot: Box<dyn TermSlot>) -> Self {
        let query = match slot.get(ACTIVE_TERM_KEY) {
            Ok(Some(term)) if !term.trim().is_empty() => term.trim().to_string(),
            Ok(_) => DEFAULT_QUERY.to_string(),
            Err(err) => {
                warn!(%err, "failed to read persisted search term");
                DEFAULT_QUERY.to_string()
            }
        };
        Self {
            query,
            results: ResultSet::new(),
            history: SearchHistory::new(),
            lifecycle: RequestLifecycle::Idle,
            sort: None,
            outstanding: None,
            next_token: 0,
            slot,
        }
    }

    /// Issue the initial page-0 fetch for the seeded query.
    ///
    /// Unlike [`Self::submit_query`] this records nothing in the history and
    /// does not write the slot; the seeded term was just read from it.
    pub fn start(&mut self) -> FetchRequest {
        let query = self.query.clone();
        self.results.clear();
        self.issue(query, 0)
    }

    /// Submit a search term.
    ///
    /// Returns the page-0 request to execute, or `None` for a blank term
    /// (rejected silently, nothing changes). The previously active term
    /// moves into the history, and the new term is persisted immediately,
    /// regardless of how the fetch later turns out.
    pub fn submit_query(&mut self, term: &str) -> Option<FetchRequest> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        if term != self.query {
            // A re-submitted term stops being "history" the moment it is
            // active again.
            self.history.remove(term);
            let previous = std::mem::replace(&mut self.query, term.to_string());
            self.history.record(&previous);
        }

        if let Err(err) = self.slot.set(ACTIVE_TERM_KEY, term) {
            // Optimistic persistence: losing the slot write must not block
            // the search itself.
            warn!(%err, "failed to persist active search term");
        }

        self.results.clear();
        Some(self.issue(term.to_string(), 0))
    }

    /// Re-run a previous search. Identical to [`Self::submit_query`]; the
    /// term is promoted back to most-recent.
    pub fn select_history_entry(&mut self, term: &str) -> Option<FetchRequest> {
        self.submit_query(term)
    }

    /// Ask for the page after the last one merged.
    ///
    /// `None` unless the result set already holds a page and no request is
    /// outstanding.
    pub fn request_next_page(&mut self) -> Option<FetchRequest> {
        if self.lifecycle.is_loading() {
            return None;
        }
        let page = self.results.next_page()?;
        let query = self.query.clone();
        Some(self.issue(query, page))
    }

    /// Drop one story from the visible set. Never touches the network.
    pub fn dismiss_story(&mut self, id: &StoryId) -> bool {
        self.results.remove(id)
    }

    /// Toggle the sort header for `key`.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = Some(SortSpec::toggled(self.sort, key));
    }

    /// Apply a fetch completion delivered by the shell.
    ///
    /// Only the single outstanding request wins. A completion for a
    /// superseded request is dropped without touching any state — it is
    /// neither a success nor a failure.
    pub fn apply_fetch(
        &mut self,
        tag: &FetchTag,
        outcome: FetchOutcome,
    ) -> Result<Applied, ConsistencyError> {
        if self.outstanding.as_ref() != Some(tag) {
            debug!(
                token = tag.token,
                query = %tag.query,
                page = tag.page,
                "discarding stale fetch completion"
            );
            return Ok(Applied::Stale);
        }
        self.outstanding = None;

        match outcome {
            FetchOutcome::Page(page) => {
                if tag.page == 0 {
                    self.results.replace(page);
                } else {
                    self.results.append(page)?;
                }
                self.lifecycle.succeed();
            }
            FetchOutcome::Failed(kind) => {
                // Stale results, if any, stay visible behind the banner.
                self.lifecycle.fail(kind);
            }
        }
        Ok(Applied::Updated)
    }

    fn issue(&mut self, query: String, page: u32) -> FetchRequest {
        self.next_token += 1;
        let tag = FetchTag {
            token: self.next_token,
            query,
            page,
        };
        self.outstanding = Some(tag.clone());
        self.lifecycle.begin();
        debug!(token = tag.token, query = %tag.query, page = tag.page, "issuing fetch");
        FetchRequest { tag }
    }

    // ===== Read surface =====

    /// The active search term.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Stored stories in arrival order.
    pub fn stories(&self) -> &[Story] {
        self.results.stories()
    }

    /// Stories in presentation order under the current sort.
    pub fn sorted_stories(&self) -> Vec<&Story> {
        sort::project(self.results.stories(), self.sort)
    }

    /// The active sort, if any column has been toggled. Persists across
    /// pagination and across query changes.
    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Past search terms, most recent first, never including the active one.
    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Current request lifecycle state.
    pub fn lifecycle(&self) -> RequestLifecycle {
        self.lifecycle
    }

    /// Whether a loading indicator should be visible.
    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    /// The generic failure banner, when the last applied fetch failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.lifecycle.error_kind().map(|_| ERROR_MESSAGE)
    }

    /// Whether a "More" request would currently be issued.
    pub fn can_request_more(&self) -> bool {
        !self.lifecycle.is_loading() && self.results.next_page().is_some()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
