//! Request lifecycle state machine.
//!
//! Sum type tracking the session's current fetch: Idle until the first
//! request, Loading while one is outstanding, then Success or Error.
//! Terminal states return to Loading on the next request; the machine has
//! no end state, it lives as long as the session.

/// Failure classification for a fetch that won the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The remote responded with a failure status.
    Server,
    /// No response reached us at all.
    Network,
}

/// Lifecycle of the session's current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestLifecycle {
    /// No request has been issued yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last applied fetch delivered a page.
    Success,
    /// The last applied fetch failed.
    Error(FetchErrorKind),
}

impl RequestLifecycle {
    /// Transition for request issuance.
    pub fn begin(&mut self) {
        *self = RequestLifecycle::Loading;
    }

    /// Transition for a winning success callback.
    pub fn succeed(&mut self) {
        *self = RequestLifecycle::Success;
    }

    /// Transition for a winning failure callback.
    pub fn fail(&mut self, kind: FetchErrorKind) {
        *self = RequestLifecycle::Error(kind);
    }

    /// Whether a loading indicator should be visible.
    pub fn is_loading(self) -> bool {
        matches!(self, RequestLifecycle::Loading)
    }

    /// The failure kind, when an error banner should be visible.
    pub fn error_kind(self) -> Option<FetchErrorKind> {
        match self {
            RequestLifecycle::Error(kind) => Some(kind),
            _ => None,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
