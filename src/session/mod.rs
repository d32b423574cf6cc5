//! Search session state engine (pure).
//!
//! All state transitions here are synchronous and side-effect free apart
//! from the injected term slot: intents go in, tagged [`FetchRequest`]
//! commands come out, and fetch completions are applied through tag-checked
//! callbacks. No networking, no terminal, no clocks.

pub mod controller;
pub mod history;
pub mod lifecycle;
pub mod results;
pub mod sort;

// Re-export for convenience
pub use controller::{
    Applied, FetchOutcome, FetchRequest, FetchTag, SearchSession, DEFAULT_QUERY, ERROR_MESSAGE,
};
pub use history::{SearchHistory, HISTORY_CAPACITY};
pub use lifecycle::{FetchErrorKind, RequestLifecycle};
pub use results::{ConsistencyError, ResultSet};
pub use sort::{SortDirection, SortKey, SortSpec};
