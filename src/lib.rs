//! Hacker News story browser (hnsb)
//!
//! TUI application for searching Hacker News stories through the Algolia
//! search API.
//!
//! The crate follows a Pure Core / Impure Shell architecture: everything
//! under [`session`] is synchronous state-machine code testable without a
//! terminal or a network. The shells — [`source`] for HTTP, [`storage`] for
//! the persisted search-term slot, [`view`] for the terminal — feed intents
//! and fetch completions into the core and render its projections.

pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod source;
pub mod storage;
pub mod view;
