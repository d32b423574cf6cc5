//! Network collaborator contract and fetch dispatch (impure shell).
//!
//! The session core only ever sees tagged requests and completions; this
//! module owns the trait the shell implements and the worker-thread plumbing
//! that carries completions back to the event loop.

pub mod algolia;

use crate::model::Page;
use crate::session::{FetchErrorKind, FetchOutcome, FetchRequest, FetchTag};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

pub use algolia::{AlgoliaGateway, DEFAULT_BASE_URL};

/// Failure fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote answered with a failure status.
    #[error("server responded with status {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("undecodable response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Collapse into the user-facing classification. A body we cannot
    /// decode still came from a responding server.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Server { .. } | FetchError::Decode(_) => FetchErrorKind::Server,
            FetchError::Network(_) => FetchErrorKind::Network,
        }
    }
}

/// Remote search API contract: one page of stories per call.
pub trait StoryGateway: Send + Sync {
    /// Fetch `page` of results for `query`.
    fn fetch_page(&self, query: &str, page: u32) -> Result<Page, FetchError>;
}

/// A completed fetch travelling back to the event loop.
#[derive(Debug)]
pub struct FetchReply {
    /// Tag of the request this resolves.
    pub tag: FetchTag,
    /// How it resolved.
    pub outcome: FetchOutcome,
}

/// Execute `request` on a worker thread, delivering the outcome to `tx`.
///
/// The controller is free to supersede the request while it runs; the reply
/// carries its tag so stale completions are recognized on arrival and the
/// loop stays single-threaded.
pub fn spawn_fetch(
    gateway: Arc<dyn StoryGateway>,
    request: FetchRequest,
    tx: Sender<FetchReply>,
) {
    std::thread::spawn(move || {
        let tag = request.tag;
        let outcome = match gateway.fetch_page(&tag.query, tag.page) {
            Ok(page) => FetchOutcome::Page(page),
            Err(err) => {
                warn!(%err, query = %tag.query, page = tag.page, "fetch failed");
                FetchOutcome::Failed(err.kind())
            }
        };
        // The receiver disappearing just means the app is shutting down.
        let _ = tx.send(FetchReply { tag, outcome });
    });
}

// ===== Tests =====
