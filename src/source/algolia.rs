//! HTTP gateway for the Algolia Hacker News search API.
//!
//! Address form: `GET <base>/search?query=<term>&page=<n>`. Only the fields
//! the session consumes are decoded; everything else in the response is
//! ignored.

use crate::model::{Page, Story, StoryId};
use crate::source::{FetchError, StoryGateway};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Public Algolia HN search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com/api/v1";

/// Blocking HTTP client implementing [`StoryGateway`].
///
/// Blocking is deliberate: fetches run on worker threads owned by
/// [`crate::source::spawn_fetch`], never on the event loop.
#[derive(Debug, Clone)]
pub struct AlgoliaGateway {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl AlgoliaGateway {
    /// Build a gateway against `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl StoryGateway for AlgoliaGateway {
    fn fetch_page(&self, query: &str, page: u32) -> Result<Page, FetchError> {
        let url = format!("{}/search", self.base_url);
        debug!(%query, page, "requesting search page");

        let page_param = page.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("page", page_param.as_str())])
            .send()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response
            .json()
            .map_err(|err| FetchError::Decode(err.to_string()))?;
        Ok(body.into_page(query, page))
    }
}

// ===== Wire types =====

/// Response envelope of the search endpoint.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

/// One hit as the API serializes it. Most fields are nullable in practice.
#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    url: Option<String>,
    author: Option<String>,
    num_comments: Option<u32>,
    points: Option<i64>,
}

impl SearchResponse {
    /// Convert into the domain [`Page`], skipping hits without a usable id.
    fn into_page(self, query: &str, number: u32) -> Page {
        let mut stories = Vec::with_capacity(self.hits.len());
        for hit in self.hits {
            let id = match StoryId::new(hit.object_id) {
                Ok(id) => id,
                Err(err) => {
                    warn!(%err, "skipping hit without a usable id");
                    continue;
                }
            };
            stories.push(Story::new(
                id,
                hit.title.unwrap_or_default(),
                hit.url,
                hit.author.unwrap_or_default(),
                hit.num_comments.unwrap_or(0),
                hit.points.unwrap_or(0),
            ));
        }
        Page {
            query: query.to_string(),
            number,
            stories,
        }
    }
}

// ===== Tests =====
