//! Story value types.
//!
//! A [`Story`] is one search hit as delivered by the search API, immutable
//! once constructed. A [`Page`] is one response unit: an ordered batch of
//! stories identified by (query, page number).

use std::fmt;

// ===== StoryId =====

/// Unique identity of a story (the API's `objectID`).
/// NEVER export the raw constructor - use the smart constructor only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoryId(String);

impl StoryId {
    /// Smart constructor: validates a non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidStoryId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidStoryId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejection from the [`StoryId`] smart constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidStoryId {
    /// Empty or whitespace-only id.
    #[error("story id cannot be empty")]
    Empty,
}

// ===== Story =====

/// One search hit.
///
/// Fields are private; stories never change after arriving from the
/// gateway. Removal and re-ordering happen in the session layer, which only
/// moves whole stories around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    id: StoryId,
    title: String,
    url: Option<String>,
    author: String,
    num_comments: u32,
    points: i64,
}

impl Story {
    /// Assemble a story from decoded wire fields.
    pub fn new(
        id: StoryId,
        title: impl Into<String>,
        url: Option<String>,
        author: impl Into<String>,
        num_comments: u32,
        points: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            url,
            author: author.into(),
            num_comments,
            points,
        }
    }

    /// Identity of the story.
    pub fn id(&self) -> &StoryId {
        &self.id
    }

    /// Story headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Link target. Self posts have none; the renderer falls back to the
    /// bare title.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Submitting user.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Comment count.
    pub fn num_comments(&self) -> u32 {
        self.num_comments
    }

    /// Score. Can go negative on heavily downvoted items.
    pub fn points(&self) -> i64 {
        self.points
    }
}

// ===== Page =====

/// One network response unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Query the page was fetched for.
    pub query: String,
    /// Zero-based page number.
    pub number: u32,
    /// Stories in the order the API returned them.
    pub stories: Vec<Story>,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_id_rejects_empty() {
        assert!(StoryId::new("").is_err());
        assert!(StoryId::new("   ").is_err());
    }

    #[test]
    fn story_id_accepts_and_displays_raw_value() {
        let id = StoryId::new("12345").expect("valid id");
        assert_eq!(id.as_str(), "12345");
        assert_eq!(id.to_string(), "12345");
    }

    #[test]
    fn story_exposes_all_fields() {
        let story = Story::new(
            StoryId::new("1").expect("valid id"),
            "A title",
            Some("https://example.com".to_string()),
            "someone",
            42,
            -3,
        );
        assert_eq!(story.id().as_str(), "1");
        assert_eq!(story.title(), "A title");
        assert_eq!(story.url(), Some("https://example.com"));
        assert_eq!(story.author(), "someone");
        assert_eq!(story.num_comments(), 42);
        assert_eq!(story.points(), -3);
    }

    #[test]
    fn story_url_can_be_absent() {
        let story = Story::new(StoryId::new("2").expect("valid id"), "t", None, "a", 0, 0);
        assert_eq!(story.url(), None);
    }
}
