//! Sort projection over a result set.
//!
//! Sorting never mutates the stored results; it is a pure projection applied
//! at render time. Toggling the key that is already active flips direction;
//! choosing a new key starts ascending.

use crate::model::Story;
use std::cmp::Ordering;

// ===== SortKey / SortDirection =====

/// Column a result view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Story headline.
    Title,
    /// Submitting user.
    Author,
    /// Comment count.
    Comments,
    /// Score.
    Points,
}

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

// ===== SortSpec =====

/// An active sort: key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Column being sorted.
    pub key: SortKey,
    /// Current direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Apply a header toggle to the current (possibly absent) sort.
    ///
    /// Same key flips direction; a new key starts ascending.
    pub fn toggled(current: Option<SortSpec>, key: SortKey) -> SortSpec {
        match current {
            Some(spec) if spec.key == key => SortSpec {
                key,
                direction: spec.direction.flipped(),
            },
            _ => SortSpec {
                key,
                direction: SortDirection::Ascending,
            },
        }
    }
}

// ===== Projection =====

/// Project stories into presentation order.
///
/// Stable: ties keep arrival order. `None` leaves arrival order untouched.
/// String keys compare by raw code-unit order, matching how the search page
/// has always sorted.
pub fn project(stories: &[Story], spec: Option<SortSpec>) -> Vec<&Story> {
    let mut view: Vec<&Story> = stories.iter().collect();
    if let Some(spec) = spec {
        view.sort_by(|a, b| {
            let ord = compare_by_key(a, b, spec.key);
            match spec.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    view
}

fn compare_by_key(a: &Story, b: &Story, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title().cmp(b.title()),
        SortKey::Author => a.author().cmp(b.author()),
        SortKey::Comments => a.num_comments().cmp(&b.num_comments()),
        SortKey::Points => a.points().cmp(&b.points()),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
