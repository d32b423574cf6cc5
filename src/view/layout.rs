//! Frame layout for the story browser.

use ratatui::layout::{Constraint, Layout, Rect};

/// Regions of one rendered frame, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Bordered search input.
    pub search: Rect,
    /// Last-searches bar.
    pub history: Rect,
    /// Loading / error / result-count line.
    pub status: Rect,
    /// Story table.
    pub stories: Rect,
    /// Key hints.
    pub footer: Rect,
}

/// Split a frame into the application regions.
pub fn split(area: Rect) -> AppLayout {
    let [search, history, status, stories, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    AppLayout {
        search,
        history,
        status,
        stories,
        footer,
    }
}
