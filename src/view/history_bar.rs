//! Last-searches bar.

use crate::session::SearchHistory;
use crate::view::styles::UiStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders up to five prior terms, most recent first, each with the Alt-N
/// shortcut that re-runs it.
pub struct HistoryBar<'a> {
    history: &'a SearchHistory,
    styles: UiStyles,
}

impl<'a> HistoryBar<'a> {
    /// Widget over the session history.
    pub fn new(history: &'a SearchHistory, styles: UiStyles) -> Self {
        Self { history, styles }
    }
}

impl Widget for HistoryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw("Last searches:")];

        if self.history.is_empty() {
            spans.push(Span::styled(" (none yet)", self.styles.hint));
        } else {
            for (index, term) in self.history.terms().enumerate() {
                spans.push(Span::styled(
                    format!(" [{}] ", index + 1),
                    self.styles.hint,
                ));
                spans.push(Span::styled(term.to_string(), self.styles.history_term));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
