//! Loading / error / result-count line.

use crate::session::SearchSession;
use crate::view::styles::UiStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Text shown while a fetch is outstanding.
pub const LOADING_MESSAGE: &str = "Loading ...";

/// Renders exactly one of: the loading indicator, the generic error banner,
/// or the result summary.
pub struct StatusLine<'a> {
    session: &'a SearchSession,
    styles: UiStyles,
}

impl<'a> StatusLine<'a> {
    /// Widget over the session.
    pub fn new(session: &'a SearchSession, styles: UiStyles) -> Self {
        Self { session, styles }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.session.is_loading() {
            Line::from(Span::styled(LOADING_MESSAGE, self.styles.loading))
        } else if let Some(message) = self.session.error_message() {
            Line::from(Span::styled(message, self.styles.error))
        } else {
            let mut spans = vec![Span::raw(format!(
                "{} stories for \"{}\"",
                self.session.stories().len(),
                self.session.query()
            ))];
            if self.session.can_request_more() {
                spans.push(Span::styled("  ·  More: Ctrl-N", self.styles.hint));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(area, buf);
    }
}
