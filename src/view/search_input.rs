//! Search input bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

// ===== InputBuffer =====

/// Text being typed into the search box.
///
/// The cursor sits at the end of the buffer; there is no mid-line editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one typed character.
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Delete the last character, if any.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Replace the whole buffer, e.g. when a history entry is selected.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Current contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// ===== SearchInput widget =====

/// Renders the bordered search box with a block cursor at the end.
pub struct SearchInput<'a> {
    input: &'a InputBuffer,
}

impl<'a> SearchInput<'a> {
    /// Widget over the current input buffer.
    pub fn new(input: &'a InputBuffer) -> Self {
        Self { input }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = vec![
            Span::raw(self.input.as_str()),
            Span::styled(
                " ",
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Search"))
            .render(area, buf);
    }
}
