//! Styling for the story browser panes.

use ratatui::style::{Color, Modifier, Style};

/// Styles shared by all view widgets.
#[derive(Debug, Clone, Copy)]
pub struct UiStyles {
    /// Table header row.
    pub header: Style,
    /// Marker on the column an active sort uses.
    pub sorted_header: Style,
    /// Row under the selection cursor.
    pub selected_row: Style,
    /// Loading indicator text.
    pub loading: Style,
    /// Error banner text.
    pub error: Style,
    /// History-bar term entries.
    pub history_term: Style,
    /// Dimmed helper text (hints, empty states).
    pub hint: Style,
}

impl UiStyles {
    /// Default color scheme.
    pub fn new() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            sorted_header: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            selected_row: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            loading: Style::default().fg(Color::Cyan),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            history_term: Style::default().fg(Color::Green),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Default for UiStyles {
    fn default() -> Self {
        Self::new()
    }
}
