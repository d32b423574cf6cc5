//! Sortable story table.

use crate::model::Story;
use crate::session::{SortDirection, SortKey, SortSpec};
use crate::view::styles::UiStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Cell, Row, StatefulWidget, Table, TableState},
};

/// Renders stories in presentation order with sort markers on the active
/// column header.
pub struct StoryTable<'a> {
    stories: &'a [&'a Story],
    sort: Option<SortSpec>,
    styles: UiStyles,
}

impl<'a> StoryTable<'a> {
    /// Widget over an already-projected story list.
    pub fn new(stories: &'a [&'a Story], sort: Option<SortSpec>, styles: UiStyles) -> Self {
        Self {
            stories,
            sort,
            styles,
        }
    }

    fn header_cell(&self, label: &str, key: SortKey) -> Cell<'static> {
        match self.sort {
            Some(spec) if spec.key == key => {
                let marker = match spec.direction {
                    SortDirection::Ascending => " ▲",
                    SortDirection::Descending => " ▼",
                };
                Cell::from(format!("{label}{marker}")).style(self.styles.sorted_header)
            }
            _ => Cell::from(label.to_string()).style(self.styles.header),
        }
    }
}

impl StatefulWidget for StoryTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let header = Row::new(vec![
            self.header_cell("Title", SortKey::Title),
            self.header_cell("Author", SortKey::Author),
            self.header_cell("Comments", SortKey::Comments),
            self.header_cell("Points", SortKey::Points),
        ]);

        let rows = self.stories.iter().map(|story| {
            let title = match story.url() {
                Some(url) => Line::from(vec![
                    Span::raw(story.title().to_string()),
                    Span::styled(format!("  {url}"), self.styles.hint),
                ]),
                None => Line::from(story.title().to_string()),
            };
            Row::new(vec![
                Cell::from(title),
                Cell::from(story.author().to_string()),
                Cell::from(story.num_comments().to_string()),
                Cell::from(story.points().to_string()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(16),
                Constraint::Length(10),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(Block::bordered().title("Stories"))
        .row_highlight_style(self.styles.selected_row)
        .highlight_symbol("> ");

        StatefulWidget::render(table, area, buf, state);
    }
}
