//! TUI rendering and terminal management (impure shell).
//!
//! The event loop is the single actor: it turns key presses into session
//! intents, hands the resulting fetch requests to worker threads, drains
//! completed fetches back into the session, and redraws projections.

mod history_bar;
mod layout;
mod search_input;
mod status_line;
mod story_table;
mod styles;

pub use history_bar::HistoryBar;
pub use search_input::{InputBuffer, SearchInput};
pub use status_line::{StatusLine, LOADING_MESSAGE};
pub use story_table::StoryTable;
pub use styles::UiStyles;

use crate::session::{Applied, FetchRequest, SearchSession, SortKey};
use crate::source::{spawn_fetch, FetchReply, StoryGateway};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::{Paragraph, TableState},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::error;

/// How long the loop waits for a key before polling fetch completions.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Key hints shown in the footer.
const FOOTER_HINTS: &str =
    "Enter search · ↑/↓ select · Ctrl-N more · Del dismiss · Ctrl-T/U/O/P sort · Alt-1..5 history · Esc quit";

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum ShellError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

// ===== TuiApp =====

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B: Backend> {
    terminal: Terminal<B>,
    session: SearchSession,
    gateway: Arc<dyn StoryGateway>,
    input: InputBuffer,
    table_state: TableState,
    styles: UiStyles,
    tx: Sender<FetchReply>,
    rx: Receiver<FetchReply>,
}

impl<B: Backend> TuiApp<B> {
    /// Assemble an app around an already-initialized terminal.
    ///
    /// The input box starts out holding the session's seeded query, the way
    /// the original browser page did.
    pub fn with_terminal(
        terminal: Terminal<B>,
        session: SearchSession,
        gateway: Arc<dyn StoryGateway>,
    ) -> Self {
        let (tx, rx) = channel();
        let mut input = InputBuffer::new();
        input.set(session.query());
        Self {
            terminal,
            session,
            gateway,
            input,
            table_state: TableState::default(),
            styles: UiStyles::new(),
            tx,
            rx,
        }
    }

    /// Issue the first fetch: a CLI-provided query counts as a submission,
    /// otherwise the persisted term is searched as-is.
    pub fn bootstrap(&mut self, initial_query: Option<String>) {
        let request = match initial_query {
            Some(term) => match self.session.submit_query(&term) {
                Some(request) => {
                    self.input.set(self.session.query());
                    request
                }
                None => self.session.start(),
            },
            None => self.session.start(),
        };
        self.dispatch(request);
    }

    /// Run the main event loop. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.draw()?;
        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.drain_replies();
                        self.draw()?;
                        continue;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                        continue;
                    }
                    _ => {}
                }
            }
            if self.drain_replies() {
                self.draw()?;
            }
        }
    }

    /// Apply one key press. Returns `true` when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c' | 'q') if ctrl => return true,

            KeyCode::Enter => {
                if let Some(request) = self.session.submit_query(self.input.as_str()) {
                    self.dispatch(request);
                }
            }
            KeyCode::Backspace => self.input.backspace(),

            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Delete => self.dismiss_selected(),

            KeyCode::Char('n') if ctrl => {
                if let Some(request) = self.session.request_next_page() {
                    self.dispatch(request);
                }
            }
            KeyCode::Char('t') if ctrl => self.session.toggle_sort(SortKey::Title),
            KeyCode::Char('u') if ctrl => self.session.toggle_sort(SortKey::Author),
            KeyCode::Char('o') if ctrl => self.session.toggle_sort(SortKey::Comments),
            KeyCode::Char('p') if ctrl => self.session.toggle_sort(SortKey::Points),

            KeyCode::Char(digit @ '1'..='5') if alt => {
                self.select_history(digit as usize - '1' as usize);
            }

            KeyCode::Char(ch) if !ctrl && !alt => self.input.push(ch),
            _ => {}
        }
        false
    }

    /// Re-run the history entry at `index` (0 = most recent), if present.
    fn select_history(&mut self, index: usize) {
        let term = self
            .session
            .history()
            .terms()
            .nth(index)
            .map(str::to_string);
        if let Some(term) = term {
            self.input.set(&term);
            if let Some(request) = self.session.select_history_entry(&term) {
                self.dispatch(request);
            }
        }
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.session.stories().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1);
        self.table_state.select(Some(next as usize));
    }

    /// Dismiss the story under the cursor, in presentation order.
    fn dismiss_selected(&mut self) {
        let id = self
            .table_state
            .selected()
            .and_then(|index| self.session.sorted_stories().get(index).map(|s| s.id().clone()));
        if let Some(id) = id {
            self.session.dismiss_story(&id);
        }
    }

    /// Hand a fetch to a worker thread; its reply comes back via the channel.
    fn dispatch(&mut self, request: FetchRequest) {
        spawn_fetch(Arc::clone(&self.gateway), request, self.tx.clone());
    }

    /// Apply all queued fetch completions. Returns whether anything landed.
    fn drain_replies(&mut self) -> bool {
        let mut updated = false;
        loop {
            match self.rx.try_recv() {
                Ok(reply) => match self.session.apply_fetch(&reply.tag, reply.outcome) {
                    Ok(Applied::Updated) => updated = true,
                    Ok(Applied::Stale) => {}
                    Err(err) => error!(%err, "dropped inconsistent page"),
                },
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        updated
    }

    fn draw(&mut self) -> Result<(), ShellError> {
        let Self {
            terminal,
            session,
            input,
            table_state,
            styles,
            ..
        } = self;
        terminal.draw(|frame| render(frame, session, input, table_state, *styles))?;
        Ok(())
    }
}

// ===== Rendering =====

/// Render one frame of the application.
pub fn render(
    frame: &mut Frame,
    session: &SearchSession,
    input: &InputBuffer,
    table_state: &mut TableState,
    styles: UiStyles,
) {
    let layout = layout::split(frame.area());

    frame.render_widget(SearchInput::new(input), layout.search);
    frame.render_widget(HistoryBar::new(session.history(), styles), layout.history);
    frame.render_widget(StatusLine::new(session, styles), layout.status);

    let sorted = session.sorted_stories();
    clamp_selection(table_state, sorted.len());
    frame.render_stateful_widget(
        StoryTable::new(&sorted, session.sort_spec(), styles),
        layout.stories,
        table_state,
    );

    frame.render_widget(
        Paragraph::new(FOOTER_HINTS).style(styles.hint),
        layout.footer,
    );
}

/// Keep the cursor on a real row as stories come and go.
fn clamp_selection(state: &mut TableState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        None => state.select(Some(0)),
        Some(selected) if selected >= len => state.select(Some(len - 1)),
        Some(_) => {}
    }
}

// ===== Entry point =====

/// Set up the terminal, run the app to completion, restore the terminal.
pub fn run(
    session: SearchSession,
    gateway: Arc<dyn StoryGateway>,
    initial_query: Option<String>,
) -> Result<(), ShellError> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    let mut app: TuiApp<CrosstermBackend<Stdout>> =
        TuiApp::with_terminal(terminal, session, gateway);
    app.bootstrap(initial_query);
    let result = app.run();

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

// ===== Test support =====


// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::test_support::buffer_text;
    use super::*;
    use crate::model::{Page, Story, StoryId};
    use crate::session::SearchSession;
    use crate::source::FetchError;
    use crate::storage::MemoryTermSlot;
    use ratatui::backend::TestBackend;

    /// Gateway that answers every fetch with one story named after the
    /// (query, page) pair, or fails when scripted to.
    struct ScriptedGateway {
        fail: bool,
    }

    impl StoryGateway for ScriptedGateway {
        fn fetch_page(&self, query: &str, page: u32) -> Result<Page, FetchError> {
            if self.fail {
                return Err(FetchError::Server { status: 500 });
            }
            Ok(Page {
                query: query.to_string(),
                number: page,
                stories: vec![Story::new(
                    StoryId::new(format!("{query}-{page}")).expect("valid id"),
                    format!("{query} story p{page}"),
                    None,
                    "author",
                    1,
                    2,
                )],
            })
        }
    }

    fn test_app(fail: bool) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");
        let session = SearchSession::new(Box::new(MemoryTermSlot::new()));
        TuiApp::with_terminal(terminal, session, Arc::new(ScriptedGateway { fail }))
    }

    fn wait_for_reply(app: &mut TuiApp<TestBackend>) {
        for _ in 0..500 {
            if app.drain_replies() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("no fetch reply arrived in time");
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn bootstrap_fetch_renders_into_the_table() {
        let mut app = test_app(false);
        app.bootstrap(None);
        wait_for_reply(&mut app);
        app.draw().expect("draw");

        let text = buffer_text(&app.terminal);
        assert!(text.contains("React story p0"), "story row missing:\n{text}");
        assert!(!text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn input_box_starts_with_the_seeded_query() {
        let mut app = test_app(false);
        app.draw().expect("draw");
        assert!(buffer_text(&app.terminal).contains("React"));
    }

    #[test]
    fn typing_and_enter_runs_a_new_search() {
        let mut app = test_app(false);
        app.bootstrap(None);
        wait_for_reply(&mut app);

        for _ in 0..app.input.as_str().len() {
            app.handle_key(key(KeyCode::Backspace));
        }
        for ch in "redux".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.query(), "redux");

        wait_for_reply(&mut app);
        app.draw().expect("draw");
        let text = buffer_text(&app.terminal);
        assert!(text.contains("redux story p0"));
        assert!(text.contains("React"), "previous term shows in history");
    }

    #[test]
    fn failed_fetch_shows_the_error_banner() {
        let mut app = test_app(true);
        app.bootstrap(None);
        wait_for_reply(&mut app);
        app.draw().expect("draw");

        let text = buffer_text(&app.terminal);
        assert!(text.contains("Something went wrong ..."));
    }

    #[test]
    fn loading_indicator_is_visible_while_a_fetch_is_outstanding() {
        let mut app = test_app(false);
        app.bootstrap(None);
        // Before draining the reply the session is still loading.
        app.draw().expect("draw");
        assert!(buffer_text(&app.terminal).contains(LOADING_MESSAGE));

        wait_for_reply(&mut app);
        app.draw().expect("draw");
        assert!(!buffer_text(&app.terminal).contains(LOADING_MESSAGE));
    }

    #[test]
    fn delete_dismisses_the_selected_story() {
        let mut app = test_app(false);
        app.bootstrap(None);
        wait_for_reply(&mut app);
        app.draw().expect("draw");
        assert_eq!(app.session.stories().len(), 1);

        app.handle_key(key(KeyCode::Delete));
        assert_eq!(app.session.stories().len(), 0);

        app.draw().expect("draw");
        assert!(!buffer_text(&app.terminal).contains("React story p0"));
    }

    #[test]
    fn ctrl_n_requests_the_next_page() {
        let mut app = test_app(false);
        app.bootstrap(None);
        wait_for_reply(&mut app);

        app.handle_key(ctrl('n'));
        assert!(app.session.is_loading());
        wait_for_reply(&mut app);

        assert_eq!(app.session.stories().len(), 2);
    }

    #[test]
    fn quit_keys_end_the_loop() {
        let mut app = test_app(false);
        assert!(app.handle_key(key(KeyCode::Esc)));
        assert!(app.handle_key(ctrl('c')));
        assert!(app.handle_key(ctrl('q')));
        assert!(!app.handle_key(key(KeyCode::Char('q'))), "plain q is input");
    }

    #[test]
    fn sort_keys_toggle_the_projection() {
        let mut app = test_app(false);
        app.handle_key(ctrl('t'));
        assert_eq!(app.session.sort_spec().map(|s| s.key), Some(SortKey::Title));

        app.handle_key(ctrl('p'));
        assert_eq!(
            app.session.sort_spec().map(|s| s.key),
            Some(SortKey::Points)
        );
    }
}
