//! TUI presentation layer (impure shell).
//!
//! Renders record cards, the pager bar, and the search input from values
//! the core exposes; the view computes no pagination itself. The event
//! loop is single-threaded: crossterm events drive state transitions, and
//! a timer tick fires the debounce and drains search outcomes from the
//! worker thread.

pub mod pager_bar;
pub mod records;
pub mod search_input;
pub mod styles;

use crate::search::{SearchJob, SearchWorker};
use crate::state::{AppState, Applied, Debouncer, Effect, Focus, PageControl};
use crate::view::styles::{ColorConfig, ViewStyles};
use crossterm::{
    ExecutableCommand,
    event::{
        self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// Timer interval for debounce firing and worker draining.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Search worker failure.
    #[error("Search error: {0}")]
    Search(#[from] crate::model::SearchError),
}

impl From<TuiError> for crate::model::AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(e) => crate::model::AppError::Io(e),
            TuiError::Search(e) => crate::model::AppError::Search(e),
        }
    }
}

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    worker: Option<SearchWorker>,
    debouncer: Debouncer,
    styles: ViewStyles,
    /// Last rendered pager bar area (for mouse click mapping).
    last_pager_area: Option<Rect>,
}

/// Run the TUI over `state` until the user quits.
///
/// `worker` carries the remote flow's search thread; the static flow
/// passes `None`. `debounce` is the delay applied to term edits before a
/// query goes out.
///
/// # Errors
///
/// Returns [`TuiError`] for terminal failures and a dead search worker.
pub fn run(
    state: AppState,
    worker: Option<SearchWorker>,
    debounce: Duration,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    let mut app = TuiApp::new(terminal, state, worker, debounce, ViewStyles::new(colors));
    let result = app.run_loop();

    // Best-effort cleanup; the run result is what matters.
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(event::DisableMouseCapture);
    let _ = io::stdout().execute(LeaveAlternateScreen);
    result
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble the app around an already-created terminal.
    pub fn new(
        terminal: Terminal<B>,
        state: AppState,
        worker: Option<SearchWorker>,
        debounce: Duration,
        styles: ViewStyles,
    ) -> Self {
        Self {
            terminal,
            state,
            worker,
            debouncer: Debouncer::new(debounce),
            styles,
            last_pager_area: None,
        }
    }

    /// Current application state (for tests).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main event loop. Returns when the user quits.
    pub fn run_loop(&mut self) -> Result<(), TuiError> {
        // The remote flow issues its initial query up front so the first
        // render is not an empty shell.
        if self.state.is_remote() {
            self.dispatch_search()?;
        }
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key)? {
                            return Ok(()); // User quit
                        }
                        self.draw()?;
                        continue;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse)?;
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

            // Timer tick: fire a due debounce, then drain the worker.
            let mut dirty = false;
            if self.debouncer.poll(Instant::now()) {
                self.dispatch_search()?;
                dirty = true;
            }
            if self.drain_outcomes() {
                dirty = true;
            }
            if dirty {
                self.draw()?;
            }
        }
    }

    /// Handle a single keyboard event. Returns true if the app should
    /// quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        // Ctrl+C always quits, regardless of focus.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match self.state.focus {
            Focus::Search => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state.focus = Focus::Records,
                KeyCode::Tab => {
                    let effect = self.state.cycle_search_field();
                    self.handle_effect(effect)?;
                }
                KeyCode::Backspace => {
                    let effect = self.state.pop_term_char();
                    self.handle_effect(effect)?;
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let effect = self.state.push_term_char(ch);
                    self.handle_effect(effect)?;
                }
                _ => {}
            },
            Focus::PageInput => match key.code {
                KeyCode::Esc => {
                    self.state.page_input.clear();
                    self.state.focus = Focus::Records;
                }
                KeyCode::Enter => {
                    if let Ok(page) = self.state.page_input.parse::<usize>() {
                        let effect = self.state.set_page(page);
                        self.handle_effect(effect)?;
                    }
                    self.state.page_input.clear();
                    self.state.focus = Focus::Records;
                }
                KeyCode::Backspace => {
                    self.state.page_input.pop();
                }
                KeyCode::Char(ch) if ch.is_ascii_digit() => {
                    self.state.page_input.push(ch);
                }
                _ => {}
            },
            Focus::Records => match key.code {
                KeyCode::Char('q') => return Ok(true),
                KeyCode::Char('/') => self.state.focus = Focus::Search,
                KeyCode::Char('g') => {
                    self.state.page_input.clear();
                    self.state.focus = Focus::PageInput;
                }
                KeyCode::Tab => {
                    let effect = self.state.cycle_search_field();
                    self.handle_effect(effect)?;
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    let effect = self.state.prev_page();
                    self.handle_effect(effect)?;
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    let effect = self.state.next_page();
                    self.handle_effect(effect)?;
                }
                _ => {}
            },
        }
        Ok(false)
    }

    fn handle_effect(&mut self, effect: Effect) -> Result<(), TuiError> {
        match effect {
            Effect::None => Ok(()),
            Effect::Search { debounce: true } => {
                self.debouncer.arm(Instant::now());
                Ok(())
            }
            Effect::Search { debounce: false } => {
                // An immediate query supersedes a pending debounced one.
                self.debouncer.cancel();
                self.dispatch_search()
            }
        }
    }

    fn dispatch_search(&mut self) -> Result<(), TuiError> {
        let Some(worker) = &self.worker else {
            return Ok(());
        };
        if let Some((seq, request)) = self.state.begin_search() {
            debug!(seq, term = %request.query, page = request.page, "Dispatching search");
            worker.submit(SearchJob { seq, request })?;
        }
        Ok(())
    }

    fn drain_outcomes(&mut self) -> bool {
        let Some(worker) = &self.worker else {
            return false;
        };
        let mut dirty = false;
        for outcome in worker.drain() {
            if let Err(err) = &outcome.result {
                warn!(seq = outcome.seq, error = %err, "Search request failed");
            }
            match self.state.apply_search_outcome(outcome.seq, outcome.result) {
                Applied::Latest => dirty = true,
                Applied::Stale => {
                    debug!(seq = outcome.seq, "Discarding stale search response");
                }
            }
        }
        dirty
    }

    /// Activate the pager button under a left click.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), TuiError> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        let Some(area) = self.last_pager_area else {
            return Ok(());
        };
        let inside = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;
        if !inside {
            return Ok(());
        }

        let column = (mouse.column - area.x) as usize;
        let window = self.state.page_window();
        if let Some(PageControl::Page { number, .. }) = pager_bar::control_at(&window, column) {
            let number = *number;
            let effect = self.state.activate_page(number);
            self.handle_effect(effect)?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let styles = &self.styles;
        let mut pager_area = None;
        self.terminal.draw(|frame| {
            let areas = screen_areas(frame.area());
            pager_area = Some(areas[2]);
            render_areas(frame, state, styles, areas);
        })?;
        self.last_pager_area = pager_area;
        Ok(())
    }
}

/// Split the screen into search, records, pager, and status areas.
fn screen_areas(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Render one frame from the core's exposed values.
pub fn render(frame: &mut Frame, state: &AppState, styles: &ViewStyles) {
    let areas = screen_areas(frame.area());
    render_areas(frame, state, styles, areas);
}

fn render_areas(frame: &mut Frame, state: &AppState, styles: &ViewStyles, areas: [Rect; 4]) {
    let [search_area, records_area, pager_area, status_area] = areas;
    search_input::render(frame, search_area, state, styles);
    records::render(frame, records_area, state, styles);
    pager_bar::render(frame, pager_area, state, styles);
    render_status(frame, status_area, state, styles);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    frame.render_widget(Paragraph::new(status_line(state, styles)), area);
}

/// Status line: result counts, flow state, and the key hints.
pub fn status_line(state: &AppState, styles: &ViewStyles) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(
        "{} results | page {} of {}",
        state.total_hits(),
        state.query().page(),
        state.total_pages()
    ))];
    if state.loading() {
        spans.push(Span::styled(" | searching...", styles.hint()));
    }
    if let Some(err) = state.search_error() {
        spans.push(Span::styled(format!(" | {err}"), styles.error()));
    }
    spans.push(Span::styled(
        "   / search  Tab field  </> page  g goto  q quit",
        styles.hint(),
    ));
    Line::from(spans)
}
