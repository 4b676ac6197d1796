// Terminal UI front end: pick a game from a list, press Enter, see numbers.
//
// The UI owns a `ViewState` that the draw session writes into through the
// `Presenter` trait. Rendering reads it at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use lotto_core::{DrawResult, PresetRegistry, Presenter, Session};
use ratatui::Frame;
use tracing::info;

use input::Action;
use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// A row of the game list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Lookup name passed back to the session.
    pub name: String,
    pub label: String,
    /// e.g. `6 numbers from 1 to 49`.
    pub summary: String,
}

/// Everything the UI renders.
///
/// Exactly one of (`game_name` + `numbers`) or `error` is populated after a
/// draw; showing one clears the other.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub games: Vec<GameEntry>,
    /// Index into `games`.
    pub selected: usize,
    pub game_name: String,
    pub numbers: String,
    pub error: Option<String>,
    /// Successful draws this session.
    pub draws: usize,
}

impl ViewState {
    pub fn new(presets: &PresetRegistry) -> Self {
        let games = presets
            .iter()
            .map(|p| GameEntry {
                name: p.name().to_string(),
                label: p.config().label().to_string(),
                summary: p.summary(),
            })
            .collect();
        ViewState {
            games,
            ..ViewState::default()
        }
    }

    pub fn selected_game(&self) -> Option<&GameEntry> {
        self.games.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.games.is_empty() {
            self.selected = (self.selected + 1) % self.games.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.games.is_empty() {
            self.selected = (self.selected + self.games.len() - 1) % self.games.len();
        }
    }

    /// Select by position; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.games.len() {
            self.selected = index;
        }
    }
}

impl Presenter for ViewState {
    fn show_result(&mut self, label: &str, result: &DrawResult) -> io::Result<()> {
        self.error = None;
        self.game_name = label.to_string();
        self.numbers = result.to_string();
        self.draws += 1;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        self.game_name.clear();
        self.numbers.clear();
        self.error = Some(message.to_string());
        Ok(())
    }

    fn show_available(&mut self, _presets: &PresetRegistry) -> io::Result<()> {
        // The game list is always on screen.
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::game_list::render(frame, layout.game_list, state);
    widgets::result_panel::render(frame, layout.result, state);
    widgets::status_bar::render_help(frame, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// Initializes the terminal, installs a panic hook that restores it, then
/// multiplexes keyboard input and render ticks. Draws run synchronously on
/// the loop; they complete in microseconds.
pub async fn run(session: Session) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(session.presets());
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    info!(games = view_state.games.len(), "Terminal UI started");

    let outcome: anyhow::Result<()> = loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state) {
                            Some(Action::Quit) => break Ok(()),
                            Some(Action::Draw(name)) => {
                                if let Err(e) = session.run(&name, &mut view_state) {
                                    break Err(e.into());
                                }
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse, resize, focus: the next tick redraws.
                    }
                    Some(Err(e)) => break Err(anyhow::Error::from(e).context("terminal input error")),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::from(e).context("failed to draw frame"));
                }
            }
        }
    };

    ratatui::restore();
    info!(draws = view_state.draws, "Terminal UI stopped");

    outcome
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
