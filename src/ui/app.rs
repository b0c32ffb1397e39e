//! Main TUI application state and logic

use crate::playback::{PlaybackState, Tick};
use crate::playback::autoplay::Speed;
use crate::session::Session;
use crate::trace::view::DisplayState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state: one session plus presentation bits.
pub struct App<P, S: DisplayState> {
    /// The visualizer session driving everything
    session: Session<P, S>,

    /// Problem name shown as the state-pane title
    title: String,

    /// Status message to display
    status_message: String,

    /// Whether the app should quit
    should_quit: bool,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl<P, S: DisplayState> App<P, S> {
    /// Create a new app around an already-loaded session.
    pub fn new(session: Session<P, S>, title: impl Into<String>) -> Self {
        App {
            session,
            title: title.into(),
            status_message: String::from("Ready!"),
            should_quit: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Drive autoplay; the timer is polled, never a background thread
            match self.session.on_tick(Instant::now()) {
                Tick::Advanced => self.status_message = "Playing...".to_string(),
                Tick::Finished => self.status_message = "Playback complete".to_string(),
                Tick::Ignored => {}
            }

            // Poll with a timeout so autoplay keeps moving without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: state + explanation; right column: reference code
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        super::panes::render_state_pane(frame, left_rows[0], &self.title, self.session.snapshot());
        super::panes::render_explanation_pane(frame, left_rows[1], self.session.snapshot());
        super::panes::render_code_pane(
            frame,
            columns[1],
            self.session.listing(),
            self.session.snapshot().and_then(|s| s.source_line),
        );
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.session.cursor(),
            self.session.trace_len(),
            self.session.state(),
            self.session.speed(),
            self.session.variant_name(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.status_message = if self.session.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.status_message = if self.session.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Char(' ') => {
                // 200ms debounce to prevent key repeat spam
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    match self.session.toggle_play(Instant::now()) {
                        PlaybackState::Playing => self.status_message = "Playing...".to_string(),
                        PlaybackState::Paused => self.status_message = "Paused".to_string(),
                        PlaybackState::Idle => {
                            self.status_message = "Nothing loaded — press l".to_string()
                        }
                    }
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let speed = match c {
                    '1' => Speed::Slow,
                    '2' => Speed::Medium,
                    '3' => Speed::Fast,
                    _ => Speed::VeryFast,
                };
                self.session.set_speed(speed);
                self.status_message = format!("Speed: {}", speed.label());
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                if self.session.variant_count() < 2 {
                    self.status_message = "Only one variant for this algorithm".to_string();
                } else {
                    match self.session.next_variant() {
                        Ok(_) => {
                            self.status_message =
                                format!("Variant: {}", self.session.variant_name());
                        }
                        Err(e) => {
                            // Surfaced once; the previous trace is still on screen
                            self.status_message = format!("Switch failed: {}", e);
                        }
                    }
                }
            }
            KeyCode::Enter => {
                self.session.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.session.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.reset();
                self.status_message = "Reset — press l to reload the input".to_string();
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                match self.session.last_input().map(str::to_string) {
                    Some(raw) => match self.session.load(&raw) {
                        Ok(()) => self.status_message = "Trace regenerated".to_string(),
                        Err(e) => self.status_message = format!("Load failed: {}", e),
                    },
                    None => self.status_message = "No input to load".to_string(),
                }
            }
            _ => {}
        }
    }
}
