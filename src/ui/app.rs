//! Main TUI application state and logic

use crate::controller::{Controller, RunState};
use crate::error::ControlError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Element count step for the up/down keys
const COUNT_STEP: isize = 10;

/// Longest wait for input while nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// Owner of the dataset and the run in flight
    pub controller: Controller,

    /// Pause between frames, fixed for the life of the app
    pub frame_delay: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a refused action
    pub status_is_error: bool,

    /// Whether frames advance on their own
    pub is_playing: bool,

    /// Last time a frame was applied in play mode
    pub last_frame_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around `controller`, pacing frames by `frame_delay`
    pub fn new(controller: Controller, frame_delay: Duration) -> Self {
        App {
            controller,
            frame_delay,
            should_quit: false,
            status_message: String::from("Ready! Press Enter to sort"),
            status_is_error: false,
            is_playing: false,
            last_frame_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // At most one frame per draw, so every frame reaches the screen
            if self.is_animating() && self.last_frame_time.elapsed() >= self.frame_delay {
                self.last_frame_time = Instant::now();
                self.advance_frame();
            }

            if event::poll(self.poll_timeout())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn is_animating(&self) -> bool {
        self.is_playing && self.controller.state() == RunState::Running
    }

    /// Wait for input no longer than the time left until the next frame
    fn poll_timeout(&self) -> Duration {
        if self.is_animating() {
            self.frame_delay
                .saturating_sub(self.last_frame_time.elapsed())
                .min(IDLE_POLL)
        } else {
            IDLE_POLL
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Controls on top, bars filling the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_controls_pane(
            frame,
            chunks[0],
            super::panes::ControlsRenderData {
                algorithm: self.controller.algorithm(),
                element_count: self.controller.element_count(),
                current_len: self.controller.values().len(),
                state: self.controller.state(),
            },
        );

        super::panes::render_bars_pane(
            frame,
            chunks[1],
            super::panes::BarsRenderData {
                values: self.controller.values(),
                active: self.controller.active(),
                sorted: self.controller.sorted(),
            },
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            super::panes::StatusRenderData {
                message: &self.status_message,
                progress: self.controller.progress(),
                state: self.controller.state(),
                is_playing: self.is_playing,
                is_error: self.status_is_error,
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn refuse(&mut self, err: ControlError) {
        self.status_message = format!("{} (wait for it to finish or press e)", err);
        self.status_is_error = true;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let forward = key.code == KeyCode::Tab;
                match self.controller.cycle_algorithm(forward) {
                    Ok(algorithm) => self.set_status(format!("Selected {}", algorithm)),
                    Err(e) => self.refuse(e),
                }
            }
            KeyCode::Up | KeyCode::Down => {
                let delta = if key.code == KeyCode::Up {
                    COUNT_STEP
                } else {
                    -COUNT_STEP
                };
                let count = self.controller.adjust_element_count(delta);
                self.set_status(format!("{} bars on next generate (g)", count.get()));
            }
            KeyCode::Char('g') | KeyCode::Char('G') => match self.controller.generate() {
                Ok(()) => {
                    self.is_playing = false;
                    self.set_status(format!(
                        "Generated {} bars",
                        self.controller.values().len()
                    ));
                }
                Err(e) => self.refuse(e),
            },
            KeyCode::Enter => self.start_sort(),
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.controller.state() == RunState::Running
                    && self.last_space_press.elapsed() >= Duration::from_millis(200)
                {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.set_status("Sorting...");
                    } else {
                        self.set_status("Paused");
                    }
                }
            }
            KeyCode::Right => {
                if self.controller.state() == RunState::Running {
                    self.is_playing = false;
                    self.advance_frame();
                    if self.controller.state() == RunState::Running {
                        self.set_status("Stepped one frame");
                    }
                }
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if let Ok(applied) = self.controller.finish() {
                    self.is_playing = false;
                    self.set_status(format!(
                        "Skipped {} frames: {} done",
                        applied,
                        self.controller.algorithm()
                    ));
                }
            }
            _ => {}
        }
    }

    fn start_sort(&mut self) {
        match self.controller.start() {
            Ok(summary) => {
                if self.controller.state() == RunState::Complete {
                    self.set_status(format!("{}: nothing to sort", summary.algorithm));
                } else {
                    self.is_playing = true;
                    // first frame shows after one full delay, like every other
                    self.last_frame_time = Instant::now();
                    self.set_status(format!(
                        "{}: {} frames",
                        summary.algorithm, summary.frames
                    ));
                }
            }
            Err(e) => self.refuse(e),
        }
    }

    /// Apply one frame of the run in flight
    fn advance_frame(&mut self) {
        match self.controller.advance() {
            Ok(true) => {}
            Ok(false) => {
                self.is_playing = false;
                self.set_status(format!("{} complete", self.controller.algorithm()));
            }
            Err(e) => {
                self.is_playing = false;
                tracing::debug!("advance skipped: {}", e);
            }
        }
    }
}
