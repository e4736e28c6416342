//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the quiz,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop sleeps up to 500ms waiting for
//! input and only redraws after an event (including a terminal resize).
//! All pending events are drained before the next draw.

mod component;
mod components;
mod dispatch;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{Outcome, QuizState};
use crate::tui::components::AnswerBox;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the quiz engine)
pub struct TuiState {
    pub answer_box: AnswerBox,
    /// Title bar text; empty until the first answer is graded.
    pub status_message: String,
    /// Whether the status reports a correct (true) or incorrect (false) answer.
    pub status_positive: Option<bool>,
    pub show_feedback: bool,
}

impl TuiState {
    pub fn new(show_feedback: bool) -> Self {
        Self {
            answer_box: AnswerBox::new(),
            status_message: String::new(),
            status_positive: None,
            show_feedback,
        }
    }

    /// React to the reducer's effect. Returns true when the loop should exit.
    ///
    /// Every re-render starts from an empty answer field, matching a form
    /// that is reset after each question.
    pub fn apply_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::Quit => return true,
            Effect::Render => {
                self.status_message.clear();
                self.status_positive = None;
            }
            Effect::Graded(outcome) => {
                if self.show_feedback {
                    self.status_message = feedback(outcome);
                    self.status_positive = Some(outcome.is_correct());
                }
            }
        }
        self.answer_box.clear();
        false
    }
}

fn feedback(outcome: Outcome) -> String {
    match outcome {
        Outcome::Correct => "Correct!".to_string(),
        Outcome::Incorrect { expected } => format!("Incorrect, the answer was {expected}"),
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // The answer field always has focus
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut quiz = QuizState::from_seed(config.starting_category, config.seed);
    let mut tui = TuiState::new(config.show_feedback);

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true; // Force first frame

        loop {
            if needs_redraw {
                let snapshot = quiz.state();
                terminal.draw(|f| ui::draw_ui(f, &snapshot, &mut tui))?;
                needs_redraw = false;
            }

            let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
                continue;
            };
            needs_redraw = true;

            // Process first event + drain everything pending before next draw
            let mut pending = Some(first_event);
            while let Some(event) = pending {
                let frame_area = terminal.get_frame().area();
                if let Some(action) =
                    dispatch::dispatch(&event, &mut tui, quiz.category(), frame_area)
                {
                    let effect = update(&mut quiz, action);
                    debug!("Effect: {:?}", effect);
                    if tui.apply_effect(effect) {
                        let state = quiz.state();
                        info!(
                            "Quitting: {} correct, {} incorrect",
                            state.correct_count, state.incorrect_count
                        );
                        return Ok(());
                    }
                }
                pending = poll_event_immediate()?;
            }
        }
    });

    ratatui::restore();
    result
}
