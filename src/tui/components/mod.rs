//! # TUI Components
//!
//! Everything drawn on the quiz screen.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields and just draw it:
//! - `TitleBar`: app name and last grading result
//! - `CategoryBar`: the four category buttons
//! - `QuestionView`: `left op right = ?`
//! - `SubmitButton`: clickable alternative to Enter
//! - `Scoreboard`: correct / incorrect counters
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `AnswerBox`: the text field, emits `AnswerEvent::Submit`
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── category_bar.rs
//! ├── question_view.rs
//! ├── answer_box.rs
//! ├── submit_button.rs
//! └── scoreboard.rs
//! ```

pub mod answer_box;
pub mod category_bar;
pub mod question_view;
pub mod scoreboard;
pub mod submit_button;
pub mod title_bar;

pub use answer_box::{AnswerBox, AnswerEvent};
pub use category_bar::CategoryBar;
pub use question_view::QuestionView;
pub use scoreboard::Scoreboard;
pub use submit_button::SubmitButton;
pub use title_bar::TitleBar;
