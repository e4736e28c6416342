//! # Core Quiz Logic
//!
//! This module contains the quiz engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QuizState (engine)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `QuizState`, the engine, and its `QuizSnapshot`
//! - [`action`]: `Action` and the `update()` reducer
//! - [`question`]: per-category question generation
//! - [`answer`]: turning typed text into a gradable `Answer`
//! - [`category`]: the closed set of question types
//! - [`config`]: layered settings (file, env, CLI)

pub mod action;
pub mod answer;
pub mod category;
pub mod config;
pub mod question;
pub mod state;
