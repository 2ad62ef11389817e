//! Terminal User Interface module
//!
//! Renders toasts from an in-memory display surface using ratatui, driving
//! their timers from the event loop.

pub mod event;
pub mod layout;
pub mod terminal;
pub mod widgets;

pub use terminal::run_toast;
