//! viewkit - Presentation utilities for terminal front ends
//!
//! This library provides small display helpers: token-pattern date
//! formatting, positional string templates, self-dismissing toast
//! notifications, and row editing for tables.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `format`: date patterns and `{N}` templates
//! - `toast`: toast lifecycle on a display surface with a timer queue
//! - `table`: in-memory tables and the row editor
//! - `display`: table rendering for terminal output
//! - `tui`: ratatui front end that renders toasts
//! - `config`: configuration and path management
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use viewkit::toast::{MemorySurface, ToastNotifier};
//!
//! let mut toasts = ToastNotifier::new(MemorySurface::new());
//! let id = toasts.show("Saved\nAll changes written", Some(1000.0));
//! // ... later, from the event loop
//! toasts.tick();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod logging;
pub mod table;
pub mod toast;
pub mod tui;

pub use error::{ViewkitError, ViewkitResult};
