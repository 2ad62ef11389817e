//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library modules.

pub mod format;
pub mod table;

pub use format::{handle_date_command, handle_template_command, DateArgs, TemplateArgs};
pub use table::{handle_table_command, TableArgs};
