//! Display formatting for terminal output
//!
//! Renders tables for printing with the configured border style.

pub mod table;

pub use table::render_table;
