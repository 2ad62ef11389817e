//! Text formatting helpers
//!
//! - [`date`]: token-pattern date formatting (`yyyy-MM-dd HH:mm:ss.S`)
//! - [`template`]: positional `{N}` string templates

pub mod date;
pub mod template;

pub use date::{format_date, format_now, DateFormatter, TimeFields};
pub use template::{format_string, format_variadic, MISSING_VALUE};
