//! Reusable widgets for the TUI

pub mod toast;

pub use toast::{toast_area, ToastWidget};
