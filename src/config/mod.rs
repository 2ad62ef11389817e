//! Configuration module for viewkit
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ViewkitPaths;
pub use settings::{Settings, TableStyle};
