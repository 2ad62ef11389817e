//! User settings for viewkit
//!
//! Holds the default date pattern, toast timings and table rendering style.

use serde::{Deserialize, Serialize};

use super::paths::ViewkitPaths;
use crate::error::ViewkitError;

/// Border style used when rendering tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Box-drawing borders
    #[default]
    Modern,
    /// Plain ASCII borders
    Ascii,
    /// GitHub-flavored markdown
    Markdown,
}

/// Toast timing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastSettings {
    /// Display time before the fade starts, in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub default_duration_ms: u64,

    /// Fade-out transition length, in milliseconds
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            default_duration_ms: default_toast_duration_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

/// Table rendering settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TableSettings {
    #[serde(default)]
    pub style: TableStyle,
}

/// User settings for viewkit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Pattern used by `viewkit date` when none is given
    #[serde(default = "default_date_pattern")]
    pub date_pattern: String,

    #[serde(default)]
    pub toast: ToastSettings,

    #[serde(default)]
    pub table: TableSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_pattern() -> String {
    crate::format::date::DEFAULT_PATTERN.to_string()
}

fn default_toast_duration_ms() -> u64 {
    crate::toast::DEFAULT_DURATION_MS
}

fn default_fade_ms() -> u64 {
    crate::toast::FADE_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_pattern: default_date_pattern(),
            toast: ToastSettings::default(),
            table: TableSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &ViewkitPaths) -> Result<Self, ViewkitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ViewkitError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ViewkitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ViewkitPaths) -> Result<(), ViewkitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ViewkitError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ViewkitError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ViewkitError> {
        if self.date_pattern.is_empty() {
            return Err(ViewkitError::Config("date_pattern cannot be empty".into()));
        }
        if self.toast.fade_ms == 0 {
            return Err(ViewkitError::Config(
                "toast.fade_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_pattern, "yyyy-MM-dd HH:mm:ss");
        assert_eq!(settings.toast.default_duration_ms, 5000);
        assert_eq!(settings.toast.fade_ms, 500);
        assert_eq!(settings.table.style, TableStyle::Modern);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ViewkitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.date_pattern = "yy/M/d".into();
        settings.table.style = TableStyle::Markdown;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_pattern, "yy/M/d");
        assert_eq!(loaded.table.style, TableStyle::Markdown);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"toast": {"fade_ms": 250}}"#).unwrap();
        assert_eq!(settings.toast.fade_ms, 250);
        assert_eq!(settings.toast.default_duration_ms, 5000);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_rejects_zero_fade() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ViewkitPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"toast": {"fade_ms": 0}}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_config());
    }
}
