//! Date and template CLI commands

use clap::Args;

use crate::config::settings::Settings;
use crate::error::ViewkitResult;
use crate::format::date::{format_date, format_now, parse_instant};
use crate::format::template::format_variadic;

/// Text printed when the template command gets no arguments
pub const NULL_OUTPUT: &str = "null";

/// Arguments for `viewkit date`
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Token pattern, e.g. "yyyy-MM-dd HH:mm:ss.S" (defaults to the configured pattern)
    pub pattern: Option<String>,
    /// Instant to format instead of now (RFC 3339, "YYYY-MM-DD HH:MM:SS[.fff]" or "YYYY-MM-DD")
    #[arg(short, long)]
    pub at: Option<String>,
}

/// Arguments for `viewkit template`
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template containing {0}, {1}, ... placeholders, followed by the values
    pub parts: Vec<String>,
}

/// Handle the date command, returning the formatted text
pub fn handle_date_command(settings: &Settings, args: DateArgs) -> ViewkitResult<String> {
    let pattern = args.pattern.as_deref().unwrap_or(&settings.date_pattern);

    match args.at {
        Some(at) => Ok(format_date(&parse_instant(&at)?, pattern)),
        None => Ok(format_now(pattern)),
    }
}

/// Handle the template command, returning the rendered text
pub fn handle_template_command(args: TemplateArgs) -> String {
    let parts: Vec<&dyn std::fmt::Display> = args
        .parts
        .iter()
        .map(|p| p as &dyn std::fmt::Display)
        .collect();

    format_variadic(&parts).unwrap_or_else(|| NULL_OUTPUT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_with_instant() {
        let args = DateArgs {
            pattern: Some("yyyy-M-d h:m:s.S".into()),
            at: Some("2019-01-02 10:19:04.423".into()),
        };
        let output = handle_date_command(&Settings::default(), args).unwrap();
        assert_eq!(output, "2019-1-2 10:19:4.423");
    }

    #[test]
    fn test_date_uses_configured_pattern() {
        let mut settings = Settings::default();
        settings.date_pattern = "yy/MM".into();
        let args = DateArgs {
            pattern: None,
            at: Some("2019-01-02".into()),
        };
        assert_eq!(handle_date_command(&settings, args).unwrap(), "19/01");
    }

    #[test]
    fn test_date_rejects_bad_instant() {
        let args = DateArgs {
            pattern: None,
            at: Some("not a date".into()),
        };
        assert!(handle_date_command(&Settings::default(), args).is_err());
    }

    #[test]
    fn test_template() {
        let args = TemplateArgs {
            parts: vec!["Hello {0}, you are {1}".into(), "Bob".into(), "30".into()],
        };
        assert_eq!(handle_template_command(args), "Hello Bob, you are 30");
    }

    #[test]
    fn test_template_without_parts() {
        let args = TemplateArgs { parts: Vec::new() };
        assert_eq!(handle_template_command(args), NULL_OUTPUT);
    }
}
