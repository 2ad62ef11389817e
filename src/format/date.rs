//! Token-pattern date formatting
//!
//! Patterns are literal text interspersed with runs of token characters:
//!
//! | Token | Value                  | Widths                  |
//! |-------|------------------------|-------------------------|
//! | `y`   | year                   | 1-4 (last N digits)     |
//! | `M`   | month (1-12)           | 1 raw, 2+ zero-padded   |
//! | `d`   | day of month           | 1 raw, 2+ zero-padded   |
//! | `H`/`h` | hour of day (0-23)   | 1 raw, 2+ zero-padded   |
//! | `m`   | minute                 | 1 raw, 2+ zero-padded   |
//! | `s`   | second                 | 1 raw, 2+ zero-padded   |
//! | `q`   | quarter (1-4)          | 1 raw, 2+ zero-padded   |
//! | `S`   | millisecond (0-999)    | single placeholder only |
//!
//! Only the first run of each token character is substituted; later runs
//! of the same character are left as literal text.
//!
//! ```rust,ignore
//! let at = NaiveDate::from_ymd_opt(2019, 1, 2)?.and_hms_milli_opt(10, 19, 4, 423)?;
//! assert_eq!(format_date(&at, "yyyy-MM-dd HH:mm:ss.S"), "2019-01-02 10:19:04.423");
//! ```

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};

use crate::error::{ViewkitError, ViewkitResult};

/// Pattern used when the caller does not provide one
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

const YEAR_TOKEN: char = 'y';

/// Calendar and clock fields extracted from a time value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub year: i32,
    /// Zero-based month (January = 0)
    pub month0: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl TimeFields {
    /// Extract fields from any chrono date-time value
    pub fn from_datetime<T: Datelike + Timelike>(instant: &T) -> Self {
        Self {
            year: instant.year(),
            month0: instant.month0(),
            day: instant.day(),
            hour: instant.hour(),
            minute: instant.minute(),
            second: instant.second(),
            // Leap seconds report nanoseconds past 1e9
            millisecond: (instant.nanosecond() / 1_000_000).min(999),
        }
    }

    /// Quarter of the year, 1-4
    pub fn quarter(&self) -> u32 {
        (self.month0 + 3) / 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenWidth {
    /// Raw value for a run of one, zero-padded to two digits otherwise
    Run,
    /// Only a single character is ever replaced, unpadded
    Single,
}

struct Token {
    symbol: char,
    width: TokenWidth,
    value: fn(&TimeFields) -> u32,
}

fn month(t: &TimeFields) -> u32 {
    t.month0 + 1
}

fn day(t: &TimeFields) -> u32 {
    t.day
}

fn hour(t: &TimeFields) -> u32 {
    t.hour
}

fn minute(t: &TimeFields) -> u32 {
    t.minute
}

fn second(t: &TimeFields) -> u32 {
    t.second
}

fn quarter(t: &TimeFields) -> u32 {
    t.quarter()
}

fn millisecond(t: &TimeFields) -> u32 {
    t.millisecond
}

/// Substitution order for every token except the year
const TOKENS: [Token; 8] = [
    Token { symbol: 'M', width: TokenWidth::Run, value: month },
    Token { symbol: 'd', width: TokenWidth::Run, value: day },
    Token { symbol: 'H', width: TokenWidth::Run, value: hour },
    Token { symbol: 'h', width: TokenWidth::Run, value: hour },
    Token { symbol: 'm', width: TokenWidth::Run, value: minute },
    Token { symbol: 's', width: TokenWidth::Run, value: second },
    Token { symbol: 'q', width: TokenWidth::Run, value: quarter },
    Token { symbol: 'S', width: TokenWidth::Single, value: millisecond },
];

/// Byte offset and length of the first run of `symbol` in `text`
fn first_run(text: &str, symbol: char) -> Option<(usize, usize)> {
    let start = text.find(symbol)?;
    let len = text[start..]
        .chars()
        .take_while(|&c| c == symbol)
        .map(char::len_utf8)
        .sum();
    Some((start, len))
}

/// Format extracted fields according to `pattern`
pub fn format_fields(fields: &TimeFields, pattern: &str) -> String {
    let mut out = pattern.to_string();

    if let Some((start, len)) = first_run(&out, YEAR_TOKEN) {
        let year = format!("{:04}", fields.year);
        // Runs longer than four wrap around: `yyyyy` keeps one digit.
        let run = if len > 4 { len - 4 } else { len };
        let keep = run.min(year.len());
        let digits = year[year.len() - keep..].to_string();
        out.replace_range(start..start + len, &digits);
    }

    for token in &TOKENS {
        let Some((start, len)) = first_run(&out, token.symbol) else {
            continue;
        };
        let value = (token.value)(fields);
        let (end, text) = match token.width {
            TokenWidth::Single => (start + 1, value.to_string()),
            TokenWidth::Run if len == 1 => (start + 1, value.to_string()),
            TokenWidth::Run => (start + len, format!("{:02}", value)),
        };
        out.replace_range(start..end, &text);
    }

    out
}

/// Format a time value according to `pattern`
pub fn format_date<T: Datelike + Timelike>(instant: &T, pattern: &str) -> String {
    format_fields(&TimeFields::from_datetime(instant), pattern)
}

/// Format the current local time according to `pattern`
pub fn format_now(pattern: &str) -> String {
    format_date(&Local::now(), pattern)
}

/// A reusable formatter bound to one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    pattern: String,
}

impl DateFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format<T: Datelike + Timelike>(&self, instant: &T) -> String {
        format_date(instant, &self.pattern)
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

/// Parse a user-supplied instant into local wall-clock time
///
/// Accepts RFC 3339 (converted to local time), `YYYY-MM-DD HH:MM:SS[.fff]`,
/// `YYYY-MM-DDTHH:MM:SS[.fff]` and a bare `YYYY-MM-DD` (midnight).
pub fn parse_instant(input: &str) -> ViewkitResult<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(Local.from_utc_datetime(&dt.naive_utc()).naive_local());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ViewkitError::Config(format!("Unrecognized date-time: '{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 1, 2)
            .unwrap()
            .and_hms_milli_opt(10, 19, 4, 423)
            .unwrap()
    }

    #[test]
    fn test_padded_pattern() {
        assert_eq!(
            format_date(&sample(), "yyyy-MM-dd hh:mm:ss.S"),
            "2019-01-02 10:19:04.423"
        );
        assert_eq!(
            format_date(&sample(), "yyyy-MM-dd HH:mm:ss.S"),
            "2019-01-02 10:19:04.423"
        );
    }

    #[test]
    fn test_unpadded_pattern() {
        assert_eq!(
            format_date(&sample(), "yyyy-M-d h:m:s.S"),
            "2019-1-2 10:19:4.423"
        );
    }

    #[test]
    fn test_short_year() {
        assert_eq!(format_date(&sample(), "yy/MM"), "19/01");
        assert_eq!(format_date(&sample(), "y"), "9");
        assert_eq!(format_date(&sample(), "yyyyy"), "9");
        assert_eq!(format_date(&sample(), "yyyyyy"), "19");
        assert_eq!(format_date(&sample(), "yyyyyyyy"), "2019");
        assert_eq!(format_date(&sample(), "yyyyyyyyy"), "2019");
    }

    #[test]
    fn test_only_first_run_substituted() {
        assert_eq!(format_date(&sample(), "MM/MM"), "01/MM");
        assert_eq!(format_date(&sample(), "d-d"), "2-d");
    }

    #[test]
    fn test_millisecond_single_placeholder() {
        assert_eq!(format_date(&sample(), "SSS"), "423SS");

        let early = NaiveDate::from_ymd_opt(2019, 1, 2)
            .unwrap()
            .and_hms_milli_opt(0, 0, 0, 7)
            .unwrap();
        assert_eq!(format_date(&early, "S"), "7");
    }

    #[test]
    fn test_quarter() {
        let november = NaiveDate::from_ymd_opt(2021, 11, 30)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(&november, "q"), "4");
        assert_eq!(format_date(&november, "qq"), "04");
        assert_eq!(format_date(&sample(), "Qq"), "Q1");
    }

    #[test]
    fn test_unrecognized_characters_pass_through() {
        assert_eq!(format_date(&sample(), "[x] d!"), "[x] 2!");
        assert_eq!(format_date(&sample(), ""), "");
    }

    #[test]
    fn test_formatter_default_pattern() {
        let formatter = DateFormatter::default();
        assert_eq!(formatter.pattern(), DEFAULT_PATTERN);
        assert_eq!(formatter.format(&sample()), "2019-01-02 10:19:04");
    }

    #[test]
    fn test_parse_instant() {
        assert_eq!(parse_instant("2019-01-02 10:19:04.423").unwrap(), sample());
        assert_eq!(parse_instant("2019-01-02T10:19:04.423").unwrap(), sample());
        assert_eq!(
            parse_instant("2019-01-02").unwrap(),
            NaiveDate::from_ymd_opt(2019, 1, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert!(parse_instant("yesterday").is_err());
    }
}
