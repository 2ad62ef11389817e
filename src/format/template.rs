//! Positional string templates
//!
//! Replaces `{N}` placeholders with the N-th argument. A placeholder whose
//! index has no matching argument renders as [`MISSING_VALUE`].

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Text substituted for placeholders past the end of the argument list
pub const MISSING_VALUE: &str = "undefined";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Substitute every `{N}` in `template` with `args[N]`
pub fn format_string(template: &str, args: &[&dyn Display]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            Some(&caps[1])
                .filter(|digits| digits.len() == 1 || !digits.starts_with('0'))
                .and_then(|digits| digits.parse::<usize>().ok())
                .and_then(|index| args.get(index))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| MISSING_VALUE.to_string())
        })
        .into_owned()
}

/// Variadic form: the first part is the template, the rest are arguments
///
/// Returns `None` when called with no parts at all.
pub fn format_variadic(parts: &[&dyn Display]) -> Option<String> {
    let (template, args) = parts.split_first()?;
    Some(format_string(&template.to_string(), args))
}

/// Build a string from a template and positional arguments
///
/// `format_string!()` yields `None`; any other call yields `Some`.
///
/// ```rust,ignore
/// assert_eq!(
///     format_string!("Hello {0}, you are {1}", "Bob", 30),
///     Some("Hello Bob, you are 30".to_string())
/// );
/// ```
#[macro_export]
macro_rules! format_string {
    () => {
        ::std::option::Option::<::std::string::String>::None
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::template::format_variadic(&[
            &$template as &dyn ::std::fmt::Display
            $(, &$arg as &dyn ::std::fmt::Display)*
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_substitution() {
        assert_eq!(
            format_string("Hello {0}, you are {1}", &[&"Bob", &30]),
            "Hello Bob, you are 30"
        );
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(format_string("{0}-{0}-{1}", &[&"a", &'b']), "a-a-b");
    }

    #[test]
    fn test_missing_argument_renders_undefined() {
        assert_eq!(format_string("x{5}", &[&1, &2]), "xundefined");
        assert_eq!(format_string("{0}", &[]), "undefined");
        assert_eq!(
            format_string("{99999999999999999999999}", &[&1]),
            "undefined"
        );
    }

    #[test]
    fn test_zero_padded_index_is_missing() {
        assert_eq!(
            format_string("{00}|{01}|{0}", &[&"a", &"b"]),
            "undefined|undefined|a"
        );
        assert_eq!(format_string("{10}", &[&0 as &dyn Display; 11]), "0");
    }

    #[test]
    fn test_non_placeholders_untouched() {
        assert_eq!(format_string("{a} {-1} {} {0", &[&1]), "{a} {-1} {} {0");
    }

    #[test]
    fn test_variadic_without_parts() {
        assert_eq!(format_variadic(&[]), None);
        assert_eq!(format_string!(), None);
    }

    #[test]
    fn test_macro() {
        assert_eq!(
            format_string!("Hello {0}, you are {1}", "Bob", 30),
            Some("Hello Bob, you are 30".to_string())
        );
        assert_eq!(format_string!("x{5}", 1, 2), Some("xundefined".into()));
        assert_eq!(format_string!("plain"), Some("plain".into()));
    }
}
