// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::TryReserveError;

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// The scan template has no value placeholder, so nothing could ever
    /// be extracted.
    #[error("no placeholder in pattern {0:?}")]
    NoPlaceholder(String),

    /// The scan template has more than one value placeholder
    /// (`--size=%dx%d` rather than `--width=%d`).
    #[error("multiple placeholders in pattern {0:?}")]
    MultiplePlaceholders(String),

    /// The placeholder is valid, but for a different value type
    /// (`%s` in a pattern used to scan an integer, for example).
    #[error("placeholder '%{found}' cannot scan {expected} values")]
    WrongPlaceholder {
        /// Conversion character found in the template.
        found: char,
        /// Name of the value type the pattern was built for.
        expected: &'static str,
    },

    /// A `%` was followed by an unsupported conversion character
    /// (or by nothing at all).
    #[error("unsupported placeholder in pattern {0:?}")]
    BadPlaceholder(String),

    /// Text follows the placeholder. Only the key before the placeholder
    /// is matched, so any suffix would be silently ignored.
    #[error("text {0:?} follows the placeholder")]
    TrailingText(String),

    //------------------------------
    // Runtime errors
    //------------------------------
    /// Memory for a result could not be reserved.
    #[error("allocation failed: {0}")]
    AllocFailed(#[from] TryReserveError),
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    use regex::Regex;

    #[test]
    fn test_error_display() {
        #[derive(Debug)]
        struct TestData<'a> {
            err: Error,
            re: &'a str,
        }

        let tests = &[
            TestData {
                err: Error::NoPlaceholder("--verbose".into()),
                re: r#"^no placeholder in pattern "--verbose"$"#,
            },
            TestData {
                err: Error::MultiplePlaceholders("%d%d".into()),
                re: r#"^multiple placeholders in pattern "%d%d"$"#,
            },
            TestData {
                err: Error::WrongPlaceholder {
                    found: 's',
                    expected: "integer",
                },
                re: r"^placeholder '%s' cannot scan integer values$",
            },
            TestData {
                err: Error::BadPlaceholder("--num=%".into()),
                re: r#"^unsupported placeholder in pattern "--num=%"$"#,
            },
            TestData {
                err: Error::TrailingText("x".into()),
                re: r#"^text "x" follows the placeholder$"#,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let re = Regex::new(d.re).unwrap();

            let shown = d.err.to_string();

            assert!(re.is_match(&shown), "{}, shown: {:?}", msg, shown);
        }
    }

    #[test]
    fn test_alloc_error_from() {
        let mut v = Vec::<u8>::new();

        let reserve_err = v.try_reserve(usize::MAX).unwrap_err();

        let err = Error::from(reserve_err.clone());

        assert_eq!(err, Error::AllocFailed(reserve_err));
        assert!(err.to_string().starts_with("allocation failed: "));
    }
}
