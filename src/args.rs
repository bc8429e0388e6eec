// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::borrow::Cow;
use std::cmp;
use std::env;

use tracing::{debug, trace};

use crate::error::Result;
use crate::pattern::{Pattern, Value};

/// Arguments starting with this character are never positional.
const OPT_PREFIX: char = '-';

/// Index of the program name in an argument vector.
const PROGRAM_NAME_INDEX: usize = 0;

/// Capacity reserved for a string value found by [Scanner::string()].
///
/// Longer values are still returned in full.
pub const STRING_VALUE_CAPACITY: usize = 1024;

/// Settings used to control the scanners behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, a value must extend to the end of its argument.
    strict_values: bool,

    /// If set, the program name is not considered by flag and value
    /// queries.
    skip_program_name: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// By default, a value is the longest prefix of the text after the key
    /// that forms a value of the required type, and anything after it is
    /// ignored (`--num=12abc` yields `12`).
    ///
    /// When this setting is enabled, the value must consume the rest of
    /// the argument, so `--num=12abc` does not match `--num=%d` at all.
    pub fn strict_values(self) -> Self {
        Settings {
            strict_values: true,
            ..self
        }
    }

    /// By default, the program name (the first argument) is checked by
    /// flag and value queries just like any other argument.
    ///
    /// When this setting is enabled, it is skipped. Positional argument
    /// queries always skip the program name.
    pub fn skip_program_name(self) -> Self {
        Settings {
            skip_program_name: true,
            ..self
        }
    }

    /// Index of the first argument considered by flag and value queries.
    fn first_index(&self) -> usize {
        if self.skip_program_name {
            PROGRAM_NAME_INDEX + 1
        } else {
            PROGRAM_NAME_INDEX
        }
    }
}

/// Get a list of all command-line arguments specified to the program,
/// including the program name (the first argument).
pub fn get_args() -> Vec<String> {
    env::args().collect()
}

/// Returns `true` if `arg` is a positional argument (does not start with a
/// dash).
fn is_positional(arg: &str) -> bool {
    !arg.starts_with(OPT_PREFIX)
}

fn find_flag<S: AsRef<str>>(args: &[S], flag: &str, settings: Settings) -> bool {
    let found = args
        .iter()
        .skip(settings.first_index())
        .position(|arg| arg.as_ref() == flag);

    debug!(flag, found = found.is_some(), "flag query");

    found.is_some()
}

/// Returns the text of the first value matching `pattern`.
fn find_value<'a, S, T>(args: &'a [S], pattern: &Pattern<T>, settings: Settings) -> Option<&'a str>
where
    S: AsRef<str>,
    T: Value,
{
    let first = settings.first_index();

    for (index, arg) in args.iter().enumerate().skip(first) {
        let arg = arg.as_ref();

        trace!(index, arg, pattern = %pattern, "checking argument");

        if let Some(text) = pattern.extract(arg, settings.strict_values) {
            debug!(index, pattern = %pattern, value = text, "found value");

            return Some(text);
        }
    }

    debug!(pattern = %pattern, "no value found");

    None
}

fn scan_value<S, T>(args: &[S], pattern: &Pattern<T>, settings: Settings) -> Option<T>
where
    S: AsRef<str>,
    T: Value,
{
    let first = settings.first_index();

    let value = args
        .iter()
        .enumerate()
        .skip(first)
        .find_map(|(index, arg)| {
            let arg = arg.as_ref();

            trace!(index, arg, pattern = %pattern, "checking argument");

            pattern.scan(arg, settings.strict_values)
        });

    debug!(pattern = %pattern, found = value.is_some(), "value query");

    value
}

fn scan_string<S: AsRef<str>>(
    args: &[S],
    pattern: &Pattern<String>,
    settings: Settings,
) -> Result<Option<String>> {
    let text = match find_value(args, pattern, settings) {
        Some(text) => text,
        None => return Ok(None),
    };

    let mut value = String::new();

    value.try_reserve_exact(cmp::max(STRING_VALUE_CAPACITY, text.len()))?;
    value.push_str(text);

    Ok(Some(value))
}

fn string_or_default<'d, S: AsRef<str>>(
    args: &[S],
    pattern: &Pattern<String>,
    default: &'d str,
    settings: Settings,
) -> Cow<'d, str> {
    match scan_string(args, pattern, settings) {
        Ok(Some(value)) => Cow::Owned(value),
        Ok(None) => Cow::Borrowed(default),
        Err(e) => {
            // Indistinguishable from "not found" for the caller: use
            // try_string() to tell them apart.
            debug!(pattern = %pattern, error = %e, "using default string");

            Cow::Borrowed(default)
        }
    }
}

fn positional_iter<S: AsRef<str>>(args: &[S]) -> impl Iterator<Item = &str> {
    args.iter()
        .skip(PROGRAM_NAME_INDEX + 1)
        .map(|arg| arg.as_ref())
        .filter(|arg| is_positional(arg))
}

/// Returns `true` if `flag` exactly matches any argument, including the
/// program name.
///
/// There is no prefix matching: `--verbose` does not match `--verbose=1`.
pub fn has_flag<S: AsRef<str>>(args: &[S], flag: &str) -> bool {
    find_flag(args, flag, Settings::default())
}

/// Returns the value of the first argument matching `pattern`.
pub fn get_value<S, T>(args: &[S], pattern: &Pattern<T>) -> Option<T>
where
    S: AsRef<str>,
    T: Value,
{
    scan_value(args, pattern, Settings::default())
}

/// Returns the integer value of the first argument matching `pattern`, or
/// `default` if there is none.
pub fn get_int<S: AsRef<str>>(args: &[S], pattern: &Pattern<i64>, default: i64) -> i64 {
    get_value(args, pattern).unwrap_or(default)
}

/// Returns the float value of the first argument matching `pattern`, or
/// `default` if there is none.
pub fn get_float<S: AsRef<str>>(args: &[S], pattern: &Pattern<f64>, default: f64) -> f64 {
    get_value(args, pattern).unwrap_or(default)
}

/// Returns the string value of the first argument matching `pattern`, or
/// `default` if there is none.
///
/// See [Scanner::string()].
pub fn get_string<'d, S: AsRef<str>>(
    args: &[S],
    pattern: &Pattern<String>,
    default: &'d str,
) -> Cow<'d, str> {
    string_or_default(args, pattern, default, Settings::default())
}

/// Returns the string value of the first argument matching `pattern`.
///
/// See [Scanner::try_string()].
pub fn try_get_string<S: AsRef<str>>(args: &[S], pattern: &Pattern<String>) -> Result<Option<String>> {
    scan_string(args, pattern, Settings::default())
}

/// Returns the number of positional arguments, not counting the program
/// name.
pub fn count_positional<S: AsRef<str>>(args: &[S]) -> usize {
    positional_iter(args).count()
}

/// Returns at most `expected` positional arguments, in order.
///
/// See [Scanner::positional_args()].
pub fn get_positional_args<S: AsRef<str>>(args: &[S], expected: usize) -> Option<Vec<&str>> {
    let mut result: Vec<&str> = Vec::new();

    if let Err(e) = result.try_reserve_exact(expected) {
        debug!(expected, error = %e, "cannot reserve positional arguments");

        return None;
    }

    // The whole vector is always scanned, even once the result is full.
    for (index, arg) in positional_iter(args).enumerate() {
        if result.len() < expected {
            result.push(arg);
        } else {
            trace!(index, arg, expected, "dropping positional argument");
        }
    }

    Some(result)
}

/// Returns all positional arguments, in order, not including the program
/// name.
pub fn get_positionals<S: AsRef<str>>(args: &[S]) -> Vec<&str> {
    positional_iter(args).collect()
}

/// Answers queries about a set of command-line arguments.
///
/// The arguments are fixed when the scanner is created and never modified;
/// every query is an independent scan of them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scanner {
    args: Vec<String>,
    settings: Settings,
}

impl Scanner {
    /// Create a scanner for the specified arguments.
    ///
    /// # Notes
    ///
    /// - The first argument is assumed to be the program name, as returned
    ///   by [get_args()].
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Scanner {
            args: args.into_iter().map(Into::into).collect(),
            settings: Settings::default(),
        }
    }

    /// Create a scanner for the programs command-line arguments.
    pub fn from_env() -> Self {
        Scanner::new(get_args())
    }

    /// Specify any settings for the scanner.
    pub fn settings(self, settings: Settings) -> Self {
        Scanner { settings, ..self }
    }

    /// Require values to extend to the end of their argument.
    ///
    /// See [Settings::strict_values()].
    ///
    /// # Note
    ///
    /// This is an alternative to calling the `settings()` method.
    pub fn strict_values(self) -> Self {
        Scanner {
            settings: self.settings.strict_values(),
            ..self
        }
    }

    /// Ignore the program name in flag and value queries.
    ///
    /// See [Settings::skip_program_name()].
    ///
    /// # Note
    ///
    /// This is an alternative to calling the `settings()` method.
    pub fn skip_program_name(self) -> Self {
        Scanner {
            settings: self.settings.skip_program_name(),
            ..self
        }
    }

    /// Returns all arguments, including the program name.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the program name, if there is one.
    pub fn program_name(&self) -> Option<&str> {
        self.args.get(PROGRAM_NAME_INDEX).map(String::as_str)
    }

    /// Returns `true` if `flag` exactly matches any argument.
    pub fn has_flag(&self, flag: &str) -> bool {
        find_flag(&self.args, flag, self.settings)
    }

    /// Returns the value of the first argument matching `pattern`, or
    /// [None].
    pub fn value<T: Value>(&self, pattern: &Pattern<T>) -> Option<T> {
        scan_value(&self.args, pattern, self.settings)
    }

    /// Returns the integer value of the first argument matching `pattern`,
    /// or `default`.
    pub fn int(&self, pattern: &Pattern<i64>, default: i64) -> i64 {
        self.value(pattern).unwrap_or(default)
    }

    /// Returns the float value of the first argument matching `pattern`,
    /// or `default`.
    pub fn float(&self, pattern: &Pattern<f64>, default: f64) -> f64 {
        self.value(pattern).unwrap_or(default)
    }

    /// Returns the string value of the first argument matching `pattern`,
    /// or `default`.
    ///
    /// # Notes
    ///
    /// - A found value is returned in a newly allocated string (with at
    ///   least [STRING_VALUE_CAPACITY] bytes of capacity).
    /// - If nothing matches, `default` itself is returned and nothing is
    ///   allocated.
    /// - If memory for the value cannot be reserved, `default` is returned
    ///   as though nothing matched. Use [Scanner::try_string()] to tell
    ///   the two cases apart.
    pub fn string<'d>(&self, pattern: &Pattern<String>, default: &'d str) -> Cow<'d, str> {
        string_or_default(&self.args, pattern, default, self.settings)
    }

    /// Returns the string value of the first argument matching `pattern`.
    ///
    /// # Return value
    ///
    /// - `Ok(Some(value))` if an argument matched.
    /// - `Ok(None)` if no argument matched.
    /// - `Err(Error::AllocFailed)` if memory for the value could not be
    ///   reserved.
    pub fn try_string(&self, pattern: &Pattern<String>) -> Result<Option<String>> {
        scan_string(&self.args, pattern, self.settings)
    }

    /// Returns the number of positional arguments, not counting the
    /// program name.
    pub fn count_positional(&self) -> usize {
        count_positional(&self.args)
    }

    /// Returns at most `expected` positional arguments, in order.
    ///
    /// `expected` is normally the value returned by
    /// [Scanner::count_positional()]. Positional arguments beyond
    /// `expected` are silently dropped; if `expected` is larger than the
    /// number of positional arguments, only those found are returned.
    ///
    /// Returns [None] if memory for `expected` entries cannot be
    /// reserved.
    ///
    /// # Note
    ///
    /// [Scanner::positionals()] is simpler if all positional arguments
    /// are required.
    pub fn positional_args(&self, expected: usize) -> Option<Vec<&str>> {
        get_positional_args(&self.args, expected)
    }

    /// Returns all positional arguments, in order, not including the
    /// program name.
    pub fn positionals(&self) -> Vec<&str> {
        get_positionals(&self.args)
    }
}
