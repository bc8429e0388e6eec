// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Introduces a placeholder in a scan template.
const PLACEHOLDER_PREFIX: char = '%';

/// Optional length modifier accepted (and ignored) before a conversion
/// character, so that `%ld` and `%lf` templates are accepted.
const LENGTH_MODIFIER: char = 'l';

/// Every conversion character understood in a template, whatever the
/// value type.
///
/// `%i` is absent: it would pick the base from a `0x` or `0` prefix.
const KNOWN_CONVERSIONS: &[char] = &['d', 'f', 'e', 'g', 's'];

/// Whitespace as understood by the scanner, both in a pattern key and
/// before a value.
///
/// Matches C `isspace()`, which includes the vertical tab.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// A type that can be scanned out of the tail of an argument.
///
/// Implemented for [i64], [f64] and [String]. The type of a [Pattern] is
/// fixed when it is created, so a pattern can only ever be used to scan the
/// kind of value it was built for.
pub trait Value: Sized {
    /// Human readable name of the type (used in error messages).
    const NAME: &'static str;

    /// Template conversion characters that scan this type. The first
    /// entry is used when displaying a [Pattern].
    const CONVERSIONS: &'static [char];

    /// Returns the length in bytes of the longest prefix of `text` that
    /// forms a value of this type, or zero if there is none.
    ///
    /// `text` never starts with whitespace.
    fn span(text: &str) -> usize;

    /// Convert text previously measured by [Value::span()].
    fn convert(text: &str) -> Option<Self>;
}

impl Value for i64 {
    const NAME: &'static str = "integer";
    const CONVERSIONS: &'static [char] = &['d'];

    fn span(text: &str) -> usize {
        let bytes = text.as_bytes();

        let sign = match bytes.first() {
            Some(b'+') | Some(b'-') => 1,
            _ => 0,
        };

        let digits = bytes[sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();

        if digits == 0 {
            0
        } else {
            sign + digits
        }
    }

    fn convert(text: &str) -> Option<Self> {
        // Out of range values are treated as a failed match.
        text.parse().ok()
    }
}

impl Value for f64 {
    const NAME: &'static str = "float";
    const CONVERSIONS: &'static [char] = &['f', 'e', 'g'];

    fn span(text: &str) -> usize {
        let bytes = text.as_bytes();
        let digits_from = |from: usize| {
            bytes[from..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
        };

        let mut len = match bytes.first() {
            Some(b'+') | Some(b'-') => 1,
            _ => 0,
        };

        // Hex floats are not scanned, so must not match as a leading zero.
        if bytes.get(len) == Some(&b'0') {
            if let Some(b'x') | Some(b'X') = bytes.get(len + 1) {
                return 0;
            }
        }

        // Longest word first so "infinity" is not cut short at "inf".
        for word in &["infinity", "inf", "nan"] {
            let end = len + word.len();

            if bytes.len() >= end && bytes[len..end].eq_ignore_ascii_case(word.as_bytes()) {
                return end;
            }
        }

        let whole = digits_from(len);
        len += whole;

        let mut fraction = 0;

        if bytes.get(len) == Some(&b'.') {
            fraction = digits_from(len + 1);

            if whole + fraction > 0 {
                len += 1 + fraction;
            }
        }

        if whole + fraction == 0 {
            return 0;
        }

        if let Some(b'e') | Some(b'E') = bytes.get(len) {
            let mut exp = len + 1;

            if let Some(b'+') | Some(b'-') = bytes.get(exp) {
                exp += 1;
            }

            let exp_digits = digits_from(exp);

            // An exponent without digits is not part of the value.
            if exp_digits > 0 {
                len = exp + exp_digits;
            }
        }

        len
    }

    fn convert(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Value for String {
    const NAME: &'static str = "string";
    const CONVERSIONS: &'static [char] = &['s'];

    fn span(text: &str) -> usize {
        text.find(is_space).unwrap_or_else(|| text.len())
    }

    fn convert(text: &str) -> Option<Self> {
        Some(text.into())
    }
}

/// A scan pattern: a literal key followed by a single typed value.
///
/// A pattern can be created directly from its key:
///
/// ```rust
/// use argscan::Pattern;
///
/// let count = Pattern::<i64>::new("--count=");
/// assert_eq!(count.scan("--count=7", false), Some(7));
/// ```
///
/// Or from a scan template containing exactly one placeholder, which is
/// checked when the pattern is built:
///
/// ```rust
/// use argscan::{Error, Pattern};
///
/// let ratio: Pattern<f64> = "--ratio=%f".parse().unwrap();
/// assert_eq!(ratio.key(), "--ratio=");
///
/// let bad = "--ratio=%s".parse::<Pattern<f64>>();
/// assert!(matches!(bad, Err(Error::WrongPlaceholder { found: 's', .. })));
/// ```
///
/// # Matching rules
///
/// - Whitespace in the key matches any run (possibly empty) of whitespace
///   in the argument; every other character must match exactly.
/// - Whitespace between the key and the value is skipped.
/// - The longest prefix of the remaining text that forms a value is used.
///   Text after the value is ignored unless `strict` is requested, in which
///   case the value must extend to the end of the argument.
pub struct Pattern<T> {
    key: String,
    value_type: PhantomData<fn() -> T>,
}

impl<T: Value> Pattern<T> {
    /// Create a pattern matching the literal `key`, immediately followed by
    /// a value of type `T`.
    pub fn new(key: &str) -> Self {
        Pattern {
            key: key.into(),
            value_type: PhantomData,
        }
    }

    /// Returns the literal key of the pattern.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Strip the key from the front of `arg`, returning the remainder.
    fn match_key<'a>(&self, arg: &'a str) -> Option<&'a str> {
        let mut rest = arg;

        for c in self.key.chars() {
            if is_space(c) {
                rest = rest.trim_start_matches(is_space);
            } else {
                rest = rest.strip_prefix(c)?;
            }
        }

        Some(rest)
    }

    /// Returns the text of the value in `arg`, if `arg` matches the
    /// pattern.
    pub fn extract<'a>(&self, arg: &'a str, strict: bool) -> Option<&'a str> {
        let rest = self.match_key(arg)?.trim_start_matches(is_space);

        let len = T::span(rest);

        if len == 0 || (strict && len != rest.len()) {
            return None;
        }

        Some(&rest[..len])
    }

    /// Scan a value from `arg`, if `arg` matches the pattern.
    pub fn scan(&self, arg: &str, strict: bool) -> Option<T> {
        self.extract(arg, strict).and_then(T::convert)
    }
}

impl<T: Value> FromStr for Pattern<T> {
    type Err = Error;

    /// Build a pattern from a scan template such as `--num=%d`.
    ///
    /// `%%` stands for a literal `%` in the key.
    fn from_str(template: &str) -> Result<Self> {
        let mut key = String::new();

        // Conversion character and end offset of the first placeholder.
        let mut placeholder: Option<(char, usize)> = None;
        let mut placeholders = 0;

        let mut chars = template.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            if c != PLACEHOLDER_PREFIX {
                if placeholder.is_none() {
                    key.push(c);
                }
                continue;
            }

            if let Some((_, PLACEHOLDER_PREFIX)) = chars.peek() {
                chars.next();

                if placeholder.is_none() {
                    key.push(PLACEHOLDER_PREFIX);
                }
                continue;
            }

            if let Some((_, LENGTH_MODIFIER)) = chars.peek() {
                chars.next();
            }

            match chars.next() {
                Some((i, conv)) if KNOWN_CONVERSIONS.contains(&conv) => {
                    placeholders += 1;

                    if placeholder.is_none() {
                        placeholder = Some((conv, i + conv.len_utf8()));
                    }
                }
                _ => return Err(Error::BadPlaceholder(template.into())),
            }
        }

        let (conv, end) = match placeholder {
            Some(found) => found,
            None => return Err(Error::NoPlaceholder(template.into())),
        };

        if placeholders > 1 {
            return Err(Error::MultiplePlaceholders(template.into()));
        }

        if !T::CONVERSIONS.contains(&conv) {
            return Err(Error::WrongPlaceholder {
                found: conv,
                expected: T::NAME,
            });
        }

        let trailing = &template[end..];

        if !trailing.is_empty() {
            return Err(Error::TrailingText(trailing.into()));
        }

        Ok(Pattern::new(&key))
    }
}

impl<T: Value> fmt::Display for Pattern<T> {
    /// Render the pattern as a scan template.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let key = self.key.replace(PLACEHOLDER_PREFIX, "%%");

        write!(f, "{}{}{}", key, PLACEHOLDER_PREFIX, T::CONVERSIONS[0])
    }
}

impl<T: Value> fmt::Debug for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("key", &self.key)
            .field("type", &T::NAME)
            .finish()
    }
}

// `T` is only a marker, so none of these bound it.
impl<T> Clone for Pattern<T> {
    fn clone(&self) -> Self {
        Pattern {
            key: self.key.clone(),
            value_type: PhantomData,
        }
    }
}

impl<T> PartialEq for Pattern<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for Pattern<T> {}
