// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Minimal crate for querying command-line arguments.
//!
//! If you want a real parser, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! To understand what "minimal" means, see the [Limitations](#limitations)
//! section.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate does not parse the command-line. Instead, it answers
//! questions about it:
//!
//! - Was a particular flag specified?
//! - What is the integer, float or string value given for a particular
//!   key (or what default should be used)?
//! - What are the positional arguments?
//!
//! Every question is answered by an independent scan of the arguments, so
//! the questions can be asked in any order, any number of times.
//!
//! # Quickstart
//!
//! 1. Create a [Scanner] for the programs arguments.
//!
//!    ```rust
//!    # use argscan::Scanner;
//!    #
//!    let args = Scanner::from_env();
//!    ```
//!
//! 1. Create a [Pattern] for each value you wish to query, either from a
//!    key or from a scan template.
//!
//!    ```rust
//!    # use argscan::{Pattern, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    let count = Pattern::<i64>::new("--count=");
//!    let ratio: Pattern<f64> = "--ratio=%f".parse()?;
//!    let name: Pattern<String> = "--name=%s".parse()?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Ask the questions you need answering.
//!
//!    ```rust
//!    # use argscan::{Pattern, Scanner};
//!    #
//!    let args = Scanner::new(vec!["prog", "-v", "--count=3", "input.txt"]);
//!
//!    let verbose = args.has_flag("-v");
//!    let count = args.int(&Pattern::new("--count="), 1);
//!    let files = args.positionals();
//!
//!    assert!(verbose);
//!    assert_eq!(count, 3);
//!    assert_eq!(files, vec!["input.txt"]);
//!    ```
//!
//! # Examples
//!
//! ```rust
//! use argscan::{Pattern, Result, Scanner};
//!
//! fn main() -> Result<()> {
//!     let args = Scanner::new(vec![
//!         "prog",
//!         "--name=world",
//!         "--ratio=0.75",
//!         "one",
//!         "-x",
//!         "two",
//!     ]);
//!
//!     let ratio = args.float(&"--ratio=%f".parse()?, 1.0);
//!     assert_eq!(ratio, 0.75);
//!
//!     // Found values are returned owned, the default is returned as-is.
//!     let name = args.string(&"--name=%s".parse()?, "nobody");
//!     assert_eq!(name, "world");
//!
//!     let user = args.string(&"--user=%s".parse()?, "nobody");
//!     assert_eq!(user, "nobody");
//!
//!     // The first match wins and missing values use the default.
//!     let count = args.int(&"--count=%d".parse()?, 10);
//!     assert_eq!(count, 10);
//!
//!     // Positional arguments can be requested in one go...
//!     assert_eq!(args.positionals(), vec!["one", "two"]);
//!
//!     // ... or counted and then fetched.
//!     let n = args.count_positional();
//!     assert_eq!(args.positional_args(n), Some(vec!["one", "two"]));
//!
//!     Ok(())
//! }
//! ```
//!
//! The same queries are available as free functions operating on any
//! slice of strings:
//!
//! ```rust
//! use argscan::{count_positional, get_int, has_flag, Pattern};
//!
//! let argv = ["prog", "-h", "--jobs=4", "file"];
//!
//! assert!(has_flag(&argv, "-h"));
//! assert_eq!(get_int(&argv, &Pattern::new("--jobs="), 1), 4);
//! assert_eq!(count_positional(&argv), 1);
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -v --count=3 --ratio=0.5 --name=foo
//! $ cargo run --example positional-args-only -- one two -x three
//! $ cargo run --example pattern-errors
//! ```
//!
//! Set `RUST_LOG=argscan=trace` to see each query as it is answered.
//!
//! # Details
//!
//! ## Terminology
//!
//! - A "flag" is an argument that is matched exactly, for example `-h` or
//!   `--verbose`.
//!
//! - A "keyed value" is an argument made of a literal key followed by a
//!   value, for example `--count=3`, `--ratio=0.5` or `--name=foo`.
//!
//! - A "pattern" describes a keyed value: its key (`--count=`) and the type
//!   of its value. In a scan template, the value is written as a single
//!   placeholder: `%d` for a decimal integer, `%f` (or `%e`, `%g`) for a
//!   float and `%s` for a string. `%%` is a literal `%`.
//!
//! - A "positional argument" is any argument, other than the program name,
//!   that does not start with a dash.
//!
//! # Summary of features and behaviour
//!
//! - The arguments are never modified.
//! - Queries are independent; no state is kept between them.
//! - Flag and value queries consider every argument, including the program
//!   name (see [Settings] to change this).
//! - When several arguments match, the first one wins.
//! - When nothing matches, the default is returned.
//! - Pattern templates are checked when the pattern is built, and a
//!   pattern can only scan the type it was built for.
//! - Values are scanned leniently by default (`--count=3x` yields `3`);
//!   see [Settings] for strict scanning.
//!
//! # Limitations
//!
//! - There is no validation: unknown arguments are not reported.
//! - Combined flags are not supported.
//!
//!   **Example:** `-v -x` is recognised, but `-vx` is not.
//!
//! - Values must be in the same argument as their key.
//!
//!   **Example:** `--count=3` is valid, but `--count 3` is not.
//!
//! - String values end at the first whitespace character.
//! - A scan template must end with its placeholder.
//!
//!   **Example:** `--size=%d` is valid, but `--size=%dpx` is rejected with
//!   [Error::TrailingText]; `--size=10px` still matches `--size=%d`.
//!
//! - `%i` (integer with base prefix) and hexadecimal floats are not
//!   supported: `%i` templates are rejected and `0x` floats never match.
//! - There is no help / usage generation.

mod args;
mod error;
mod pattern;

pub use error::{Error, Result};

pub use pattern::{Pattern, Value};

pub use args::{
    count_positional, get_args, get_float, get_int, get_positional_args, get_positionals,
    get_string, get_value, has_flag, try_get_string, Scanner, Settings, STRING_VALUE_CAPACITY,
};
