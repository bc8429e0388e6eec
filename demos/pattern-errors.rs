// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing the scan templates that are rejected when a pattern
/// is built.
use argscan::{Error, Pattern};

fn check<T: argscan::Value>(template: &str) -> Result<(), Error> {
    match template.parse::<Pattern<T>>() {
        Ok(pattern) => {
            println!("INFO: {:?} accepted: {:?}", template, pattern);
            Ok(())
        }
        Err(e) => {
            println!("INFO: {:?} rejected: {}", template, e);
            Err(e)
        }
    }
}

fn main() {
    let results = vec![
        check::<i64>("--count=%d"),
        check::<i64>("--count"),
        check::<i64>("--size=%dx%d"),
        check::<i64>("--count=%s"),
        check::<f64>("--ratio=%q"),
        check::<f64>("--ratio=%f%%"),
        check::<String>("--name=%s"),
    ];

    let rejected = results.iter().filter(|r| r.is_err()).count();

    println!("INFO: {} of {} templates rejected", rejected, results.len());
}
