// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to query flags and keyed values.
use argscan::{Pattern, Result, Scanner};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Try RUST_LOG=argscan=trace to see every argument checked.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Scanner::from_env().skip_program_name();

    // Support "-v" and "--verbose" flags.
    let verbose = args.has_flag("-v") || args.has_flag("--verbose");

    // Support "--count=<integer>", "--ratio=<float>" and "--name=<string>".
    let count: Pattern<i64> = "--count=%d".parse()?;
    let ratio: Pattern<f64> = "--ratio=%f".parse()?;
    let name: Pattern<String> = "--name=%s".parse()?;

    println!("INFO: verbose: {}", verbose);
    println!("INFO: count: {}", args.int(&count, 1));
    println!("INFO: ratio: {}", args.float(&ratio, 1.0));
    println!("INFO: name: {:?}", args.string(&name, "nobody"));

    Ok(())
}
