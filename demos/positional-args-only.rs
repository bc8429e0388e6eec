// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to handle positional arguments (like `echo(1)`)
/// only.
use argscan::Scanner;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Scanner::from_env();

    // Single pass.
    let positionals = args.positionals();

    println!("INFO: positional arguments: {:?}", positionals);

    // Count first, then fetch. Equivalent, but any argument beyond the
    // count would be dropped.
    let count = args.count_positional();

    match args.positional_args(count) {
        Some(positionals) => println!("INFO: {} positional arguments: {:?}", count, positionals),
        None => eprintln!("ERROR: cannot reserve {} positional arguments", count),
    }

    println!("{}", positionals.join(" "));
}
