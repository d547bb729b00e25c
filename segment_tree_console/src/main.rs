/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use segment_tree::SegmentTree;
use segment_tree_console::{Command, ConsoleError, Options, Session, read_initial_values};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Install a global subscriber that logs to stderr, filtered by `RUST_LOG`.
fn init_tracing() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init()
}

fn run(options: Options) -> Result<(), ConsoleError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let values = match options.values {
        Some(values) => values,
        None if options.quiet => read_initial_values(&mut input, None::<&mut io::StdoutLock>)?,
        None => read_initial_values(&mut input, Some(&mut output))?,
    };

    let tree = if values.is_empty() {
        SegmentTree::empty()
    } else {
        SegmentTree::build(&values)?
    };

    let mut session = Session::new(tree)
        .show_after_mutation(options.show)
        .prompt(!options.quiet);
    if options.show {
        writeln!(output, "{}", session.execute(Command::Show)?)?;
    }
    session.run(&mut input, &mut output)
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("failed to initialize logging: {err}");
    }

    let result = Options::parse_from(std::env::args_os().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(ConsoleError::Options(err)) => {
            // Prints usage or help, and exits with clap's status code.
            err.exit()
        }
        Err(err) => {
            error!(%err, "console session failed");
            ExitCode::FAILURE
        }
    }
}
