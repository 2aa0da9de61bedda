/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * License:
 * This file is part of the LEXCHECK project.
 *
 * LEXCHECK is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::{debug, warn};

use lexcheck::config::{Cli, Command, Input};
use lexcheck::diagnostics::{self, ReportFormat};
use lexcheck::samples::SAMPLES;
use lexcheck::{logging, tokenize, validate_all, Error, Rule};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Command::Tokens { input, format } => run_tokens(&input, format),
        Command::Check {
            input,
            rule,
            format,
        } => run_check(&input, rule, format),
        Command::Demo => run_demo(),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Prints the token listing of every input. A lexical failure in one file
/// is reported and the batch moves on.
fn run_tokens(input: &Input, format: ReportFormat) -> Result<bool, Error> {
    let mut all_ok = true;
    let mut out = io::stdout().lock();

    for file in input.load()? {
        let result = tokenize(&file.content).map_err(Error::from);
        if let Err(e) = &result {
            warn!(file = %file.name, error = %e, "tokenization failed");
            all_ok = false;
        }
        write_report(&mut out, &diagnostics::render_listing(&file.name, &result, format)?)?;
    }

    Ok(all_ok)
}

/// Checks every input against `rule`. A file only passes when the rule
/// matches all of it.
fn run_check(input: &Input, rule: Rule, format: ReportFormat) -> Result<bool, Error> {
    let mut all_ok = true;
    let mut out = io::stdout().lock();

    for file in input.load()? {
        let result = validate_all(&file.content, rule);
        if let Err(e) = &result {
            debug!(file = %file.name, %rule, error = %e, "check failed");
            all_ok = false;
        }
        write_report(&mut out, &diagnostics::render_check(&file.name, rule, &result, format)?)?;
    }

    Ok(all_ok)
}

/// Runs the built-in samples. Succeeds when every sample behaves as its
/// `valid` flag says, including the ones meant to be rejected.
fn run_demo() -> Result<bool, Error> {
    let mut all_ok = true;
    let mut out = io::stdout().lock();

    for sample in SAMPLES {
        let outcome = sample.run();
        let line = match &outcome {
            Ok(()) => "Ok".to_string(),
            Err(e) => format!("{}\nError", e),
        };
        write_report(&mut out, &format!("{}\n{}\n-----------------\n", sample.name, line))?;

        if outcome.is_ok() != sample.valid {
            warn!(sample = sample.name, "sample did not behave as expected");
            all_ok = false;
        }
    }

    Ok(all_ok)
}

fn write_report(out: &mut impl Write, report: &str) -> Result<(), Error> {
    out.write_all(report.as_bytes()).map_err(|source| Error::Io {
        path: "<stdout>".into(),
        source,
    })
}
