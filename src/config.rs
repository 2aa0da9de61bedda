/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:      config.rs
 * Purpose:   Command-line configuration for the `lexcheck` binary.
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

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::diagnostics::ReportFormat;
use crate::error::Error;
use crate::parser::Rule;
use crate::sources::{self, SourceFile};

/// Name given to source text passed with `--source`.
pub const INLINE_SOURCE_NAME: &str = "<inline>";

#[derive(Debug, Parser)]
#[command(
    name = "lexcheck",
    version,
    about = "Tokenize a small JavaScript-like dialect and check it against a while-loop grammar"
)]
pub struct Cli {
    /// Log debug output to stderr (overridden by LEXCHECK_LOG / RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the token listing of each input
    Tokens {
        #[command(flatten)]
        input: Input,

        #[arg(long, value_enum, default_value_t)]
        format: ReportFormat,
    },

    /// Tokenize each input and check it against a grammar rule
    Check {
        #[command(flatten)]
        input: Input,

        /// Production the whole input must match
        #[arg(short, long, value_enum, default_value_t = Rule::WhileStatement)]
        rule: Rule,

        #[arg(long, value_enum, default_value_t)]
        format: ReportFormat,
    },

    /// Run the built-in sample kind sequences through the checker
    Demo,
}

/// Where source text comes from: a path or inline text, never both.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct Input {
    /// A source file, or a directory whose .js files are all read
    pub path: Option<PathBuf>,

    /// Source text given directly on the command line
    #[arg(short = 'e', long = "source")]
    pub source: Option<String>,
}

impl Input {
    /// Loads every source this input names.
    pub fn load(&self) -> Result<Vec<SourceFile>, Error> {
        match (&self.path, &self.source) {
            (_, Some(text)) => Ok(vec![SourceFile::new(INLINE_SOURCE_NAME, text.as_str())]),
            (Some(path), None) => sources::collect(path),
            (None, None) => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_defaults_to_while_statement() {
        let cli = Cli::try_parse_from(["lexcheck", "check", "loop.js"]).unwrap();
        match cli.command {
            Command::Check {
                input,
                rule,
                format,
            } => {
                assert_eq!(input.path, Some(PathBuf::from("loop.js")));
                assert_eq!(rule, Rule::WhileStatement);
                assert_eq!(format, ReportFormat::Text);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rule_and_format_flags() {
        let cli = Cli::try_parse_from([
            "lexcheck",
            "-v",
            "check",
            "--rule",
            "math-expression",
            "--format",
            "json",
            "-e",
            "(1 + 2)",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Check {
                input,
                rule,
                format,
            } => {
                assert_eq!(rule, Rule::MathExpression);
                assert_eq!(format, ReportFormat::Json);
                let files = input.load().unwrap();
                assert_eq!(files, vec![SourceFile::new(INLINE_SOURCE_NAME, "(1 + 2)")]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["lexcheck", "tokens"]).is_err());
    }

    #[test]
    fn test_path_and_source_conflict() {
        assert!(Cli::try_parse_from(["lexcheck", "tokens", "a.js", "-e", "x = 1"]).is_err());
    }
}
