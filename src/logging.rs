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

//! Logging setup. All output goes to stderr so stdout stays a clean report.
//!
//! ## Environment Variables
//!
//! 1. **`LEXCHECK_LOG`** (highest priority) - lexcheck-specific logging control
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn`, or `debug` for this crate with `--verbose`

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging for the binary.
///
/// Safe to call more than once; later calls report the existing subscriber
/// as an error instead of panicking.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    fmt()
        .with_env_filter(create_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

/// Initialize logging for tests. Never fails, whatever other tests did.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter(false))
        .with_test_writer()
        .try_init();
}

/// Implements the priority system: `LEXCHECK_LOG` > `RUST_LOG` > defaults.
fn create_filter(verbose: bool) -> EnvFilter {
    if let Ok(level) = env::var("LEXCHECK_LOG") {
        return expand_lexcheck_log(&level);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    if verbose {
        EnvFilter::new("warn,lexcheck=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// `LEXCHECK_LOG=trace` becomes `warn,lexcheck=trace`; anything with
/// directive syntax is used as-is.
fn expand_lexcheck_log(level: &str) -> EnvFilter {
    if level.contains('=') || level.contains(':') || level.contains(',') {
        return EnvFilter::new(level);
    }
    EnvFilter::new(format!("warn,lexcheck={level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_level() {
        let filter = expand_lexcheck_log("trace");
        let rendered = filter.to_string();
        assert!(rendered.contains("lexcheck=trace"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn test_expand_keeps_directives() {
        let filter = expand_lexcheck_log("lexcheck::parser=trace");
        let rendered = filter.to_string();
        assert!(rendered.contains("lexcheck::parser=trace"));
        assert!(!rendered.contains("warn"));
    }

    #[test]
    fn test_repeated_test_init() {
        test();
        test();
    }
}
