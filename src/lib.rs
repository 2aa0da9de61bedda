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

//! A finite-state tokenizer and a recursive-descent grammar checker for a
//! small JavaScript-like dialect.
//!
//! ```text
//! Source → lexer::tokenize → Vec<Token> → lexer::kinds → parser::check
//! ```
//!
//! The checker only answers accept or reject. It builds no syntax tree and
//! stops at the first violation.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod samples;
pub mod sources;

pub use error::{Error, GrammarError, LexicalError, LexicalErrorKind};
pub use lexer::{kinds, tokenize, Token, TokenKind};
pub use parser::{check, check_all, Rule};

/// Tokenizes `source` and checks the resulting kinds against `rule`.
///
/// # Returns
/// The tokens on success, so callers can still print them.
///
/// # Example
/// ```rust
/// use lexcheck::{validate, Rule};
///
/// assert!(validate("while (x >= 1) { x = x - 1; }", Rule::WhileStatement).is_ok());
/// assert!(validate("while (x + 1) { x = 1; }", Rule::WhileStatement).is_err());
/// ```
pub fn validate(source: &str, rule: Rule) -> Result<Vec<Token>, Error> {
    let tokens = tokenize(source)?;
    check(rule, &kinds(&tokens))?;
    Ok(tokens)
}

/// Like [`validate`], but `rule` must cover the whole input. Only trailing
/// newlines may follow the match.
///
/// # Example
/// ```rust
/// use lexcheck::{validate, validate_all, Rule};
///
/// let source = "while (x >= 1) x = 1; while (x + 1) ) ) )";
/// assert!(validate(source, Rule::WhileStatement).is_ok());
/// assert!(validate_all(source, Rule::WhileStatement).is_err());
/// ```
pub fn validate_all(source: &str, rule: Rule) -> Result<Vec<Token>, Error> {
    let tokens = tokenize(source)?;
    check_all(rule, &kinds(&tokens))?;
    Ok(tokens)
}
