/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Error types for tokenization, grammar checking and file I/O.
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

use crate::lexer::token::TokenKind;
use crate::parser::{Rule, MAX_NESTING_DEPTH};

/// Why the tokenizer gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorKind {
    /// A character that cannot start or continue any token.
    UnexpectedCharacter,

    /// An operator accumulation missing from the symbol table, such as a
    /// lone `!` or `====`.
    UnknownOperator,

    /// A word that is neither a valid variable name nor a known keyword.
    InvalidIdentifier,

    /// End of input inside a string literal.
    UnterminatedString,
}

impl std::fmt::Display for LexicalErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            LexicalErrorKind::UnexpectedCharacter => "Invalid value reached",
            LexicalErrorKind::UnknownOperator => "Unknown operator",
            LexicalErrorKind::InvalidIdentifier => "Invalid identifier",
            LexicalErrorKind::UnterminatedString => "Unterminated string literal",
        };
        f.write_str(reason)
    }
}

/// A tokenization failure.
///
/// Tokenization is all-or-nothing, so this is the only thing the caller
/// gets back when the input is not lexically valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}. Character: {}.{}", describe_char(.character), describe_statement(.text))]
pub struct LexicalError {
    pub kind: LexicalErrorKind,

    /// The offending character, `None` at end of input.
    pub character: Option<char>,

    /// Text accumulated for the pending token, possibly empty.
    pub text: String,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, character: Option<char>, text: impl Into<String>) -> Self {
        Self {
            kind,
            character,
            text: text.into(),
        }
    }
}

fn describe_char(character: &Option<char>) -> String {
    match character {
        Some('\n') => "\\n".to_string(),
        Some(ch) => ch.to_string(),
        None => "end of input".to_string(),
    }
}

fn describe_statement(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(" Statement: {}", text.escape_debug())
    }
}

/// A grammar violation found by the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("Invalid {rule}. Unexpected lexeme: {found}")]
    UnexpectedToken { found: TokenKind, rule: Rule },

    #[error("Unfinished {rule}. Unexpected end of input")]
    UnexpectedEndOfInput { rule: Rule },

    #[error("Invalid {rule}. Nesting deeper than {} levels", MAX_NESTING_DEPTH)]
    NestingTooDeep { rule: Rule },
}

/// Crate-level error covering every way analysis of an input can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_error_display_with_statement() {
        let error = LexicalError::new(LexicalErrorKind::UnknownOperator, Some('x'), "!");
        assert_eq!(
            error.to_string(),
            "Unknown operator. Character: x. Statement: !"
        );
    }

    #[test]
    fn test_lexical_error_display_without_statement() {
        let error = LexicalError::new(LexicalErrorKind::UnexpectedCharacter, Some('#'), "");
        assert_eq!(error.to_string(), "Invalid value reached. Character: #.");
    }

    #[test]
    fn test_lexical_error_display_at_end_of_input() {
        let error = LexicalError::new(LexicalErrorKind::UnterminatedString, None, "\"abc");
        assert_eq!(
            error.to_string(),
            "Unterminated string literal. Character: end of input. Statement: \\\"abc"
        );
    }

    #[test]
    fn test_grammar_error_display() {
        let error = GrammarError::UnexpectedToken {
            found: TokenKind::AddOp,
            rule: Rule::WhileStatement,
        };
        assert_eq!(
            error.to_string(),
            "Invalid while statement. Unexpected lexeme: AddOp"
        );

        let error = GrammarError::UnexpectedEndOfInput {
            rule: Rule::MathExpression,
        };
        assert_eq!(
            error.to_string(),
            "Unfinished math expression. Unexpected end of input"
        );

        let error = GrammarError::NestingTooDeep {
            rule: Rule::MathTerm,
        };
        assert_eq!(
            error.to_string(),
            "Invalid math term. Nesting deeper than 256 levels"
        );
    }
}
