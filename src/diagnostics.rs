/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   Renders token listings and analysis outcomes as text or JSON.
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

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Error;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::Rule;

/// Shown in place of the newline token's literal value.
pub const NEWLINE_MARKER: &str = "\\n";

const RULE: &str = "----------------------";

/// How reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// One JSON object per input.
    Json,
}

/// The serialized shape of a single input's outcome.
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub file: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<&'a [Token]>,

    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Text shown for a token's value: its lexeme, or [`NEWLINE_MARKER`] for
/// the newline token.
pub fn display_value(token: &Token) -> &str {
    if token.kind == TokenKind::Newline {
        NEWLINE_MARKER
    } else {
        &token.lexeme
    }
}

/// Renders `Kind - value` lines, one per token.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} - {}\n", token.kind, display_value(token)))
        .collect()
}

/// Renders the token listing of one file, or its lexical failure.
///
/// # Output Example
/// ```text
/// ----------------------
/// loop.js
/// ----------------------
///
/// While - while
/// LeftParen - (
/// ...
/// ----------------------
/// ```
pub fn render_listing(
    file: &str,
    result: &Result<Vec<Token>, Error>,
    format: ReportFormat,
) -> Result<String, Error> {
    match format {
        ReportFormat::Text => {
            let body = match result {
                Ok(tokens) => render_tokens(tokens),
                Err(error) => format!("{error}\n"),
            };
            Ok(format!("{RULE}\n{file}\n{RULE}\n\n{body}{RULE}\n"))
        }
        ReportFormat::Json => to_json_line(&FileReport {
            file,
            rule: None,
            tokens: result.as_ref().ok().map(Vec::as_slice),
            ok: result.is_ok(),
            error: result.as_ref().err().map(ToString::to_string),
        }),
    }
}

/// Renders the outcome of checking one file against `rule`.
pub fn render_check(
    file: &str,
    rule: Rule,
    result: &Result<Vec<Token>, Error>,
    format: ReportFormat,
) -> Result<String, Error> {
    match format {
        ReportFormat::Text => Ok(match result {
            Ok(_) => format!("{file}: {rule}: Ok\n"),
            Err(error) => format!("{file}: {rule}: Error\n  {error}\n"),
        }),
        ReportFormat::Json => to_json_line(&FileReport {
            file,
            rule: Some(rule),
            tokens: None,
            ok: result.is_ok(),
            error: result.as_ref().err().map(ToString::to_string),
        }),
    }
}

fn to_json_line(report: &FileReport<'_>) -> Result<String, Error> {
    let mut line = serde_json::to_string(report)?;
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexicalError, LexicalErrorKind};

    fn sample_tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Identifier, "x"),
            Token::new(TokenKind::Assign, "="),
            Token::new(TokenKind::Number, "1"),
            Token::new(TokenKind::Newline, "\n"),
        ]
    }

    #[test]
    fn test_newline_marker() {
        assert_eq!(
            render_tokens(&sample_tokens()),
            "Identifier - x\nAssign - =\nNumber - 1\nNewline - \\n\n"
        );
    }

    #[test]
    fn test_text_listing_frames_file_name() {
        let output = render_listing("a.js", &Ok(sample_tokens()), ReportFormat::Text).unwrap();
        assert!(output.starts_with("----------------------\na.js\n----------------------\n\n"));
        assert!(output.contains("Number - 1\n"));
        assert!(output.ends_with("----------------------\n"));
    }

    #[test]
    fn test_text_listing_shows_error() {
        let error = LexicalError::new(LexicalErrorKind::UnexpectedCharacter, Some('#'), "");
        let output = render_listing("a.js", &Err(error.into()), ReportFormat::Text).unwrap();
        assert!(output.contains("Invalid value reached. Character: #.\n"));
    }

    #[test]
    fn test_json_listing() {
        let tokens = vec![Token::new(TokenKind::Number, "7")];
        let output = render_listing("a.js", &Ok(tokens), ReportFormat::Json).unwrap();
        assert_eq!(
            output,
            "{\"file\":\"a.js\",\"tokens\":[{\"kind\":\"Number\",\"lexeme\":\"7\"}],\"ok\":true}\n"
        );
    }

    #[test]
    fn test_json_check_failure() {
        let error = crate::error::GrammarError::UnexpectedEndOfInput {
            rule: Rule::MathTerm,
        };
        let output =
            render_check("b.js", Rule::MathExpression, &Err(error.into()), ReportFormat::Json)
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["rule"], "math-expression");
        assert_eq!(value["ok"], false);
        assert_eq!(
            value["error"],
            "Unfinished math term. Unexpected end of input"
        );
    }

    #[test]
    fn test_text_check_success() {
        let output =
            render_check("c.js", Rule::WhileStatement, &Ok(vec![]), ReportFormat::Text).unwrap();
        assert_eq!(output, "c.js: while statement: Ok\n");
    }
}
