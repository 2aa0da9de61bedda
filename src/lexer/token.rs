/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:      lexer/token.rs
 * Purpose:   Defines the lexical token types produced by the tokenizer and
 *            consumed by the grammar checker.
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

use serde::Serialize;
use std::fmt;

/// The **category of a lexical token**.
///
/// `TokenKind` is all the grammar checker ever looks at; the matched text
/// is dropped once a token has been classified.
///
/// # Pipeline Role
/// ```text
/// Source → Tokenizer → Vec<Token> → Vec<TokenKind> → GrammarChecker
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A variable name such as `x` or `total1`.
    Identifier,

    /// `(`
    LeftParen,

    /// `)`
    RightParen,

    /// `{`
    LeftBrace,

    /// `}`
    RightBrace,

    /// `;`
    Semicolon,

    /// A line break. Unlike other whitespace it is significant and is
    /// emitted as a token of its own.
    Newline,

    If,
    Else,
    While,
    True,
    False,
    Null,
    Undefined,

    /// A single `=`.
    Assign,

    /// One of `==`, `===`, `!=`, `!==`, `>=`, `<=`.
    RelOp,

    AddOp,
    SubtractOp,
    MultiplyOp,
    DivideOp,

    /// A run of ASCII digits.
    Number,

    /// A double-quoted string, quotes included in the lexeme.
    StringLiteral,

    /// An array element access such as `items[0]`.
    ///
    /// Accepted wherever the grammar accepts an assignment target, but the
    /// tokenizer never produces it.
    ArrayElement,

    /// Placeholder for text that could not be classified.
    Invalid,
}

impl TokenKind {
    /// Returns `true` for `+`, `-`, `*` and `/`.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            TokenKind::AddOp | TokenKind::SubtractOp | TokenKind::MultiplyOp | TokenKind::DivideOp
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A **single classified lexeme**.
///
/// # Example Tokens
/// ```text
/// while  →  { kind: While,      lexeme: "while" }
/// x      →  { kind: Identifier, lexeme: "x" }
/// >=     →  { kind: RelOp,      lexeme: ">=" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme, which is what users wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_uses_variant_name() {
        assert_eq!(TokenKind::RelOp.to_string(), "RelOp");
        assert_eq!(TokenKind::StringLiteral.to_string(), "StringLiteral");
    }

    #[test]
    fn test_token_display_is_lexeme() {
        let token = Token::new(TokenKind::RelOp, "!==");
        assert_eq!(token.to_string(), "!==");
    }

    #[test]
    fn test_arithmetic_kinds() {
        assert!(TokenKind::AddOp.is_arithmetic());
        assert!(TokenKind::DivideOp.is_arithmetic());
        assert!(!TokenKind::RelOp.is_arithmetic());
        assert!(!TokenKind::Assign.is_arithmetic());
    }

    #[test]
    fn test_token_serializes_kind_and_lexeme() {
        let token = Token::new(TokenKind::Number, "42");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"Number","lexeme":"42"}"#);
    }
}
