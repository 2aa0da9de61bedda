/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:      lexer/keywords.rs
 * Purpose:   Reserved words, the symbol table and variable name rules.
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

use std::sync::LazyLock;

use regex::Regex;

use crate::lexer::token::TokenKind;

static VARIABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_$][0-9a-zA-Z_$]*$").expect("valid variable name pattern")
});

/// Looks up a keyword or operator symbol in the **symbol table**.
///
/// The table is the single source of truth for which multi-character
/// operators exist: the tokenizer only keeps accumulating `=` onto a
/// relational operator while the result is still listed here.
///
/// # Examples
/// ```text
/// "while" → Some(While)
/// "!=="   → Some(RelOp)
/// "!"     → None
/// ```
pub fn symbol(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "undefined" => TokenKind::Undefined,
        "null" => TokenKind::Null,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "+" => TokenKind::AddOp,
        "-" => TokenKind::SubtractOp,
        "*" => TokenKind::MultiplyOp,
        "/" => TokenKind::DivideOp,
        "=" => TokenKind::Assign,
        "==" | "===" | "!=" | "!==" | ">=" | "<=" => TokenKind::RelOp,
        "(" => TokenKind::LeftParen,
        ")" => TokenKind::RightParen,
        "{" => TokenKind::LeftBrace,
        "}" => TokenKind::RightBrace,
        ";" => TokenKind::Semicolon,
        "\n" => TokenKind::Newline,
        _ => return None,
    };
    Some(kind)
}

/// Single-character punctuation that is emitted straight from the start
/// state.
pub fn punctuation(ch: char) -> Option<TokenKind> {
    match ch {
        ';' => Some(TokenKind::Semicolon),
        '{' => Some(TokenKind::LeftBrace),
        '}' => Some(TokenKind::RightBrace),
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '\n' => Some(TokenKind::Newline),
        _ => None,
    }
}

/// Determines whether a word is a **reserved word** of the source
/// language and therefore can never name a variable.
///
/// Only a handful of these (`if`, `else`, `while`, the literals) have a
/// token kind of their own; the rest are rejected by the tokenizer.
pub fn is_reserved_word(word: &str) -> bool {
    matches!(
        word,
        "do" | "if"
            | "in"
            | "for"
            | "let"
            | "new"
            | "try"
            | "var"
            | "case"
            | "else"
            | "enum"
            | "eval"
            | "false"
            | "null"
            | "undefined"
            | "NaN"
            | "this"
            | "true"
            | "void"
            | "with"
            | "break"
            | "catch"
            | "class"
            | "const"
            | "super"
            | "throw"
            | "while"
            | "yield"
            | "delete"
            | "export"
            | "import"
            | "public"
            | "return"
            | "static"
            | "switch"
            | "typeof"
            | "default"
            | "extends"
            | "finally"
            | "package"
            | "private"
            | "continue"
            | "debugger"
            | "function"
            | "arguments"
            | "interface"
            | "protected"
            | "implements"
            | "instanceof"
    )
}

/// Returns `true` if `word` may be used as a variable name: it starts with
/// an ASCII letter, `_` or `$`, continues with word characters, and is not
/// a reserved word.
pub fn is_variable_name(word: &str) -> bool {
    !is_reserved_word(word) && VARIABLE_NAME.is_match(word)
}
