/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:      lexer/lexer.rs
 * Purpose:   Character-level finite-state tokenizer.
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

use tracing::{debug, trace};

use crate::error::{LexicalError, LexicalErrorKind};
use crate::lexer::keywords::{is_variable_name, punctuation, symbol};
use crate::lexer::token::{Token, TokenKind};

/// States of the tokenizer's finite-state machine.
///
/// There is no explicit error state: a failing transition returns a
/// [`LexicalError`] and the whole scan stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between tokens.
    Start,
    /// Inside a run of digits.
    Number,
    /// Inside a word that may turn out to be a keyword.
    Identifier,
    /// Just read one of `+ - * /`.
    Operator,
    /// Inside a double-quoted string.
    StringLiteral,
    /// Just read a lone `=`.
    Assign,
    /// Accumulating `==`, `===`, `!=`, `!==`, `>=` or `<=`.
    RelOp,
    /// End of input reached between tokens.
    Finish,
}

/// What the driver loop does with the character a transition looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The character was consumed.
    Advance,
    /// A token was emitted and the same character must be fed to the start
    /// state. Only ever returned together with [`State::Start`].
    Retry,
}

/// The outcome of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: State,
    pub action: Action,
    pub emitted: Option<Token>,
}

impl Transition {
    fn stay(state: State) -> Self {
        Self {
            state,
            action: Action::Advance,
            emitted: None,
        }
    }

    fn emit(token: Token, action: Action) -> Self {
        Self {
            state: State::Start,
            action,
            emitted: Some(token),
        }
    }
}

/// Tokenizes a complete source string.
///
/// # Returns
/// Every token in source order, or the first [`LexicalError`]. No partial
/// token list is ever returned.
///
/// # Example
/// ```rust
/// use lexcheck::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("x = 1;").unwrap();
/// assert_eq!(tokens[1].kind, TokenKind::Assign);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source).scan_tokens()
}

/// Strips tokens down to the kind-only sequence the grammar checker reads.
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

/// Owns the scanning state for a single tokenization call.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    state: State,
    buffer: String,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            state: State::Start,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Runs the state machine until it reaches [`State::Finish`].
    ///
    /// End of input is fed to the machine as `None`, so every state gets a
    /// chance to flush its pending token before the scan finishes.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexicalError> {
        while self.state != State::Finish {
            let ch = self.chars.get(self.current).copied();
            let transition = step(self.state, &mut self.buffer, ch)?;

            if let Some(token) = transition.emitted {
                trace!(kind = %token.kind, lexeme = ?token.lexeme, "emit token");
                self.tokens.push(token);
            }
            if transition.action == Action::Advance && ch.is_some() {
                self.current += 1;
            }
            self.state = transition.state;
        }

        debug!(count = self.tokens.len(), "tokenized source");
        Ok(self.tokens)
    }
}

/// The transition function: `(state, char) → (state, emitted token?)`.
///
/// `buffer` holds the text of the pending multi-character token. It is
/// cleared whenever a token is emitted.
pub fn step(
    state: State,
    buffer: &mut String,
    ch: Option<char>,
) -> Result<Transition, LexicalError> {
    match state {
        State::Start => start(buffer, ch),

        State::Number => match ch {
            Some(c) if c.is_ascii_digit() => {
                buffer.push(c);
                Ok(Transition::stay(State::Number))
            }
            _ => {
                end_of_word(buffer, ch)?;
                Ok(Transition::emit(take(buffer, TokenKind::Number), Action::Retry))
            }
        },

        State::Identifier => match ch {
            Some(c) if c.is_alphanumeric() => {
                buffer.push(c);
                Ok(Transition::stay(State::Identifier))
            }
            _ => {
                end_of_word(buffer, ch)?;
                let kind = classify_word(buffer, ch)?;
                Ok(Transition::emit(take(buffer, kind), Action::Retry))
            }
        },

        State::Operator => {
            let kind = lookup_operator(buffer, ch)?;
            Ok(Transition::emit(take(buffer, kind), Action::Retry))
        }

        State::StringLiteral => match ch {
            Some('"') => {
                buffer.push('"');
                Ok(Transition::emit(
                    take(buffer, TokenKind::StringLiteral),
                    Action::Advance,
                ))
            }
            Some(c) => {
                buffer.push(c);
                Ok(Transition::stay(State::StringLiteral))
            }
            None => Err(LexicalError::new(
                LexicalErrorKind::UnterminatedString,
                None,
                buffer.as_str(),
            )),
        },

        State::Assign => match ch {
            Some('=') => {
                buffer.push('=');
                Ok(Transition::stay(State::RelOp))
            }
            _ => Ok(Transition::emit(
                take(buffer, TokenKind::Assign),
                Action::Retry,
            )),
        },

        State::RelOp => match ch {
            Some('=') => {
                buffer.push('=');
                if symbol(buffer).is_some() {
                    Ok(Transition::stay(State::RelOp))
                } else {
                    Err(LexicalError::new(
                        LexicalErrorKind::UnknownOperator,
                        ch,
                        buffer.as_str(),
                    ))
                }
            }
            _ => {
                let kind = lookup_operator(buffer, ch)?;
                Ok(Transition::emit(take(buffer, kind), Action::Retry))
            }
        },

        State::Finish => Ok(Transition::stay(State::Finish)),
    }
}

fn start(buffer: &mut String, ch: Option<char>) -> Result<Transition, LexicalError> {
    let Some(c) = ch else {
        return Ok(Transition::stay(State::Finish));
    };

    let next = match c {
        c if is_whitespace(c) => return Ok(Transition::stay(State::Start)),
        c if c.is_ascii_digit() => State::Number,
        c if c.is_alphabetic() => State::Identifier,
        '+' | '-' | '*' | '/' => State::Operator,
        '"' => State::StringLiteral,
        '=' => State::Assign,
        '>' | '<' | '!' => State::RelOp,
        c => {
            return match punctuation(c) {
                Some(kind) => Ok(Transition::emit(
                    Token::new(kind, c.to_string()),
                    Action::Advance,
                )),
                None => Err(LexicalError::new(
                    LexicalErrorKind::UnexpectedCharacter,
                    Some(c),
                    "",
                )),
            };
        }
    };

    buffer.push(c);
    Ok(Transition::stay(next))
}

/// Space, tab and carriage return. Newline is a token, not whitespace.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Characters that may end a number or word without a separating space.
fn is_delimiter(c: char) -> bool {
    is_whitespace(c)
        || punctuation(c).is_some()
        || matches!(c, '+' | '-' | '*' | '/' | '=' | '!' | '<' | '>')
}

fn end_of_word(buffer: &str, ch: Option<char>) -> Result<(), LexicalError> {
    match ch {
        Some(c) if !is_delimiter(c) => Err(LexicalError::new(
            LexicalErrorKind::UnexpectedCharacter,
            Some(c),
            buffer,
        )),
        _ => Ok(()),
    }
}

/// Decides between an identifier and a keyword once the word is complete.
fn classify_word(word: &str, ch: Option<char>) -> Result<TokenKind, LexicalError> {
    if is_variable_name(word) {
        return Ok(TokenKind::Identifier);
    }
    symbol(word)
        .ok_or_else(|| LexicalError::new(LexicalErrorKind::InvalidIdentifier, ch, word))
}

fn lookup_operator(buffer: &str, ch: Option<char>) -> Result<TokenKind, LexicalError> {
    symbol(buffer).ok_or_else(|| LexicalError::new(LexicalErrorKind::UnknownOperator, ch, buffer))
}

fn take(buffer: &mut String, kind: TokenKind) -> Token {
    Token::new(kind, std::mem::take(buffer))
}
