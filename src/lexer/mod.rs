/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the finite-state tokenizer.
 *
 * This module wires together:
 *   - Token definitions
 *   - The symbol table and variable name rules
 *   - The state machine itself
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

/// `Token` and `TokenKind`.
pub mod token;

/// Symbol table, reserved words, variable name pattern.
pub mod keywords;

/// State enum, transition function and the `tokenize` driver.
#[allow(clippy::module_inception)]
pub mod lexer;

pub use lexer::{kinds, step, tokenize, Action, Lexer, State, Transition};
pub use token::{Token, TokenKind};
