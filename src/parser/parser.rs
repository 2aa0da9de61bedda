/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * Core Recursive-Descent Grammar Checker
 *
 * This file defines the `GrammarChecker` structure, the `Rule` enum naming
 * every production, and the public `check*()` entry points.
 *
 * The grammar itself is split across:
 * - `statements.rs`   → while / block / assignment / end of statement
 * - `expressions.rs`  → boolean and math expressions
 * - `helpers.rs`      → lookahead, consumption and expectation utilities
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

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::error::GrammarError;
use crate::lexer::token::TokenKind;

/// Deepest parenthesis or block nesting the checker will follow before
/// giving up with [`GrammarError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 256;

/// A named production of the grammar.
///
/// Every rule is an independent entry point, and errors name the rule
/// that was being matched when they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// `while ( BooleanExpression ) [\n] Statement [\n]`
    WhileStatement,
    /// `BlockStatement | AssignmentStatement`
    Statement,
    /// `{ [\n] Statement* }`
    BlockStatement,
    /// `(id | array element) = MathExpression EndOfStatement`
    AssignmentStatement,
    /// `; [\n] | \n | } | end of input`
    EndOfStatement,
    /// `BooleanTerm (RelOp BooleanTerm)*`
    BooleanExpression,
    BooleanTerm,
    /// `MathTerm (ArithmeticOp MathTerm)*`
    MathExpression,
    MathTerm,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::WhileStatement => "while statement",
            Rule::Statement => "statement",
            Rule::BlockStatement => "block statement",
            Rule::AssignmentStatement => "assignment statement",
            Rule::EndOfStatement => "end of statement",
            Rule::BooleanExpression => "boolean expression",
            Rule::BooleanTerm => "boolean term",
            Rule::MathExpression => "math expression",
            Rule::MathTerm => "math term",
        };
        f.write_str(name)
    }
}

/// The recursive-descent grammar checker.
///
/// Holds an immutable kind sequence and a cursor into it. The cursor only
/// ever moves forward; a checker is single-use and each `check*` call
/// builds a fresh one.
///
/// Grammar logic lives in the `statements` and `expressions` modules as
/// additional `impl GrammarChecker` blocks.
pub struct GrammarChecker<'a> {
    /// The kind sequence being validated.
    pub(crate) kinds: &'a [TokenKind],

    /// Index of the next unconsumed kind.
    pub(crate) current: usize,

    /// Open parentheses and blocks around the cursor.
    pub(crate) depth: usize,
}

impl<'a> GrammarChecker<'a> {
    pub fn new(kinds: &'a [TokenKind]) -> Self {
        Self {
            kinds,
            current: 0,
            depth: 0,
        }
    }

    /// Matches `rule` starting at the cursor.
    ///
    /// # Returns
    /// `Ok(())` once the rule has matched. Tokens after the match are left
    /// in place; see [`GrammarChecker::position`].
    pub fn run(&mut self, rule: Rule) -> Result<(), GrammarError> {
        let result = match rule {
            Rule::WhileStatement => self.while_statement(),
            Rule::Statement => self.statement(),
            Rule::BlockStatement => self.block_statement(),
            Rule::AssignmentStatement => self.assignment_statement(),
            Rule::EndOfStatement => self.end_of_statement(),
            Rule::BooleanExpression => self.boolean_expression(),
            Rule::BooleanTerm => self.boolean_term(),
            Rule::MathExpression => self.math_expression(),
            Rule::MathTerm => self.math_term(),
        };

        match &result {
            Ok(()) if !self.is_at_end() => debug!(
                %rule,
                consumed = self.current,
                remaining = self.kinds.len() - self.current,
                "rule matched with trailing tokens"
            ),
            Ok(()) => debug!(%rule, consumed = self.current, "rule matched"),
            Err(error) => debug!(%rule, at = self.current, %error, "rule rejected"),
        }
        result
    }

    /// Matches `rule` against the whole sequence.
    ///
    /// Trailing newlines are allowed; any other kind left after the match
    /// is reported as unexpected for `rule`.
    pub fn run_all(&mut self, rule: Rule) -> Result<(), GrammarError> {
        self.run(rule)?;
        while self.skip_if(TokenKind::Newline) {}

        match self.peek() {
            None => Ok(()),
            Some(found) => Err(Self::unexpected(found, rule)),
        }
    }

    /// Number of kinds consumed so far.
    pub fn position(&self) -> usize {
        self.current
    }
}

/// Public entry point: validates `kinds` against `rule`.
///
/// # Example
/// ```rust
/// use lexcheck::lexer::TokenKind::*;
/// use lexcheck::parser::{check, Rule};
///
/// let kinds = [LeftParen, Number, AddOp, Number, RightParen];
/// assert!(check(Rule::MathExpression, &kinds).is_ok());
/// ```
pub fn check(rule: Rule, kinds: &[TokenKind]) -> Result<(), GrammarError> {
    GrammarChecker::new(kinds).run(rule)
}

/// Like [`check`], but the match must cover every kind except trailing
/// newlines.
///
/// # Example
/// ```rust
/// use lexcheck::lexer::TokenKind::*;
/// use lexcheck::parser::{check, check_all, Rule};
///
/// let kinds = [Identifier, Assign, Number, Semicolon, RightParen];
/// assert!(check(Rule::Statement, &kinds).is_ok());
/// assert!(check_all(Rule::Statement, &kinds).is_err());
/// ```
pub fn check_all(rule: Rule, kinds: &[TokenKind]) -> Result<(), GrammarError> {
    GrammarChecker::new(kinds).run_all(rule)
}

pub fn check_while_statement(kinds: &[TokenKind]) -> Result<(), GrammarError> {
    check(Rule::WhileStatement, kinds)
}

pub fn check_statement(kinds: &[TokenKind]) -> Result<(), GrammarError> {
    check(Rule::Statement, kinds)
}

pub fn check_block_statement(kinds: &[TokenKind]) -> Result<(), GrammarError> {
    check(Rule::BlockStatement, kinds)
}

pub fn check_assignment_statement(kinds: &[TokenKind]) -> Result<(), GrammarError> {
    check(Rule::AssignmentStatement, kinds)
}

pub fn check_boolean_expression(kinds: &[TokenKind]) -> Result<(), GrammarError> {
    check(Rule::BooleanExpression, kinds)
}

pub fn check_math_expression(kinds: &[TokenKind]) -> Result<(), GrammarError> {
    check(Rule::MathExpression, kinds)
}
