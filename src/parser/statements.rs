/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  Statement-level productions: while, block, assignment and
 *           statement terminators.
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

use tracing::trace;

use crate::error::GrammarError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{GrammarChecker, Rule};

impl GrammarChecker<'_> {
    /// Checks a `while` loop.
    ///
    /// # Grammar
    /// ```text
    /// while ( BooleanExpression ) [\n] Statement [\n]
    /// ```
    ///
    /// The condition must be a boolean expression: `while (x + 1)` is
    /// rejected at the `+`.
    pub fn while_statement(&mut self) -> Result<(), GrammarError> {
        trace!(at = self.current, "while statement");
        self.expect(TokenKind::While, Rule::WhileStatement)?;
        self.expect(TokenKind::LeftParen, Rule::WhileStatement)?;
        self.boolean_expression()?;
        self.expect(TokenKind::RightParen, Rule::WhileStatement)?;
        self.skip_if(TokenKind::Newline);
        self.statement()?;
        self.skip_if(TokenKind::Newline);
        Ok(())
    }

    /// Dispatches on the next kind: `{` opens a block, an identifier or
    /// array element starts an assignment.
    pub fn statement(&mut self) -> Result<(), GrammarError> {
        trace!(at = self.current, "statement");
        match self.peek() {
            None => Err(GrammarError::UnexpectedEndOfInput {
                rule: Rule::Statement,
            }),
            Some(TokenKind::LeftBrace) => self.block_statement(),
            Some(TokenKind::Identifier | TokenKind::ArrayElement) => self.assignment_statement(),
            Some(found) => Err(Self::unexpected(found, Rule::Statement)),
        }
    }

    /// Checks `{ [\n] Statement* }`.
    ///
    /// Inner statements repeat until the next kind is `}` or the stream
    /// runs out; running out is then reported by the closing `expect`.
    pub fn block_statement(&mut self) -> Result<(), GrammarError> {
        trace!(at = self.current, "block statement");
        self.expect(TokenKind::LeftBrace, Rule::BlockStatement)?;
        self.skip_if(TokenKind::Newline);

        self.nested(Rule::BlockStatement, |checker| {
            while !checker.is_at_end() && !checker.check(TokenKind::RightBrace) {
                checker.statement()?;
            }
            Ok(())
        })?;

        self.expect(TokenKind::RightBrace, Rule::BlockStatement)
    }

    /// Checks `(id | array element) = MathExpression EndOfStatement`.
    pub fn assignment_statement(&mut self) -> Result<(), GrammarError> {
        trace!(at = self.current, "assignment statement");
        self.expect_one_of(
            &[TokenKind::Identifier, TokenKind::ArrayElement],
            Rule::AssignmentStatement,
        )?;
        self.expect(TokenKind::Assign, Rule::AssignmentStatement)?;
        self.math_expression()?;
        self.end_of_statement()
    }

    /// Accepts a statement terminator.
    ///
    /// - `;` is consumed together with one following newline, if any.
    /// - A newline is consumed.
    /// - `}` is accepted but left for the enclosing block to close.
    /// - End of input is accepted silently.
    pub fn end_of_statement(&mut self) -> Result<(), GrammarError> {
        match self.peek() {
            None | Some(TokenKind::RightBrace) => Ok(()),
            Some(TokenKind::Semicolon) => {
                self.current += 1;
                self.skip_if(TokenKind::Newline);
                Ok(())
            }
            Some(TokenKind::Newline) => {
                self.current += 1;
                Ok(())
            }
            Some(found) => Err(Self::unexpected(found, Rule::EndOfStatement)),
        }
    }
}
