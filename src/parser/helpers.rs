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

use crate::error::GrammarError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{GrammarChecker, Rule, MAX_NESTING_DEPTH};

impl GrammarChecker<'_> {
    /// Returns the next kind without consuming it.
    pub fn peek(&self) -> Option<TokenKind> {
        self.kinds.get(self.current).copied()
    }

    /// Checks the next kind without consuming it.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Returns true once every kind has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.kinds.len()
    }

    /// Consumes and returns the next kind.
    ///
    /// # Errors
    /// [`GrammarError::UnexpectedEndOfInput`] naming `rule` when the stream
    /// is exhausted.
    pub fn advance(&mut self, rule: Rule) -> Result<TokenKind, GrammarError> {
        let kind = self
            .peek()
            .ok_or(GrammarError::UnexpectedEndOfInput { rule })?;
        self.current += 1;
        Ok(kind)
    }

    /// Consumes a required kind or fails.
    pub fn expect(&mut self, expected: TokenKind, rule: Rule) -> Result<(), GrammarError> {
        self.expect_one_of(&[expected], rule).map(|_| ())
    }

    /// Consumes the next kind, which must be one of `expected`.
    pub fn expect_one_of(
        &mut self,
        expected: &[TokenKind],
        rule: Rule,
    ) -> Result<TokenKind, GrammarError> {
        let found = self.advance(rule)?;
        if expected.contains(&found) {
            Ok(found)
        } else {
            Err(GrammarError::UnexpectedToken { found, rule })
        }
    }

    /// Consumes the next kind only if it matches. Never fails.
    pub fn skip_if(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Runs `inner` one nesting level deeper.
    ///
    /// # Errors
    /// [`GrammarError::NestingTooDeep`] naming `rule` once
    /// [`MAX_NESTING_DEPTH`] levels are already open.
    pub(crate) fn nested(
        &mut self,
        rule: Rule,
        inner: impl FnOnce(&mut Self) -> Result<(), GrammarError>,
    ) -> Result<(), GrammarError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(GrammarError::NestingTooDeep { rule });
        }
        self.depth += 1;
        let result = inner(self);
        self.depth -= 1;
        result
    }

    /// Error for a kind that no alternative of `rule` accepts.
    pub(crate) fn unexpected(found: TokenKind, rule: Rule) -> GrammarError {
        GrammarError::UnexpectedToken { found, rule }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    #[test]
    fn test_peek_does_not_consume() {
        let kinds = [Number, AddOp];
        let checker = GrammarChecker::new(&kinds);
        assert_eq!(checker.peek(), Some(Number));
        assert_eq!(checker.peek(), Some(Number));
        assert!(checker.check(Number));
    }

    #[test]
    fn test_advance_past_end() {
        let kinds = [Number];
        let mut checker = GrammarChecker::new(&kinds);
        assert_eq!(checker.advance(Rule::MathTerm), Ok(Number));
        assert!(checker.is_at_end());
        assert_eq!(
            checker.advance(Rule::MathTerm),
            Err(GrammarError::UnexpectedEndOfInput {
                rule: Rule::MathTerm
            })
        );
    }

    #[test]
    fn test_expect_reports_found_kind() {
        let kinds = [Semicolon];
        let mut checker = GrammarChecker::new(&kinds);
        assert_eq!(
            checker.expect(RightParen, Rule::MathTerm),
            Err(GrammarError::UnexpectedToken {
                found: Semicolon,
                rule: Rule::MathTerm
            })
        );
    }

    #[test]
    fn test_nested_restores_depth() {
        let kinds = [Number];
        let mut checker = GrammarChecker::new(&kinds);
        let result = checker.nested(Rule::MathTerm, |c| c.expect(Number, Rule::MathTerm));
        assert_eq!(result, Ok(()));
        assert_eq!(checker.depth, 0);
    }

    #[test]
    fn test_nested_refuses_past_limit() {
        let mut checker = GrammarChecker::new(&[]);
        checker.depth = MAX_NESTING_DEPTH;
        assert_eq!(
            checker.nested(Rule::BlockStatement, |_| Ok(())),
            Err(GrammarError::NestingTooDeep {
                rule: Rule::BlockStatement
            })
        );
    }

    #[test]
    fn test_skip_if() {
        let kinds = [Newline, Identifier];
        let mut checker = GrammarChecker::new(&kinds);
        assert!(!checker.skip_if(Identifier));
        assert!(checker.skip_if(Newline));
        assert!(checker.check(Identifier));
    }
}
