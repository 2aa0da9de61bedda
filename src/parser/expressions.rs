/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Boolean and math expression productions.
 *
 * Both expression kinds are flat left-to-right chains. There is no operator
 * precedence: `1 + 2 * 3` is just three terms joined by two operators.
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
    /// `BooleanTerm (RelOp BooleanTerm)*`
    ///
    /// The chain stops, without consuming, at the first kind that is not a
    /// relational operator.
    pub fn boolean_expression(&mut self) -> Result<(), GrammarError> {
        trace!(at = self.current, "boolean expression");
        self.boolean_term()?;

        while self.skip_if(TokenKind::RelOp) {
            self.boolean_term()?;
        }
        Ok(())
    }

    /// A single operand of a boolean expression.
    ///
    /// # Grammar
    /// ```text
    /// string | id | true | false | undefined | null
    ///   | MathExpression            (when led by a number)
    ///   | ( BooleanExpression )
    /// ```
    pub fn boolean_term(&mut self) -> Result<(), GrammarError> {
        match self.peek() {
            None => Err(GrammarError::UnexpectedEndOfInput {
                rule: Rule::BooleanTerm,
            }),
            Some(
                TokenKind::StringLiteral
                | TokenKind::Identifier
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Undefined
                | TokenKind::Null,
            ) => {
                self.current += 1;
                Ok(())
            }
            Some(TokenKind::Number) => self.math_expression(),
            Some(TokenKind::LeftParen) => {
                self.current += 1;
                self.nested(Rule::BooleanTerm, |checker| {
                    checker.boolean_expression()?;
                    checker.expect(TokenKind::RightParen, Rule::BooleanTerm)
                })
            }
            Some(found) => Err(Self::unexpected(found, Rule::BooleanTerm)),
        }
    }

    /// `MathTerm (ArithmeticOp MathTerm)*`
    pub fn math_expression(&mut self) -> Result<(), GrammarError> {
        trace!(at = self.current, "math expression");
        self.math_term()?;

        while self.peek().is_some_and(TokenKind::is_arithmetic) {
            self.current += 1;
            self.math_term()?;
        }
        Ok(())
    }

    /// `number | string | id | undefined | null | ( MathExpression )`
    pub fn math_term(&mut self) -> Result<(), GrammarError> {
        match self.advance(Rule::MathTerm)? {
            TokenKind::Number
            | TokenKind::StringLiteral
            | TokenKind::Identifier
            | TokenKind::Undefined
            | TokenKind::Null => Ok(()),
            TokenKind::LeftParen => self.nested(Rule::MathTerm, |checker| {
                checker.math_expression()?;
                checker.expect(TokenKind::RightParen, Rule::MathTerm)
            }),
            found => Err(Self::unexpected(found, Rule::MathTerm)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GrammarError;
    use crate::lexer::token::TokenKind::*;
    use crate::parser::parser::{check, GrammarChecker, Rule, MAX_NESTING_DEPTH};

    #[test]
    fn test_parenthesized_math() {
        let kinds = [LeftParen, Number, AddOp, Number, RightParen];
        assert_eq!(check(Rule::MathExpression, &kinds), Ok(()));
    }

    #[test]
    fn test_parenthesized_math_missing_close() {
        let kinds = [LeftParen, Number, AddOp, Number];
        assert_eq!(
            check(Rule::MathExpression, &kinds),
            Err(GrammarError::UnexpectedEndOfInput {
                rule: Rule::MathTerm
            })
        );
    }

    #[test]
    fn test_math_chain_of_every_operator() {
        let kinds = [
            Identifier, AddOp, Number, SubtractOp, StringLiteral, MultiplyOp, Null, DivideOp,
            Undefined,
        ];
        let mut checker = GrammarChecker::new(&kinds);
        assert_eq!(checker.run(Rule::MathExpression), Ok(()));
        assert!(checker.is_at_end());
    }

    #[test]
    fn test_math_dangling_operator() {
        assert_eq!(
            check(Rule::MathExpression, &[Number, MultiplyOp]),
            Err(GrammarError::UnexpectedEndOfInput {
                rule: Rule::MathTerm
            })
        );
    }

    #[test]
    fn test_math_rejects_boolean_literal() {
        assert_eq!(
            check(Rule::MathExpression, &[True]),
            Err(GrammarError::UnexpectedToken {
                found: True,
                rule: Rule::MathTerm
            })
        );
    }

    #[test]
    fn test_math_stops_before_relational_operator() {
        let kinds = [Number, AddOp, Number, RelOp, Identifier];
        let mut checker = GrammarChecker::new(&kinds);
        assert_eq!(checker.run(Rule::MathExpression), Ok(()));
        assert_eq!(checker.position(), 3);
    }

    #[test]
    fn test_boolean_chain() {
        let kinds = [Identifier, RelOp, True, RelOp, StringLiteral];
        assert_eq!(check(Rule::BooleanExpression, &kinds), Ok(()));
    }

    #[test]
    fn test_boolean_with_math_operand() {
        let kinds = [Number, AddOp, Number, RelOp, Identifier];
        let mut checker = GrammarChecker::new(&kinds);
        assert_eq!(checker.run(Rule::BooleanExpression), Ok(()));
        assert!(checker.is_at_end());
    }

    #[test]
    fn test_boolean_parenthesized() {
        let kinds = [LeftParen, Identifier, RelOp, Null, RightParen, RelOp, False];
        assert_eq!(check(Rule::BooleanExpression, &kinds), Ok(()));
    }

    #[test]
    fn test_boolean_unclosed_paren() {
        let kinds = [LeftParen, Identifier, RelOp, Null];
        assert_eq!(
            check(Rule::BooleanExpression, &kinds),
            Err(GrammarError::UnexpectedEndOfInput {
                rule: Rule::BooleanTerm
            })
        );
    }

    #[test]
    fn test_boolean_rejects_operator_lead() {
        assert_eq!(
            check(Rule::BooleanExpression, &[AddOp, Number]),
            Err(GrammarError::UnexpectedToken {
                found: AddOp,
                rule: Rule::BooleanTerm
            })
        );
    }

    #[test]
    fn test_boolean_missing_right_operand() {
        assert_eq!(
            check(Rule::BooleanExpression, &[Identifier, RelOp]),
            Err(GrammarError::UnexpectedEndOfInput {
                rule: Rule::BooleanTerm
            })
        );
    }

    #[test]
    fn test_deep_math_nesting_is_an_error() {
        let mut kinds = vec![LeftParen; 100_000];
        kinds.push(Number);
        assert_eq!(
            check(Rule::MathExpression, &kinds),
            Err(GrammarError::NestingTooDeep {
                rule: Rule::MathTerm
            })
        );
    }

    #[test]
    fn test_deep_boolean_nesting_is_an_error() {
        let mut kinds = vec![LeftParen; 100_000];
        kinds.push(True);
        assert_eq!(
            check(Rule::BooleanExpression, &kinds),
            Err(GrammarError::NestingTooDeep {
                rule: Rule::BooleanTerm
            })
        );
    }

    #[test]
    fn test_nesting_up_to_limit_is_accepted() {
        let mut kinds = vec![LeftParen; MAX_NESTING_DEPTH];
        kinds.push(Number);
        kinds.extend(vec![RightParen; MAX_NESTING_DEPTH]);
        assert_eq!(check(Rule::MathExpression, &kinds), Ok(()));
    }
}
