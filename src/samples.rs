/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:      samples.rs
 * Purpose:   Built-in kind sequences exercised by `lexcheck demo`.
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
use crate::lexer::token::TokenKind::{self, *};
use crate::parser::{check, Rule};

/// A hand-written kind sequence and the rule it is checked against.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub rule: Rule,
    pub kinds: &'static [TokenKind],
    /// Whether the checker is expected to accept the sequence.
    pub valid: bool,
}

impl Sample {
    pub fn run(&self) -> Result<(), GrammarError> {
        check(self.rule, self.kinds)
    }
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "Parser for while statement",
        rule: Rule::WhileStatement,
        kinds: &[
            While, LeftParen, Identifier, RelOp, Number, RightParen, LeftBrace, Identifier,
            Assign, Number, Semicolon, RightBrace,
        ],
        valid: true,
    },
    Sample {
        name: "Parser for while with invalid bool",
        rule: Rule::WhileStatement,
        kinds: &[
            While, LeftParen, Identifier, AddOp, Number, RightParen, LeftBrace, Identifier,
            Assign, Number, Semicolon, RightBrace,
        ],
        valid: false,
    },
    Sample {
        name: "Parser for while with math",
        rule: Rule::WhileStatement,
        kinds: &[
            While, LeftParen, Number, AddOp, Number, RelOp, Identifier, RightParen, LeftBrace,
            Identifier, Assign, Number, Semicolon, RightBrace,
        ],
        valid: true,
    },
    Sample {
        name: "Parser for math",
        rule: Rule::MathExpression,
        kinds: &[LeftParen, Number, AddOp, Number, RightParen],
        valid: true,
    },
    Sample {
        name: "Parser for while with math with no closing bracket",
        rule: Rule::WhileStatement,
        kinds: &[
            While, LeftParen, Number, AddOp, Number, RelOp, Identifier, RightParen, LeftBrace,
            Identifier, Assign, Number, Semicolon,
        ],
        valid: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_match_expectation() {
        for sample in SAMPLES {
            assert_eq!(sample.run().is_ok(), sample.valid, "{}", sample.name);
        }
    }

    #[test]
    fn test_invalid_bool_names_add_op() {
        let error = SAMPLES[1].run().unwrap_err();
        assert!(error.to_string().contains("AddOp"));
    }
}
