/*
 * ==========================================================================
 * LEXCHECK - Tokenizer & Grammar Checker
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the recursive-descent grammar checker.
 *
 * This module wires together all checker sub-modules, including:
 *   - Core checker state and entry points
 *   - Statement productions
 *   - Expression productions
 *   - Shared helper utilities
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

/// Core checker orchestration:
/// - Owns the `GrammarChecker` struct and the `Rule` enum
/// - Exposes the `check*` entry points
#[allow(clippy::module_inception)]
pub mod parser;

/// Statement-level productions:
/// - while / block / assignment
/// - statement terminators
pub mod statements;

/// Expression-level productions:
/// - boolean expression / boolean term
/// - math expression / math term
pub mod expressions;

/// Shared checker helpers:
/// - lookahead checks
/// - token consumption
/// - expectation with error reporting
pub mod helpers;

pub use parser::{
    check, check_all, check_assignment_statement, check_block_statement,
    check_boolean_expression, check_math_expression, check_statement, check_while_statement,
    GrammarChecker, Rule, MAX_NESTING_DEPTH,
};
