//! # parva
//!
//! parva is a minimal dynamically-typed scripting language written in Rust.
//! It tokenizes, parses, and evaluates programs built from numbers, text,
//! variables, `print` statements, and `if`/`while` control flow.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::core::parse_program, value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
/// - Keeps the node set closed, so every traversal is an exhaustive match.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// code. It standardizes error reporting and carries detailed information
/// about failures, including error kinds, descriptions, and source locations
/// for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// source code evaluation. It contains the pipeline stages behind the
/// crate's [`interpret`] entry point.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a complete source unit through the pipeline.
///
/// The source is tokenized, parsed into a program, and evaluated against the
/// given context. Print output goes to the context's sink; the returned value
/// is the result of the program's final statement (an assignment yields the
/// assigned value, other statements yield nothing).
///
/// A context may be reused across calls: variable state, and nothing else,
/// persists from one source unit to the next, which is what an interactive
/// driver needs to keep assignments visible across inputs. A failed call
/// leaves the side effects it had already produced in place; the next call
/// starts a fresh pipeline.
///
/// # Errors
/// Returns the first error of whichever stage failed, tagged by stage:
/// lexical, parse, or runtime.
///
/// # Examples
/// ```
/// use parva::interpreter::evaluator::core::Context;
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut context = Context::new(&mut out);
///
/// parva::interpret("let x = 10; print x + 5;", &mut context).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "15\n");
/// ```
///
/// ```
/// use parva::interpreter::evaluator::core::Context;
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut context = Context::new(&mut out);
///
/// // 'x' is not defined, so evaluation fails.
/// let result = parva::interpret("let y = x + 1;", &mut context);
/// assert!(result.is_err());
/// ```
pub fn interpret(source: &str, context: &mut Context<'_>) -> Result<Option<Value>, Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&mut tokens.iter().peekable())?;
    let result = context.eval_program(&program)?;
    Ok(result)
}
