use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_comparison, statement::parse_statement, utils::skip_newlines},
    },
};

/// Result type used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point for parsing. Statements are parsed in order until
/// the token stream is exhausted; newlines between statements are skipped.
/// The whole stream is consumed, so trailing garbage is impossible — any
/// token that cannot start a statement fails the parse.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Program`] owning all statements.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; there is no recovery.
///
/// # Example
/// ```
/// use parva::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("let x = 1;").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.statements.len(), 1);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    skip_newlines(tokens);
    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
        skip_newlines(tokens);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_comparison(tokens)
}
