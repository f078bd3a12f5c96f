use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, skip_newlines},
        },
    },
};

/// Parses a block of statements delimited by braces.
///
/// A block consists of zero or more statements, optionally separated by
/// newlines. Parsing continues until a closing `}` token is encountered.
/// Leading newlines before the `{` and newlines inside the block are
/// ignored.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned before the opening brace.
///
/// # Returns
/// The statements the block contains, in source order.
///
/// # Errors
/// Returns a `ParseError` if the opening brace is missing, a statement is
/// malformed, or the input ends before the closing brace; the unclosed-block
/// error cites the line the block was opened on.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    skip_newlines(tokens);
    let line = expect(tokens, &Token::LBrace)?;

    let mut statements = Vec::new();
    loop {
        skip_newlines(tokens);
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => {
                return Err(ParseError::ExpectedToken { expected: format!("{:?}", Token::RBrace),
                                                       found:    "end of input".to_string(),
                                                       line });
            },
        }
    }

    Ok(statements)
}
