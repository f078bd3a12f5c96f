use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, skip_newlines},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable binding (`let x = 1;`),
/// - a print statement (`print x;`),
/// - a conditional (`if (…) { … } else { … }`),
/// - a loop (`while (…) { … }`).
///
/// The leading token decides the form; anything else is an error, since the
/// language has no bare expression statements.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a `ParseError` when the next token cannot start a statement or
/// the statement body is malformed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    skip_newlines(tokens);

    match tokens.peek() {
        Some((Token::Let, _)) => parse_assignment(tokens),
        Some((Token::Print, _)) => parse_print(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a variable binding of the form `let <identifier> = <expression> ;`.
///
/// `let` is used both for the first binding of a name and for overwriting an
/// existing one; the distinction does not exist in the grammar.
///
/// The trailing `;` is mandatory and must appear on the same line as the
/// expression — a newline before it fails the parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::Let)?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Assignment { name, value, line })
}

/// Parses a print statement of the form `print <expression> ;`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::Print)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Print { expr, line })
}

/// Parses a conditional with optional `else` branch.
///
/// Syntax:
/// ```text
///     if ( <condition> ) { <statements> }
///     else { <statements> }
/// ```
/// Both branches are parsed eagerly into the AST regardless of what the
/// condition will evaluate to, so parse errors in a never-taken branch still
/// surface. Newlines are permitted between the closing brace of the `then`
/// block and the `else` keyword.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// A `Statement::If` node representing the full conditional.
///
/// # Errors
/// - A missing `(`, `)`, or brace fails with `ExpectedToken`.
/// - Propagates any errors from condition or branch parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::If)?;
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;

    let then_block = parse_block(tokens)?;

    skip_newlines(tokens);
    let else_block = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(parse_block(tokens)?)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_block,
                       else_block,
                       line })
}

/// Parses a loop of the form `while ( <condition> ) { <statements> }`.
///
/// The body is parsed once; the evaluator re-walks the same nodes on every
/// iteration.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::While)?;
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;

    let body = parse_block(tokens)?;

    Ok(Statement::While { condition, body, line })
}
