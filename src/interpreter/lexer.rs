use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// The scan is greedy over digits and dots; a slice that does not convert
    /// to a number (e.g. `1.2.3`) is rejected by the callback and surfaces as
    /// [`LexError::MalformedNumber`].
    #[regex(r"[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// Text literal tokens, such as `"hello"`.
    ///
    /// `\"` is the only recognized escape; any other backslash stays literal.
    /// Literals may span multiple lines.
    #[regex(r#""([^"\\]|\\.)*""#, unescape_text)]
    Text(String),
    /// `let`
    #[token("let")]
    Let,
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; variable names such as `x` or `count`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// Significant line breaks; statements and blocks may be separated by
    /// them.
    #[token("\n", |lex| lex.extras.line += 1)]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid number.
/// - `None`: If the slice is not a valid number, failing the token.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Resolves the escapes of a text literal and strips its quotes.
///
/// Only `\"` is recognized; any other backslash sequence is kept as written.
/// Newlines inside the literal are counted into the line tracker, since the
/// token callback is the only place that sees them.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The literal contents as a `String`.
fn unescape_text(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    let inner = &slice[1..slice.len() - 1];
    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\\'
           && let Some(next) = chars.next()
        {
            if next == '"' {
                text.push('"');
            } else {
                text.push('\\');
                text.push(next);
            }
        } else {
            text.push(c);
        }
    }

    text
}

/// Tokenizes a complete source string.
///
/// This is the first pipeline stage: it produces the full token sequence up
/// front, each token paired with the 1-based line it starts on. The end of
/// the returned vector is the end-of-input sentinel; the parser consumes the
/// vector to exhaustion.
///
/// # Parameters
/// - `source`: The source text to tokenize.
///
/// # Returns
/// All tokens with their line numbers, in source order.
///
/// # Errors
/// Returns the first [`LexError`] encountered: an unrecognized character, an
/// unterminated text literal, or a malformed numeric literal.
///
/// # Example
/// ```
/// use parva::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 1;").unwrap();
///
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => return Err(classify_failure(&lexer)),
        }
    }

    Ok(tokens)
}

/// Turns a failed match into the matching [`LexError`] variant.
///
/// The first character of the rejected slice decides the kind: a `"` means a
/// text literal that never closed, a digit means a numeric literal the
/// conversion rejected, and anything else is simply a character the language
/// has no token for.
fn classify_failure(lexer: &logos::Lexer<Token>) -> LexError {
    let slice = lexer.slice();
    let line = lexer.extras.line;

    match slice.chars().next() {
        Some('"') => LexError::UnterminatedText { line },
        Some(c) if c.is_ascii_digit() => LexError::MalformedNumber { literal: slice.to_string(),
                                                                     line },
        Some(c) => LexError::UnrecognizedCharacter { character: c,
                                                     line },
        None => LexError::UnrecognizedCharacter { character: '\0',
                                                  line },
    }
}
