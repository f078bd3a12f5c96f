#[derive(Debug)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// Found a character the language has no token for.
    ///
    /// This also covers a lone `!`: only the two-character `!=` operator
    /// exists.
    UnrecognizedCharacter {
        /// The character encountered.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A text literal was opened with `"` but never closed.
    UnterminatedText {
        /// The source line where the literal starts.
        line: usize,
    },
    /// A numeric literal that does not convert to a number, e.g. `1.2.3`.
    MalformedNumber {
        /// The literal text as scanned.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character: {character}.")
            },
            Self::UnterminatedText { line } => {
                write!(f, "Error on line {line}: Unterminated text literal.")
            },
            Self::MalformedNumber { literal, line } => {
                write!(f, "Error on line {line}: Malformed number literal: {literal}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
