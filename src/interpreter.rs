/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic, comparison, and concatenation operations, manages
/// variable state, and produces printed output. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables and control flow (`if`/`else`, `while`).
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, text literals, identifiers, operators, delimiters, and keywords.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and text literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables the evaluator to execute user code, and repeated
/// evaluation of the same tree (as `while` requires) without re-parsing.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports arithmetic, comparisons, assignments, and control flow.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the two value kinds used during execution, numbers
/// and text, together with their textual representation and the truthiness
/// rule used by conditions.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two variants.
/// - Implements the uniform textual representation used by `print` and by
///   text concatenation.
/// - Provides the truthiness rule for `if`/`while` conditions.
pub mod value;
