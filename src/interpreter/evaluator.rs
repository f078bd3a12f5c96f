/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// comparisons, and text concatenation, including the coercion rules between
/// numbers and text.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context with its variable
/// environment and output sink, and statement execution.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, the only unary operation.
pub mod unary;
