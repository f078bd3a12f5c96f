use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division with a right operand of zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator was applied to operands it is not defined for.
    ///
    /// Between non-numeric operands only `+` (concatenation) is defined.
    InvalidOperation {
        /// The offending operator.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied to an operand it is not defined for.
    InvalidUnaryOperation {
        /// The offending operator.
        op:   UnaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable: {name}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::InvalidOperation { op, line } => {
                write!(f, "Error on line {line}: Invalid operation: {op}.")
            },
            Self::InvalidUnaryOperation { op, line } => {
                write!(f, "Error on line {line}: Invalid unary operation: {op}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
