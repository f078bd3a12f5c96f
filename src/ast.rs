/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers everything that produces a value when evaluated: literals,
/// variable references, and unary/binary operations. Each variant carries the
/// source line it came from so runtime errors can point back at the input.
///
/// Nodes own their children outright; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `3.14`.
    NumberLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A text literal such as `"hello"`.
    TextLiteral {
        /// The literal contents, with escapes already resolved.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison, or concatenation).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (numeric negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use parva::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumberLiteral { line, .. }
            | Self::TextLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units a program is made of. They produce side effects
/// (environment writes, printed output) and, for assignments, a value that
/// becomes the program result when the assignment is the last statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable binding: `let <name> = <expression> ;`.
    ///
    /// `let` both declares and overwrites: assigning to an existing name
    /// replaces its value.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A print statement: `print <expression> ;`.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A conditional: `if (<condition>) { … } [else { … }]`.
    ///
    /// Both branches are always fully parsed, whichever one ends up running.
    If {
        /// The condition expression.
        condition:  Expr,
        /// Statements executed when the condition is true.
        then_block: Vec<Statement>,
        /// Statements executed otherwise, when an `else` branch is present.
        else_block: Option<Vec<Statement>>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A loop: `while (<condition>) { … }`.
    ///
    /// The condition is re-evaluated before every iteration.
    While {
        /// The condition expression.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
}

/// The root of a parsed program: an ordered list of statements.
///
/// The whole AST is owned by this node; dropping the `Program` drops the
/// tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The program's statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or text concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
