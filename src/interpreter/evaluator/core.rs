use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the flat variable environment and
/// the sink that `print` statements write to. There are no nested scopes —
/// one mapping serves the whole program.
///
/// ## Usage
///
/// A `Context` is created once and may be reused across several source units;
/// variable state, and nothing else, persists between them. Tests construct
/// independent instances with their own capture buffers, so nothing leaks
/// between runs.
pub struct Context<'a> {
    /// The variable environment: a flat name-to-value mapping.
    variables: HashMap<String, Value>,
    /// Where `print` output goes.
    output:    &'a mut dyn Write,
}

impl<'a> Context<'a> {
    /// Creates a new evaluation context with an empty variable environment,
    /// writing print output to `output`.
    ///
    /// # Example
    /// ```
    /// use parva::interpreter::evaluator::core::Context;
    ///
    /// let mut out: Vec<u8> = Vec::new();
    /// let context = Context::new(&mut out);
    ///
    /// assert!(context.get_variable("x").is_none());
    /// ```
    #[must_use]
    pub fn new(output: &'a mut dyn Write) -> Self {
        Self { variables: HashMap::new(),
               output }
    }

    /// Evaluates a whole program and returns the last statement's result.
    ///
    /// Statements run in order; intermediate results are discarded, while
    /// side effects (prints and environment writes) happen as each statement
    /// executes. An assignment yields the assigned value, the other
    /// statement forms yield nothing, and an empty program yields `None`.
    ///
    /// # Parameters
    /// - `program`: The parsed program to execute.
    ///
    /// # Returns
    /// The result of the final statement, if it produced one.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; execution stops there, with
    /// all side effects of earlier statements already applied.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in &program.statements {
            result = self.eval_statement(statement)?;
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Handles variable bindings, print statements, conditionals, and loops.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for assignments (the assigned value), `None` for the
    /// other statement forms.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value.clone());
                Ok(Some(value))
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                writeln!(self.output, "{value}").expect("Writing to program output should always succeed.");
                Ok(None)
            },
            Statement::If { condition,
                            then_block,
                            else_block,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.eval_block(then_block)?;
                } else if let Some(else_block) = else_block {
                    self.eval_block(else_block)?;
                }
                Ok(None)
            },
            Statement::While { condition, body, .. } => {
                while self.eval(condition)?.is_truthy() {
                    self.eval_block(body)?;
                }
                Ok(None)
            },
        }
    }

    /// Runs the statements of a branch or loop body in order, discarding
    /// their results.
    fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The walk is
    /// strict post-order: operands are fully evaluated before their operator
    /// combines them.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Example
    /// ```
    /// use parva::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut out: Vec<u8> = Vec::new();
    /// let mut context = Context::new(&mut out);
    /// let expr = Expr::NumberLiteral { value: 5.0,
    ///                                  line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Number(5.0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::NumberLiteral { value, .. } => Ok(Value::Number(*value)),
            Expr::TextLiteral { value, .. } => Ok(Value::Text(value.clone())),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
        }
    }

    /// Looks up a variable by name.
    ///
    /// Reading a name that was never assigned is an error; there is no
    /// implicit default value.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The variable's current value.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` naming the variable when it
    /// is not bound.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(),
                                                             line })
    }

    /// Reads a variable's current value without evaluating anything.
    ///
    /// Intended for drivers and tests inspecting the environment between
    /// source units.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}
