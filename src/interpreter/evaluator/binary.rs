use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation on two already-computed operands.
    ///
    /// When both operands are numbers, `+ - * / %` are double-precision
    /// arithmetic and the comparison operators yield `1` or `0`. Division
    /// checks the right operand against zero before dividing; modulo follows
    /// host float-remainder semantics (the sign follows the dividend, and a
    /// zero divisor yields NaN rather than an error).
    ///
    /// When either operand is text, `+` concatenates the textual forms of
    /// both operands and every other operator is an invalid operation.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use parva::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let x = Value::Number(1.5);
    /// let y = Value::Number(2.0);
    /// let line = 1;
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mul, &x, &y, line).unwrap();
    /// assert_eq!(result, Value::Number(3.0));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &x, &Value::from("s"), line).unwrap();
    /// assert_eq!(result, Value::from("1.5s"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };

        if let (Value::Number(a), Value::Number(b)) = (left, right) {
            let (a, b) = (*a, *b);
            return Ok(Value::Number(match op {
                                        Add => a + b,
                                        Sub => a - b,
                                        Mul => a * b,
                                        Div => {
                                            if b == 0.0 {
                                                return Err(RuntimeError::DivisionByZero { line });
                                            }
                                            a / b
                                        },
                                        Mod => a % b,
                                        Equal => comparison_number(a == b),
                                        NotEqual => comparison_number(a != b),
                                        Less => comparison_number(a < b),
                                        Greater => comparison_number(a > b),
                                        LessEqual => comparison_number(a <= b),
                                        GreaterEqual => comparison_number(a >= b),
                                    }));
        }

        // The only operator defined across mixed or text operands.
        if op == Add {
            return Ok(Value::Text(format!("{left}{right}")));
        }

        Err(RuntimeError::InvalidOperation { op, line })
    }
}

/// The numeric form of a comparison outcome: `1` for true, `0` for false.
const fn comparison_number(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}
