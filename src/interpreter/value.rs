/// Represents a runtime value in the interpreter.
///
/// This enum models the two dynamic types a program can produce: numbers and
/// text. Every expression evaluates to one of these; there is no boolean
/// kind — comparisons yield the numbers `1` and `0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// The branch decision a condition value maps to.
    ///
    /// A number is true exactly when it is nonzero. Text is always false —
    /// a non-numeric condition silently selects the `else` branch (or ends
    /// the loop) rather than raising an error.
    ///
    /// # Example
    /// ```
    /// use parva::interpreter::value::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::Text("yes".to_string()).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Text(_) => false,
        }
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Text`].
    ///
    /// [`Text`]: Value::Text
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }
}

/// The uniform textual representation used by `print` and by `+`
/// concatenation.
///
/// A number whose value is integral renders without a decimal point (`1`,
/// not `1.0`); any other number renders in full decimal text. Text renders
/// as-is, unquoted.
///
/// # Example
/// ```
/// use parva::interpreter::value::Value;
///
/// assert_eq!(Value::Number(2.0).to_string(), "2");
/// assert_eq!(Value::Number(2.5).to_string(), "2.5");
/// assert_eq!(Value::Text("hi".to_string()).to_string(), "hi");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
