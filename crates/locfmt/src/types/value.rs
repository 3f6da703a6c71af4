use serde::{Deserialize, Serialize};

/// A runtime value produced by resolving a template expression.
///
/// The `Value` enum is the dynamic type system of the formatting engine:
/// argument bindings are supplied as values, and every resolved expression
/// yields exactly one value. Values are immutable once constructed; there is
/// no implicit conversion between tags — consumers that expect a particular
/// tag use the `as_*` accessors and report a type mismatch on `None`.
///
/// # Example
///
/// ```
/// use locfmt::Value;
///
/// // Strings become Value::String
/// let item: Value = "t-shirt".into();
///
/// // Integers become Value::Number
/// let count: Value = 3.into();
///
/// // Booleans become Value::Boolean
/// let flag: Value = true.into();
///
/// assert_eq!(item.as_string(), Some("t-shirt"));
/// assert_eq!(count.as_number(), Some(3));
/// assert_eq!(flag.as_boolean(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A string value.
    String(String),

    /// A boolean flag.
    Boolean(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),
}

impl Value {
    /// Get this value as a string slice, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is one. Numbers widen to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// The name of this value's tag, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::Float(_) => "float",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Boolean(flag) => write!(f, "{flag}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
        }
    }
}

// From implementations for common types

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Boolean(flag)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}
