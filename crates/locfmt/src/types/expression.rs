use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A template expression, consumed pre-parsed.
///
/// Messages are built from expressions: literal constants, references to
/// runtime arguments, and calls to registered formatting functions. Function
/// arguments and options are themselves expressions and stay unresolved until
/// the callee asks for them, so a function can consult one option and skip
/// another entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// A literal string.
    StringLiteral(String),

    /// A literal boolean.
    BooleanLiteral(bool),

    /// A literal integer.
    NumberLiteral(i64),

    /// A reference to a named argument binding: resolved against the
    /// context's bindings at format time.
    VariableReference(String),

    /// A call to a registered formatting function with ordered arguments and
    /// named options.
    FunctionCall {
        name: String,
        #[serde(default)]
        args: Vec<Expression>,
        #[serde(default)]
        opts: HashMap<String, Expression>,
    },
}

impl Expression {
    /// A literal string expression.
    pub fn literal(text: impl Into<String>) -> Self {
        Expression::StringLiteral(text.into())
    }

    /// A reference to the argument binding named `name`.
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::VariableReference(name.into())
    }
}
