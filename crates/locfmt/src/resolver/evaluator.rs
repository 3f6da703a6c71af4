//! Expression resolution: the capability handed to formatting functions.

use std::collections::HashMap;

use crate::resolver::{Context, FormatError, FunctionRegistry, compute_suggestions};
use crate::terms::TermStore;
use crate::types::{Expression, Value};

/// Resolution capability bundling the function registry and term store.
///
/// One resolver serves one `format` call. It is threaded into every
/// [`MessageFn`](crate::MessageFn) invocation so functions can resolve their
/// argument and option expressions on demand and call back into the engine
/// for nested function calls.
pub struct Resolver<'a> {
    registry: &'a FunctionRegistry,
    terms: &'a dyn TermStore,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a registry and term store.
    pub fn new(registry: &'a FunctionRegistry, terms: &'a dyn TermStore) -> Self {
        Self { registry, terms }
    }

    /// The term store, for grammatical lookups inside functions.
    pub fn terms(&self) -> &dyn TermStore {
        self.terms
    }

    /// Resolve an expression to a single value under `ctx`.
    ///
    /// Literals resolve to their embedded constant, type-tagged accordingly.
    /// Variable references are looked up in the context bindings. Function
    /// calls look up the registry and hand the *unresolved* argument and
    /// option expressions to the callee along with this resolver.
    ///
    /// # Errors
    ///
    /// - [`FormatError::UnboundVariable`] for a reference with no binding
    /// - [`FormatError::UnknownFunction`] for an unregistered function name
    /// - whatever the invoked function itself reports
    pub fn resolve(
        &self,
        ctx: &Context<'_>,
        expression: &Expression,
    ) -> Result<Value, FormatError> {
        match expression {
            Expression::StringLiteral(text) => Ok(Value::String(text.clone())),
            Expression::BooleanLiteral(flag) => Ok(Value::Boolean(*flag)),
            Expression::NumberLiteral(n) => Ok(Value::Number(*n)),
            Expression::VariableReference(name) => ctx
                .binding(name)
                .cloned()
                .ok_or_else(|| FormatError::UnboundVariable { name: name.clone() }),
            Expression::FunctionCall { name, args, opts } => {
                let function = self.registry.get(name).ok_or_else(|| {
                    let available = self.registry.names();
                    FormatError::UnknownFunction {
                        name: name.clone(),
                        suggestions: compute_suggestions(name, &available),
                    }
                })?;
                function.invoke(self, ctx, args, opts)
            }
        }
    }

    /// Resolve the option named `name`, distinguishing "not supplied".
    ///
    /// Returns `Ok(None)` when the option is absent — distinct from any
    /// resolved value, including `Boolean(false)` and an empty string.
    pub fn resolve_option(
        &self,
        ctx: &Context<'_>,
        opts: &HashMap<String, Expression>,
        name: &str,
    ) -> Result<Option<Value>, FormatError> {
        opts.get(name)
            .map(|expression| self.resolve(ctx, expression))
            .transpose()
    }

    /// Resolve a boolean option. Absent means `false`; a supplied option
    /// with any other tag is a type mismatch — no truthiness coercion.
    pub fn bool_option(
        &self,
        ctx: &Context<'_>,
        opts: &HashMap<String, Expression>,
        name: &str,
    ) -> Result<bool, FormatError> {
        match self.resolve_option(ctx, opts, name)? {
            Some(value) => value.as_boolean().ok_or_else(|| FormatError::TypeMismatch {
                expected: "boolean",
                found: value.type_name(),
            }),
            None => Ok(false),
        }
    }
}
