//! Function registry mapping names to grammatical formatting functions.

use std::collections::HashMap;

use crate::resolver::{Context, FormatError, Resolver};
use crate::types::{Expression, Value};

/// A custom formatting function invocable from `FunctionCall` expressions.
///
/// Implementations receive their argument and option expressions
/// *unresolved*, together with a [`Resolver`]: the function decides which
/// expressions to resolve and in what order, which lets it short-circuit —
/// e.g. consult an option under one locale branch only, or fall back to a
/// second option when the first is absent. An absent option is reported as a
/// distinguished "not supplied", never conflated with `false` or an empty
/// string.
///
/// Functions must be read-only with respect to the context and term store
/// and return exactly one [`Value`].
pub trait MessageFn: Send + Sync {
    /// Invoke the function under `ctx` with unresolved `args` and `opts`.
    fn invoke(
        &self,
        resolver: &Resolver<'_>,
        ctx: &Context<'_>,
        args: &[Expression],
        opts: &HashMap<String, Expression>,
    ) -> Result<Value, FormatError>;
}

impl<F> MessageFn for F
where
    F: Fn(
            &Resolver<'_>,
            &Context<'_>,
            &[Expression],
            &HashMap<String, Expression>,
        ) -> Result<Value, FormatError>
        + Send
        + Sync,
{
    fn invoke(
        &self,
        resolver: &Resolver<'_>,
        ctx: &Context<'_>,
        args: &[Expression],
        opts: &HashMap<String, Expression>,
    ) -> Result<Value, FormatError> {
        self(resolver, ctx, args, opts)
    }
}

/// Registry of named formatting functions.
///
/// Explicitly constructed and populated by initialization code, then moved
/// into a [`Formatter`](crate::Formatter) — after that point it is only
/// read, so concurrent format calls need no synchronization. Registering a
/// name twice overwrites the earlier entry (last write wins).
///
/// # Example
///
/// ```
/// use locfmt::{FunctionRegistry, Value};
///
/// let mut registry = FunctionRegistry::new();
/// registry.register("UPPER", |resolver: &locfmt::Resolver<'_>,
///                            ctx: &locfmt::Context<'_>,
///                            args: &[locfmt::Expression],
///                            _opts: &std::collections::HashMap<String, locfmt::Expression>| {
///     let value = resolver.resolve(ctx, &args[0])?;
///     Ok(Value::String(value.to_string().to_uppercase()))
/// });
/// assert!(registry.get("UPPER").is_some());
/// assert!(registry.get("LOWER").is_none());
/// ```
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Box<dyn MessageFn>>,
}

impl FunctionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the function registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, function: impl MessageFn + 'static) {
        self.functions.insert(name.into(), Box::new(function));
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<&dyn MessageFn> {
        self.functions.get(name).map(Box::as_ref)
    }

    /// Registered names in sorted order, for diagnostics.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
