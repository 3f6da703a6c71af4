//! The formatting entry point.

use std::collections::HashMap;
use std::sync::Arc;

use bon::Builder;

use crate::resolver::{Context, FormatError, FunctionRegistry, Resolver, select_variant};
use crate::terms::TermStore;
use crate::types::{Expression, Message, Value};

/// Drives message formatting: variant selection, part resolution, and
/// concatenation.
///
/// A `Formatter` owns its function registry — registration happens before
/// construction, formatting only reads — and shares a term store. `format`
/// takes `&self` and keeps no state between calls, so one `Formatter` can
/// serve concurrent callers.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use locfmt::{
///     Expression, Formatter, FunctionRegistry, MemoryTermStore, Message, Selector, Variant,
///     VariantKey, bindings,
/// };
///
/// let formatter = Formatter::builder()
///     .registry(FunctionRegistry::new())
///     .terms(Arc::new(MemoryTermStore::new()))
///     .build();
///
/// let message = Message::builder()
///     .id("greeting")
///     .selectors(vec![Selector::defaulted("default")])
///     .variants(vec![Variant::builder()
///         .keys(vec![VariantKey::literal("default")])
///         .parts(vec![
///             Expression::literal("Hello, "),
///             Expression::variable("name"),
///             Expression::literal("!"),
///         ])
///         .build()])
///     .build();
///
/// let output = formatter
///     .format("en", &message, &bindings! { "name" => "world" })
///     .unwrap();
/// assert_eq!(output, "Hello, world!");
/// ```
#[derive(Builder)]
pub struct Formatter {
    /// Named formatting functions, installed before construction.
    registry: FunctionRegistry,

    /// Grammatical term lookup shared with the caller.
    terms: Arc<dyn TermStore>,
}

impl Formatter {
    /// Format `message` for `locale` with the given argument bindings.
    ///
    /// Selects the winning variant, resolves its body parts in order —
    /// string literals pass through, placeables resolve and stringify — and
    /// concatenates the results.
    ///
    /// # Errors
    ///
    /// Any [`FormatError`] aborts the whole call; a partial string is never
    /// returned.
    pub fn format(
        &self,
        locale: &str,
        message: &Message,
        bindings: &HashMap<String, Value>,
    ) -> Result<String, FormatError> {
        let ctx = Context::new(locale, bindings);
        let resolver = Resolver::new(&self.registry, self.terms.as_ref());
        let variant = select_variant(&resolver, &ctx, message)?;

        let mut output = String::new();
        for part in &variant.parts {
            match part {
                Expression::StringLiteral(text) => output.push_str(text),
                placeable => output.push_str(&resolver.resolve(&ctx, placeable)?.to_string()),
            }
        }
        Ok(output)
    }

    /// Read access to the function registry.
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// The shared term store.
    pub fn terms(&self) -> &dyn TermStore {
        self.terms.as_ref()
    }
}
