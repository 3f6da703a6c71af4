//! Per-call resolution state: the active locale plus argument bindings.

use std::collections::HashMap;

use crate::types::Value;

/// State for a single `format` call.
///
/// A context is built when formatting starts and discarded when it ends; it
/// is never shared across calls. Bindings are borrowed from the caller and
/// immutable for the duration of the call.
#[derive(Debug)]
pub struct Context<'a> {
    locale: &'a str,
    bindings: &'a HashMap<String, Value>,
}

impl<'a> Context<'a> {
    /// Create a context for `locale` over the given argument bindings.
    pub fn new(locale: &'a str, bindings: &'a HashMap<String, Value>) -> Self {
        Self { locale, bindings }
    }

    /// The active locale tag (e.g. `"en"`, `"pl"`).
    pub fn locale(&self) -> &str {
        self.locale
    }

    /// Look up an argument binding by name.
    pub fn binding(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}
