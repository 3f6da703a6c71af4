//! Noun forms: the `NOUN` function.

use std::collections::HashMap;

use locfmt::{Context, Expression, FormatError, MessageFn, Resolver, Value};

use crate::support::{maybe_capitalize, require_attribute, string_arg};

/// `NOUN(name, CAPITALIZED?)` — the singular nominative form of a noun term.
///
/// The first argument names a term in the store for the active locale. The
/// `CAPITALIZED` boolean option uppercases the first grapheme of the result.
pub struct Noun;

impl MessageFn for Noun {
    fn invoke(
        &self,
        resolver: &Resolver<'_>,
        ctx: &Context<'_>,
        args: &[Expression],
        opts: &HashMap<String, Expression>,
    ) -> Result<Value, FormatError> {
        let name = string_arg(resolver, ctx, args, 0)?;
        let term = resolver.terms().term(ctx.locale(), &name)?;
        let form = require_attribute(term, &name, "singular_nominative")?.to_string();
        Ok(Value::String(maybe_capitalize(resolver, ctx, opts, form)?))
    }
}
