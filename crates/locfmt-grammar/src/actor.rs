//! Actor references: the `ACTOR` function.

use std::collections::HashMap;

use locfmt::{Context, Expression, FormatError, MessageFn, Resolver, Value};

use crate::support::{maybe_capitalize, require_attribute, string_arg, string_option};

/// `ACTOR(name, ...)` — a reference to a named actor, looked up under the
/// `actor_{name}` term key.
///
/// English chooses between the `definite`, `indefinite`, and `bare` forms via
/// the boolean options `DEFINITE` and `INDEFINITE`; `DEFINITE` is consulted
/// first, so it wins when both are set, and `INDEFINITE` stays unresolved
/// when `DEFINITE` is true. Polish selects the declension attribute named by
/// the required `CASE` string option. Both branches honor `CAPITALIZED`;
/// unsupported locales echo the actor name unchanged.
pub struct Actor;

/// Per-locale reference strategy.
enum Reference {
    /// Article-based forms: definite / indefinite / bare.
    Article,
    /// Declension named directly by the `CASE` option.
    Declension,
    /// Echo the actor name.
    Passthrough,
}

impl Reference {
    fn for_locale(locale: &str) -> Self {
        match locale {
            "en" => Reference::Article,
            "pl" => Reference::Declension,
            _ => Reference::Passthrough,
        }
    }
}

impl MessageFn for Actor {
    fn invoke(
        &self,
        resolver: &Resolver<'_>,
        ctx: &Context<'_>,
        args: &[Expression],
        opts: &HashMap<String, Expression>,
    ) -> Result<Value, FormatError> {
        let name = string_arg(resolver, ctx, args, 0)?;
        let form = match Reference::for_locale(ctx.locale()) {
            Reference::Passthrough => return Ok(Value::String(name)),
            Reference::Article => {
                let key = format!("actor_{name}");
                let term = resolver.terms().term(ctx.locale(), &key)?;
                let attribute = if resolver.bool_option(ctx, opts, "DEFINITE")? {
                    "definite"
                } else if resolver.bool_option(ctx, opts, "INDEFINITE")? {
                    "indefinite"
                } else {
                    "bare"
                };
                require_attribute(term, &key, attribute)?.to_string()
            }
            Reference::Declension => {
                let key = format!("actor_{name}");
                let term = resolver.terms().term(ctx.locale(), &key)?;
                let case = string_option(resolver, ctx, opts, "CASE")?;
                require_attribute(term, &key, &case)?.to_string()
            }
        };
        Ok(Value::String(maybe_capitalize(resolver, ctx, opts, form)?))
    }
}
