//! Adjective agreement: the `ADJECTIVE` function.

use std::collections::HashMap;

use locfmt::{Context, Expression, FormatError, MessageFn, Resolver, Value};

use crate::support::{require_attribute, string_arg, string_option};

/// `ADJECTIVE(name, ACCORD_WITH?)` — an adjective form agreeing with a noun.
///
/// English reads the adjective term's plain `nominative` form. Polish
/// resolves the `ACCORD_WITH` option to a noun term, reads that noun's
/// `gender`, and returns the adjective's matching `singular_{gender}` form —
/// the option is consulted on the Polish branch only. Unsupported locales
/// echo the adjective name unchanged.
pub struct Adjective;

/// Per-locale agreement strategy.
enum Agreement {
    /// Plain nominative form, no agreement.
    Nominative,
    /// Gender agreement with the noun named by `ACCORD_WITH`.
    GenderAccord,
    /// Echo the adjective name.
    Passthrough,
}

impl Agreement {
    fn for_locale(locale: &str) -> Self {
        match locale {
            "en" => Agreement::Nominative,
            "pl" => Agreement::GenderAccord,
            _ => Agreement::Passthrough,
        }
    }
}

impl MessageFn for Adjective {
    fn invoke(
        &self,
        resolver: &Resolver<'_>,
        ctx: &Context<'_>,
        args: &[Expression],
        opts: &HashMap<String, Expression>,
    ) -> Result<Value, FormatError> {
        let name = string_arg(resolver, ctx, args, 0)?;
        match Agreement::for_locale(ctx.locale()) {
            Agreement::Nominative => {
                let term = resolver.terms().term(ctx.locale(), &name)?;
                let form = require_attribute(term, &name, "nominative")?;
                Ok(Value::String(form.to_string()))
            }
            Agreement::GenderAccord => {
                let noun_name = string_option(resolver, ctx, opts, "ACCORD_WITH")?;
                let noun = resolver.terms().term(ctx.locale(), &noun_name)?;
                let gender = require_attribute(noun, &noun_name, "gender")?.to_string();
                let adjective = resolver.terms().term(ctx.locale(), &name)?;
                let form = require_attribute(adjective, &name, &format!("singular_{gender}"))?;
                Ok(Value::String(form.to_string()))
            }
            Agreement::Passthrough => Ok(Value::String(name)),
        }
    }
}
