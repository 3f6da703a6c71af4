//! Shared argument and term plumbing for grammatical functions.

use std::collections::HashMap;

use locfmt::{Context, Expression, FormatError, Resolver, Term, Value};

/// Resolve the positional argument at `index` and require a string value.
pub(crate) fn string_arg(
    resolver: &Resolver<'_>,
    ctx: &Context<'_>,
    args: &[Expression],
    index: usize,
) -> Result<String, FormatError> {
    let expression = args
        .get(index)
        .ok_or(FormatError::MissingArgument { index })?;
    match resolver.resolve(ctx, expression)? {
        Value::String(text) => Ok(text),
        other => Err(FormatError::TypeMismatch {
            expected: "string",
            found: other.type_name(),
        }),
    }
}

/// Resolve the positional argument at `index` and require a numeric value.
/// Floats truncate toward zero.
pub(crate) fn number_arg(
    resolver: &Resolver<'_>,
    ctx: &Context<'_>,
    args: &[Expression],
    index: usize,
) -> Result<i64, FormatError> {
    let expression = args
        .get(index)
        .ok_or(FormatError::MissingArgument { index })?;
    match resolver.resolve(ctx, expression)? {
        Value::Number(n) => Ok(n),
        Value::Float(f) => Ok(f as i64),
        other => Err(FormatError::TypeMismatch {
            expected: "number",
            found: other.type_name(),
        }),
    }
}

/// Resolve an option that must be present and string-valued.
pub(crate) fn string_option(
    resolver: &Resolver<'_>,
    ctx: &Context<'_>,
    opts: &HashMap<String, Expression>,
    name: &str,
) -> Result<String, FormatError> {
    let value = resolver
        .resolve_option(ctx, opts, name)?
        .ok_or_else(|| FormatError::MissingOption {
            name: name.to_string(),
        })?;
    match value {
        Value::String(text) => Ok(text),
        other => Err(FormatError::TypeMismatch {
            expected: "string",
            found: other.type_name(),
        }),
    }
}

/// Read a required attribute form from a term record.
pub(crate) fn require_attribute<'t>(
    term: &'t Term,
    term_key: &str,
    attribute: &str,
) -> Result<&'t str, FormatError> {
    term.attribute(attribute)
        .ok_or_else(|| FormatError::MissingAttribute {
            term: term_key.to_string(),
            attribute: attribute.to_string(),
        })
}

/// Apply the `CAPITALIZED` option to an already-stringified form.
pub(crate) fn maybe_capitalize(
    resolver: &Resolver<'_>,
    ctx: &Context<'_>,
    opts: &HashMap<String, Expression>,
    form: String,
) -> Result<String, FormatError> {
    if resolver.bool_option(ctx, opts, "CAPITALIZED")? {
        Ok(locfmt::capitalize(&form))
    } else {
        Ok(form)
    }
}
