//! Variant selection: first-match scan over declaration-ordered variants.

use crate::resolver::{Context, FormatError, Resolver};
use crate::types::{Message, Variant};

/// Pick the winning variant of `message` under `ctx`.
///
/// Each selector position yields a key string: the stringified resolved
/// value when the selector expression is present, the declared fallback key
/// otherwise. The fallback is compared as a literal key token — it is never
/// evaluated. Variants are scanned in declaration order and the first one
/// whose keys match at every position wins; ties between fully-matching
/// variants always go to the earlier declaration.
///
/// # Errors
///
/// [`FormatError::NoMatchingVariant`] when the scan exhausts all variants;
/// any resolution error from a selector expression propagates unchanged.
pub(crate) fn select_variant<'m>(
    resolver: &Resolver<'_>,
    ctx: &Context<'_>,
    message: &'m Message,
) -> Result<&'m Variant, FormatError> {
    let mut keys = Vec::with_capacity(message.selectors.len());
    for selector in &message.selectors {
        match &selector.expr {
            Some(expression) => keys.push(resolver.resolve(ctx, expression)?.to_string()),
            None => keys.push(selector.fallback.clone()),
        }
    }

    message
        .variants
        .iter()
        .find(|variant| variant_matches(variant, &keys))
        .ok_or_else(|| FormatError::NoMatchingVariant {
            message: message.id.clone(),
            keys,
        })
}

/// A variant matches when it carries exactly one key per selector position
/// and every key accepts the resolved key string at its position.
fn variant_matches(variant: &Variant, keys: &[String]) -> bool {
    variant.keys.len() == keys.len()
        && variant
            .keys
            .iter()
            .zip(keys)
            .all(|(key, resolved)| key.matches(resolved))
}
