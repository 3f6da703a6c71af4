use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{Expression, VariantKey};

/// A message template: selector expressions plus candidate variants.
///
/// A message branches on its selectors — each selector position resolves to a
/// key string, and the first variant whose keys match at every position is
/// rendered. Messages carry no runtime state; the same message can be
/// formatted under any locale with any bindings.
///
/// # Example
///
/// ```
/// use locfmt::{Expression, Message, Selector, Variant, VariantKey};
///
/// let message = Message::builder()
///     .id("greeting")
///     .selectors(vec![Selector::defaulted("default")])
///     .variants(vec![Variant::builder()
///         .keys(vec![VariantKey::literal("default")])
///         .parts(vec![Expression::literal("Hello!")])
///         .build()])
///     .build();
///
/// assert_eq!(message.id, "greeting");
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct Message {
    /// Identifier used in diagnostics.
    pub id: String,

    /// Selector expressions, one per key position.
    #[builder(default)]
    #[serde(default)]
    pub selectors: Vec<Selector>,

    /// Candidate variants in declaration order.
    #[builder(default)]
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// One selector position of a message.
///
/// When the expression is present it is resolved and stringified to produce
/// the key for this position. When absent, the declared fallback key is used
/// directly — it participates as a literal key token and is never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    /// The selector expression, if any.
    #[serde(default)]
    pub expr: Option<Expression>,

    /// The literal key used when the expression is absent.
    pub fallback: String,
}

impl Selector {
    /// A selector that resolves `expr`, with `fallback` as its default key.
    pub fn new(expr: Expression, fallback: impl Into<String>) -> Self {
        Self {
            expr: Some(expr),
            fallback: fallback.into(),
        }
    }

    /// A selector with no expression; its fallback key is always used.
    pub fn defaulted(fallback: impl Into<String>) -> Self {
        Self {
            expr: None,
            fallback: fallback.into(),
        }
    }
}

/// One candidate rendering of a message.
///
/// Keys are positionally aligned with the message's selectors; the body is an
/// ordered sequence of expression parts mixing literals and placeables.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct Variant {
    /// Match keys, one per selector position.
    #[builder(default)]
    #[serde(default)]
    pub keys: Vec<VariantKey>,

    /// The template body.
    #[builder(default)]
    #[serde(default)]
    pub parts: Vec<Expression>,
}
