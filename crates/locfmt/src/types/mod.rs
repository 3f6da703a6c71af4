//! Core data model: values, expressions, messages, and variant keys.

mod expression;
mod message;
mod value;
mod variant_key;

pub use expression::Expression;
pub use message::{Message, Selector, Variant};
pub use value::Value;
pub use variant_key::VariantKey;
