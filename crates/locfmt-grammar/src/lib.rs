//! Locale-dependent grammatical functions for the locfmt engine.
//!
//! This crate provides the default function pack — noun forms, adjective
//! agreement, actor references, and plural categorization — that
//! initialization code installs into a [`FunctionRegistry`] before any
//! formatting runs. Each function looks up grammatical records in the term
//! store and resolves its options lazily, so locale branches only touch the
//! options they actually need.
//!
//! # Example
//!
//! ```
//! use locfmt::FunctionRegistry;
//!
//! let mut registry = FunctionRegistry::new();
//! locfmt_grammar::register_defaults(&mut registry);
//! assert!(registry.get("NOUN").is_some());
//! assert!(registry.get("ACTOR").is_some());
//! ```

mod actor;
mod adjective;
mod noun;
mod plural;
mod support;

pub use actor::Actor;
pub use adjective::Adjective;
pub use noun::Noun;
pub use plural::{Plural, plural_category};

use locfmt::FunctionRegistry;

/// Install the default grammatical functions.
///
/// Registers `NOUN`, `ADJECTIVE`, `ACTOR`, and `PLURAL`. Later registrations
/// under the same names overwrite these.
pub fn register_defaults(registry: &mut FunctionRegistry) {
    registry.register("NOUN", Noun);
    registry.register("ADJECTIVE", Adjective);
    registry.register("ACTOR", Actor);
    registry.register("PLURAL", Plural);
}
