//! Error types for message formatting.

use thiserror::Error;

/// An error that aborts a `format` call.
///
/// Every kind is fatal to the call that produced it: the caller receives a
/// distinguishable error and no output string, never a partially
/// concatenated result. Retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A variable reference had no binding in the call's arguments.
    /// Variables have no default-substitution mechanism; only selectors
    /// carry fallback keys.
    #[error("unbound variable '{name}'")]
    UnboundVariable { name: String },

    /// A function call named a function missing from the registry.
    #[error("unknown function '{name}'{}", render_suggestions(suggestions))]
    UnknownFunction {
        name: String,
        suggestions: Vec<String>,
    },

    /// A term key was absent from the term store.
    #[error("unknown term '{key}' for locale '{locale}'")]
    UnknownTerm { locale: String, key: String },

    /// A resolved value's tag did not match what its consumer expected.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// No variant's keys matched at every selector position.
    #[error("no variant of message '{message}' matches keys [{}]", keys.join(", "))]
    NoMatchingVariant { message: String, keys: Vec<String> },

    /// A function read a positional argument that was not supplied.
    #[error("missing argument at position {index}")]
    MissingArgument { index: usize },

    /// A function required an option that was not supplied.
    #[error("missing required option '{name}'")]
    MissingOption { name: String },

    /// A term record lacks the requested grammatical attribute.
    #[error("term '{term}' has no attribute '{attribute}'")]
    MissingAttribute { term: String, attribute: String },
}

fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Suggest near misses for `input` among `available` names.
///
/// Uses Levenshtein distance: at most 1 for inputs of three characters or
/// fewer, at most 2 otherwise. Closest matches first, capped at three.
pub fn compute_suggestions(input: &str, available: &[String]) -> Vec<String> {
    let max_distance = if input.len() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(input, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
