//! Term store interface: locale-keyed grammatical attribute records.
//!
//! The engine consumes terms, it does not produce them. Registered
//! grammatical functions look up terms for the active locale and read the
//! attribute forms they need (declensions, genders, article forms). A missing
//! term is an error — there is no silent default term.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resolver::FormatError;

/// A grammatical attribute record for one term in one locale.
///
/// Attributes map a form name (e.g. `"singular_nominative"`, `"gender"`,
/// `"accusative"`) to its string realization.
///
/// # Example
///
/// ```
/// use locfmt::Term;
///
/// let noun = Term::from_pairs([("singular_nominative", "t-shirt")]);
/// assert_eq!(noun.attribute("singular_nominative"), Some("t-shirt"));
/// assert_eq!(noun.attribute("plural_nominative"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term {
    attributes: HashMap<String, String>,
}

impl Term {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from (attribute, form) pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: pairs
                .into_iter()
                .map(|(name, form)| (name.into(), form.into()))
                .collect(),
        }
    }

    /// Insert or overwrite an attribute form.
    pub fn set(&mut self, name: impl Into<String>, form: impl Into<String>) {
        self.attributes.insert(name.into(), form.into());
    }

    /// Read an attribute form by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Term {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Term::from_pairs(iter)
    }
}

/// Keyed lookup from (locale, term key) to a grammatical record.
///
/// Implementations are external collaborators; the engine only borrows
/// lookup results for the duration of a function call. Lookups are treated as
/// synchronous, in-memory operations — a store backed by I/O must bound that
/// cost itself before formatting begins.
pub trait TermStore: Send + Sync {
    /// Look up the record for `key` under `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownTerm`] when no record exists.
    fn term(&self, locale: &str, key: &str) -> Result<&Term, FormatError>;
}

/// In-memory reference [`TermStore`].
///
/// Populated before formatting begins; lookups are shared reads thereafter.
///
/// # Example
///
/// ```
/// use locfmt::{MemoryTermStore, Term, TermStore};
///
/// let mut store = MemoryTermStore::new();
/// store.insert("en", "red", Term::from_pairs([("nominative", "red")]));
///
/// let term = store.term("en", "red").unwrap();
/// assert_eq!(term.attribute("nominative"), Some("red"));
/// assert!(store.term("pl", "red").is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryTermStore {
    locales: HashMap<String, HashMap<String, Term>>,
}

impl MemoryTermStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record for `key` under `locale`.
    pub fn insert(&mut self, locale: impl Into<String>, key: impl Into<String>, term: Term) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), term);
    }
}

impl TermStore for MemoryTermStore {
    fn term(&self, locale: &str, key: &str) -> Result<&Term, FormatError> {
        self.locales
            .get(locale)
            .and_then(|terms| terms.get(key))
            .ok_or_else(|| FormatError::UnknownTerm {
                locale: locale.to_string(),
                key: key.to_string(),
            })
    }
}
