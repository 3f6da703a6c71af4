use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A key gating one position of a variant's key list.
///
/// A literal key matches a resolved selector key by string equality; the
/// wildcard `Any` matches every key. In serialized form keys are plain
/// strings, with `"*"` standing for the wildcard — a literal key can
/// therefore never be the text `*` itself.
///
/// # Example
///
/// ```
/// use locfmt::VariantKey;
///
/// assert!(VariantKey::literal("one").matches("one"));
/// assert!(!VariantKey::literal("one").matches("other"));
/// assert!(VariantKey::Any.matches("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariantKey {
    /// A literal key token, matched by equality.
    Literal(String),
    /// The declared wildcard/default marker; matches any key.
    Any,
}

impl VariantKey {
    /// Create a literal key from any string-like value.
    pub fn literal(s: impl Into<String>) -> Self {
        VariantKey::Literal(s.into())
    }

    /// Whether this key accepts the resolved selector key `key`.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            VariantKey::Literal(s) => s == key,
            VariantKey::Any => true,
        }
    }
}

impl From<&str> for VariantKey {
    fn from(s: &str) -> Self {
        if s == "*" {
            VariantKey::Any
        } else {
            VariantKey::Literal(s.to_string())
        }
    }
}

impl From<String> for VariantKey {
    fn from(s: String) -> Self {
        if s == "*" {
            VariantKey::Any
        } else {
            VariantKey::Literal(s)
        }
    }
}

impl std::fmt::Display for VariantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantKey::Literal(s) => write!(f, "{s}"),
            VariantKey::Any => write!(f, "*"),
        }
    }
}

impl Serialize for VariantKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VariantKey::Literal(s) => serializer.serialize_str(s),
            VariantKey::Any => serializer.serialize_str("*"),
        }
    }
}

impl<'de> Deserialize<'de> for VariantKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(VariantKey::from(s))
    }
}
