use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identity of a person: display text trimmed and lowercased.
///
/// Diacritics and punctuation are left alone, so "Beyoncé" and "Beyonce"
/// are different people.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonKey(String);

impl PersonKey {
    pub fn new(display: &str) -> Self {
        Self(display.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path segment used in profile URLs ("orlando bloom" -> "orlando-bloom").
    pub fn slug(&self) -> String {
        self.0.replace(' ', "-")
    }
}

impl fmt::Display for PersonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonKey {
    fn from(display: &str) -> Self {
        Self::new(display)
    }
}
