use crate::key::PersonKey;
use serde::{Deserialize, Serialize};
use snowball_scanner::Candidate;

/// A person waiting to have their profile page fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierEntry {
    pub key: PersonKey,
    pub link: String,
}

impl FrontierEntry {
    pub fn new(key: PersonKey, link: impl Into<String>) -> Self {
        Self {
            key,
            link: link.into(),
        }
    }

    /// Normalizes a scraped candidate; blank names yield `None`.
    pub fn from_candidate(candidate: Candidate) -> Option<Self> {
        let key = PersonKey::new(&candidate.name);
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, candidate.link))
    }
}
