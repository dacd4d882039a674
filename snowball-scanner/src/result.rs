use serde::{Deserialize, Serialize};
use std::fmt;

/// A (name, link) pair scraped from a listing or profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub link: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Why a successfully fetched profile page yielded no relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseGap {
    /// The dating history panel is not on the page
    SectionMissing,
    /// The panel exists but holds no partner boxes
    NoEntries,
}

impl fmt::Display for ParseGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseGap::SectionMissing => write!(f, "dating history section not found"),
            ParseGap::NoEntries => write!(f, "no dating partners found"),
        }
    }
}

/// Outcome of reading one profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationsPage {
    Entries(Vec<Candidate>),
    Gap(ParseGap),
}

impl RelationsPage {
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            RelationsPage::Entries(candidates) => candidates,
            RelationsPage::Gap(_) => &[],
        }
    }
}
