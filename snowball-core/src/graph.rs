use crate::key::PersonKey;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Adjacency accumulated during a run: visited person -> people linked from
/// their page. Edges are kept as discovered; nothing forces symmetry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<PersonKey, BTreeSet<PersonKey>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `neighbors` into `source`'s entry, creating it if absent.
    /// Recording the same pair twice has no further effect.
    pub fn record_edges<I>(&mut self, source: PersonKey, neighbors: I)
    where
        I: IntoIterator<Item = PersonKey>,
    {
        self.adjacency.entry(source).or_default().extend(neighbors);
    }

    pub fn neighbors(&self, key: &PersonKey) -> Option<&BTreeSet<PersonKey>> {
        self.adjacency.get(key)
    }

    pub fn contains(&self, key: &PersonKey) -> bool {
        self.adjacency.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PersonKey, &BTreeSet<PersonKey>)> {
        self.adjacency.iter()
    }

    /// Number of people with an entry.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }
}
