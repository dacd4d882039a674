// Pending-work queue and visited bookkeeping for one traversal run

use crate::key::PersonKey;
use crate::model::FrontierEntry;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// FIFO queue of people to fetch, plus everything needed to never admit
/// the same person (or the same profile link) twice in a run.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    /// Every key ever admitted: pending, in flight or visited
    known: HashSet<PersonKey>,
    known_links: HashSet<String>,
    visited: HashSet<PersonKey>,
    seeded: usize,
    discovered: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a seed. Returns false if the key or link was already admitted.
    pub fn seed(&mut self, entry: FrontierEntry) -> bool {
        let admitted = self.admit(entry);
        if admitted {
            self.seeded += 1;
        }
        admitted
    }

    /// Admit a neighbour found on a profile page. Returns false if the key or
    /// link was already admitted.
    pub fn discover(&mut self, entry: FrontierEntry) -> bool {
        let admitted = self.admit(entry);
        if admitted {
            self.discovered += 1;
        }
        admitted
    }

    fn admit(&mut self, entry: FrontierEntry) -> bool {
        if self.known.contains(&entry.key) || self.known_links.contains(&entry.link) {
            return false;
        }

        debug!("Queuing {} ({})", entry.key, entry.link);
        self.known.insert(entry.key.clone());
        self.known_links.insert(entry.link.clone());
        self.queue.push_back(entry);
        true
    }

    /// Earliest-admitted pending entry. The key stays known while in flight.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    /// Returns false if `key` had already been marked visited.
    pub fn mark_visited(&mut self, key: &PersonKey) -> bool {
        self.visited.insert(key.clone())
    }

    pub fn is_known(&self, key: &PersonKey) -> bool {
        self.known.contains(key)
    }

    pub fn is_visited(&self, key: &PersonKey) -> bool {
        self.visited.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of entries waiting to be fetched.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.queue.iter()
    }

    /// Distinct people ever admitted, seeds included.
    pub fn collected(&self) -> usize {
        self.known.len()
    }

    pub fn seeded(&self) -> usize {
        self.seeded
    }

    pub fn discovered(&self) -> usize {
        self.discovered
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
