// Seed generators: where a traversal run starts

use crate::error::{CrawlError, Result};
use crate::key::PersonKey;
use crate::model::FrontierEntry;
use snowball_scanner::RelationSource;
use std::future::Future;
use tracing::{info, warn};

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Produces seed entries in batches. `Ok(None)` means the generator is exhausted.
///
/// The scheduler only asks for the next batch once every entry of the
/// previous one has been processed, so generators can fetch lazily.
pub trait SeedGenerator {
    fn next_batch<S: RelationSource>(
        &mut self,
        source: &S,
    ) -> impl Future<Output = Result<Option<Vec<FrontierEntry>>>>;
}

/// One batch per letter: the first `per_letter` names of that letter's listing.
#[derive(Debug, Clone)]
pub struct SampledSeeds {
    alphabet: Vec<char>,
    per_letter: usize,
    position: usize,
}

impl SampledSeeds {
    pub fn new(alphabet: &str, per_letter: usize) -> Result<Self> {
        if per_letter == 0 {
            return Err(CrawlError::Config(
                "sample size per letter must be a positive integer".to_string(),
            ));
        }

        let alphabet: Vec<char> = alphabet.chars().filter(|c| !c.is_whitespace()).collect();
        if alphabet.is_empty() {
            return Err(CrawlError::Config("alphabet must not be empty".to_string()));
        }

        Ok(Self {
            alphabet,
            per_letter,
            position: 0,
        })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl SeedGenerator for SampledSeeds {
    async fn next_batch<S: RelationSource>(&mut self, source: &S) -> Result<Option<Vec<FrontierEntry>>> {
        let Some(&letter) = self.alphabet.get(self.position) else {
            return Ok(None);
        };
        self.position += 1;

        let listing = source
            .fetch_listing(letter, self.per_letter)
            .await
            .map_err(|source| CrawlError::Listing { letter, source })?;

        let batch: Vec<FrontierEntry> = listing
            .into_iter()
            .take(self.per_letter)
            .filter_map(FrontierEntry::from_candidate)
            .collect();

        if batch.is_empty() {
            warn!("No celebrities found for letter {}", letter);
        } else {
            info!("Letter {}: {} seed(s)", letter, batch.len());
        }

        Ok(Some(batch))
    }
}

/// Exactly one seed, derived from a free-text name.
#[derive(Debug, Clone)]
pub struct SingleSeed {
    key: PersonKey,
    emitted: bool,
}

impl SingleSeed {
    pub fn new(celebrity: &str) -> Result<Self> {
        let key = PersonKey::new(celebrity);
        if key.is_empty() {
            return Err(CrawlError::Config(
                "celebrity name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            key,
            emitted: false,
        })
    }

    pub fn key(&self) -> &PersonKey {
        &self.key
    }
}

impl SeedGenerator for SingleSeed {
    async fn next_batch<S: RelationSource>(&mut self, source: &S) -> Result<Option<Vec<FrontierEntry>>> {
        if self.emitted {
            return Ok(None);
        }
        self.emitted = true;

        let link = source
            .profile_link(&self.key.slug())
            .map_err(|e| CrawlError::Config(format!("cannot build profile link for {}: {}", self.key, e)))?;

        Ok(Some(vec![FrontierEntry::new(self.key.clone(), link)]))
    }
}
