// In-memory relation source shared by the integration tests

#![allow(dead_code)]

use snowball_scanner::{Candidate, ParseGap, RelationSource, RelationsPage, ScanError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum FakePage {
    Entries(Vec<(String, String)>),
    Gap,
    Fail,
}

#[derive(Default)]
pub struct FakeSource {
    listings: HashMap<char, Vec<(String, String)>>,
    failing_listings: Vec<char>,
    pages: HashMap<String, FakePage>,
    delays: HashMap<String, Duration>,
    pub relation_calls: Mutex<Vec<String>>,
    pub listing_calls: Mutex<Vec<char>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(mut self, letter: char, entries: &[(&str, &str)]) -> Self {
        self.listings.insert(letter, pairs(entries));
        self
    }

    pub fn failing_listing(mut self, letter: char) -> Self {
        self.failing_listings.push(letter);
        self
    }

    pub fn page(mut self, link: &str, entries: &[(&str, &str)]) -> Self {
        self.pages.insert(link.to_string(), FakePage::Entries(pairs(entries)));
        self
    }

    pub fn gap(mut self, link: &str) -> Self {
        self.pages.insert(link.to_string(), FakePage::Gap);
        self
    }

    pub fn failing(mut self, link: &str) -> Self {
        self.pages.insert(link.to_string(), FakePage::Fail);
        self
    }

    pub fn delay(mut self, link: &str, delay: Duration) -> Self {
        self.delays.insert(link.to_string(), delay);
        self
    }

    pub fn relation_calls(&self) -> Vec<String> {
        self.relation_calls.lock().unwrap().clone()
    }

    pub fn listing_calls(&self) -> Vec<char> {
        self.listing_calls.lock().unwrap().clone()
    }
}

fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(name, link)| (name.to_string(), link.to_string()))
        .collect()
}

fn candidates(entries: &[(String, String)]) -> Vec<Candidate> {
    entries
        .iter()
        .map(|(name, link)| Candidate::new(name.clone(), link.clone()))
        .collect()
}

impl RelationSource for FakeSource {
    fn profile_link(&self, slug: &str) -> Result<String, ScanError> {
        Ok(format!("/dating/{}", slug))
    }

    async fn fetch_listing(&self, letter: char, limit: usize) -> Result<Vec<Candidate>, ScanError> {
        self.listing_calls.lock().unwrap().push(letter);
        if self.failing_listings.contains(&letter) {
            return Err(ScanError::Status {
                url: format!("/lists/{}", letter),
                status: 500,
            });
        }
        Ok(self
            .listings
            .get(&letter)
            .map(|entries| candidates(entries))
            .unwrap_or_default()
            .into_iter()
            .take(limit)
            .collect())
    }

    async fn fetch_relations(&self, link: &str) -> Result<RelationsPage, ScanError> {
        self.relation_calls.lock().unwrap().push(link.to_string());
        if let Some(delay) = self.delays.get(link) {
            tokio::time::sleep(*delay).await;
        }
        match self.pages.get(link) {
            Some(FakePage::Entries(entries)) => Ok(RelationsPage::Entries(candidates(entries))),
            Some(FakePage::Gap) | None => Ok(RelationsPage::Gap(ParseGap::SectionMissing)),
            Some(FakePage::Fail) => Err(ScanError::Other(format!("connection reset fetching {}", link))),
        }
    }
}
