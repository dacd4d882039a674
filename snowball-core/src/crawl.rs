use crate::error::{CrawlError, Result};
use crate::scheduler::{CrawlOutcome, ProgressCallback, Scheduler, StopRule};
use crate::seed::{SampledSeeds, SingleSeed};
use snowball_scanner::RelationSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

pub use crate::seed::DEFAULT_ALPHABET;

/// How a run is seeded, and with it which stop rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedMode {
    /// First `per_letter` names of each letter's listing, one layer deep
    Sampled { alphabet: String, per_letter: usize },
    /// Snowball outwards from one person until `target` others are found
    Single { celebrity: String, target: usize },
}

/// Options for configuring a crawl operation
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub mode: SeedMode,
    pub workers: usize,
    pub deadline: Option<Duration>,
}

impl CrawlOptions {
    pub fn new(mode: SeedMode) -> Self {
        Self {
            mode,
            workers: 1,
            deadline: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(CrawlError::Config("worker count must be at least 1".to_string()));
        }
        if let SeedMode::Single { target: 0, .. } = self.mode {
            return Err(CrawlError::Config(
                "target number of celebrities must be a positive integer".to_string(),
            ));
        }
        if let Some(deadline) = self.deadline
            && deadline.is_zero()
        {
            return Err(CrawlError::Config("deadline must be longer than zero".to_string()));
        }
        Ok(())
    }
}

/// Execute a crawl with the given options
pub async fn execute_crawl<S: RelationSource>(
    source: Arc<S>,
    options: CrawlOptions,
    shutdown: Option<watch::Receiver<bool>>,
    progress_callback: Option<ProgressCallback>,
) -> Result<CrawlOutcome> {
    options.validate()?;

    let rule = match options.mode {
        SeedMode::Sampled { .. } => StopRule::SeedsOnly,
        SeedMode::Single { target, .. } => StopRule::Target(target),
    };

    let mut scheduler = Scheduler::new(source, rule).with_workers(options.workers);
    if let Some(deadline) = options.deadline {
        scheduler = scheduler.with_deadline(deadline);
    }
    if let Some(shutdown) = shutdown {
        scheduler = scheduler.with_shutdown(shutdown);
    }
    if let Some(callback) = progress_callback {
        scheduler = scheduler.with_progress_callback(callback);
    }

    match options.mode {
        SeedMode::Sampled {
            ref alphabet,
            per_letter,
        } => {
            let seeds = SampledSeeds::new(alphabet, per_letter)?;
            info!(
                "Sampling {} name(s) for each of {} letter(s)",
                per_letter,
                seeds.alphabet().len()
            );
            scheduler.run(seeds).await
        }
        SeedMode::Single {
            ref celebrity,
            target,
        } => {
            let seed = SingleSeed::new(celebrity)?;
            info!("Snowballing from {} until {} found", seed.key(), target);
            scheduler.run(seed).await
        }
    }
}
