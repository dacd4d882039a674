// Frontier scheduler: breadth-first expansion from seed batches

use crate::error::{CrawlError, Result};
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::key::PersonKey;
use crate::model::FrontierEntry;
use crate::seed::SeedGenerator;
use serde::Serialize;
use snowball_scanner::{RelationSource, RelationsPage, ScanError};
use std::collections::BTreeMap;
use std::future::pending;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Called after each person is processed with the visited count and their key.
pub type ProgressCallback = Arc<dyn Fn(usize, &PersonKey) + Send + Sync>;

/// When newly found neighbours are admitted to the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRule {
    /// Record each seed's neighbours as edges but never expand them
    SeedsOnly,
    /// Admit neighbours until this many people beyond the seeds have been found
    Target(usize),
}

impl StopRule {
    pub fn admits(&self, frontier: &Frontier) -> bool {
        match self {
            StopRule::SeedsOnly => false,
            StopRule::Target(target) => frontier.discovered() < *target,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    pub seeded: usize,
    pub discovered: usize,
    pub collected: usize,
    pub visited: usize,
    pub gaps: usize,
    pub edges: usize,
}

#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub graph: Graph,
    pub stats: CrawlStats,
    /// True when a deadline or shutdown signal ended the run early
    pub cancelled: bool,
}

type FetchResult = (u64, FrontierEntry, std::result::Result<RelationsPage, ScanError>);

pub struct Scheduler<S: RelationSource> {
    source: Arc<S>,
    rule: StopRule,
    workers: usize,
    deadline: Option<Duration>,
    shutdown: Option<watch::Receiver<bool>>,
    progress_callback: Option<ProgressCallback>,
}

impl<S: RelationSource> Scheduler<S> {
    pub fn new(source: Arc<S>, rule: StopRule) -> Self {
        Self {
            source,
            rule,
            workers: 1,
            deadline: None,
            shutdown: None,
            progress_callback: None,
        }
    }

    /// Maximum number of relation fetches in flight at once.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The run stops once the channel holds `true`.
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Drive the traversal until the seeds are exhausted and the frontier is
    /// empty, or until cancelled.
    ///
    /// Fetches run on spawned tasks, but only this task touches the frontier
    /// and the graph, and results are applied in dispatch order. Any number
    /// of workers therefore produces the same graph as a single one.
    pub async fn run<G: SeedGenerator>(&self, mut seeds: G) -> Result<CrawlOutcome> {
        info!(
            "Starting traversal with {} worker(s), stop rule {:?}",
            self.workers, self.rule
        );

        let mut frontier = Frontier::new();
        let mut graph = Graph::new();
        let mut gaps = 0;
        let mut stop = StopSignal::new(self.shutdown.clone(), self.deadline);

        let mut tasks: JoinSet<FetchResult> = JoinSet::new();
        let mut ready: BTreeMap<u64, (FrontierEntry, std::result::Result<RelationsPage, ScanError>)> =
            BTreeMap::new();
        let mut next_seq: u64 = 0;
        let mut next_apply: u64 = 0;
        let mut cancelled = false;

        loop {
            while tasks.len() < self.workers {
                let Some(entry) = frontier.pop() else {
                    break;
                };
                let seq = next_seq;
                next_seq += 1;
                let source = Arc::clone(&self.source);
                tasks.spawn(async move {
                    let page = source.fetch_relations(&entry.link).await;
                    (seq, entry, page)
                });
            }

            if tasks.is_empty() {
                // Frontier drained and nothing in flight: pull the next seed batch
                let batch = tokio::select! {
                    batch = seeds.next_batch(self.source.as_ref()) => batch?,
                    _ = stop.wait() => {
                        cancelled = true;
                        break;
                    }
                };
                match batch {
                    Some(entries) => {
                        for entry in entries {
                            let key = entry.key.clone();
                            if !frontier.seed(entry) {
                                debug!("Seed {} already known, skipping", key);
                            }
                        }
                    }
                    None => break,
                }
                continue;
            }

            let joined = tokio::select! {
                joined = tasks.join_next() => joined,
                _ = stop.wait() => {
                    cancelled = true;
                    break;
                }
            };
            let Some(joined) = joined else {
                continue;
            };
            let (seq, entry, page) = joined?;
            ready.insert(seq, (entry, page));

            while let Some((entry, page)) = ready.remove(&next_apply) {
                next_apply += 1;
                self.apply(entry, page, &mut frontier, &mut graph, &mut gaps)?;
            }
        }

        if cancelled {
            tasks.abort_all();
            warn!(
                "Traversal stopped early with {} fetch(es) pending",
                frontier.len() + tasks.len() + ready.len()
            );
        }

        let stats = CrawlStats {
            seeded: frontier.seeded(),
            discovered: frontier.discovered(),
            collected: frontier.collected(),
            visited: frontier.visited_count(),
            gaps,
            edges: graph.edge_count(),
        };
        info!(
            "Traversal complete. Visited {} people, collected {}",
            stats.visited, stats.collected
        );

        Ok(CrawlOutcome {
            graph,
            stats,
            cancelled,
        })
    }

    /// One step: record the page's neighbours, admit the new ones the stop
    /// rule allows, mark the person visited.
    fn apply(
        &self,
        entry: FrontierEntry,
        page: std::result::Result<RelationsPage, ScanError>,
        frontier: &mut Frontier,
        graph: &mut Graph,
        gaps: &mut usize,
    ) -> Result<()> {
        let page = page.map_err(|source| CrawlError::Transport {
            key: entry.key.clone(),
            source,
        })?;

        let neighbors = match page {
            RelationsPage::Entries(candidates) => {
                let mut neighbors = Vec::with_capacity(candidates.len());
                for candidate in candidates {
                    let Some(neighbor) = FrontierEntry::from_candidate(candidate) else {
                        continue;
                    };
                    let key = neighbor.key.clone();
                    if self.rule.admits(frontier) {
                        frontier.discover(neighbor);
                    }
                    neighbors.push(key);
                }
                neighbors
            }
            RelationsPage::Gap(gap) => {
                warn!(
                    "{} on page for {} ({}); recording no relations",
                    gap, entry.key, entry.link
                );
                *gaps += 1;
                Vec::new()
            }
        };

        debug!("{} -> {} neighbour(s)", entry.key, neighbors.len());
        graph.record_edges(entry.key.clone(), neighbors);
        frontier.mark_visited(&entry.key);

        if let Some(ref callback) = self.progress_callback {
            callback(frontier.visited_count(), &entry.key);
        }

        Ok(())
    }
}

/// Resolves once the deadline passes or the shutdown channel turns true.
struct StopSignal {
    shutdown: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

impl StopSignal {
    fn new(shutdown: Option<watch::Receiver<bool>>, after: Option<Duration>) -> Self {
        Self {
            shutdown,
            deadline: after.map(|d| Instant::now() + d),
        }
    }

    async fn wait(&mut self) {
        let deadline = self.deadline;
        let timer = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => pending::<()>().await,
            }
        };
        let shutdown = async {
            match self.shutdown.as_mut() {
                // A dropped sender can never ask us to stop
                Some(rx) => {
                    if rx.wait_for(|stop| *stop).await.is_err() {
                        pending::<()>().await;
                    }
                }
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            _ = timer => info!("Deadline reached"),
            _ = shutdown => info!("Shutdown requested"),
        }
    }
}
