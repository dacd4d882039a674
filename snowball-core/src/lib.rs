pub mod crawl;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod key;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod seed;

pub use crawl::{CrawlOptions, SeedMode, execute_crawl};
pub use error::CrawlError;
pub use frontier::Frontier;
pub use graph::Graph;
pub use key::PersonKey;
pub use model::FrontierEntry;
pub use scheduler::{CrawlOutcome, CrawlStats, ProgressCallback, Scheduler, StopRule};
