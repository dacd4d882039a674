pub mod client;
pub mod crawler;
pub mod error;
pub mod parse;
pub mod result;
pub mod source;

pub use client::ClientConfig;
pub use crawler::Crawler;
pub use error::ScanError;
pub use result::{Candidate, ParseGap, RelationsPage};
pub use source::RelationSource;
