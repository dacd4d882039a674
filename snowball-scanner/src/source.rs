use crate::error::Result;
use crate::result::{Candidate, RelationsPage};
use std::future::Future;

/// Anything that can turn listing letters and profile links into candidates.
///
/// The returned futures are `Send` so the scheduler can drive relation
/// fetches from spawned tasks.
pub trait RelationSource: Send + Sync + 'static {
    /// Derives the profile link for a normalized, dash-joined name.
    fn profile_link(&self, slug: &str) -> Result<String>;

    /// Listing entries for names starting with `letter`, in page order.
    /// Only the first `limit` list items are read; an item without a name or
    /// link still counts against the limit. An empty listing is `Ok(vec![])`.
    fn fetch_listing(
        &self,
        letter: char,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Candidate>>> + Send;

    /// Related people listed on the profile page at `link`, in page order.
    fn fetch_relations(&self, link: &str) -> impl Future<Output = Result<RelationsPage>> + Send;
}
