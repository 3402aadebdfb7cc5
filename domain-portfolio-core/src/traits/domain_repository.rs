//! Domain collection persistence trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::DomainRecord;

/// Domain collection repository.
///
/// The collection is always read and written as a single block.
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Load the whole collection
    ///
    /// # Returns
    /// * `Some(records)` - a collection was saved before (possibly empty)
    /// * `None` - nothing stored yet
    async fn load(&self) -> CoreResult<Option<Vec<DomainRecord>>>;

    /// Save the whole collection, replacing what was stored
    async fn save(&self, records: &[DomainRecord]) -> CoreResult<()>;
}
