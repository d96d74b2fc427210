use async_trait::async_trait;

use crate::error::Result;
use crate::model::{RawHit, SearchQuery};

/// Similarity-search collaborator.
///
/// Implementations wrap the console's search service client. Ordering and
/// similarity scoring are theirs; the controller consumes the hit sequence
/// as-is and only projects it for display.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawHit>>;
}
