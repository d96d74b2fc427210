//! # KB Versions
//!
//! Manual-version comparison for the knowledge console.
//!
//! ## Pipeline
//!
//! ```text
//! (manual id, old/new selectors)
//!     │
//!     ├──> Selector resolution
//!     │      └─> Defaults: the two most recent distinct tags
//!     │
//!     ├──> VersionStore (collaborator, both payloads fetched concurrently)
//!     │
//!     └──> kb-diff
//!            ├─> Keyword statuses (added / removed / unchanged)
//!            └─> Guideline step statuses (same / different, positional)
//! ```
//!
//! Either fetch failing collapses the whole refresh into a single failed
//! state; a half-loaded comparison is never exposed. Superseded refreshes are
//! discarded by generation, same as in `kb-search`.

mod coordinator;
mod error;
mod model;
mod store;

pub use coordinator::VersionCompareCoordinator;
pub use error::{Result, VersionError, COMPARE_FAILED_MESSAGE};
pub use model::{CompareSnapshot, CompareStatus, VersionComparison};
pub use store::{VersionMeta, VersionPayload, VersionStore};
