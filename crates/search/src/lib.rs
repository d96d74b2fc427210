//! # KB Search
//!
//! Debounced similar-consultation search for the knowledge console.
//!
//! ## Pipeline
//!
//! ```text
//! Input change (per keystroke)
//!     │
//!     ├──> Eligibility gate (enabled + minimum trimmed length)
//!     │
//!     ├──> Debounce gate (quiet window, latest query wins)
//!     │      └─> One fired request, generation-tagged
//!     │
//!     ├──> SearchBackend (collaborator)
//!     │      └─> Raw similarity hits
//!     │
//!     └──> Projector
//!            └─> Ranked rows (1-based rank, rounded % score)
//! ```
//!
//! Superseded requests are never cancelled at the transport level. Each
//! settlement carries the generation id it was fired with, and only the
//! current generation may commit, so the latest input always wins no matter
//! how responses interleave.

mod backend;
mod controller;
mod error;
mod model;
mod projector;

pub use backend::SearchBackend;
pub use controller::{SimilarSearchConfig, SimilarSearchController};
pub use error::{Result, SearchError, SEARCH_FAILED_MESSAGE};
pub use model::{
    BusinessType, RawHit, SearchInput, SearchQuery, SearchSnapshot, SearchStatus,
    SimilarConsultation,
};
pub use projector::project_hits;
