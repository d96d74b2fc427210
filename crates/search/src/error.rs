use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Fixed user-facing message shown when a similarity search fails. The raw
/// cause is logged, never surfaced.
pub const SEARCH_FAILED_MESSAGE: &str = "Similar consultation search failed. Please try again.";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search backend request failed: {0}")]
    Backend(String),

    #[error("search controller is closed")]
    ControllerClosed,
}
