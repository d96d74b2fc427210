use thiserror::Error;

pub type Result<T> = std::result::Result<T, VersionError>;

/// Fixed user-facing banner shown when a comparison refresh fails. The raw
/// cause is logged, never surfaced.
pub const COMPARE_FAILED_MESSAGE: &str = "Could not load both manual versions for comparison.";

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("version store request failed: {0}")]
    Store(String),

    #[error("version compare coordinator is closed")]
    CoordinatorClosed,
}
