//! Query, hit and snapshot types for the similar-consultation search.

use serde::{Deserialize, Serialize};

/// Business area filter attached to a similarity query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    General,
    Account,
    Billing,
    Technical,
}

/// Immutable similarity query. Built fresh per input change; the controller
/// never mutates one after firing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    /// Trimmed inquiry text.
    pub text: String,
    pub business_type: Option<BusinessType>,
    pub error_code: Option<String>,
}

/// One raw similarity hit as the backend returns it.
///
/// Optional fields default so a sparse backend payload degrades to empty
/// values instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHit {
    /// Externally computed similarity in `0.0..=1.0`.
    pub similarity: f64,
    #[serde(default)]
    pub consultation_id: String,
    #[serde(default)]
    pub inquiry: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A projected similar-consultation row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarConsultation {
    /// 1-based position in the backend's ordering.
    pub rank: usize,
    /// Similarity as a rounded percentage, `0..=100`.
    pub score: u8,
    pub consultation_id: String,
    pub inquiry: String,
    pub answer: String,
    pub keywords: Vec<String>,
}

/// Lifecycle of one similarity-search session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// Search disabled or no input yet.
    #[default]
    Idle,
    /// The trimmed input is shorter than the configured minimum. A steady
    /// state, not a failure.
    Insufficient,
    Loading,
    Success,
    Error,
}

/// Input-change event fed to the controller, typically once per keystroke.
#[derive(Debug, Clone)]
pub struct SearchInput {
    pub inquiry_text: String,
    pub business_type: Option<BusinessType>,
    pub error_code: Option<String>,
    /// Cleared while the consumer is on a screen where searching makes no
    /// sense (e.g. editing an existing record).
    pub enabled: bool,
}

/// Controller state as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSnapshot {
    pub status: SearchStatus,
    pub results: Vec<SimilarConsultation>,
    /// Fixed user-facing message while `status` is [`SearchStatus::Error`].
    pub error: Option<String>,
}

impl SearchSnapshot {
    pub(crate) fn initial() -> Self {
        Self {
            status: SearchStatus::Idle,
            results: Vec::new(),
            error: None,
        }
    }

    /// Derived loading flag for spinners.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }
}
