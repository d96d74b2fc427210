use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Revision bookkeeping attached to a version payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMeta {
    #[serde(default)]
    pub revised_by: Option<String>,
    #[serde(default)]
    pub revised_at: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Full content of one manual version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionPayload {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub guideline_text: String,
    #[serde(default)]
    pub meta: VersionMeta,
}

/// Manual-version collaborator.
///
/// `list_versions` returns tags newest-first; repeated tags may appear when a
/// manual was re-saved without a version bump. Payload fetches may be served
/// from the console's query cache; this crate never caches on its own.
#[async_trait]
pub trait VersionStore: Send + Sync {
    async fn list_versions(&self, manual_id: &str) -> Result<Vec<String>>;

    async fn fetch_version(&self, manual_id: &str, tag: &str) -> Result<VersionPayload>;
}
