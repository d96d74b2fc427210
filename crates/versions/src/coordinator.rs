use std::sync::Arc;

use kb_flow::{RequestGuard, RequestId};
use log::{debug, warn};
use tokio::sync::{mpsc, watch};

use crate::error::{Result, VersionError, COMPARE_FAILED_MESSAGE};
use crate::model::{CompareSnapshot, CompareStatus, VersionComparison};
use crate::store::VersionStore;

/// Race-free comparison coordinator for one manual's versions.
///
/// One coordinator owns one comparison session: the selector pair, the
/// request generation and the visible status live inside a single spawned
/// loop. Both version payloads are fetched concurrently; a superseded pair
/// settles into nothing and partial results are never exposed.
#[derive(Clone)]
pub struct VersionCompareCoordinator {
    inner: Arc<CoordinatorInner>,
}

struct CoordinatorInner {
    command_tx: mpsc::Sender<Command>,
    state_tx: watch::Sender<CompareSnapshot>,
    // keeps the watch channel open while any handle is alive
    _state_guard: watch::Receiver<CompareSnapshot>,
}

enum Command {
    SetOldVersion(String),
    SetNewVersion(String),
    Refresh,
    Shutdown,
}

struct Settlement {
    id: RequestId,
    outcome: Result<Option<VersionComparison>>,
}

impl VersionCompareCoordinator {
    /// Starts the owning loop and fires an initial refresh with default
    /// selectors (the two most recent distinct versions).
    pub fn start(store: Arc<dyn VersionStore>, manual_id: impl Into<String>) -> Self {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (state_tx, state_rx) = watch::channel(CompareSnapshot::initial());

        spawn_compare_loop(store, manual_id.into(), command_rx, state_tx.clone());

        Self {
            inner: Arc::new(CoordinatorInner {
                command_tx,
                state_tx,
                _state_guard: state_rx,
            }),
        }
    }

    /// Selects the old side and rebuilds the comparison.
    pub async fn set_old_version(&self, tag: impl Into<String>) -> Result<()> {
        self.send(Command::SetOldVersion(tag.into())).await
    }

    /// Selects the new side and rebuilds the comparison.
    pub async fn set_new_version(&self, tag: impl Into<String>) -> Result<()> {
        self.send(Command::SetNewVersion(tag.into())).await
    }

    /// Rebuilds the comparison with the current selectors.
    pub async fn refresh(&self) -> Result<()> {
        self.send(Command::Refresh).await
    }

    /// Stops the owning loop. Anything still in flight settles into nothing.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.inner
            .command_tx
            .send(command)
            .await
            .map_err(|_| VersionError::CoordinatorClosed)
    }

    /// Current session state.
    #[must_use]
    pub fn snapshot(&self) -> CompareSnapshot {
        self.inner.state_tx.subscribe().borrow().clone()
    }

    /// Stream of session states for the presentation layer.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CompareSnapshot> {
        self.inner.state_tx.subscribe()
    }
}

impl Drop for VersionCompareCoordinator {
    fn drop(&mut self) {
        if Arc::strong_count(&self.inner) == 1 {
            let _ = self.inner.command_tx.try_send(Command::Shutdown);
        }
    }
}

fn spawn_compare_loop(
    store: Arc<dyn VersionStore>,
    manual_id: String,
    mut command_rx: mpsc::Receiver<Command>,
    state_tx: watch::Sender<CompareSnapshot>,
) {
    tokio::spawn(async move {
        let (settle_tx, mut settle_rx) = mpsc::channel::<Settlement>(8);
        let mut session = CompareSession {
            store,
            manual_id,
            old_selector: None,
            new_selector: None,
            guard: RequestGuard::new(),
            snapshot: CompareSnapshot::initial(),
            state_tx,
        };

        session.refresh(&settle_tx);

        loop {
            tokio::select! {
                command = command_rx.recv() => match command {
                    Some(Command::SetOldVersion(tag)) => {
                        session.old_selector = Some(tag);
                        session.refresh(&settle_tx);
                    }
                    Some(Command::SetNewVersion(tag)) => {
                        session.new_selector = Some(tag);
                        session.refresh(&settle_tx);
                    }
                    Some(Command::Refresh) => session.refresh(&settle_tx),
                    Some(Command::Shutdown) | None => break,
                },
                Some(settlement) = settle_rx.recv() => {
                    session.commit(settlement);
                }
            }
        }

        debug!("version compare session closed");
    });
}

/// Session state owned exclusively by the coordinator loop.
struct CompareSession {
    store: Arc<dyn VersionStore>,
    manual_id: String,
    old_selector: Option<String>,
    new_selector: Option<String>,
    guard: RequestGuard,
    snapshot: CompareSnapshot,
    state_tx: watch::Sender<CompareSnapshot>,
}

impl CompareSession {
    fn refresh(&mut self, settle_tx: &mpsc::Sender<Settlement>) {
        let id = self.guard.issue();
        self.snapshot.status = CompareStatus::Loading;
        self.snapshot.error = None;
        if let Some(tag) = &self.old_selector {
            self.snapshot.old_version = Some(tag.clone());
        }
        if let Some(tag) = &self.new_selector {
            self.snapshot.new_version = Some(tag.clone());
        }
        self.publish();

        debug!(
            "version compare refresh: manual={} request={id:?} old={:?} new={:?}",
            self.manual_id, self.old_selector, self.new_selector,
        );

        let store = self.store.clone();
        let manual_id = self.manual_id.clone();
        let old_selector = self.old_selector.clone();
        let new_selector = self.new_selector.clone();
        let settle_tx = settle_tx.clone();
        tokio::spawn(async move {
            let outcome = load_comparison(store, &manual_id, old_selector, new_selector).await;
            let _ = settle_tx.send(Settlement { id, outcome }).await;
        });
    }

    fn commit(&mut self, settlement: Settlement) {
        if !self.guard.is_current(settlement.id) {
            debug!(
                "dropping stale version comparison: request={:?}",
                settlement.id
            );
            return;
        }

        match settlement.outcome {
            Ok(Some(comparison)) => {
                self.snapshot.old_version = Some(comparison.old_version.clone());
                self.snapshot.new_version = Some(comparison.new_version.clone());
                self.snapshot.comparison = Some(comparison);
                self.snapshot.status = CompareStatus::Ready;
                self.snapshot.error = None;
            }
            Ok(None) => {
                debug!(
                    "manual {} has fewer than two distinct versions, nothing to compare",
                    self.manual_id,
                );
                self.snapshot.old_version = None;
                self.snapshot.new_version = None;
                self.snapshot.comparison = None;
                self.snapshot.status = CompareStatus::Idle;
                self.snapshot.error = None;
            }
            Err(err) => {
                warn!(
                    "version comparison failed for manual {}: {err}",
                    self.manual_id,
                );
                self.snapshot.comparison = None;
                self.snapshot.status = CompareStatus::Failed;
                self.snapshot.error = Some(COMPARE_FAILED_MESSAGE.to_string());
            }
        }
        self.publish();
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.snapshot.clone());
    }
}

/// Resolves selectors, fetches both payloads concurrently and builds the
/// comparison. `Ok(None)` means fewer than two distinct versions exist.
async fn load_comparison(
    store: Arc<dyn VersionStore>,
    manual_id: &str,
    old_selector: Option<String>,
    new_selector: Option<String>,
) -> Result<Option<VersionComparison>> {
    let (old_tag, new_tag) = match (old_selector, new_selector) {
        (Some(old_tag), Some(new_tag)) => (old_tag, new_tag),
        (old_selector, new_selector) => {
            let listed = store.list_versions(manual_id).await?;
            let Some((default_old, default_new)) = default_pair(&listed) else {
                return Ok(None);
            };
            (
                old_selector.unwrap_or(default_old),
                new_selector.unwrap_or(default_new),
            )
        }
    };

    let (old_payload, new_payload) = tokio::try_join!(
        store.fetch_version(manual_id, &old_tag),
        store.fetch_version(manual_id, &new_tag),
    )?;

    Ok(Some(VersionComparison::build(
        old_tag,
        new_tag,
        &old_payload,
        &new_payload,
    )))
}

/// Picks the default (old, new) pair from a newest-first tag list: the newest
/// tag and the next tag distinct from it.
fn default_pair(listed: &[String]) -> Option<(String, String)> {
    let newest = listed.first()?;
    let previous = listed.iter().skip(1).find(|tag| *tag != newest)?;
    Some((previous.clone(), newest.clone()))
}
