use std::sync::Arc;
use std::time::Duration;

use kb_flow::{DebounceGate, RequestGuard, RequestId};
use log::{debug, warn};
use tokio::sync::{mpsc, watch};
use tokio::time;

use crate::backend::SearchBackend;
use crate::error::{Result, SearchError, SEARCH_FAILED_MESSAGE};
use crate::model::{RawHit, SearchInput, SearchQuery, SearchSnapshot, SearchStatus};
use crate::projector::project_hits;

/// Timing knobs for one similarity-search session.
#[derive(Debug, Clone, Copy)]
pub struct SimilarSearchConfig {
    /// Quiet window between the last input change and the fired request.
    pub debounce: Duration,
    /// Minimum trimmed query length, in chars, below which nothing fires.
    pub min_query_len: usize,
}

impl Default for SimilarSearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1000),
            min_query_len: 4,
        }
    }
}

/// Debounced, race-free controller for similar-consultation search.
///
/// One controller owns one search session: the debounce gate, the request
/// generation and the visible status all live inside a single spawned loop,
/// so two controllers on one page stay fully independent. Input changes and
/// manual refetches arrive as commands; the presentation layer observes the
/// session through a watch channel and never sees a partial transition.
#[derive(Clone)]
pub struct SimilarSearchController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    command_tx: mpsc::Sender<Command>,
    state_tx: watch::Sender<SearchSnapshot>,
    // keeps the watch channel open while any handle is alive
    _state_guard: watch::Receiver<SearchSnapshot>,
}

enum Command {
    Input(SearchInput),
    Refetch,
    Shutdown,
}

struct Settlement {
    id: RequestId,
    outcome: Result<Vec<RawHit>>,
}

impl SimilarSearchController {
    /// Starts the owning loop for one search session.
    pub fn start(backend: Arc<dyn SearchBackend>, config: SimilarSearchConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (state_tx, state_rx) = watch::channel(SearchSnapshot::initial());

        spawn_search_loop(backend, config, command_rx, state_tx.clone());

        Self {
            inner: Arc::new(ControllerInner {
                command_tx,
                state_tx,
                _state_guard: state_rx,
            }),
        }
    }

    /// Feeds one input-change event.
    pub async fn update_input(&self, input: SearchInput) -> Result<()> {
        self.send(Command::Input(input)).await
    }

    /// Fires the current eligible query immediately, bypassing the quiet
    /// window. Ignored while no eligible query exists.
    pub async fn refetch(&self) -> Result<()> {
        self.send(Command::Refetch).await
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
            .map_err(|_| SearchError::ControllerClosed)
    }

    /// Current session state.
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        self.inner.state_tx.subscribe().borrow().clone()
    }

    /// Stream of session states for the presentation layer.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.inner.state_tx.subscribe()
    }
}

impl Drop for SimilarSearchController {
    fn drop(&mut self) {
        if Arc::strong_count(&self.inner) == 1 {
            let _ = self.inner.command_tx.try_send(Command::Shutdown);
        }
    }
}

fn spawn_search_loop(
    backend: Arc<dyn SearchBackend>,
    config: SimilarSearchConfig,
    mut command_rx: mpsc::Receiver<Command>,
    state_tx: watch::Sender<SearchSnapshot>,
) {
    tokio::spawn(async move {
        let (settle_tx, mut settle_rx) = mpsc::channel::<Settlement>(8);
        let mut session = SearchSession::new(backend, config, state_tx);

        loop {
            let deadline = session.gate.deadline();

            tokio::select! {
                command = command_rx.recv() => match command {
                    Some(Command::Input(input)) => session.handle_input(input),
                    Some(Command::Refetch) => session.refetch(),
                    Some(Command::Shutdown) | None => break,
                },
                Some(settlement) = settle_rx.recv() => {
                    session.commit(settlement);
                }
                () = async {
                    if let Some(deadline) = deadline {
                        time::sleep_until(deadline).await;
                    }
                }, if deadline.is_some() => {
                    session.fire_pending(&settle_tx);
                }
            }
        }

        debug!("similar search session closed");
    });
}

/// Session state owned exclusively by the controller loop.
struct SearchSession {
    backend: Arc<dyn SearchBackend>,
    config: SimilarSearchConfig,
    gate: DebounceGate<SearchQuery>,
    guard: RequestGuard,
    /// Latest eligible query, kept for manual refetch after the gate fired.
    current: Option<SearchQuery>,
    snapshot: SearchSnapshot,
    state_tx: watch::Sender<SearchSnapshot>,
}

impl SearchSession {
    fn new(
        backend: Arc<dyn SearchBackend>,
        config: SimilarSearchConfig,
        state_tx: watch::Sender<SearchSnapshot>,
    ) -> Self {
        Self {
            backend,
            config,
            gate: DebounceGate::new(config.debounce),
            guard: RequestGuard::new(),
            current: None,
            snapshot: SearchSnapshot::initial(),
            state_tx,
        }
    }

    fn handle_input(&mut self, input: SearchInput) {
        if !input.enabled {
            self.clear_session(SearchStatus::Idle);
            return;
        }

        let trimmed = input.inquiry_text.trim();
        if trimmed.chars().count() < self.config.min_query_len {
            self.clear_session(SearchStatus::Insufficient);
            return;
        }

        let query = SearchQuery {
            text: trimmed.to_string(),
            business_type: input.business_type,
            error_code: input.error_code,
        };
        self.current = Some(query.clone());
        // status stays as-is during the quiet window; previous results remain
        // visible until the fired request settles
        self.gate.arm(query);
    }

    /// Drops the pending timer, strands anything in flight and resets the
    /// visible state.
    fn clear_session(&mut self, status: SearchStatus) {
        self.gate.disarm();
        self.guard.invalidate();
        self.current = None;
        self.snapshot.status = status;
        self.snapshot.results.clear();
        self.snapshot.error = None;
        self.publish();
    }

    fn refetch(&mut self) {
        let Some(query) = self.current.clone() else {
            debug!("refetch ignored: no eligible query");
            return;
        };
        // replaces any pending debounced payload, so nothing double-fires
        self.gate.force(query);
    }

    fn fire_pending(&mut self, settle_tx: &mpsc::Sender<Settlement>) {
        if let Some(query) = self.gate.take_pending() {
            self.issue(query, settle_tx);
        }
    }

    fn issue(&mut self, query: SearchQuery, settle_tx: &mpsc::Sender<Settlement>) {
        let id = self.guard.issue();
        self.snapshot.status = SearchStatus::Loading;
        self.snapshot.error = None;
        self.publish();

        debug!(
            "similar search fired: request={id:?} chars={} business_type={:?}",
            query.text.chars().count(),
            query.business_type,
        );

        let backend = self.backend.clone();
        let settle_tx = settle_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.search(&query).await;
            let _ = settle_tx.send(Settlement { id, outcome }).await;
        });
    }

    fn commit(&mut self, settlement: Settlement) {
        if !self.guard.is_current(settlement.id) {
            debug!("dropping stale search settlement: request={:?}", settlement.id);
            return;
        }

        match settlement.outcome {
            Ok(hits) => {
                let results = project_hits(hits);
                debug!(
                    "similar search settled: request={:?} results={}",
                    settlement.id,
                    results.len(),
                );
                self.snapshot.status = SearchStatus::Success;
                self.snapshot.results = results;
                self.snapshot.error = None;
            }
            Err(err) => {
                warn!("similar search failed: {err}");
                self.snapshot.status = SearchStatus::Error;
                self.snapshot.results.clear();
                self.snapshot.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        self.publish();
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.snapshot.clone());
    }
}
