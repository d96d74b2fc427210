//! # KB Flow
//!
//! Control primitives for async re-fetch pipelines.
//!
//! Two pieces, both deliberately free of shared state:
//!
//! - [`DebounceGate`] stashes the latest payload behind a quiet window and
//!   hands its deadline to the owning loop. Each consumer owns its own gate,
//!   so two search boxes on one page never contend.
//! - [`RequestGuard`] is a generational counter that makes superseded
//!   in-flight responses inert without cancelling their transport calls.
//!
//! Neither primitive spawns tasks or touches channels; the owning loop wires
//! them into its `tokio::select!`.

mod debounce;
mod generation;

pub use debounce::DebounceGate;
pub use generation::{RequestGuard, RequestId};
