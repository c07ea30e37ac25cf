//! Derived-state plumbing shared by the roster crates.
//!
//! Inputs and derived values are modelled as slots in a dependency [`Graph`].
//! A [`SyncPlan`] validates the graph once and answers which derived slots a
//! change invalidates; each derived slot caches its value in a [`Memo`].

mod graph;
mod memo;
mod state_sync_status;
mod sync_plan;

pub use graph::{DepRoute, Graph, TopologyError};
pub use memo::Memo;
pub use state_sync_status::StateSyncStatus;
pub use sync_plan::SyncPlan;
