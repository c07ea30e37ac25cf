use std::fmt::Debug;

use crate::{Graph, TopologyError};

/// A validated dependency graph plus the order in which derived slots must
/// be recomputed.
#[derive(Debug)]
pub struct SyncPlan<Slot>
where
    Slot: Debug + Copy + Ord,
{
    graph: Graph<Slot>,
    order: Vec<Slot>,
}

impl<Slot> SyncPlan<Slot>
where
    Slot: Debug + Copy + Ord,
{
    /// Fails if the graph has a cycle or a duplicated edge.
    pub fn new(graph: Graph<Slot>) -> Result<Self, TopologyError<Slot>> {
        let order = graph.topological_order()?;
        log::debug!("sync plan order: {order:?}");
        Ok(Self { graph, order })
    }

    pub fn order(&self) -> &[Slot] {
        &self.order
    }

    /// Slots made stale by a change to `changed`, in recomputation order.
    pub fn affected(&mut self, changed: Slot) -> Vec<Slot> {
        let downstream = self.graph.downstream(changed);
        self.order
            .iter()
            .filter(|slot| downstream.contains(*slot))
            .copied()
            .collect()
    }
}
