use async_trait::async_trait;

use crate::model::entity::{NodePool, NodePoolSummary};

/// Read access to the container engine's node pool directory.
///
/// Each call is a single exchange; truncated (paged) results are not followed.
#[async_trait]
pub trait NodePoolRepo: Send + Sync {
    /// All node pools visible in a compartment, in directory order.
    async fn list_node_pools(&self, compartment_id: &str) -> anyhow::Result<Vec<NodePoolSummary>>;
    /// One node pool with its current member nodes.
    async fn get_node_pool(&self, node_pool_id: &str) -> anyhow::Result<NodePool>;
}
