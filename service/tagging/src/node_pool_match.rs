use std::sync::Arc;

use async_trait::async_trait;
use domain_tagging::{
    exception::{TaggerException, TaggerResult},
    model::vo::MatchResult,
    repository::NodePoolRepo,
    service::NodePoolMatchService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct NodePoolMatchServiceImpl {
    node_pool_repo: Arc<dyn NodePoolRepo>,
}

#[async_trait]
impl NodePoolMatchService for NodePoolMatchServiceImpl {
    async fn find_owner(
        &self,
        compartment_id: &str,
        instance_id: &str,
    ) -> TaggerResult<MatchResult> {
        let summaries = self
            .node_pool_repo
            .list_node_pools(compartment_id)
            .await
            .map_err(|source| TaggerException::DirectoryUnavailable { source })?;
        tracing::debug!(
            "Scanning {} node pools in compartment {compartment_id}.",
            summaries.len()
        );

        for summary in summaries {
            let node_pool = self
                .node_pool_repo
                .get_node_pool(&summary.id)
                .await
                .map_err(|source| TaggerException::DirectoryUnavailable { source })?;
            if let Some(node) = node_pool.find_member(instance_id) {
                tracing::debug!("Node {} ({}) found in node pool {}.", node.id, node.name, summary.id);
                // Listing name first, detail name when the listing omits it.
                let node_pool_name = if summary.name.is_empty() {
                    node_pool.name.clone()
                } else {
                    summary.name
                };
                return Ok(MatchResult::Matched {
                    node_pool_id: summary.id,
                    node_pool_name,
                });
            }
        }
        Ok(MatchResult::NoMatch)
    }
}
