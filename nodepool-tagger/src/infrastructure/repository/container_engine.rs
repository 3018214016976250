use std::sync::Arc;

use async_trait::async_trait;
use domain_tagging::{
    model::entity::{NodePool, NodePoolSummary},
    repository::NodePoolRepo,
};
use typed_builder::TypedBuilder;
use url::Url;

use super::oci_client::{endpoint_url, OciRestClient};

const API_VERSION: &str = "20180222";

/// Node pool directory backed by the container engine REST API.
#[derive(TypedBuilder)]
pub struct ContainerEngineNodePoolRepo {
    client: Arc<OciRestClient>,
    endpoint: Url,
}

#[async_trait]
impl NodePoolRepo for ContainerEngineNodePoolRepo {
    async fn list_node_pools(&self, compartment_id: &str) -> anyhow::Result<Vec<NodePoolSummary>> {
        let mut url = endpoint_url(&self.endpoint, [API_VERSION, "nodePools"])?;
        url.query_pairs_mut().append_pair("compartmentId", compartment_id);
        self.client.get(url).await
    }

    async fn get_node_pool(&self, node_pool_id: &str) -> anyhow::Result<NodePool> {
        let url = endpoint_url(&self.endpoint, [API_VERSION, "nodePools", node_pool_id])?;
        self.client.get(url).await
    }
}
