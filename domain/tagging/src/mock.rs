use async_trait::async_trait;
use mockall::mock;

use crate::{
    exception::TaggerResult,
    model::{
        entity::{NodePool, NodePoolSummary},
        vo::{DefinedTags, MatchResult, ReconcileOutcome},
    },
    repository::{InstanceRepo, NodePoolRepo},
    service::{InstanceTagService, NodePoolMatchService, ReconcileService},
};

mock! {
    pub NodePoolRepo {}
    #[async_trait]
    impl NodePoolRepo for NodePoolRepo {
        async fn list_node_pools(&self, compartment_id: &str) -> anyhow::Result<Vec<NodePoolSummary>>;
        async fn get_node_pool(&self, node_pool_id: &str) -> anyhow::Result<NodePool>;
    }
}

mock! {
    pub InstanceRepo {}
    #[async_trait]
    impl InstanceRepo for InstanceRepo {
        async fn update_defined_tags(&self, instance_id: &str, tags: &DefinedTags) -> anyhow::Result<()>;
    }
}

mock! {
    pub NodePoolMatchService {}
    #[async_trait]
    impl NodePoolMatchService for NodePoolMatchService {
        async fn find_owner(&self, compartment_id: &str, instance_id: &str) -> TaggerResult<MatchResult>;
    }
}

mock! {
    pub InstanceTagService {}
    #[async_trait]
    impl InstanceTagService for InstanceTagService {
        async fn tag_instance(
            &self,
            instance_id: &str,
            node_pool_name: &str,
            tag_namespace: &str,
            tag_name: &str,
        ) -> TaggerResult<()>;
    }
}

mock! {
    pub ReconcileService {}
    #[async_trait]
    impl ReconcileService for ReconcileService {
        async fn reconcile(&self, payload: &[u8]) -> TaggerResult<ReconcileOutcome>;
    }
}
