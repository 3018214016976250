use async_trait::async_trait;

use crate::exception::TaggerResult;

#[async_trait]
pub trait InstanceTagService: Send + Sync {
    /// Tag an instance with the name of the node pool owning it.
    ///
    /// Re-applying for the same pool writes the same tags again.
    async fn tag_instance(
        &self,
        instance_id: &str,
        node_pool_name: &str,
        tag_namespace: &str,
        tag_name: &str,
    ) -> TaggerResult<()>;
}
