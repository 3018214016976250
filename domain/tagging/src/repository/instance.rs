use async_trait::async_trait;

use crate::model::vo::DefinedTags;

#[async_trait]
pub trait InstanceRepo: Send + Sync {
    /// Replace the given defined tag namespaces on a compute instance.
    async fn update_defined_tags(&self, instance_id: &str, tags: &DefinedTags)
        -> anyhow::Result<()>;
}
