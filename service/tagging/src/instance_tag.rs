use std::sync::Arc;

use async_trait::async_trait;
use domain_tagging::{
    exception::{TaggerException, TaggerResult},
    model::vo::DefinedTags,
    repository::InstanceRepo,
    service::InstanceTagService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct InstanceTagServiceImpl {
    instance_repo: Arc<dyn InstanceRepo>,
}

#[async_trait]
impl InstanceTagService for InstanceTagServiceImpl {
    async fn tag_instance(
        &self,
        instance_id: &str,
        node_pool_name: &str,
        tag_namespace: &str,
        tag_name: &str,
    ) -> TaggerResult<()> {
        let tags = DefinedTags::for_node_pool(tag_namespace, tag_name, node_pool_name);
        self.instance_repo.update_defined_tags(instance_id, &tags).await.map_err(|source| {
            TaggerException::TagUpdateFailed {
                instance_id: instance_id.to_owned(),
                source,
            }
        })
    }
}
