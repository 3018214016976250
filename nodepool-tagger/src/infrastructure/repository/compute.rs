use std::sync::Arc;

use async_trait::async_trait;
use domain_tagging::{model::vo::DefinedTags, repository::InstanceRepo};
use serde::Serialize;
use typed_builder::TypedBuilder;
use url::Url;

use super::oci_client::{endpoint_url, OciRestClient};

const API_VERSION: &str = "20160918";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateInstanceDetails<'a> {
    defined_tags: &'a DefinedTags,
}

/// Compute instances updated through the core services REST API.
#[derive(TypedBuilder)]
pub struct ComputeInstanceRepo {
    client: Arc<OciRestClient>,
    endpoint: Url,
}

#[async_trait]
impl InstanceRepo for ComputeInstanceRepo {
    async fn update_defined_tags(
        &self,
        instance_id: &str,
        tags: &DefinedTags,
    ) -> anyhow::Result<()> {
        let url = endpoint_url(&self.endpoint, [API_VERSION, "instances", instance_id])?;
        self.client
            .put(url, &UpdateInstanceDetails { defined_tags: tags })
            .await
    }
}
