use std::{sync::Arc, time::Duration};

use domain_tagging::{
    repository::{InstanceRepo, NodePoolRepo},
    service::{InstanceTagService, NodePoolMatchService, ReconcileService},
};
use service_tagging::{InstanceTagServiceImpl, NodePoolMatchServiceImpl, ReconcileServiceImpl};
use url::Url;

use super::{
    config::NodePoolTaggerConfig,
    repository::{ComputeInstanceRepo, ContainerEngineNodePoolRepo, OciRestClient},
};

/// Wires the collaborators once per process; every invocation shares them.
pub struct ServiceProvider {
    reconcile_service: Arc<dyn ReconcileService>,
}

impl ServiceProvider {
    pub fn build(config: &NodePoolTaggerConfig) -> anyhow::Result<Self> {
        let oci = &config.oci;
        if oci.region.is_empty()
            && (oci.container_engine_endpoint.is_none() || oci.compute_endpoint.is_none())
        {
            anyhow::bail!("oci.region must be set unless both endpoints are configured.");
        }
        let http_client = Arc::new(
            reqwest::Client::builder()
                .timeout(Duration::from_secs(config.oci.timeout_secs))
                .build()?,
        );
        let oci_client = Arc::new(
            OciRestClient::builder()
                .http_client(http_client)
                .authorization(config.oci.authorization.clone())
                .build(),
        );

        let node_pool_repo: Arc<dyn NodePoolRepo> = Arc::new(
            ContainerEngineNodePoolRepo::builder()
                .client(oci_client.clone())
                .endpoint(Url::parse(&config.oci.container_engine_endpoint())?)
                .build(),
        );
        let instance_repo: Arc<dyn InstanceRepo> = Arc::new(
            ComputeInstanceRepo::builder()
                .client(oci_client)
                .endpoint(Url::parse(&config.oci.compute_endpoint())?)
                .build(),
        );

        let match_service: Arc<dyn NodePoolMatchService> = Arc::new(
            NodePoolMatchServiceImpl::builder()
                .node_pool_repo(node_pool_repo)
                .build(),
        );
        let tag_service: Arc<dyn InstanceTagService> = Arc::new(
            InstanceTagServiceImpl::builder()
                .instance_repo(instance_repo)
                .build(),
        );
        let reconcile_service = Arc::new(
            ReconcileServiceImpl::builder()
                .match_service(match_service)
                .tag_service(tag_service)
                .config(config.function.clone())
                .build(),
        );

        Ok(Self { reconcile_service })
    }

    pub fn reconcile_service(&self) -> Arc<dyn ReconcileService> {
        self.reconcile_service.clone()
    }
}
