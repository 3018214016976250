use std::sync::Arc;

use async_trait::async_trait;
use domain_tagging::{
    exception::TaggerResult,
    model::vo::{MatchResult, OciEvent, ReconcileOutcome, TaggerConfig},
    service::{InstanceTagService, NodePoolMatchService, ReconcileService},
};
use typed_builder::TypedBuilder;

/// Drives one reconciliation pass: decode, validate config, match, tag.
///
/// Every failure ends the pass; nothing is retried here.
#[derive(TypedBuilder)]
pub struct ReconcileServiceImpl {
    match_service: Arc<dyn NodePoolMatchService>,
    tag_service: Arc<dyn InstanceTagService>,
    config: TaggerConfig,
}

#[async_trait]
impl ReconcileService for ReconcileServiceImpl {
    #[tracing::instrument(skip_all)]
    async fn reconcile(&self, payload: &[u8]) -> TaggerResult<ReconcileOutcome> {
        let event = OciEvent::decode(payload)?;
        tracing::info!(
            "Got OCI event with EventType [{}] and resourceID [{}]",
            event.event_type(),
            event.resource_id()
        );
        self.config.validate()?;

        let instance_id = event.resource_id().to_owned();
        if instance_id.is_empty() {
            tracing::warn!("Event carries no resource id, skipping node pool scan.");
            return Ok(no_match(instance_id));
        }

        let TaggerConfig {
            tag_namespace,
            tag_name,
            compartment_id,
        } = &self.config;
        match self.match_service.find_owner(compartment_id, &instance_id).await? {
            MatchResult::Matched {
                node_pool_id,
                node_pool_name,
            } => {
                tracing::info!("MATCH: pool[{node_pool_name}] matches node id[{instance_id}]");
                self.tag_service
                    .tag_instance(&instance_id, &node_pool_name, tag_namespace, tag_name)
                    .await?;
                tracing::info!("MATCH: node id[{instance_id}] has been tagged");
                Ok(ReconcileOutcome::Tagged {
                    instance_id,
                    node_pool_id,
                    node_pool_name,
                })
            }
            MatchResult::NoMatch => Ok(no_match(instance_id)),
        }
    }
}

fn no_match(instance_id: String) -> ReconcileOutcome {
    tracing::info!("NO-MATCH: No match for instance id[{instance_id}] found.  No nodes tagged.");
    ReconcileOutcome::NoMatch { instance_id }
}
