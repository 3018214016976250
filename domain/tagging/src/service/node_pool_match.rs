use async_trait::async_trait;

use crate::{exception::TaggerResult, model::vo::MatchResult};

/// Finds the node pool owning an instance.
///
/// Pools are visited in listing order and the scan stops at the first pool
/// whose members include the instance. Membership is assumed disjoint at
/// scan time, so when the provider transiently reports an instance in two
/// pools the earlier listed pool wins.
#[async_trait]
pub trait NodePoolMatchService: Send + Sync {
    async fn find_owner(&self, compartment_id: &str, instance_id: &str)
        -> TaggerResult<MatchResult>;
}
