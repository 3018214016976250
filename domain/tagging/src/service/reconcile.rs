use async_trait::async_trait;

use crate::{exception::TaggerResult, model::vo::ReconcileOutcome};

/// One event in, at most one tag update out.
#[async_trait]
pub trait ReconcileService: Send + Sync {
    /// Decode the event payload, validate config, find the owning pool and tag on a match.
    async fn reconcile(&self, payload: &[u8]) -> TaggerResult<ReconcileOutcome>;
}
