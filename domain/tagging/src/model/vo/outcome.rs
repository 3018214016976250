use serde::{Deserialize, Serialize};

/// Result of searching a compartment's node pools for an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Matched {
        node_pool_id: String,
        node_pool_name: String,
    },
    NoMatch,
}

/// What one reconciliation pass did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ReconcileOutcome {
    #[serde(rename_all = "camelCase")]
    Tagged {
        instance_id: String,
        node_pool_id: String,
        node_pool_name: String,
    },
    #[serde(rename_all = "camelCase")]
    NoMatch { instance_id: String },
}

impl ReconcileOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Tagged { .. })
    }

    pub fn instance_id(&self) -> &str {
        match self {
            Self::Tagged { instance_id, .. } | Self::NoMatch { instance_id } => instance_id,
        }
    }
}
