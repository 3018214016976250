use serde::{Deserialize, Serialize};

/// A node pool as it appears in a compartment listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Full detail of one node pool, including its current members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePool {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Member order is whatever the directory returned.
    #[serde(default, rename = "nodes")]
    pub members: Vec<Node>,
}

/// A member of a node pool; `id` is the underlying compute instance id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl NodePool {
    /// The first member whose instance id equals `instance_id`.
    pub fn find_member(&self, instance_id: &str) -> Option<&Node> {
        self.members.iter().find(|node| node.id == instance_id)
    }
}
