use serde::{Deserialize, Serialize};

use crate::exception::{TaggerException, TaggerResult};

/// Per-function settings naming where the pool tag goes and which compartment to scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggerConfig {
    #[serde(default)]
    pub tag_namespace: String,
    /// Tag key within `tag_namespace`.
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub compartment_id: String,
}

impl TaggerConfig {
    /// All three settings must be non-empty.
    pub fn validate(&self) -> TaggerResult<()> {
        let missing = [
            ("tag_namespace", &self.tag_namespace),
            ("tag_name", &self.tag_name),
            ("compartment_id", &self.compartment_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect::<Vec<_>>();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TaggerException::Configuration { missing })
        }
    }
}
