use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Namespace holding the provenance tag that the autoscaler stamps on its nodes.
pub const PROVENANCE_NAMESPACE: &str = "Oracle-Tags";
pub const PROVENANCE_KEY: &str = "CreatedBy";
pub const PROVENANCE_VALUE: &str = "oke";

/// Defined tags of a resource, namespace -> key -> value.
///
/// Writing a namespace replaces every key previously defined under it, so a
/// value of this type always carries the complete desired namespace contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinedTags(pub BTreeMap<String, BTreeMap<String, Value>>);

impl DefinedTags {
    /// Tags recording which node pool owns an instance, alongside the provenance tag.
    pub fn for_node_pool(tag_namespace: &str, tag_name: &str, node_pool_name: &str) -> Self {
        let mut tags = Self::default();
        tags.insert(PROVENANCE_NAMESPACE, PROVENANCE_KEY, PROVENANCE_VALUE);
        tags.insert(tag_namespace, tag_name, node_pool_name);
        tags
    }

    pub fn insert(&mut self, namespace: &str, key: &str, value: impl Into<Value>) {
        self.0
            .entry(namespace.to_owned())
            .or_default()
            .insert(key.to_owned(), value.into());
    }

    pub fn get(&self, namespace: &str, key: &str) -> Option<&Value> {
        self.0.get(namespace).and_then(|keys| keys.get(key))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
