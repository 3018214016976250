use thiserror::Error;

pub type TaggerResult<T> = Result<T, TaggerException>;

#[derive(Error, Debug)]
pub enum TaggerException {
    #[error("{} must be defined in function config.", missing.join(", "))]
    Configuration { missing: Vec<&'static str> },

    #[error("Cannot decode event payload: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Node pool directory is unavailable: {source}")]
    DirectoryUnavailable {
        #[source]
        source: anyhow::Error,
    },

    #[error("Cannot update tags of instance with id: {instance_id}: {source}")]
    TagUpdateFailed {
        instance_id: String,
        #[source]
        source: anyhow::Error,
    },
}

impl TaggerException {
    /// Whether the failure was raised before any remote call was made.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Decode { .. })
    }
}

impl From<serde_json::Error> for TaggerException {
    fn from(e: serde_json::Error) -> Self {
        TaggerException::Decode { source: e }
    }
}
