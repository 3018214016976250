use domain_tagging::model::vo::TaggerConfig;
use serde::Deserialize;

use super::telemetry::TelemetryConfig;

/// Bare environment variables a function platform injects, and where they land.
const FUNCTION_OVERRIDES: [(&str, &str); 4] = [
    ("tag_namespace", "function.tag_namespace"),
    ("tag_name", "function.tag_name"),
    ("compartment_id", "function.compartment_id"),
    ("OCI_RESOURCE_PRINCIPAL_REGION", "oci.region"),
];

#[derive(Default, Clone, Deserialize, Debug)]
pub struct NodePoolTaggerConfig {
    /// Validated per invocation rather than at load time.
    #[serde(default)]
    pub function: TaggerConfig,
    #[serde(default)]
    pub oci: OciConfig,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Deserialize, Debug)]
pub struct OciConfig {
    #[serde(default)]
    pub region: String,
    /// Overrides the regional container engine endpoint.
    #[serde(default)]
    pub container_engine_endpoint: Option<String>,
    /// Overrides the regional compute endpoint.
    #[serde(default)]
    pub compute_endpoint: Option<String>,
    /// Pre-issued `Authorization` header value sent with every request.
    #[serde(default)]
    pub authorization: Option<String>,
    #[serde(default = "OciConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl OciConfig {
    fn default_timeout_secs() -> u64 {
        30
    }

    pub fn container_engine_endpoint(&self) -> String {
        self.container_engine_endpoint
            .clone()
            .unwrap_or_else(|| format!("https://containerengine.{}.oraclecloud.com", self.region))
    }

    pub fn compute_endpoint(&self) -> String {
        self.compute_endpoint
            .clone()
            .unwrap_or_else(|| format!("https://iaas.{}.oraclecloud.com", self.region))
    }
}

impl Default for OciConfig {
    fn default() -> Self {
        Self {
            region: Default::default(),
            container_engine_endpoint: None,
            compute_endpoint: None,
            authorization: None,
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_address")]
    pub bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    pub bind_port: u16,
}

impl HostConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_address(),
            bind_port: Self::default_port(),
        }
    }
}

pub fn build_config() -> anyhow::Result<config::Config> {
    let mut builder = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in std::env::args() {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            builder = builder.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    builder = builder.add_source(
        config::Environment::with_prefix("TAGGER")
            .separator("__")
            .try_parsing(true),
    );
    builder = apply_function_overrides(builder, |key| std::env::var(key).ok())?;
    Ok(builder.build()?)
}

fn apply_function_overrides(
    mut builder: config::ConfigBuilder<config::builder::DefaultState>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    for (variable, key) in FUNCTION_OVERRIDES {
        if let Some(value) = lookup(variable) {
            builder = builder.set_override(key, value)?;
        }
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn load(yaml: &str, lookup: impl Fn(&str) -> Option<String>) -> NodePoolTaggerConfig {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml));
        apply_function_overrides(builder, lookup)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_fill_missing_sections() {
        let config = load("{}", |_| None);
        assert_eq!(config.function, TaggerConfig::default());
        assert_eq!(config.host.bind_port, 8080);
        assert_eq!(config.oci.timeout_secs, 30);
        assert!(config.telemetry.enable);
    }

    #[test]
    fn function_variables_override_file_values() {
        let yaml = indoc! {"
            function:
              tag_namespace: FromFile
              tag_name: NodePool
            oci:
              region: eu-frankfurt-1
        "};
        let config = load(yaml, |key| match key {
            "tag_namespace" => Some("Billing".to_string()),
            "compartment_id" => Some("ocid1.compartment.oc1..c".to_string()),
            _ => None,
        });
        assert_eq!(
            config.function,
            TaggerConfig {
                tag_namespace: "Billing".to_string(),
                tag_name: "NodePool".to_string(),
                compartment_id: "ocid1.compartment.oc1..c".to_string(),
            }
        );
        assert_eq!(
            config.oci.container_engine_endpoint(),
            "https://containerengine.eu-frankfurt-1.oraclecloud.com"
        );
        assert_eq!(
            config.oci.compute_endpoint(),
            "https://iaas.eu-frankfurt-1.oraclecloud.com"
        );
    }

    #[test]
    fn explicit_endpoints_win_over_region() {
        let yaml = indoc! {"
            oci:
              region: us-ashburn-1
              compute_endpoint: http://localhost:9000
        "};
        let config = load(yaml, |_| None);
        assert_eq!(config.oci.compute_endpoint(), "http://localhost:9000");
        assert_eq!(
            config.oci.container_engine_endpoint(),
            "https://containerengine.us-ashburn-1.oraclecloud.com"
        );
    }
}
