mod config;
mod repository;
mod service_provider;
pub mod telemetry;

pub use config::{build_config, HostConfig, NodePoolTaggerConfig};
pub use service_provider::ServiceProvider;
