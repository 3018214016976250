mod compute;
mod container_engine;
mod oci_client;

#[rustfmt::skip]
pub use {
    compute::ComputeInstanceRepo,
    container_engine::ContainerEngineNodePoolRepo,
    oci_client::{OciRestClient, OciServiceError},
};

#[cfg(test)]
mod fake_control_plane;
