mod instance_tag;
mod node_pool_match;
mod reconcile;

#[rustfmt::skip]
pub use {
    instance_tag::InstanceTagServiceImpl,
    node_pool_match::NodePoolMatchServiceImpl,
    reconcile::ReconcileServiceImpl,
};
