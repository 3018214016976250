mod instance_tag;
mod node_pool_match;
mod reconcile;

#[rustfmt::skip]
pub use {
    instance_tag::InstanceTagService,
    node_pool_match::NodePoolMatchService,
    reconcile::ReconcileService,
};
