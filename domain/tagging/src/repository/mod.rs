mod instance;
mod node_pool;

#[rustfmt::skip]
pub use {
    instance::InstanceRepo,
    node_pool::NodePoolRepo,
};
