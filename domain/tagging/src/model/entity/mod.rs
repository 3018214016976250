pub mod node_pool;

#[rustfmt::skip]
pub use {
    node_pool::Node,
    node_pool::NodePool,
    node_pool::NodePoolSummary,
};
