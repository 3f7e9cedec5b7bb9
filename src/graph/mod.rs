pub mod types;
pub(crate) mod builder;
pub(crate) mod edge_index;

pub use types::{Edge, Graph, Node};
pub(crate) use builder::GraphBuilder;
