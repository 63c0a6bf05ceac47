//! Nodes of a script: a header of metadata and a tree of lines.

mod node;
pub(crate) mod parse;

pub use node::Node;
