mod complete_tree;
mod keys;
mod node;

pub use complete_tree::*;
pub use keys::*;
pub(crate) use node::*;
