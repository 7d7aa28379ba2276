//! Tree-shaped collection types. Currently only the level-order-filling
//! [`CompleteBinaryTree`].

pub mod complete;

#[doc(inline)]
pub use complete::{CompleteBinaryTree, Keys};
