//! Contiguous collection types: the dynamic [`Array`] and the LIFO [`Stack`], both backed by one
//! growable allocation.

pub mod array;
pub mod stack;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use stack::Stack;
