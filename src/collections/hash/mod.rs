//! Hashed collection types, currently just the separate-chaining [`HashTable`].

pub mod table;

#[doc(inline)]
pub use table::HashTable;
