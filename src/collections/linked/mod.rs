//! Linked collection types: [`SinglyList`] with forward links only and [`DoublyList`] with links
//! in both directions.
//!
//! Both lists store their nodes in an arena table and link by index, the same representation the
//! tree family uses. Removal fills the vacated arena slot with the last entry and patches
//! whichever links referenced it, so the table never holds dead nodes.

pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyList;
#[doc(inline)]
pub use singly::SinglyList;
