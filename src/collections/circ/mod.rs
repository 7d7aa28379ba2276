//! Circular-buffer collection types. Namely [`Queue`], a FIFO queue over a ring of slots.

pub mod queue;

#[doc(inline)]
pub use queue::Queue;
