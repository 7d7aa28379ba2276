mod iter;
mod queue;

pub use iter::*;
pub use queue::*;
