mod iter;
mod singly_list;

pub use iter::*;
pub use singly_list::*;
