mod doubly_list;
mod iter;
mod tests;

pub use doubly_list::*;
pub use iter::*;
