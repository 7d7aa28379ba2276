mod stack;

pub use stack::*;
