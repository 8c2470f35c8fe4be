//! Core traits for doclens collaborators.

mod completion;

pub use completion::*;
