//! Core types for doclens.

mod answer;
mod document;
mod intent;

pub use answer::*;
pub use document::*;
pub use intent::*;
