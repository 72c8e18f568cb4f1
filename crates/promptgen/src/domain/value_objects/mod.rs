//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod ai_model;
mod category;
mod complexity;

pub use ai_model::*;
pub use category::*;
pub use complexity::*;
