//! Static Catalog
//!
//! Immutable model, category and complexity tables compiled into the
//! binary. Lookups are exhaustive matches over the value-object enums.

mod categories;
mod complexity;
mod models;

pub use categories::*;
pub use complexity::*;
pub use models::*;
