//! Domain Services
//!
//! Pure functions over the catalog and entities.
//! - analysis: Keyword scan of the original prompt
//! - enhancer: Section assembly
//! - report: Results-view derivations (sections, analytics, download, share)

mod analysis;
mod enhancer;
mod report;

pub use analysis::*;
pub use enhancer::*;
pub use report::*;
