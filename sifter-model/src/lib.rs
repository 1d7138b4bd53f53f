//! Option catalog definitions shared across Sifter crates.
//!
//! Everything here is host-owned data: the dropdown component reads these
//! types, echoes identifiers back through selection events, and never
//! mutates them.

pub mod error;
pub mod ids;
pub mod options;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::{GroupKey, OptionId};
pub use options::{OptionGroups, OptionItem};
