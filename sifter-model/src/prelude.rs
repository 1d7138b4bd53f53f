//! Presentation-layer snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in sifter-ui or other embedding layers.

pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::{GroupKey, OptionId};
pub use super::options::{OptionGroups, OptionItem};
