//! Option items and the grouping metadata rendered around them.

use crate::error::{ModelError, Result};
use crate::ids::{GroupKey, OptionId};

/// A single selectable entry: opaque identifier plus display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionItem {
    pub id: OptionId,
    pub label: String,
    /// Optional grouping key; consumers that don't group ignore it.
    pub group: Option<GroupKey>,
}

impl OptionItem {
    pub fn new(id: impl Into<OptionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<GroupKey>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Construct with validation; rejects blank identifiers and labels.
    pub fn validated(id: impl Into<OptionId>, label: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let label = label.into();

        if id.as_str().trim().is_empty() {
            return Err(ModelError::InvalidOption("empty id".to_owned()));
        }
        if label.trim().is_empty() {
            return Err(ModelError::InvalidOption(format!(
                "option '{id}' has an empty label"
            )));
        }

        Ok(Self {
            id,
            label,
            group: None,
        })
    }
}

/// Labeled sublists rendered with distinct visual grouping ahead of the
/// general option set.
///
/// `priority` entries come first (e.g. "Recently used"), then `primary`
/// (e.g. the host's curated defaults). Both are host-owned; an empty group
/// is simply not rendered.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionGroups {
    pub priority: Vec<OptionItem>,
    pub priority_label: Option<String>,
    pub primary: Vec<OptionItem>,
    pub primary_label: Option<String>,
}

impl OptionGroups {
    pub fn is_empty(&self) -> bool {
        self.priority.is_empty() && self.primary.is_empty()
    }

    pub fn len(&self) -> usize {
        self.priority.len() + self.primary.len()
    }

    /// Validate that populated sublists carry a label.
    pub fn validated(self) -> Result<Self> {
        if !self.priority.is_empty() && self.priority_label.is_none() {
            return Err(ModelError::MissingGroupLabel("priority".to_owned()));
        }
        if !self.primary.is_empty() && self.primary_label.is_none() {
            return Err(ModelError::MissingGroupLabel("primary".to_owned()));
        }
        Ok(self)
    }
}
