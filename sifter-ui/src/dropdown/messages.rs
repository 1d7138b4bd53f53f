//! Dropdown messages and host-facing events.

use sifter_model::prelude::OptionItem;

use super::error::QueryError;

/// Messages consumed by the dropdown reducer.
#[derive(Clone, Debug)]
pub enum Message {
    // User actions
    /// Search text changed
    KeywordChanged(String),
    /// Select an option (mouse press on a row)
    Select(OptionItem),
    /// Explicit close from a child (Escape in the search box)
    CloseRequested,
    /// Press or focus landed outside the popover
    OutsideInteraction,
    /// Move the keyboard cursor up
    CursorUp,
    /// Move the keyboard cursor down
    CursorDown,
    /// Select the option under the keyboard cursor
    ActivateCursor,
    /// Jump focus to the first visible option
    FocusFirstOption,
    /// Widen the incremental-reveal window
    RevealMore,

    // Host signals
    /// The host flipped its open flag to true
    Opened,

    // Collaborator reports
    /// The options list reported its expansion state
    ExpansionChanged(bool),

    // Internal events
    /// Debounce window elapsed; echoes the keyword it was armed with
    QueryDebounced(String),
    /// A dispatched query resolved
    QueryLoaded {
        seq: u64,
        options: Vec<OptionItem>,
    },
    /// A dispatched query failed or timed out
    QueryFailed {
        seq: u64,
        error: QueryError,
    },
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeywordChanged(_) => "KeywordChanged",
            Self::Select(_) => "Select",
            Self::CloseRequested => "CloseRequested",
            Self::OutsideInteraction => "OutsideInteraction",
            Self::CursorUp => "CursorUp",
            Self::CursorDown => "CursorDown",
            Self::ActivateCursor => "ActivateCursor",
            Self::FocusFirstOption => "FocusFirstOption",
            Self::RevealMore => "RevealMore",
            Self::Opened => "Opened",
            Self::ExpansionChanged(_) => "ExpansionChanged",
            Self::QueryDebounced(_) => "QueryDebounced",
            Self::QueryLoaded { .. } => "QueryLoaded",
            Self::QueryFailed { .. } => "QueryFailed",
        }
    }
}

/// Events the host reacts to.
///
/// These are the select/close callback props of a callback-wired embedding,
/// expressed as returned values: the host maps them onto its own state and
/// decides whether to unmount the popover.
#[derive(Clone, Debug, PartialEq)]
pub enum DropdownEvent {
    /// User committed a selection
    Selected(OptionItem),
    /// The popover asked to be dismissed
    Closed,
    /// A query left for the option source
    QueryDispatched { seq: u64, keyword: String },
    /// Focus moved (or was requested) into the search input
    SearchFocusRequested,
    /// The reveal window grew; `shown` options are now materialized
    Revealed { shown: usize },
}
