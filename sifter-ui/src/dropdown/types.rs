//! Dropdown state record.

use sifter_model::prelude::{OptionId, OptionItem};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Lifecycle of the current option query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No query outstanding
    Idle,
    /// A query with this sequence token is in flight
    Pending { seq: u64 },
}

/// The dropdown's transient UI state, kept as one explicit record so the
/// transition table is testable without rendering.
#[derive(Debug, Clone)]
pub struct DropdownState {
    /// Current selection, highlighted in the list
    pub value: Option<OptionId>,
    /// Search text, owned and mutated only by the dropdown
    pub keyword: String,
    /// Result of the last async query; `None` whenever the keyword is not
    /// filterable or no query has resolved yet
    pub queried: Option<Vec<OptionItem>>,
    /// Expansion state reported by the options list
    pub expanded: bool,
    /// Fire-and-forget "focus first option" pulse; hosts and collaborators
    /// react to the counter changing, never to its value
    pub focus_epoch: u64,
    /// Keyboard-navigation cursor into the flattened visible options
    pub selected_index: Option<usize>,
    /// Incremental-reveal window over the general option set
    pub revealed: usize,
    /// Query lifecycle, drives the loading affordance
    pub fetch: FetchPhase,
    /// Last failed query, rendered distinctly from "no results"
    pub error: Option<String>,
    /// Monotonic token of the most recently dispatched (or invalidated)
    /// query; resolutions bearing any other token are discarded
    latest_seq: u64,
}

impl Default for DropdownState {
    fn default() -> Self {
        Self {
            value: None,
            keyword: String::new(),
            queried: None,
            expanded: true,
            focus_epoch: 0,
            selected_index: None,
            revealed: DEFAULT_PAGE_SIZE,
            fetch: FetchPhase::Idle,
            error: None,
            latest_seq: 0,
        }
    }
}

impl DropdownState {
    /// Whether a query is currently in flight.
    pub fn is_searching(&self) -> bool {
        matches!(self.fetch, FetchPhase::Pending { .. })
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Claim the next sequence token and mark the fetch in flight.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.fetch = FetchPhase::Pending {
            seq: self.latest_seq,
        };
        self.latest_seq
    }

    /// Whether a resolution token is still the live one.
    pub fn is_current(&self, seq: u64) -> bool {
        self.latest_seq == seq
    }

    /// Drop the queried result and advance the token so an in-flight
    /// response cannot resurrect it.
    pub fn invalidate_queries(&mut self) {
        self.latest_seq += 1;
        self.fetch = FetchPhase::Idle;
        self.queried = None;
        self.error = None;
    }

    /// Bump the focus pulse and park the cursor on the first option.
    pub fn focus_first(&mut self, len: usize) {
        self.focus_epoch += 1;
        self.selected_index = if len > 0 { Some(0) } else { None };
    }

    /// Navigate the cursor up, wrapping to the end.
    pub fn cursor_up(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(len - 1),
            Some(0) => Some(len - 1),
            Some(i) => Some(i - 1),
        };
    }

    /// Navigate the cursor down, wrapping to the start.
    pub fn cursor_down(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(i) if i + 1 >= len => Some(0),
            Some(i) => Some(i + 1),
        };
    }
}
