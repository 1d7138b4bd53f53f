//! Dropdown domain: the searchable options popover.
//!
//! The host mounts [`OptionsDropdown`] with a current value, an optional
//! static option list and/or an async query provider, feeds it [`Message`]s,
//! and reacts to the [`DropdownEvent`]s each update returns. Visibility is
//! host-owned: nothing here shows or hides the popover.

pub mod error;
pub mod messages;
pub mod service;
pub mod types;
pub mod update;

use std::sync::Arc;

use iced::Element;
use sifter_model::prelude::{OptionGroups, OptionId, OptionItem};

pub use self::error::QueryError;
pub use self::messages::{DropdownEvent, Message};
pub use self::service::{OptionsProvider, QueryService, StaticProvider};
pub use self::types::{DropdownState, FetchPhase};
pub use self::update::Update;

use crate::config::DropdownConfig;

/// Searchable options popover.
#[derive(Debug)]
pub struct OptionsDropdown {
    /// Transient UI state; exposed so hosts and tests can observe it
    pub state: DropdownState,
    pub(crate) config: DropdownConfig,
    pub(crate) service: QueryService,
    pub(crate) options: Option<Vec<OptionItem>>,
    pub(crate) groups: OptionGroups,
    pub(crate) has_search: bool,
}

impl OptionsDropdown {
    pub fn new(config: DropdownConfig) -> Self {
        let mut state = DropdownState::default();
        state.revealed = config.page_size;

        Self {
            state,
            config,
            service: QueryService::default(),
            options: None,
            groups: OptionGroups::default(),
            has_search: true,
        }
    }

    /// Seed the current selection.
    pub fn with_value(mut self, value: OptionId) -> Self {
        self.state.value = Some(value);
        self
    }

    /// Supply a static option list. It is authoritative at render time:
    /// queried results are suppressed while it is present.
    pub fn with_options(mut self, options: Vec<OptionItem>) -> Self {
        self.options = Some(options);
        self
    }

    /// Supply an async query source.
    pub fn with_provider(mut self, provider: Arc<dyn OptionsProvider>) -> Self {
        self.service = QueryService::new(Some(provider));
        self
    }

    /// Supply labeled priority/primary sublists rendered ahead of the
    /// general set while no keyword is active.
    pub fn with_groups(mut self, groups: OptionGroups) -> Self {
        self.groups = groups;
        self
    }

    /// Toggle the search box (on by default).
    pub fn with_search(mut self, has_search: bool) -> Self {
        self.has_search = has_search;
        self
    }

    /// Feed one message through the reducer.
    pub fn update(&mut self, message: Message) -> Update {
        log::trace!("dropdown message: {}", message.as_str());
        update::update(self, message)
    }

    /// Render the popover.
    pub fn view(&self) -> Element<'_, Message> {
        crate::views::container::options_container(self)
    }

    /// The general option set per the precedence rule: a host-supplied
    /// list wins over queried results regardless of fetch state.
    pub fn resolved_options(&self) -> Option<&[OptionItem]> {
        self.options.as_deref().or(self.state.queried.as_deref())
    }

    /// Grouped sublists only decorate the default (keyword-less) view;
    /// an active search replaces them with the resolved set.
    pub fn groups_visible(&self) -> bool {
        self.state.keyword.trim().is_empty() && !self.groups.is_empty()
    }

    /// The slice of the general set inside the reveal window.
    pub fn general_window(&self) -> &[OptionItem] {
        let general = self.resolved_options().unwrap_or(&[]);
        &general[..general.len().min(self.state.revealed)]
    }

    /// Flattened render order: priority group, primary group, then the
    /// general window. The keyboard cursor indexes into this order.
    pub fn visible_options(&self) -> Vec<&OptionItem> {
        let mut out = Vec::with_capacity(self.visible_len());
        if self.groups_visible() {
            out.extend(self.groups.priority.iter());
            out.extend(self.groups.primary.iter());
        }
        out.extend(self.general_window().iter());
        out
    }

    pub fn visible_len(&self) -> usize {
        let groups = if self.groups_visible() {
            self.groups.len()
        } else {
            0
        };
        groups + self.general_window().len()
    }
}
