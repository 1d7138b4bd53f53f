//! Dropdown update logic.

use iced::Task;
use iced::widget::{scrollable, text_input};
use sifter_model::prelude::OptionItem;

use super::OptionsDropdown;
use super::messages::{DropdownEvent, Message};
use super::types::FetchPhase;
use crate::common::ids;

/// Result of one reducer step: a side-effect task for the runtime plus the
/// events the host reacts to. Tests assert on state and events; the task is
/// opaque by design.
pub struct Update {
    pub task: Task<Message>,
    pub events: Vec<DropdownEvent>,
}

impl Update {
    pub fn none() -> Self {
        Self {
            task: Task::none(),
            events: Vec::new(),
        }
    }

    pub fn task(task: Task<Message>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    pub fn event(event: DropdownEvent) -> Self {
        Self {
            task: Task::none(),
            events: vec![event],
        }
    }

    pub fn with(task: Task<Message>, events: Vec<DropdownEvent>) -> Self {
        Self { task, events }
    }
}

pub fn update(dropdown: &mut OptionsDropdown, message: Message) -> Update {
    match message {
        Message::KeywordChanged(keyword) => {
            dropdown.state.keyword = keyword.clone();
            dropdown.state.selected_index = None;
            dropdown.state.revealed = dropdown.config.page_size;

            if dropdown.service.is_queryable()
                && dropdown.config.is_keyword_filterable(&keyword)
            {
                let delay = dropdown.config.debounce();
                Update::task(Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        keyword
                    },
                    Message::QueryDebounced,
                ))
            } else {
                // The default list must reappear now, not when (or if) an
                // in-flight fetch settles; advancing the token orphans it.
                dropdown.state.invalidate_queries();
                Update::none()
            }
        }

        Message::QueryDebounced(keyword) => {
            // The user may have typed more while the debounce was pending.
            if dropdown.state.keyword == keyword {
                dispatch_query(dropdown, keyword)
            } else {
                Update::none()
            }
        }

        Message::QueryLoaded { seq, options } => {
            if !dropdown.state.is_current(seq) {
                log::debug!("dropping stale option query result (seq {seq})");
                return Update::none();
            }

            log::debug!("option query resolved: {} row(s) (seq {seq})", options.len());
            dropdown.state.fetch = FetchPhase::Idle;
            dropdown.state.error = None;
            dropdown.state.selected_index = None;
            dropdown.state.revealed = dropdown.config.page_size;
            dropdown.state.queried = Some(options);
            Update::none()
        }

        Message::QueryFailed { seq, error } => {
            if !dropdown.state.is_current(seq) {
                log::debug!("dropping stale option query failure (seq {seq})");
                return Update::none();
            }

            log::warn!("option query failed (seq {seq}): {error}");
            dropdown.state.fetch = FetchPhase::Idle;
            dropdown.state.error = Some(error.to_string());
            Update::none()
        }

        Message::Opened => {
            if dropdown.has_search {
                Update::with(
                    text_input::focus(ids::search_input()),
                    vec![DropdownEvent::SearchFocusRequested],
                )
            } else {
                Update::none()
            }
        }

        Message::OutsideInteraction | Message::CloseRequested => {
            Update::event(DropdownEvent::Closed)
        }

        Message::Select(item) => select_option(dropdown, item),

        Message::ActivateCursor => {
            if let Some(index) = dropdown.state.selected_index
                && let Some(item) = dropdown.visible_options().get(index).map(|o| (*o).clone())
            {
                select_option(dropdown, item)
            } else {
                Update::none()
            }
        }

        Message::FocusFirstOption => focus_first(dropdown),

        Message::CursorDown => {
            // The first downward step out of the search box is the
            // "focus first option" request.
            if dropdown.state.selected_index.is_none() {
                focus_first(dropdown)
            } else {
                let len = dropdown.visible_len();
                dropdown.state.cursor_down(len);
                Update::none()
            }
        }

        Message::CursorUp => {
            let len = dropdown.visible_len();
            dropdown.state.cursor_up(len);
            Update::none()
        }

        Message::RevealMore => {
            let total = dropdown
                .resolved_options()
                .map(<[_]>::len)
                .unwrap_or_default();
            let widened = dropdown.state.revealed + dropdown.config.page_size;
            dropdown.state.revealed = widened.min(total.max(dropdown.config.page_size));
            Update::event(DropdownEvent::Revealed {
                shown: dropdown.state.revealed.min(total),
            })
        }

        Message::ExpansionChanged(expanded) => {
            dropdown.state.expanded = expanded;
            Update::none()
        }
    }
}

fn dispatch_query(dropdown: &mut OptionsDropdown, keyword: String) -> Update {
    let seq = dropdown.state.begin_fetch();
    let service = dropdown.service.clone();
    let limit = dropdown.config.query_timeout();
    let event = DropdownEvent::QueryDispatched {
        seq,
        keyword: keyword.clone(),
    };

    let task = Task::perform(
        async move { service.query(&keyword, limit).await },
        move |result| match result {
            Ok(options) => Message::QueryLoaded { seq, options },
            Err(error) => Message::QueryFailed { seq, error },
        },
    );

    Update::with(task, vec![event])
}

fn select_option(dropdown: &mut OptionsDropdown, item: OptionItem) -> Update {
    log::info!("option selected: {}", item.id);
    dropdown.state.value = Some(item.id.clone());
    Update::with(
        Task::none(),
        vec![DropdownEvent::Selected(item), DropdownEvent::Closed],
    )
}

fn focus_first(dropdown: &mut OptionsDropdown) -> Update {
    let len = dropdown.visible_len();
    dropdown.state.focus_first(len);
    Update::task(scrollable::scroll_to(
        ids::options_scroll(),
        scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
    ))
}
