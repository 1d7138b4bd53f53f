//! Options list collaborator: grouped sections, cursor and current-value
//! highlights, and the loading / error / empty affordances.

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Background, Color, Element, Length, Padding, Theme};

use sifter_model::prelude::OptionItem;

use super::style;
use crate::common::ids;
use crate::dropdown::{DropdownState, Message, OptionsDropdown};

const DIM: Color = Color::from_rgb(0.55, 0.55, 0.55);
const ALERT: Color = Color::from_rgb(0.9, 0.3, 0.3);

pub fn options_list(dropdown: &OptionsDropdown) -> Element<'_, Message> {
    let state = &dropdown.state;
    let mut rows = column![].spacing(2);

    if state.is_searching() {
        rows = rows.push(notice_row(text("Searching…").size(14).into()));
    } else if let Some(error) = &state.error {
        rows = rows.push(notice_row(
            text(format!("Search failed: {error}")).size(14).color(ALERT).into(),
        ));
    } else if dropdown.visible_len() == 0 {
        let notice = if state.keyword.trim().is_empty() {
            "No options".to_owned()
        } else {
            format!("No results for \"{}\"", state.keyword)
        };
        rows = rows.push(notice_row(text(notice).size(14).into()));
    } else {
        // The flat index must walk the sections in the same order as
        // OptionsDropdown::visible_options, or the cursor drifts.
        let mut index = 0usize;

        if dropdown.groups_visible() {
            let groups = &dropdown.groups;

            if !groups.priority.is_empty() {
                if let Some(label) = &groups.priority_label {
                    rows = rows.push(section_label(label));
                }
                for item in &groups.priority {
                    rows = rows.push(option_row(item, index, state));
                    index += 1;
                }
            }

            if !groups.primary.is_empty() {
                if let Some(label) = &groups.primary_label {
                    rows = rows.push(section_label(label));
                }
                for item in &groups.primary {
                    rows = rows.push(option_row(item, index, state));
                    index += 1;
                }
            }
        }

        let window = dropdown.general_window();
        let total = dropdown
            .resolved_options()
            .map(<[_]>::len)
            .unwrap_or_default();

        for item in window {
            rows = rows.push(option_row(item, index, state));
            index += 1;
        }

        if total > window.len() {
            rows = rows.push(
                button(
                    container(text("Show more").size(13))
                        .padding(Padding::from([8.0, 12.0]))
                        .width(Length::Fill)
                        .center_x(Length::Fill),
                )
                .on_press(Message::RevealMore)
                .style(style::text_button)
                .width(Length::Fill),
            );
            rows = rows.push(
                container(
                    text(format!("Showing {} of {} options", window.len(), total))
                        .size(11)
                        .color(DIM),
                )
                .padding(Padding::from([4.0, 12.0]))
                .width(Length::Fill)
                .center_x(Length::Fill),
            );
        }
    }

    scrollable(rows)
        .id(ids::options_scroll())
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::default(),
        ))
        .width(Length::Fill)
        .into()
}

fn notice_row(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(Padding::from([10.0, 12.0]))
        .width(Length::Fill)
        .into()
}

fn section_label(label: &str) -> Element<'_, Message> {
    container(text(label).size(11).color(DIM))
        .padding(Padding::from([8.0, 12.0]))
        .width(Length::Fill)
        .into()
}

/// Render an individual option row.
fn option_row<'a>(
    item: &'a OptionItem,
    index: usize,
    state: &DropdownState,
) -> Element<'a, Message> {
    let is_value = state.value.as_ref() == Some(&item.id);
    let is_cursor = state.selected_index == Some(index);

    let background_color = if is_cursor {
        Color::from_rgba(0.3, 0.3, 0.3, 0.8)
    } else {
        Color::from_rgba(0.15, 0.15, 0.15, 0.0)
    };

    let mut content = row![text(&item.label).size(14)]
        .spacing(8)
        .align_y(Alignment::Center);

    if is_value {
        content = content.push(horizontal_space()).push(text("✓").size(12));
    }

    button(
        container(content)
            .padding(Padding::from([6.0, 12.0]))
            .width(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(background_color)),
                ..Default::default()
            }),
    )
    .on_press(Message::Select(item.clone()))
    .style(style::text_button)
    .width(Length::Fill)
    .into()
}
