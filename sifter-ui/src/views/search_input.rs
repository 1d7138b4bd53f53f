//! Search box collaborator: binds the keyword, clears it, and mirrors the
//! list's expansion state in its chevron.

use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Length, Padding};

use super::style;
use crate::common::ids;
use crate::dropdown::{Message, OptionsDropdown};

pub fn search_input(dropdown: &OptionsDropdown) -> Element<'_, Message> {
    let state = &dropdown.state;

    let input = text_input("Search", &state.keyword)
        .id(ids::search_input())
        .on_input(Message::KeywordChanged)
        .on_submit(Message::ActivateCursor)
        .size(14)
        .padding(Padding::from([6.0, 8.0]))
        .width(Length::Fill);

    let mut bar = row![input].spacing(4).align_y(Alignment::Center);

    if !state.keyword.is_empty() {
        bar = bar.push(
            button(text("×").size(14))
                .on_press(Message::KeywordChanged(String::new()))
                .style(style::text_button)
                .padding(Padding::from([2.0, 6.0])),
        );
    }

    bar = bar.push(
        button(text(if state.expanded { "▾" } else { "▸" }).size(12))
            .on_press(Message::ExpansionChanged(!state.expanded))
            .style(style::text_button)
            .padding(Padding::from([2.0, 6.0])),
    );

    bar.into()
}
