//! Popover container: transparent backdrop stacked under the panel.

use iced::widget::{Space, Stack, button, column, container};
use iced::{Element, Length, Padding};

use super::style;
use super::{options_list, search_input};
use crate::dropdown::{Message, OptionsDropdown};

/// Assemble the popover. Any press on the backdrop is an outside
/// interaction; the host hears a close event and decides whether to
/// unmount.
pub fn options_container(dropdown: &OptionsDropdown) -> Element<'_, Message> {
    let mut panel = column![].spacing(4).padding(5);

    if dropdown.has_search {
        panel = panel.push(search_input::search_input(dropdown));
    }

    panel = panel.push(container(options_list::options_list(dropdown)).max_height(360.0));

    let panel = container(panel)
        .width(Length::Fixed(280.0))
        .style(style::panel);

    let backdrop = button(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::OutsideInteraction)
    .style(style::invisible)
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new()
        .push(backdrop)
        .push(
            container(panel)
                .padding(Padding::from([56.0, 24.0]))
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
