//! Reference host for the dropdown.
//!
//! Demonstrates the embedding contract: the host owns the open flag and the
//! committed value, forwards messages while the popover is mounted, and
//! folds the returned events back into its own state.

use std::sync::Arc;
use std::time::Duration;

use iced::widget::{Stack, button, column, container, text};
use iced::{Element, Length, Padding, Subscription, Task, Theme};

use sifter_model::prelude::{OptionGroups, OptionId, OptionItem};

use crate::common::keys;
use crate::config::DropdownConfig;
use crate::dropdown::{self, DropdownEvent, OptionsDropdown, StaticProvider, Update};

#[derive(Debug)]
pub struct App {
    dropdown: OptionsDropdown,
    open: bool,
    chosen: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AppMessage {
    Toggle,
    Dropdown(dropdown::Message),
}

/// Build and run the demo application.
pub fn run(config: DropdownConfig) -> iced::Result {
    iced::application("Sifter Demo", App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((760.0, 520.0))
        .run_with(move || App::new(config))
}

impl App {
    fn new(config: DropdownConfig) -> (Self, Task<AppMessage>) {
        let provider = Arc::new(
            StaticProvider::new(demo_catalog()).with_latency(Duration::from_millis(350)),
        );

        let groups = OptionGroups {
            priority: vec![
                OptionItem::new("inter", "Inter"),
                OptionItem::new("source-serif", "Source Serif"),
            ],
            priority_label: Some("Recently used".to_owned()),
            primary: vec![
                OptionItem::new("roboto", "Roboto"),
                OptionItem::new("lato", "Lato"),
                OptionItem::new("merriweather", "Merriweather"),
            ],
            primary_label: Some("Popular".to_owned()),
        };

        let dropdown = OptionsDropdown::new(config)
            .with_provider(provider)
            .with_groups(groups)
            .with_value(OptionId::new("inter"));

        (
            Self {
                dropdown,
                open: false,
                chosen: Some("Inter".to_owned()),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match message {
            AppMessage::Toggle => {
                self.open = !self.open;
                if self.open {
                    self.forward(dropdown::Message::Opened)
                } else {
                    Task::none()
                }
            }
            AppMessage::Dropdown(message) => {
                // Conditional mounting: a closed popover receives nothing.
                if !self.open {
                    return Task::none();
                }
                self.forward(message)
            }
        }
    }

    fn forward(&mut self, message: dropdown::Message) -> Task<AppMessage> {
        let Update { task, events } = self.dropdown.update(message);

        for event in events {
            match event {
                DropdownEvent::Selected(item) => {
                    log::info!("host received selection: {}", item.id);
                    self.chosen = Some(item.label);
                }
                DropdownEvent::Closed => self.open = false,
                DropdownEvent::QueryDispatched { seq, keyword } => {
                    log::debug!("host observed query #{seq}: '{keyword}'");
                }
                DropdownEvent::Revealed { shown } => {
                    log::debug!("host observed reveal: {shown} option(s) shown");
                }
                DropdownEvent::SearchFocusRequested => {}
            }
        }

        task.map(AppMessage::Dropdown)
    }

    fn view(&self) -> Element<'_, AppMessage> {
        let label = self.chosen.as_deref().unwrap_or("Pick a typeface");

        let base = container(
            column![
                text("Sifter demo").size(22),
                button(text(label).size(16))
                    .on_press(AppMessage::Toggle)
                    .padding(Padding::from([8.0, 14.0])),
            ]
            .spacing(12),
        )
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill);

        if self.open {
            Stack::new()
                .push(base)
                .push(self.dropdown.view().map(AppMessage::Dropdown))
                .into()
        } else {
            base.into()
        }
    }

    fn subscription(&self) -> Subscription<AppMessage> {
        if self.open {
            keys::subscription().map(AppMessage::Dropdown)
        } else {
            Subscription::none()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn demo_catalog() -> Vec<OptionItem> {
    [
        ("inter", "Inter"),
        ("roboto", "Roboto"),
        ("lato", "Lato"),
        ("merriweather", "Merriweather"),
        ("source-serif", "Source Serif"),
        ("source-sans", "Source Sans"),
        ("open-sans", "Open Sans"),
        ("noto-sans", "Noto Sans"),
        ("noto-serif", "Noto Serif"),
        ("playfair", "Playfair Display"),
        ("raleway", "Raleway"),
        ("oswald", "Oswald"),
        ("montserrat", "Montserrat"),
        ("nunito", "Nunito"),
        ("karla", "Karla"),
        ("rubik", "Rubik"),
        ("work-sans", "Work Sans"),
        ("space-grotesk", "Space Grotesk"),
        ("ibm-plex-sans", "IBM Plex Sans"),
        ("ibm-plex-mono", "IBM Plex Mono"),
        ("jetbrains-mono", "JetBrains Mono"),
        ("fira-code", "Fira Code"),
        ("crimson-pro", "Crimson Pro"),
        ("libre-baskerville", "Libre Baskerville"),
        ("cormorant", "Cormorant"),
    ]
    .into_iter()
    .map(|(id, label)| OptionItem::new(id, label))
    .collect()
}
