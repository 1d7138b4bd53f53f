use iced::Subscription;
use iced::event;
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key, Modifiers};

use crate::dropdown::Message;

/// Keyboard subscription that promotes navigation keys into dropdown
/// messages. The host should forward it only while the popover is open;
/// keys already captured by a focused widget (e.g. Enter inside the search
/// input) are left alone.
pub fn subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _id| {
        if status == event::Status::Captured {
            return None;
        }

        let iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key, modifiers, ..
        }) = event
        else {
            return None;
        };
        on_key_press(key, modifiers)
    })
}

fn on_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::CloseRequested),
        Key::Named(Named::ArrowDown) => Some(Message::CursorDown),
        Key::Named(Named::ArrowUp) => Some(Message::CursorUp),
        Key::Named(Named::Enter) => Some(Message::ActivateCursor),
        _ => None,
    }
}
