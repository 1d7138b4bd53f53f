//! Shared widget identifiers.
//!
//! Focus and scroll side effects address widgets by id; keeping the ids in
//! one table means the reducer and the views can never drift apart.

use iced::widget::{scrollable, text_input};
use once_cell::sync::Lazy;

pub static SEARCH_INPUT: Lazy<text_input::Id> =
    Lazy::new(|| text_input::Id::new("dropdown.search"));

pub static OPTIONS_SCROLL: Lazy<scrollable::Id> =
    Lazy::new(|| scrollable::Id::new("dropdown.options"));

pub fn search_input() -> text_input::Id {
    SEARCH_INPUT.clone()
}

pub fn options_scroll() -> scrollable::Id {
    OPTIONS_SCROLL.clone()
}
