//! Shared style closures for the dropdown views.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub(crate) fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.1, 0.1, 0.1, 0.98))),
        border: Border {
            color: Color::from_rgb(0.3, 0.3, 0.3),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Transparent full-surface button used as the outside-press backdrop.
pub(crate) fn invisible(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

pub(crate) fn text_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color::from_rgba(0.3, 0.3, 0.3, 0.4))),
        _ => None,
    };

    button::Style {
        background,
        text_color: Color::from_rgb(0.92, 0.92, 0.92),
        border: Border::default(),
        shadow: Shadow::default(),
    }
}
