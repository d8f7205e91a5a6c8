use iced::{widget::container, Alignment, Length};

use crate::{
    component::{button, text},
    theme::{self, Theme},
    widget::*,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Info,
    Warning,
    Error,
}

/// A dismissable banner.
pub fn banner<'a, T: 'a + Clone>(kind: Kind, message: &'a str, on_dismiss: T) -> Container<'a, T> {
    Container::new(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(Container::new(text::p1_medium(message)).width(Length::Fill))
            .push(
                button::transparent("Dismiss")
                    .width(Length::Shrink)
                    .on_press(on_dismiss),
            ),
    )
    .padding(15)
    .width(Length::Fill)
    .style(style(kind))
}

fn style(kind: Kind) -> fn(&Theme) -> container::Style {
    match kind {
        Kind::Success => theme::notification::success,
        Kind::Info => theme::notification::info,
        Kind::Warning => theme::notification::warning,
        Kind::Error => theme::notification::error,
    }
}
