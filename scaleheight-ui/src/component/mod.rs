pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(25)
        .style(theme::card::simple)
}

pub fn modal_card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(30)
        .max_width(crate::widget::modal::MODAL_WIDTH)
        .width(Length::Fill)
        .style(theme::card::modal)
}
