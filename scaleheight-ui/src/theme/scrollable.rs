use iced::widget::container;
use iced::widget::scrollable::{Catalog, Rail, Scroller, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let scroller = match status {
        Status::Active => theme.colors.general.scrollable,
        Status::Hovered { .. } | Status::Dragged { .. } => theme.colors.text.secondary,
    };
    Style {
        container: container::Style::default(),
        vertical_rail: rail(scroller),
        horizontal_rail: rail(scroller),
        gap: Some(Background::Color(Color::TRANSPARENT)),
    }
}

fn rail(scroller: Color) -> Rail {
    Rail {
        background: None,
        border: Border::default(),
        scroller: Scroller {
            color: scroller,
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
        },
    }
}
