use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{palette::TextInputPalette, Theme};

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
    let c = &theme.colors.text_inputs.primary;
    match status {
        Status::Disabled => text_input(&c.disabled),
        _ => text_input(&c.active),
    }
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    let c = &theme.colors.text_inputs.invalid;
    match status {
        Status::Disabled => text_input(&c.disabled),
        _ => text_input(&c.active),
    }
}

fn text_input(p: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(p.background),
        border: if let Some(color) = p.border {
            Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        icon: p.icon,
        placeholder: p.placeholder,
        value: p.value,
        selection: p.selection,
    }
}
