use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::Background;

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn background(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.background)),
        ..Default::default()
    }
}

/// The layer behind a modal, `opacity` going from 0.0 (invisible) to 1.0.
pub fn backdrop(opacity: f32) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let color = theme.colors.general.backdrop;
        Style {
            background: Some(Background::Color(iced::Color {
                a: color.a * opacity.clamp(0.0, 1.0),
                ..color
            })),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(style: Style) -> f32 {
        match style.background {
            Some(Background::Color(c)) => c.a,
            _ => panic!("backdrop must be a color"),
        }
    }

    #[test]
    fn backdrop_fades() {
        let theme = <Theme as Default>::default();
        let full = theme.colors.general.backdrop.a;
        assert_eq!(alpha(backdrop(1.0)(&theme)), full);
        assert_eq!(alpha(backdrop(0.0)(&theme)), 0.0);
        assert_eq!(alpha(backdrop(3.0)(&theme)), full);
    }
}
