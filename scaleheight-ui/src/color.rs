use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_7: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const WHITE: Color = iced::Color::WHITE;
/// ScaleHeight brand blue.
pub const BLUE: Color = Color::from_rgb(
    0x1E as f32 / 255.0,
    0x6F as f32 / 255.0,
    0xFF as f32 / 255.0,
);
pub const LIGHT_BLUE: Color = Color::from_rgb(
    0x5C as f32 / 255.0,
    0x97 as f32 / 255.0,
    0xFF as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0xC8 as f32 / 255.0,
    0x53 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);
pub const ORANGE: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xa7 as f32 / 255.0,
    0x00 as f32 / 255.0,
);

/// Same color with the given alpha, used to fade the overlays.
pub fn with_alpha(color: Color, a: f32) -> Color {
    Color {
        a: a.clamp(0.0, 1.0),
        ..color
    }
}
