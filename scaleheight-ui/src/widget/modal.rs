//! Overlay displaying an element above the rest of the application.
use iced::widget::{center, mouse_area, opaque, stack};

use crate::theme;

use super::Element;

pub const MODAL_WIDTH: u16 = 550;

/// Stacks `modal` over `base`. The backdrop swallows every event aimed at `base` and,
/// if an `on_blur` message is set, a press on it (not on the modal content) emits it.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    modal: Element<'a, Message>,
    on_blur: Option<Message>,
    opacity: f32,
}

impl<'a, Message: Clone + 'a> Modal<'a, Message> {
    /// Returns a new [`Modal`], fully visible.
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        modal: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            modal: modal.into(),
            on_blur: None,
            opacity: 1.0,
        }
    }

    /// Sets the message that will be produced when the backdrop of the [`Modal`] is pressed.
    pub fn on_blur(self, on_blur: Option<Message>) -> Self {
        Self { on_blur, ..self }
    }

    /// Sets the opacity of the backdrop, from 0.0 to 1.0.
    pub fn opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }
}

impl<'a, Message: Clone + 'a> From<Modal<'a, Message>> for Element<'a, Message> {
    fn from(modal: Modal<'a, Message>) -> Element<'a, Message> {
        let backdrop =
            center(opaque(modal.modal)).style(theme::container::backdrop(modal.opacity));
        let backdrop: Element<'a, Message> = if let Some(on_blur) = modal.on_blur {
            mouse_area(backdrop).on_press(on_blur).into()
        } else {
            backdrop.into()
        };
        stack([modal.base, opaque(backdrop)]).into()
    }
}
