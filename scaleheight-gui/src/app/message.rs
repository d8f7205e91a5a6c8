use scaleheight::{flow::Outcome, validation::Field};

use super::popup;

#[derive(Debug, Clone)]
pub enum Message {
    Edit(Field, String),
    Continue,
    Back,
    Submit,
    Submitted(Outcome),
    Popup(popup::Message),
    /// Copies the value to the clipboard.
    Copy(String),
    DismissNotice,
    OpenDashboard,
}

impl From<popup::Message> for Message {
    fn from(msg: popup::Message) -> Self {
        Self::Popup(msg)
    }
}
