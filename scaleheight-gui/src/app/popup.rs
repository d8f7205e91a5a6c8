//! Package popup, faded in and out over the signup screens.

use std::time::Duration;

use iced::Task;

pub const FADE_IN_DELAY: Duration = Duration::from_millis(10);
pub const FADE_OUT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    FadingIn,
    Shown,
    FadingOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open,
    Close,
    /// A timer fired, it carries the generation it was armed for.
    Elapsed(u64),
}

#[derive(Debug)]
pub struct Popup {
    phase: Phase,
    // Bumped on every open and close, timers armed for an older generation are dropped.
    generation: u64,
}

impl Default for Popup {
    fn default() -> Self {
        Self {
            phase: Phase::Hidden,
            generation: 0,
        }
    }
}

impl Popup {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the popup must be part of the view at all.
    pub fn is_displayed(&self) -> bool {
        self.phase != Phase::Hidden
    }

    pub fn opacity(&self) -> f32 {
        match self.phase {
            Phase::Shown => 1.0,
            Phase::Hidden | Phase::FadingIn | Phase::FadingOut => 0.0,
        }
    }

    /// Applies the message and returns the next phase change to wait for, if any.
    pub fn update(&mut self, message: Message) -> Option<(Duration, Message)> {
        match message {
            Message::Open => {
                if matches!(self.phase, Phase::FadingIn | Phase::Shown) {
                    return None;
                }
                self.generation += 1;
                self.phase = Phase::FadingIn;
                Some((FADE_IN_DELAY, Message::Elapsed(self.generation)))
            }
            Message::Close => {
                if matches!(self.phase, Phase::Hidden | Phase::FadingOut) {
                    return None;
                }
                self.generation += 1;
                self.phase = Phase::FadingOut;
                Some((FADE_OUT_DELAY, Message::Elapsed(self.generation)))
            }
            Message::Elapsed(generation) => {
                if generation != self.generation {
                    return None;
                }
                match self.phase {
                    Phase::FadingIn => self.phase = Phase::Shown,
                    Phase::FadingOut => self.phase = Phase::Hidden,
                    Phase::Hidden | Phase::Shown => {}
                }
                None
            }
        }
    }
}

/// Runs the timer returned by [`Popup::update`].
pub fn schedule(timer: Option<(Duration, Message)>) -> Task<Message> {
    match timer {
        Some((delay, message)) => Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                message
            },
            |m| m,
        ),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close() {
        let mut popup = Popup::default();
        assert!(!popup.is_displayed());

        let (delay, elapsed) = popup.update(Message::Open).unwrap();
        assert_eq!(delay, FADE_IN_DELAY);
        assert_eq!(popup.phase(), Phase::FadingIn);
        assert!(popup.is_displayed());
        assert_eq!(popup.opacity(), 0.0);

        assert_eq!(popup.update(elapsed), None);
        assert_eq!(popup.phase(), Phase::Shown);
        assert_eq!(popup.opacity(), 1.0);

        let (delay, elapsed) = popup.update(Message::Close).unwrap();
        assert_eq!(delay, FADE_OUT_DELAY);
        assert_eq!(popup.phase(), Phase::FadingOut);
        assert_eq!(popup.opacity(), 0.0);
        assert!(popup.is_displayed());

        popup.update(elapsed);
        assert_eq!(popup.phase(), Phase::Hidden);
    }

    #[test]
    fn redundant_requests_are_ignored() {
        let mut popup = Popup::default();
        assert_eq!(popup.update(Message::Close), None);
        assert_eq!(popup.phase(), Phase::Hidden);

        let (_, elapsed) = popup.update(Message::Open).unwrap();
        assert_eq!(popup.update(Message::Open), None);
        popup.update(elapsed);

        popup.update(Message::Close).unwrap();
        assert_eq!(popup.update(Message::Close), None);
        assert_eq!(popup.phase(), Phase::FadingOut);
    }

    #[test]
    fn stale_fade_out_after_reopen() {
        let mut popup = Popup::default();
        let (_, shown) = popup.update(Message::Open).unwrap();
        popup.update(shown);

        let (_, hide) = popup.update(Message::Close).unwrap();
        let (_, shown) = popup.update(Message::Open).unwrap();
        assert_eq!(popup.phase(), Phase::FadingIn);

        // The fade out timer of the previous close must not hide the reopened popup.
        popup.update(hide);
        assert_eq!(popup.phase(), Phase::FadingIn);

        popup.update(shown);
        assert_eq!(popup.phase(), Phase::Shown);
    }
}
