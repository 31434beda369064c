//! Touch-button input abstraction.
//!
//! Raw touch coordinates are turned into per-button pressed levels by the
//! touch driver, and each logical button owns a [`ClickClassifier`] that
//! recognises single, double and long clicks. Classification timing lives
//! in the classifier implementation; this module only fixes the contract
//! and the precedence used when several buttons fire in the same tick.

/// Source of classified input events, polled once per scheduler tick.
pub trait InputSource {
    /// Poll for the next event (non-blocking).
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Per-button click classifier (debounce + single/double/long recognition).
pub trait ClickClassifier {
    /// Feed the current pressed level. Called exactly once per tick.
    fn update(&mut self, pressed: bool);

    /// Take the latched click, if one has been recognised.
    fn poll(&mut self) -> Option<Click>;
}

/// Logical on-screen buttons.
///
/// `Touched` is a touch anywhere above the button strip; it is treated as a
/// button of its own so that a tap on the now-playing screen can open the
/// action overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// "-" button: previous entry / volume down
    Minus,
    /// "+" button: next entry / volume up
    Plus,
    /// "Sel" button
    Select,
    /// "Back" button
    Back,
    /// Touch above the button strip
    Touched,
}

impl Button {
    /// Polling precedence when several buttons latch in the same tick.
    pub const PRIORITY: [Button; 5] = [
        Button::Minus,
        Button::Plus,
        Button::Select,
        Button::Back,
        Button::Touched,
    ];

    /// Short name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Button::Minus => "minus",
            Button::Plus => "plus",
            Button::Select => "select",
            Button::Back => "back",
            Button::Touched => "touched",
        }
    }
}

/// Click strength reported by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Click {
    /// Single click
    Single,
    /// Double click
    Double,
    /// Press held past the long-click threshold
    Long,
}

impl Click {
    /// Short name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Click::Single => "single",
            Click::Double => "double",
            Click::Long => "long",
        }
    }
}

/// One classified input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    /// Which button fired
    pub button: Button,
    /// How it was clicked
    pub click: Click,
}

impl InputEvent {
    /// Build an event.
    pub const fn new(button: Button, click: Click) -> Self {
        Self { button, click }
    }

    /// Single click of `button`.
    pub const fn single(button: Button) -> Self {
        Self::new(button, Click::Single)
    }
}

/// The five button classifiers, polled in [`Button::PRIORITY`] order.
///
/// Only the first latched click is taken per poll; lower-priority clicks
/// stay latched in their classifier and are reported on a later tick.
pub struct ButtonBank<C> {
    // Stored in PRIORITY order.
    classifiers: [C; 5],
}

impl<C: ClickClassifier> ButtonBank<C> {
    /// Create a bank from classifiers given in [`Button::PRIORITY`] order
    /// (minus, plus, select, back, touched).
    pub fn new(classifiers: [C; 5]) -> Self {
        Self { classifiers }
    }

    /// Feed every classifier its pressed level for this tick.
    pub fn update(&mut self, is_pressed: impl Fn(Button) -> bool) {
        for (button, classifier) in Button::PRIORITY.iter().zip(self.classifiers.iter_mut()) {
            classifier.update(is_pressed(*button));
        }
    }

    /// Mutable access to one button's classifier.
    pub fn classifier_mut(&mut self, button: Button) -> Option<&mut C> {
        Button::PRIORITY
            .iter()
            .zip(self.classifiers.iter_mut())
            .find_map(|(b, c)| (*b == button).then_some(c))
    }
}

impl<C: ClickClassifier + Default> Default for ButtonBank<C> {
    fn default() -> Self {
        Self::new(core::array::from_fn(|_| C::default()))
    }
}

impl<C: ClickClassifier> InputSource for ButtonBank<C> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        Button::PRIORITY
            .iter()
            .zip(self.classifiers.iter_mut())
            .find_map(|(button, classifier)| {
                classifier.poll().map(|click| InputEvent::new(*button, click))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classifier that reports whatever was queued for it.
    #[derive(Default)]
    struct Latched(Option<Click>);

    impl ClickClassifier for Latched {
        fn update(&mut self, pressed: bool) {
            if pressed && self.0.is_none() {
                self.0 = Some(Click::Single);
            }
        }

        fn poll(&mut self) -> Option<Click> {
            self.0.take()
        }
    }

    #[test]
    fn test_bank_empty_polls_none() {
        let mut bank: ButtonBank<Latched> = ButtonBank::default();
        bank.update(|_| false);
        assert_eq!(bank.poll_event(), None);
    }

    #[test]
    fn test_bank_minus_beats_everything() {
        let mut bank: ButtonBank<Latched> = ButtonBank::default();
        bank.update(|_| true);
        assert_eq!(bank.poll_event(), Some(InputEvent::single(Button::Minus)));
    }

    #[test]
    fn test_bank_lower_priority_stays_latched() {
        let mut bank: ButtonBank<Latched> = ButtonBank::default();
        bank.update(|b| b == Button::Select || b == Button::Touched);
        assert_eq!(bank.poll_event(), Some(InputEvent::single(Button::Select)));
        assert_eq!(bank.poll_event(), Some(InputEvent::single(Button::Touched)));
        assert_eq!(bank.poll_event(), None);
    }

    #[test]
    fn test_bank_reports_click_strength() {
        let mut bank: ButtonBank<Latched> = ButtonBank::default();
        if let Some(c) = bank.classifier_mut(Button::Back) {
            c.0 = Some(Click::Long);
        }
        assert_eq!(
            bank.poll_event(),
            Some(InputEvent::new(Button::Back, Click::Long))
        );
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            Button::PRIORITY,
            [
                Button::Minus,
                Button::Plus,
                Button::Select,
                Button::Back,
                Button::Touched
            ]
        );
    }
}
