/// Narrowest viewport, in CSS pixels, treated as a hover-capable desktop.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_pointer_capable(viewport_width: f64, touch_signal: bool) -> bool {
    viewport_width >= MOBILE_BREAKPOINT && !touch_signal
}

/// Where the device capabilities come from. The browser answers from the
/// window; tests answer with fixed values.
pub trait CapabilityProbe {
    fn viewport_width(&self) -> f64;
    fn touch_signal(&self) -> bool;

    fn pointer_capable(&self) -> bool {
        is_pointer_capable(self.viewport_width(), self.touch_signal())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedProbe {
    pub width: f64,
    pub touch: bool,
}

impl CapabilityProbe for FixedProbe {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn touch_signal(&self) -> bool {
        self.touch
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    fn flipped(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    PointerEnter,
    PointerLeave,
    /// A click or tap on the card. `on_control` is set when it came from a
    /// button or link embedded in the card.
    Tap { on_control: bool },
}

/// Front/back state of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    face: Face,
    pointer_capable: bool,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Disclosure {
    pub fn new(pointer_capable: bool) -> Self {
        Self {
            face: Face::Front,
            pointer_capable,
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face == Face::Back
    }

    pub fn pointer_capable(&self) -> bool {
        self.pointer_capable
    }

    /// Updates the interaction channel. The face is left alone.
    pub fn set_pointer_capable(&mut self, capable: bool) {
        self.pointer_capable = capable;
    }

    pub fn refresh(&mut self, probe: &impl CapabilityProbe) {
        self.set_pointer_capable(probe.pointer_capable());
    }

    /// Applies an event and returns the resulting face.
    pub fn handle(&mut self, event: CardEvent) -> Face {
        self.face = match (event, self.pointer_capable) {
            (CardEvent::PointerEnter, true) => Face::Back,
            (CardEvent::PointerLeave, true) => Face::Front,
            (CardEvent::Tap { on_control: false }, false) => self.face.flipped(),
            _ => self.face,
        };
        self.face
    }

    pub fn hint(&self) -> &'static str {
        if self.pointer_capable {
            "Hover to flip"
        } else {
            "Tap to flip"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: FixedProbe = FixedProbe {
        width: 1024.0,
        touch: false,
    };
    const PHONE: FixedProbe = FixedProbe {
        width: 375.0,
        touch: true,
    };

    fn card(probe: FixedProbe) -> Disclosure {
        let mut card = Disclosure::default();
        card.refresh(&probe);
        card
    }

    #[test]
    fn test_capability_rule() {
        assert!(is_pointer_capable(768.0, false));
        assert!(!is_pointer_capable(767.0, false));
        assert!(!is_pointer_capable(1920.0, true));
        assert!(DESKTOP.pointer_capable());
        assert!(!PHONE.pointer_capable());
    }

    #[test]
    fn test_desktop_hover_flips_and_returns() {
        let mut card = card(DESKTOP);
        assert!(card.pointer_capable());
        assert_eq!(card.handle(CardEvent::PointerEnter), Face::Back);
        assert_eq!(card.handle(CardEvent::PointerLeave), Face::Front);
        assert_eq!(card.hint(), "Hover to flip");
    }

    #[test]
    fn test_desktop_ignores_taps() {
        let mut card = card(DESKTOP);
        assert_eq!(card.handle(CardEvent::Tap { on_control: false }), Face::Front);
    }

    #[test]
    fn test_phone_taps_toggle() {
        let mut card = card(PHONE);
        assert!(!card.pointer_capable());
        assert_eq!(card.handle(CardEvent::Tap { on_control: false }), Face::Back);
        assert_eq!(card.handle(CardEvent::Tap { on_control: false }), Face::Front);
        assert_eq!(card.hint(), "Tap to flip");
    }

    #[test]
    fn test_phone_ignores_hover() {
        let mut card = card(PHONE);
        assert_eq!(card.handle(CardEvent::PointerEnter), Face::Front);
        card.handle(CardEvent::Tap { on_control: false });
        assert_eq!(card.handle(CardEvent::PointerLeave), Face::Back);
    }

    #[test]
    fn test_embedded_control_never_flips() {
        for probe in [DESKTOP, PHONE] {
            let mut card = card(probe);
            card.handle(CardEvent::Tap { on_control: true });
            assert!(!card.is_flipped());
        }
        let mut card = card(PHONE);
        card.handle(CardEvent::Tap { on_control: false });
        card.handle(CardEvent::Tap { on_control: true });
        assert!(card.is_flipped());
    }

    #[test]
    fn test_refresh_keeps_face() {
        let mut card = card(DESKTOP);
        card.handle(CardEvent::PointerEnter);
        card.refresh(&PHONE);
        assert!(card.is_flipped());
        assert!(!card.pointer_capable());
    }
}
