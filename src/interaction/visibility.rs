/// Fraction of a section that must be on screen before it animates in.
pub const SECTION_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Latch on the first entry and ignore everything after.
    #[default]
    Once,
    /// Follow the section in and out of the viewport.
    Always,
}

/// Tracks whether a section counts as "in view" from intersection
/// observations. Starts hidden; a trigger that never receives an observation
/// (no target element) stays hidden.
#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    threshold: f64,
    repeat: Repeat,
    in_view: bool,
    released: bool,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            repeat: Repeat::Once,
            in_view: false,
            released: false,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    /// Feeds one observer callback. Returns the new value when it changed.
    pub fn observe(&mut self, ratio: f64, is_intersecting: bool) -> Option<bool> {
        if self.released {
            return None;
        }
        let visible = is_intersecting && ratio >= self.threshold;
        let next = match (self.repeat, self.in_view) {
            (Repeat::Once, true) => true,
            _ => visible,
        };
        if next == self.in_view {
            None
        } else {
            self.in_view = next;
            Some(next)
        }
    }

    /// Ends the observation session. The last value is kept.
    pub fn release(&mut self) {
        self.released = true;
    }
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(SECTION_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let trigger = VisibilityTrigger::default();
        assert!(!trigger.is_in_view());
        assert_eq!(trigger.threshold(), SECTION_THRESHOLD);
    }

    #[test]
    fn test_enters_once_at_threshold() {
        let mut trigger = VisibilityTrigger::default();
        assert_eq!(trigger.observe(0.05, true), None);
        assert_eq!(trigger.observe(0.1, true), Some(true));
        // deeper scrolling within the same entry is not a new transition
        assert_eq!(trigger.observe(0.4, true), None);
        assert_eq!(trigger.observe(1.0, true), None);
        assert!(trigger.is_in_view());
    }

    #[test]
    fn test_once_latches_after_leaving() {
        let mut trigger = VisibilityTrigger::default();
        trigger.observe(0.5, true);
        assert_eq!(trigger.observe(0.0, false), None);
        assert!(trigger.is_in_view());
    }

    #[test]
    fn test_repeat_follows_viewport() {
        let mut trigger = VisibilityTrigger::new(0.1).repeat(Repeat::Always);
        assert_eq!(trigger.observe(0.2, true), Some(true));
        assert_eq!(trigger.observe(0.0, false), Some(false));
        assert_eq!(trigger.observe(0.3, true), Some(true));
    }

    #[test]
    fn test_not_intersecting_never_counts() {
        let mut trigger = VisibilityTrigger::new(0.0);
        assert_eq!(trigger.observe(0.0, false), None);
        assert_eq!(trigger.observe(0.0, true), Some(true));
    }

    #[test]
    fn test_released_ignores_observations() {
        let mut trigger = VisibilityTrigger::default();
        trigger.release();
        assert_eq!(trigger.observe(1.0, true), None);
        assert!(!trigger.is_in_view());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(VisibilityTrigger::new(3.0).threshold(), 1.0);
        assert_eq!(VisibilityTrigger::new(-1.0).threshold(), 0.0);
    }
}
