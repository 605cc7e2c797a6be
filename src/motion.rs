//! Entrance animations as data. Each animated element gets a [`Variants`]
//! pair; the section's visibility picks which [`Variant`] is live and the
//! browser's CSS transitions do the interpolation.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Hidden,
    Visible,
}

impl From<bool> for Variant {
    fn from(visible: bool) -> Self {
        if visible {
            Variant::Visible
        } else {
            Variant::Hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    const fn faded() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    fn is_still(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 && self.rotate == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
    /// Slight overshoot, used on the hero portrait.
    Back,
}

impl Ease {
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
            Ease::Back => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Timing for one element. Durations are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: u32,
    pub delay: u32,
    pub ease: Ease,
}

/// Child timing a container hands down: children start `delay` after the
/// container and `each` after the previous child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stagger {
    pub each: u32,
    pub delay: u32,
}

impl Stagger {
    pub const fn new(each: u32, delay: u32) -> Self {
        Self { each, delay }
    }

    pub fn offset(&self, index: usize) -> u32 {
        self.delay + self.each * index as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

impl Variants {
    const fn new(hidden: Pose, duration: u32, ease: Ease) -> Self {
        Self {
            hidden,
            visible: Pose::REST,
            transition: Transition {
                duration,
                delay: 0,
                ease,
            },
        }
    }

    pub const fn with_delay(mut self, delay: u32) -> Self {
        self.transition.delay = delay;
        self
    }

    pub const fn fade() -> Self {
        Self::new(Pose::faded(), 500, Ease::EaseInOut)
    }

    pub const fn fade_up() -> Self {
        Self::new(
            Pose {
                y: 30.0,
                ..Pose::faded()
            },
            600,
            Ease::EaseOut,
        )
    }

    pub const fn scale_in() -> Self {
        Self::new(
            Pose {
                scale: 0.8,
                ..Pose::faded()
            },
            500,
            Ease::EaseOut,
        )
    }

    pub const fn slide_from_left() -> Self {
        Self::new(
            Pose {
                x: -100.0,
                ..Pose::faded()
            },
            600,
            Ease::EaseOut,
        )
    }

    pub const fn slide_from_right() -> Self {
        Self::new(
            Pose {
                x: 100.0,
                ..Pose::faded()
            },
            600,
            Ease::EaseOut,
        )
    }

    pub const fn header() -> Self {
        Self::new(
            Pose {
                y: -100.0,
                ..Pose::faded()
            },
            500,
            Ease::EaseOut,
        )
    }

    pub const fn hero_text() -> Self {
        Self::new(
            Pose {
                x: -50.0,
                ..Pose::faded()
            },
            800,
            Ease::EaseOut,
        )
        .with_delay(200)
    }

    pub const fn hero_image() -> Self {
        Self::new(
            Pose {
                scale: 0.8,
                rotate: -5.0,
                ..Pose::faded()
            },
            1000,
            Ease::Back,
        )
        .with_delay(400)
    }

    pub const fn footer() -> Self {
        Self::new(
            Pose {
                y: 20.0,
                ..Pose::faded()
            },
            600,
            Ease::EaseOut,
        )
    }

    /// Keeps only the opacity change and drops the animation time.
    pub fn reduced(self) -> Self {
        Self {
            hidden: Pose {
                opacity: self.hidden.opacity,
                ..Pose::REST
            },
            visible: Pose {
                opacity: self.visible.opacity,
                ..Pose::REST
            },
            transition: Transition {
                duration: 0,
                delay: 0,
                ease: Ease::Linear,
            },
        }
    }

    /// Picks [`reduced`](Self::reduced) when the user asked for less motion.
    pub fn respecting(self, reduce_motion: bool) -> Self {
        if reduce_motion {
            self.reduced()
        } else {
            self
        }
    }

    pub fn pose(&self, variant: Variant) -> &Pose {
        match variant {
            Variant::Hidden => &self.hidden,
            Variant::Visible => &self.visible,
        }
    }

    /// Inline CSS for `variant`.
    pub fn style(&self, variant: impl Into<Variant>) -> String {
        self.style_with_offset(variant.into(), 0)
    }

    /// Inline CSS for the `index`th child of a staggered container.
    pub fn style_staggered(
        &self,
        variant: impl Into<Variant>,
        stagger: Stagger,
        index: usize,
    ) -> String {
        self.style_with_offset(variant.into(), stagger.offset(index))
    }

    fn style_with_offset(&self, variant: Variant, offset: u32) -> String {
        let pose = self.pose(variant);
        let Transition {
            duration,
            delay,
            ease,
        } = self.transition;
        // a reduced transition has no delay to hand down
        let delay = if duration == 0 { 0 } else { delay + offset };
        let ease = ease.css();
        let mut style = format!("opacity:{};", pose.opacity);
        if self.hidden.is_still() && self.visible.is_still() {
            style.push_str(&format!("transition:opacity {duration}ms {ease} {delay}ms;"));
        } else {
            style.push_str(&format!(
                "transform:translate3d({}px,{}px,0) scale({}) rotate({}deg);",
                pose.x, pose.y, pose.scale, pose.rotate
            ));
            style.push_str(&format!(
                "transition:opacity {duration}ms {ease} {delay}ms,transform {duration}ms {ease} {delay}ms;"
            ));
        }
        style
    }
}

/// Number of characters a typewriter has revealed after `ticks` ticks of
/// `speed` ms each, when typing starts `delay` ms in.
pub fn typed_chars(ticks: u32, delay: u32, speed: u32) -> usize {
    let wait = delay.div_ceil(speed.max(1));
    ticks.saturating_sub(wait) as usize
}

/// First `chars` characters of `text`, cut on a char boundary.
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_visibility() {
        assert_eq!(Variant::from(true), Variant::Visible);
        assert_eq!(Variant::from(false), Variant::Hidden);
    }

    #[test]
    fn test_fade_up_styles() {
        let v = Variants::fade_up();
        let hidden = v.style(false);
        assert!(hidden.starts_with("opacity:0;"));
        assert!(hidden.contains("translate3d(0px,30px,0) scale(1)"));
        assert!(hidden.contains("opacity 600ms ease-out 0ms"));

        let visible = v.style(true);
        assert!(visible.starts_with("opacity:1;"));
        assert!(visible.contains("translate3d(0px,0px,0)"));
    }

    #[test]
    fn test_stagger_offsets_children() {
        let stagger = Stagger::new(150, 300);
        assert_eq!(stagger.offset(0), 300);
        assert_eq!(stagger.offset(2), 600);

        let style = Variants::fade_up().style_staggered(Variant::Visible, stagger, 2);
        assert!(style.contains("600ms ease-out 600ms"));
    }

    #[test]
    fn test_own_delay_adds_to_stagger() {
        let v = Variants::hero_text();
        let style = v.style_staggered(Variant::Visible, Stagger::new(100, 0), 1);
        assert!(style.contains("800ms ease-out 300ms"));
    }

    #[test]
    fn test_reduced_drops_motion() {
        let v = Variants::slide_from_left().reduced();
        assert_eq!(v.hidden.x, 0.0);
        assert_eq!(v.hidden.opacity, 0.0);
        assert_eq!(v.transition.duration, 0);

        let style = v.style_staggered(Variant::Hidden, Stagger::new(150, 300), 3);
        assert!(!style.contains("transform:"));
        assert!(style.contains("opacity 0ms linear 0ms"));
    }

    #[test]
    fn test_respecting_preference() {
        assert_eq!(Variants::scale_in().respecting(false), Variants::scale_in());
        assert_eq!(
            Variants::scale_in().respecting(true),
            Variants::scale_in().reduced()
        );
    }

    #[test]
    fn test_fade_has_no_transform() {
        let v = Variants::fade().with_delay(800);
        for visible in [false, true] {
            let style = v.style(visible);
            assert!(!style.contains("transform"), "{style}");
        }
        assert_eq!(
            v.style(true),
            "opacity:1;transition:opacity 500ms ease-in-out 800ms;"
        );
    }

    #[test]
    fn test_moving_variant_transitions_transform() {
        let style = Variants::scale_in().style(false);
        assert!(style.contains("transform:translate3d(0px,0px,0) scale(0.8)"));
        assert!(style.contains(",transform 500ms ease-out 0ms;"));
    }

    #[test]
    fn test_typed_chars() {
        assert_eq!(typed_chars(0, 800, 30), 0);
        assert_eq!(typed_chars(27, 800, 30), 0);
        assert_eq!(typed_chars(30, 800, 30), 3);
        assert_eq!(typed_chars(5, 0, 0), 5);
    }

    #[test]
    fn test_typed_prefix_respects_char_boundaries() {
        assert_eq!(typed_prefix("héllo", 2), "hé");
        assert_eq!(typed_prefix("abc", 0), "");
        assert_eq!(typed_prefix("abc", 10), "abc");
    }
}
