use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_media_query, use_window,
    UseIntersectionObserverOptions,
};

#[cfg(feature = "hydrate")]
use super::platform::{BrowserClipboard, BrowserScheduler};
use super::platform::BrowserProbe;
#[cfg(feature = "hydrate")]
use crate::interaction::{copy_to_clipboard, TransientFlags};
use crate::interaction::{Disclosure, VisibilityTrigger};

/// Whether the visitor asked for less motion. Shared through context so the
/// media query is only registered once per page.
#[derive(Clone, Copy)]
pub struct ReducedMotion(pub Signal<bool>);

pub fn provide_reduced_motion() {
    provide_context(ReducedMotion(use_media_query(
        "(prefers-reduced-motion: reduce)",
    )));
}

pub fn use_reduced_motion() -> Signal<bool> {
    use_context::<ReducedMotion>()
        .map(|r| r.0)
        .unwrap_or_else(|| Signal::derive(|| false))
}

/// True once `target` is at least `threshold` visible. The observer is torn
/// down with the owning component.
pub fn use_in_view(target: NodeRef<html::Div>, threshold: f64) -> Signal<bool> {
    let trigger = StoredValue::new(VisibilityTrigger::new(threshold));
    let (in_view, set_in_view) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let changed = trigger
                    .try_update_value(|t| t.observe(entry.intersection_ratio(), entry.is_intersecting()))
                    .flatten();
                if let Some(now) = changed {
                    set_in_view.set(now);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );
    on_cleanup(move || {
        trigger.try_update_value(|t| t.release());
    });

    in_view.into()
}

/// Reactive handle over a component's transient flags. Only the client
/// owns timers; during SSR every flag reads as inactive.
#[derive(Clone, Copy)]
pub struct FlagSignals {
    #[cfg(feature = "hydrate")]
    flags: StoredValue<TransientFlags<BrowserScheduler>, LocalStorage>,
    changed: Trigger,
}

pub fn use_transient_flags() -> FlagSignals {
    let changed = Trigger::new();

    #[cfg(feature = "hydrate")]
    let flags = {
        let flags = TransientFlags::new(BrowserScheduler);
        flags.subscribe(move || changed.notify());
        let flags = StoredValue::new_local(flags);
        on_cleanup(move || {
            flags.try_with_value(|f| f.dispose());
        });
        flags
    };

    FlagSignals {
        #[cfg(feature = "hydrate")]
        flags,
        changed,
    }
}

impl FlagSignals {
    pub fn is_active(&self, _id: &str) -> bool {
        self.changed.track();
        #[cfg(feature = "hydrate")]
        let active = self
            .flags
            .try_with_value(|f| f.is_active(_id))
            .unwrap_or(false);
        #[cfg(not(feature = "hydrate"))]
        let active = false;
        active
    }

    pub fn activate(&self, _id: &str, _duration: Duration) {
        #[cfg(feature = "hydrate")]
        self.flags.try_with_value(|f| f.activate(_id, _duration));
    }

    /// Copies `text` and raises the copy acknowledgment on success.
    pub async fn copy(self, _text: &str) -> bool {
        #[cfg(feature = "hydrate")]
        let copied = match self.flags.try_get_value() {
            Some(flags) => copy_to_clipboard(&BrowserClipboard, &flags, _text).await,
            None => false,
        };
        #[cfg(not(feature = "hydrate"))]
        let copied = false;
        copied
    }
}

/// Flip-card state. Pointer capability is read after mount and again on
/// every resize.
pub fn use_disclosure() -> RwSignal<Disclosure> {
    let card = RwSignal::new(Disclosure::default());

    Effect::new(move |_| card.update(|c| c.refresh(&BrowserProbe)));
    let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| {
        card.update(|c| c.refresh(&BrowserProbe))
    });

    card
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_server_flags_stay_inactive() {
        use crate::interaction::{COPY_EMAIL, PRESS_PULSE, SEND_EMAIL};

        let owner = Owner::new();
        let flags = owner.with(use_transient_flags);
        flags.activate(SEND_EMAIL, PRESS_PULSE);
        assert!(!flags.is_active(SEND_EMAIL));
        assert!(!flags.copy("hello@example.com").await);
        assert!(!flags.is_active(COPY_EMAIL));
    }
}
