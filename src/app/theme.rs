use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::platform::apply_dark_class;

#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Glyph for the toggle button: the theme you switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    Effect::new(move |_| apply_dark_class(theme.get().is_dark()));

    view! {
        <button
            class="w-10 h-10 rounded-md flex items-center justify-center hover:bg-muted transition-colors duration-200"
            aria-label="Toggle theme"
            data-testid="button-theme-toggle"
            on:click=move |_| set_theme.update(|t| *t = t.toggle())
        >
            {move || theme.get().icon()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn test_stored_as_json() {
        let stored = serde_json::to_string(&Theme::Dark).expect("theme should serialize");
        assert_eq!(stored, "\"Dark\"");
        let theme: Theme = serde_json::from_str(&stored).expect("theme should deserialize");
        assert_eq!(theme, Theme::Dark);
    }
}
