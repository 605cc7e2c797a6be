use leptos::prelude::*;

use super::{hooks::use_reduced_motion, platform::scroll_to_section, theme::ThemeToggle};
use crate::{
    content::{NAV_ITEMS, PROFILE},
    motion::{Stagger, Variants},
};

const NAV_STAGGER: Stagger = Stagger::new(100, 200);

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let reduce = use_reduced_motion();
    let (menu_open, set_menu_open) = signal(false);
    // the header slides in as soon as the page is live
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let nav_to = move |section: &'static str| {
        scroll_to_section(section);
        set_menu_open.set(false);
    };

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-md border-b"
            style=move || Variants::header().respecting(reduce.get()).style(mounted.get())
        >
            <div class="container mx-auto px-4 sm:px-6 py-4">
                <div class="flex items-center justify-between">
                    <button
                        class="text-2xl font-bold text-primary"
                        data-testid="logo"
                        on:click=move |_| nav_to("hero")
                    >
                        {initials(PROFILE.name)}
                    </button>
                    <nav class="hidden md:flex items-center gap-1">
                        {NAV_ITEMS
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <button
                                        class="px-4 py-2 rounded-md transition-all duration-200 hover:scale-105 hover:text-primary"
                                        data-testid=format!("button-nav-{}", item.section)
                                        style=move || {
                                            Variants::fade_up()
                                                .respecting(reduce.get())
                                                .style_staggered(mounted.get(), NAV_STAGGER, i)
                                        }
                                        on:click=move |_| nav_to(item.section)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="md:hidden w-10 h-10 rounded-md flex items-center justify-center"
                            aria-label="Open navigation menu"
                            data-testid="button-menu-toggle"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden flex flex-col gap-4 mt-6 pb-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <button
                                        class="text-left text-lg px-2 py-1 rounded-md hover:text-primary transition-all duration-200"
                                        data-testid=format!("button-mobile-nav-{}", item.section)
                                        on:click=move |_| nav_to(item.section)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jordan Avery"), "JA");
        assert_eq!(initials("  single "), "s");
    }
}
