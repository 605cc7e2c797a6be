use std::time::Duration;

use leptos::prelude::*;

use super::{
    hooks::use_reduced_motion,
    platform::{scroll_to_section, trigger_download},
};
use crate::{
    content::PROFILE,
    motion::{typed_chars, typed_prefix, Stagger, Variants},
};

const TEXT_STAGGER: Stagger = Stagger::new(100, 300);
const BUTTON_STAGGER: Stagger = Stagger::new(120, 700);

#[component]
pub fn Hero() -> impl IntoView {
    let reduce = use_reduced_motion();
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let line = move |i: usize| {
        Variants::fade_up()
            .respecting(reduce.get())
            .style_staggered(mounted.get(), TEXT_STAGGER, i)
    };
    let button = move |i: usize| {
        Variants::fade_up()
            .respecting(reduce.get())
            .style_staggered(mounted.get(), BUTTON_STAGGER, i)
    };

    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center pt-20">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                    <div
                        class="space-y-8"
                        style=move || {
                            Variants::hero_text().respecting(reduce.get()).style(mounted.get())
                        }
                    >
                        <div class="space-y-4">
                            <p class="text-primary font-medium text-lg" style=move || line(0)>
                                "Hello, I'm"
                            </p>
                            <h1 class="text-5xl lg:text-6xl font-bold" style=move || line(1)>
                                {PROFILE.name}
                            </h1>
                            <div
                                class="text-xl lg:text-2xl text-muted-foreground"
                                style=move || line(2)
                            >
                                <Typewriter text=PROFILE.tagline delay=800 speed=30 />
                            </div>
                            <div
                                class="text-lg text-muted-foreground max-w-2xl"
                                style=move || line(3)
                            >
                                <Typewriter text=PROFILE.summary delay=3500 speed=25 />
                            </div>
                        </div>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                class="group px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:scale-105 active:scale-95 transition-all duration-300"
                                data-testid="button-view-work"
                                style=move || button(0)
                                on:click=move |_| scroll_to_section("projects")
                            >
                                "View My Work"
                                <span class="inline-block ml-2 group-hover:translate-x-1 transition-transform">
                                    "→"
                                </span>
                            </button>
                            <button
                                class="px-6 py-3 rounded-md border-2 font-medium hover:scale-105 active:scale-95 transition-all duration-300"
                                data-testid="button-download-resume"
                                style=move || button(1)
                                on:click=move |_| {
                                    trigger_download(PROFILE.resume_path, PROFILE.resume_filename)
                                }
                            >
                                <span class=move || {
                                    if reduce.get() { "inline-block mr-2" } else { "inline-block mr-2 animate-wiggle" }
                                }>"⬇"</span>
                                "Download Resume"
                            </button>
                        </div>
                    </div>
                    <div
                        class="flex justify-center lg:justify-end"
                        style=move || {
                            Variants::hero_image().respecting(reduce.get()).style(mounted.get())
                        }
                    >
                        <div class="relative">
                            <div class="w-80 h-80 rounded-2xl overflow-hidden border-2 border-border transition-transform duration-300 hover:scale-105">
                                <img
                                    src=PROFILE.portrait
                                    alt=format!("{} - Professional headshot", PROFILE.name)
                                    class="w-full h-full object-cover"
                                    data-testid="img-profile"
                                />
                            </div>
                            <div class=move || {
                                if reduce.get() {
                                    "absolute -bottom-4 -right-4 w-24 h-24 bg-primary/10 rounded-full blur-xl"
                                } else {
                                    "absolute -bottom-4 -right-4 w-24 h-24 bg-primary/10 rounded-full blur-xl animate-pulse"
                                }
                            }></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Types `text` out one character every `speed` ms, starting `delay` ms after
/// mount. Screen readers get the full text right away.
#[component]
fn Typewriter(text: &'static str, delay: u32, speed: u32) -> impl IntoView {
    let reduce = use_reduced_motion();
    let total = text.chars().count();
    let (ticks, set_ticks) = signal(0u32);
    let interval = StoredValue::new(None::<IntervalHandle>);

    let shown = Memo::new(move |_| {
        if reduce.get() {
            total
        } else {
            typed_chars(ticks.get(), delay, speed).min(total)
        }
    });

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || set_ticks.update(|t| *t += 1),
            Duration::from_millis(speed.max(1).into()),
        );
        match handle {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => {
                log::error!("Couldn't start typewriter: {err:?}");
                // nothing will tick, show the text as is
                set_ticks.set(u32::MAX);
            }
        }
    });

    let stop = move || {
        if let Some(Some(handle)) = interval.try_update_value(|h| h.take()) {
            handle.clear();
        }
    };
    Effect::new(move |_| {
        if shown.get() >= total {
            stop();
        }
    });
    on_cleanup(stop);

    view! {
        <span aria-hidden="true">{move || typed_prefix(text, shown.get())}</span>
        <span class="sr-only">{text}</span>
    }
}
