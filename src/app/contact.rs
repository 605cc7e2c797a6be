use leptos::{ev::MouseEvent, html, prelude::*, task::spawn_local};

use super::{
    hooks::{use_in_view, use_reduced_motion, use_transient_flags, FlagSignals},
    platform::{open_in_new_tab, trigger_download},
    SectionHeading,
};
use crate::{
    content::{CONTACT_LINKS, PROFILE, SERVICES},
    interaction::{
        COPY_EMAIL, DOWNLOAD_RESUME, PRESS_PULSE, SECTION_THRESHOLD, SEND_EMAIL,
    },
    motion::{Stagger, Variants},
};

const LINK_STAGGER: Stagger = Stagger::new(150, 300);
const SERVICE_STAGGER: Stagger = Stagger::new(100, 200);

/// Class for a control that briefly pulses while its flag is raised.
fn pressable(flags: FlagSignals, id: &str, base: &str) -> String {
    if flags.is_active(id) {
        format!("{base} animate-press")
    } else {
        base.to_string()
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, SECTION_THRESHOLD);
    let reduce = use_reduced_motion();
    let flags = use_transient_flags();

    let copy_email = move |_: MouseEvent| {
        spawn_local(async move {
            if !flags.copy(PROFILE.email).await {
                log::warn!("email was not copied");
            }
        });
    };
    let send_email = move |_: MouseEvent| {
        flags.activate(SEND_EMAIL, PRESS_PULSE);
        open_in_new_tab(&format!("mailto:{}", PROFILE.email));
    };
    let download = move |_: MouseEvent| {
        flags.activate(DOWNLOAD_RESUME, PRESS_PULSE);
        trigger_download(PROFILE.resume_path, PROFILE.resume_filename);
    };

    view! {
        <section id="contact" class="py-24 bg-muted/30">
            <div node_ref=section_ref class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <SectionHeading
                        title="Get In Touch"
                        subtitle="Have a project in mind or just want to say hello? My inbox is open."
                        in_view
                    />
                    <div class="grid md:grid-cols-2 gap-8">
                        <div
                            class="p-6 rounded-lg border bg-card space-y-6"
                            style=move || {
                                Variants::slide_from_left().respecting(reduce.get()).style(in_view.get())
                            }
                        >
                            <h3 class="text-xl font-semibold">"Contact Information"</h3>
                            <div
                                class="flex items-center gap-4 p-4 rounded-lg bg-muted/50"
                                style=move || {
                                    Variants::fade_up()
                                        .respecting(reduce.get())
                                        .style_staggered(in_view.get(), LINK_STAGGER, 0)
                                }
                            >
                                <span class="text-2xl">"✉"</span>
                                <div class="flex-1 min-w-0">
                                    <div class="font-medium">"Email"</div>
                                    <div class="text-sm text-muted-foreground truncate">
                                        {PROFILE.email}
                                    </div>
                                </div>
                                <button
                                    class="px-3 py-2 rounded-md border text-sm hover:scale-105 active:scale-95 transition-all duration-200"
                                    data-testid="button-copy-email"
                                    aria-label="Copy email address"
                                    on:click=copy_email
                                >
                                    {move || {
                                        if flags.is_active(COPY_EMAIL) { "✓ Copied!" } else { "⧉ Copy" }
                                    }}
                                </button>
                            </div>
                            {CONTACT_LINKS
                                .iter()
                                .enumerate()
                                .map(|(i, link)| {
                                    view! {
                                        <button
                                            class=move || {
                                                pressable(
                                                    flags,
                                                    link.label,
                                                    "w-full flex items-center gap-4 p-4 rounded-lg bg-muted/50 text-left hover:bg-muted transition-colors duration-200",
                                                )
                                            }
                                            data-testid=format!("button-{}", link.label.to_lowercase())
                                            style=move || {
                                                Variants::fade_up()
                                                    .respecting(reduce.get())
                                                    .style_staggered(in_view.get(), LINK_STAGGER, i + 1)
                                            }
                                            on:click=move |_| {
                                                flags.activate(link.label, PRESS_PULSE);
                                                open_in_new_tab(link.href);
                                            }
                                        >
                                            <i class=format!("{} text-2xl", link.icon)></i>
                                            <div>
                                                <div class="font-medium">{link.label}</div>
                                                <div class="text-sm text-muted-foreground">{link.value}</div>
                                            </div>
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <div class="text-sm text-muted-foreground">"📍 " {PROFILE.location}</div>
                        </div>
                        <div
                            class="p-6 rounded-lg border bg-card space-y-4"
                            style=move || {
                                Variants::slide_from_right().respecting(reduce.get()).style(in_view.get())
                            }
                        >
                            <h3 class="text-xl font-semibold">"How I Can Help"</h3>
                            <ul class="space-y-4">
                                {SERVICES
                                    .iter()
                                    .enumerate()
                                    .map(|(i, service)| {
                                        view! {
                                            <li
                                                class="flex items-start gap-3"
                                                style=move || {
                                                    Variants::fade_up()
                                                        .respecting(reduce.get())
                                                        .style_staggered(in_view.get(), SERVICE_STAGGER, i)
                                                }
                                            >
                                                <span class="text-xl">{service.icon}</span>
                                                <div>
                                                    <div class="font-medium">{service.title}</div>
                                                    <div class="text-sm text-muted-foreground">
                                                        {service.description}
                                                    </div>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <div
                                class="pt-2 border-t"
                                style=move || {
                                    Variants::fade()
                                        .respecting(reduce.get())
                                        .with_delay(800)
                                        .style(in_view.get())
                                }
                            >
                                <p class="text-center text-muted-foreground font-medium">
                                    "I'd love to discuss how my experience can help your team."
                                </p>
                            </div>
                        </div>
                    </div>
                    <div
                        class="flex flex-col sm:flex-row gap-4 justify-center mt-12"
                        style=move || {
                            Variants::fade_up()
                                .respecting(reduce.get())
                                .with_delay(600)
                                .style(in_view.get())
                        }
                    >
                        <button
                            class=move || {
                                pressable(
                                    flags,
                                    SEND_EMAIL,
                                    "px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:scale-105 transition-all duration-200",
                                )
                            }
                            data-testid="button-send-email"
                            on:click=send_email
                        >
                            "Send me an email"
                        </button>
                        <button
                            class=move || {
                                pressable(
                                    flags,
                                    DOWNLOAD_RESUME,
                                    "px-6 py-3 rounded-md border-2 font-medium hover:scale-105 transition-all duration-200",
                                )
                            }
                            data-testid="button-contact-download-resume"
                            on:click=download
                        >
                            "⬇ Download Resume"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
