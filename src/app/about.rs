use leptos::{html, prelude::*};

use super::{
    hooks::{use_in_view, use_reduced_motion},
    SectionHeading,
};
use crate::{
    content::{ABOUT, HIGHLIGHTS},
    interaction::SECTION_THRESHOLD,
    motion::{Stagger, Variants},
};

const CARD_STAGGER: Stagger = Stagger::new(150, 400);

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, SECTION_THRESHOLD);
    let reduce = use_reduced_motion();

    view! {
        <section id="about" class="py-24 bg-muted/30">
            <div node_ref=section_ref class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <SectionHeading
                        title="About Me"
                        subtitle="A little about who I am and how I work"
                        in_view
                    />
                    <div
                        class="space-y-4 text-lg leading-relaxed mb-12"
                        style=move || {
                            Variants::fade_up()
                                .respecting(reduce.get())
                                .with_delay(200)
                                .style(in_view.get())
                        }
                    >
                        {ABOUT.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    <div class="grid md:grid-cols-3 gap-6">
                        {HIGHLIGHTS
                            .iter()
                            .enumerate()
                            .map(|(i, h)| {
                                view! {
                                    <div
                                        class="p-6 rounded-lg border bg-card hover:shadow-lg transition-shadow duration-200"
                                        style=move || {
                                            Variants::scale_in()
                                                .respecting(reduce.get())
                                                .style_staggered(in_view.get(), CARD_STAGGER, i)
                                        }
                                    >
                                        <div class="text-3xl mb-3">{h.icon}</div>
                                        <h3 class="font-semibold mb-2">{h.title}</h3>
                                        <p class="text-sm text-muted-foreground">{h.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
