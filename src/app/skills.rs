use leptos::{html, prelude::*};

use super::{
    hooks::{use_in_view, use_reduced_motion},
    SectionHeading,
};
use crate::{
    content::SKILLS,
    interaction::SECTION_THRESHOLD,
    motion::{Stagger, Variants},
};

const GROUP_STAGGER: Stagger = Stagger::new(150, 300);

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, SECTION_THRESHOLD);
    let reduce = use_reduced_motion();

    view! {
        <section id="skills" class="py-24 bg-background">
            <div node_ref=section_ref class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="Skills"
                        subtitle="Languages, frameworks, and tools I work with"
                        in_view
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(i, group)| {
                                // badges trail their card
                                let badges = Stagger::new(
                                    50,
                                    GROUP_STAGGER.offset(i) + 200,
                                );
                                view! {
                                    <div
                                        class="p-6 rounded-lg border bg-card hover:shadow-lg transition-shadow duration-200"
                                        style=move || {
                                            Variants::fade_up()
                                                .respecting(reduce.get())
                                                .style_staggered(in_view.get(), GROUP_STAGGER, i)
                                        }
                                    >
                                        <h3 class="font-semibold text-lg mb-4">{group.title}</h3>
                                        <div class="flex flex-wrap gap-2">
                                            {group
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(j, skill)| {
                                                    view! {
                                                        <span
                                                            class="rounded-md px-3 py-1 bg-secondary text-secondary-foreground text-sm hover:scale-105 transition-transform"
                                                            style=move || {
                                                                Variants::scale_in()
                                                                    .respecting(reduce.get())
                                                                    .style_staggered(in_view.get(), badges, j)
                                                            }
                                                        >
                                                            {*skill}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
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
