use leptos::{html, prelude::*};

use super::{
    hooks::{use_in_view, use_reduced_motion},
    SectionHeading,
};
use crate::{
    content::{Job, EXPERIENCE},
    interaction::SECTION_THRESHOLD,
    motion::{Stagger, Variants},
};

const JOB_STAGGER: Stagger = Stagger::new(200, 300);

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, SECTION_THRESHOLD);
    let reduce = use_reduced_motion();

    view! {
        <section id="experience" class="py-24 bg-background relative">
            <div node_ref=section_ref class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <SectionHeading
                        title="Experience"
                        subtitle="My professional journey and key achievements"
                        in_view
                    />
                    <div class="relative space-y-8">
                        <div class="absolute left-4 top-0 bottom-0 w-0.5 bg-border hidden md:block"></div>
                        {EXPERIENCE
                            .iter()
                            .enumerate()
                            .map(|(i, job)| {
                                view! {
                                    <div
                                        class="relative md:pl-12"
                                        style=move || {
                                            Variants::scale_in()
                                                .respecting(reduce.get())
                                                .style_staggered(in_view.get(), JOB_STAGGER, i)
                                        }
                                    >
                                        <div class="absolute left-2.5 top-8 w-3 h-3 rounded-full bg-primary hidden md:block"></div>
                                        <JobCard job />
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

#[component]
fn JobCard(job: &'static Job) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg border bg-card hover:shadow-lg transition-shadow duration-200">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-2 mb-4">
                <div>
                    <h3 class="text-xl font-bold">{job.title}</h3>
                    <div class="text-primary font-medium">"🏢 " {job.company}</div>
                </div>
                <div class="text-sm text-muted-foreground md:text-right space-y-1">
                    <div>"📅 " {job.period}</div>
                    <div>"📍 " {job.location}</div>
                    <span class="inline-block rounded-md px-2 py-0.5 text-xs border">{job.kind}</span>
                </div>
            </div>
            <p class="text-muted-foreground mb-4">{job.description}</p>
            <ul class="space-y-2 mb-4">
                {job
                    .achievements
                    .iter()
                    .map(|a| {
                        view! {
                            <li class="flex items-start gap-2 text-sm">
                                <span class="w-1.5 h-1.5 bg-primary rounded-full mt-2 flex-shrink-0"></span>
                                <span>{*a}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2">
                {job
                    .technologies
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="rounded-md px-2 py-1 bg-secondary text-secondary-foreground text-xs">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
