use leptos::{ev::MouseEvent, html, prelude::*};

use super::{
    hooks::{use_disclosure, use_in_view, use_reduced_motion},
    platform::open_in_new_tab,
    SectionHeading,
};
use crate::{
    content::{Project, PROJECTS},
    interaction::{CardEvent, SECTION_THRESHOLD},
    motion::{Stagger, Variants},
};

const CARD_STAGGER: Stagger = Stagger::new(150, 300);

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, SECTION_THRESHOLD);
    let reduce = use_reduced_motion();

    view! {
        <section id="projects" class="py-24 bg-muted/30">
            <div node_ref=section_ref class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="Projects"
                        subtitle="A selection of things I have designed and built"
                        in_view
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(i, project)| {
                                view! {
                                    <div style=move || {
                                        Variants::fade_up()
                                            .respecting(reduce.get())
                                            .style_staggered(in_view.get(), CARD_STAGGER, i)
                                    }>
                                        <ProjectCard project />
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

/// Card with a summary on the front and details on the back. Desktop flips on
/// hover, touch devices on tap. Buttons on the back stay clickable either way.
#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let card = use_disclosure();
    let slug = project.slug();

    let send = move |event: CardEvent| {
        card.update(|c| {
            c.handle(event);
        })
    };
    let control_click = move |ev: MouseEvent, url: &'static str| {
        // keep the card's own click handler from seeing this tap
        ev.stop_propagation();
        send(CardEvent::Tap { on_control: true });
        log::debug!("{} link clicked: {url}", project.title);
        open_in_new_tab(url);
    };

    let badges = move || {
        project
            .technologies
            .iter()
            .map(|t| {
                view! {
                    <span class="rounded-md px-2 py-1 bg-secondary text-secondary-foreground text-xs h-fit">
                        {*t}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="group perspective-1000 relative h-96"
            on:mouseenter=move |_| send(CardEvent::PointerEnter)
            on:mouseleave=move |_| send(CardEvent::PointerLeave)
            on:click=move |_| send(CardEvent::Tap { on_control: false })
        >
            <div class=move || {
                if card.with(|c| c.is_flipped()) {
                    "relative w-full h-full transition-transform duration-700 preserve-3d rotate-y-180"
                } else {
                    "relative w-full h-full transition-transform duration-700 preserve-3d"
                }
            }>
                <div
                    class=move || {
                        if card.with(|c| c.pointer_capable()) {
                            "absolute inset-0 backface-hidden overflow-hidden rounded-lg border bg-card shadow-lg"
                        } else {
                            "absolute inset-0 backface-hidden overflow-hidden rounded-lg border bg-card shadow-lg cursor-pointer"
                        }
                    }
                    data-testid=format!("card-project-front-{slug}")
                >
                    <div class="relative h-48 overflow-hidden">
                        <img src=project.image alt=project.title class="w-full h-full object-cover" />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                        <div class="absolute bottom-4 left-4 right-4">
                            <h3 class="text-xl font-bold text-white mb-2">{project.title}</h3>
                            <p class="text-sm text-white/90 line-clamp-2">{project.description}</p>
                        </div>
                    </div>
                    <div class="p-6 space-y-4 flex flex-col h-[calc(100%-12rem)]">
                        <div class="flex flex-wrap gap-2 overflow-y-auto flex-1 min-h-0">
                            {badges()}
                        </div>
                        <div class="flex items-center justify-center pt-4 text-sm text-muted-foreground">
                            "⟳ " {move || card.with(|c| c.hint())}
                        </div>
                    </div>
                </div>
                <div
                    class="absolute inset-0 backface-hidden rotate-y-180 overflow-hidden rounded-lg border bg-card shadow-lg"
                    data-testid=format!("card-project-back-{slug}")
                >
                    <div class="p-6 h-full flex flex-col">
                        <h3 class="text-xl font-bold mb-4">{project.title}</h3>
                        <div class="space-y-4 flex-1 overflow-y-auto min-h-0">
                            <div>
                                <h4 class="font-semibold mb-2">"About Project"</h4>
                                <p class="text-sm text-muted-foreground">{project.description}</p>
                            </div>
                            <div>
                                <h4 class="font-semibold mb-2">"Key Features"</h4>
                                <ul class="space-y-1">
                                    {project
                                        .achievements
                                        .iter()
                                        .map(|a| {
                                            view! {
                                                <li class="flex items-start gap-2 text-sm text-muted-foreground">
                                                    <span class="w-1.5 h-1.5 bg-primary rounded-full mt-2 flex-shrink-0"></span>
                                                    <span>{*a}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                            <div>
                                <h4 class="font-semibold mb-2">"Tech Stack"</h4>
                                <div class="flex flex-wrap gap-1">{badges()}</div>
                            </div>
                        </div>
                        <div class="flex gap-2 pt-4 border-t flex-shrink-0">
                            {project
                                .live_url
                                .map(|url| {
                                    view! {
                                        <button
                                            class="flex-1 px-3 py-2 rounded-md bg-primary text-primary-foreground text-sm"
                                            data-testid=format!("button-live-{}", project.slug())
                                            on:click=move |ev| control_click(ev, url)
                                        >
                                            "↗ Live Demo"
                                        </button>
                                    }
                                })}
                            {project
                                .github_url
                                .map(|url| {
                                    view! {
                                        <button
                                            class="flex-1 px-3 py-2 rounded-md border text-sm"
                                            data-testid=format!("button-github-{}", project.slug())
                                            on:click=move |ev| control_click(ev, url)
                                        >
                                            "GitHub"
                                        </button>
                                    }
                                })}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
