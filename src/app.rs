mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod hooks;
mod platform;
mod projects;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{person_schema, PROFILE},
    motion::{Stagger, Variants},
};
use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use hooks::{provide_reduced_motion, use_reduced_motion};
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person_schema()></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: one scrolling page of sections.
#[component]
fn HomePage() -> impl IntoView {
    provide_reduced_motion();

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground overflow-x-hidden w-full">
            <Header />
            <main class="w-full">
                <Hero />
                <About />
                <Experience />
                <Projects />
                <Skills />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

const HEADING_STAGGER: Stagger = Stagger::new(100, 0);

#[component]
fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
    in_view: Signal<bool>,
) -> impl IntoView {
    let reduce = use_reduced_motion();
    let line = move |i: usize| {
        Variants::fade_up()
            .respecting(reduce.get())
            .style_staggered(in_view.get(), HEADING_STAGGER, i)
    };

    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl font-bold mb-4" style=move || line(0)>
                {title}
            </h2>
            <p class="text-xl text-muted-foreground" style=move || line(1)>
                {subtitle}
            </p>
        </div>
    }
}
