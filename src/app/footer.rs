use chrono::{DateTime, Datelike, Utc};
use leptos::{html, prelude::*};

use super::{
    hooks::{use_in_view, use_reduced_motion},
    platform::scroll_to_section,
};
use crate::{content::PROFILE, interaction::SECTION_THRESHOLD, motion::Variants};

/// When this build was stamped. Server and client render the same footer
/// because both read the compile-time value rather than the clock.
fn built_at(stamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(stamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn copyright(stamp: &str, name: &str) -> String {
    match built_at(stamp) {
        Some(dt) => format!("© {} {name}. All rights reserved.", dt.year()),
        None => format!("© {name}. All rights reserved."),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let footer_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(footer_ref, SECTION_THRESHOLD);
    let reduce = use_reduced_motion();
    let stamp = env!("BUILD_TIME");

    view! {
        <footer class="py-8 border-t">
            <div
                node_ref=footer_ref
                class="container mx-auto px-6"
                style=move || Variants::footer().respecting(reduce.get()).style(in_view.get())
            >
                <div class="flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-muted-foreground">
                    <p data-testid="text-copyright">{copyright(stamp, PROFILE.name)}</p>
                    <div class="flex items-center gap-4">
                        {built_at(stamp)
                            .map(|dt| {
                                view! {
                                    <span title=stamp>
                                        "Last built " {dt.format("%B %-d, %Y").to_string()}
                                    </span>
                                }
                            })}
                        <button
                            class="hover:text-primary transition-colors duration-200"
                            data-testid="button-back-to-top"
                            on:click=move |_| scroll_to_section("hero")
                        >
                            "↑ Back to top"
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_uses_build_year() {
        assert_eq!(
            copyright("2025-03-14T09:26:53+00:00", "Jordan Avery"),
            "© 2025 Jordan Avery. All rights reserved."
        );
    }

    #[test]
    fn test_copyright_without_stamp() {
        assert_eq!(
            copyright("not a date", "Jordan Avery"),
            "© Jordan Avery. All rights reserved."
        );
    }

    #[test]
    fn test_sliver_of_footer_stays_hidden() {
        use crate::interaction::VisibilityTrigger;

        let mut trigger = VisibilityTrigger::new(SECTION_THRESHOLD);
        assert_eq!(trigger.observe(0.01, true), None);
        assert_eq!(trigger.observe(0.1, true), Some(true));
    }

    #[test]
    fn test_build_stamp_is_parseable() {
        assert!(built_at(env!("BUILD_TIME")).is_some());
    }
}
