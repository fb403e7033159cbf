use std::sync::Arc;

use dioxus::prelude::*;
use tracker_core::model::ProblemId;

use crate::context::AppContext;
use crate::toast::{self, Toast, ToastStack};
use crate::vm::map_problem_card;

#[component]
pub fn TrackerView() -> Element {
    let ctx = use_context::<AppContext>();
    let tracker = ctx.tracker();
    let hub = ctx.toasts();
    let revision = use_signal(|| tracker.revision());
    let toasts = use_signal(Vec::<Toast>::new);

    // Subscribe to the tracker's change marker so every toggle re-renders.
    let _ = revision();

    let stats = tracker.stats();
    let catalog = tracker.catalog();
    let cards: Vec<_> = catalog
        .iter()
        .map(|problem| map_problem_card(problem, tracker.is_completed(problem.id())))
        .collect();

    let card_nodes = cards.into_iter().map(|card| {
        let tracker = Arc::clone(&tracker);
        let hub = Arc::clone(&hub);
        let mut revision = revision;
        let toasts = toasts;
        let id = card.id;
        let card_class = if card.done {
            "problem-card problem-card--done"
        } else {
            "problem-card"
        };
        let name_class = if card.done {
            "problem-name problem-name--done"
        } else {
            "problem-name"
        };
        rsx! {
            div { key: "{id}", class: "{card_class}",
                div { class: "problem-card-top",
                    span { class: "problem-badge", "{card.badge}" }
                    input {
                        class: "problem-checkbox",
                        r#type: "checkbox",
                        checked: card.done,
                        onchange: move |_| {
                            let tracker = Arc::clone(&tracker);
                            let hub = Arc::clone(&hub);
                            spawn(async move {
                                let outcome = tracker.toggle(ProblemId::new(id)).await;
                                revision.set(outcome.revision);
                                for toast in hub.drain() {
                                    toast::show(toasts, toast);
                                }
                            });
                        },
                    }
                }
                h3 { class: "{name_class}", "{card.name}" }
                div { class: "problem-links",
                    a {
                        class: "problem-link problem-link--problem",
                        href: "{card.url}",
                        target: "_blank",
                        "LeetCode Problem"
                    }
                    if let Some(video) = card.video_link.as_ref() {
                        a {
                            class: "problem-link problem-link--video",
                            href: "{video}",
                            target: "_blank",
                            "Watch Solution"
                        }
                    } else {
                        span { class: "problem-link problem-link--disabled", "Video Coming Soon" }
                    }
                    if let Some(code) = card.code_link.as_ref() {
                        a {
                            class: "problem-link problem-link--code",
                            href: "{code}",
                            target: "_blank",
                            "View Code"
                        }
                    } else {
                        span { class: "problem-link problem-link--disabled", "No Code Yet" }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page tracker-page",
            ToastStack { toasts: toasts() }
            header { class: "view-header",
                h2 { class: "view-title", "LeetCode 150 Master Tracker" }
                p { class: "view-subtitle",
                    "Track your progress, watch tutorials, and review code solutions."
                }
            }
            div { class: "progress-panel",
                div { class: "progress-labels",
                    span { "Overall Progress" }
                    span { "{stats.solved} / {stats.total} Solved ({stats.percent}%)" }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {stats.percent}%" }
                }
            }
            div { class: "problem-grid",
                {card_nodes}
            }
        }
    }
}
