use std::sync::Arc;

use dioxus::prelude::*;

use crate::services::{ApiTransport, HttpTransport};
use crate::ui_dioxus::views::*;

const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("members", "Members", "👤"),
    ("teams", "Teams", "🏆"),
    ("activities", "Activities", "🏃"),
    ("leaderboard", "Leaderboard", "📊"),
    ("workouts", "Workouts", "💪"),
];

const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    (
        "🏃",
        "Track Activities",
        "Log runs, cycling, swimming and more with calories and duration.",
    ),
    (
        "🏆",
        "Team Competitions",
        "Create teams and climb the leaderboard together.",
    ),
    (
        "💪",
        "Workout Plans",
        "Follow curated workouts matched to your fitness level.",
    ),
    (
        "📊",
        "Live Leaderboard",
        "See real-time rankings for every team across all activities.",
    ),
];

#[component]
pub fn App() -> Element {
    // One shared HTTP client behind the transport seam
    use_context_provider::<Arc<dyn ApiTransport>>(|| Arc::new(HttpTransport::new()));

    let mut current_view = use_signal(|| "home");

    rsx! {
        div {
            class: "app-container",

            // Navigation bar
            nav {
                class: "navbar",

                button {
                    class: "nav-brand",
                    onclick: move |_| current_view.set("home"),
                    "OctoFit Tracker"
                }

                div {
                    class: "nav-menu",

                    for (key, label, icon) in NAV_ITEMS {
                        button {
                            class: if *current_view.read() == key { "nav-item active" } else { "nav-item" },
                            onclick: move |_| current_view.set(key),
                            "{icon} {label}"
                        }
                    }
                }
            }

            // Main content area
            div {
                class: "main-content",

                match *current_view.read() {
                    "members" => rsx! { MembersView {} },
                    "teams" => rsx! { TeamsView {} },
                    "activities" => rsx! { ActivitiesView {} },
                    "leaderboard" => rsx! { LeaderboardView {} },
                    "workouts" => rsx! { WorkoutsView {} },
                    _ => rsx! { HomeView {} },
                }
            }
        }
    }
}

/// Static splash; no data sync happens here.
#[component]
fn HomeView() -> Element {
    rsx! {
        div {
            class: "home-view",

            h1 { "OctoFit Tracker" }
            p { class: "lead", "Fitness tracking for teams that like a little competition." }

            div {
                class: "highlight-cards",

                for (icon, title, text) in HIGHLIGHTS {
                    div {
                        class: "highlight-card",
                        div { class: "highlight-icon", "{icon}" }
                        h3 { "{title}" }
                        p { "{text}" }
                    }
                }
            }
        }
    }
}
