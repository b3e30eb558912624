use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::Workout;
use crate::services::{load_collection, ApiTransport, Collection, FetchState, ResourceController};

fn difficulty_badge_class(difficulty: &str) -> &'static str {
    match difficulty.to_ascii_lowercase().as_str() {
        "beginner" => "badge-beginner",
        "intermediate" => "badge-intermediate",
        "advanced" => "badge-advanced",
        _ => "bg-secondary",
    }
}

#[component]
pub fn WorkoutsView() -> Element {
    let transport = use_context::<Arc<dyn ApiTransport>>();
    let mut controller = use_signal(|| ResourceController::<Workout>::new(Collection::Workouts));

    use_effect(move || {
        let transport = transport.clone();
        let token = controller.write().activate();
        let url = controller.peek().endpoint_url();
        spawn(async move {
            let result = load_collection::<Workout>(&*transport, &url).await;
            controller.write().apply(token, result);
        });
    });

    use_drop(move || controller.write().deactivate());

    let state = controller.read().state().clone();

    rsx! {
        div {
            class: "view-container",
            h2 { class: "page-heading", "💪 Workouts" }

            match state {
                FetchState::Loading => rsx! {
                    div { class: "loading-indicator", "Loading workouts…" }
                },
                FetchState::Error(message) => rsx! {
                    div { class: "alert alert-danger", "⚠️ Failed to load workouts: {message}" }
                },
                FetchState::Ready(workouts) if workouts.is_empty() => rsx! {
                    div { class: "alert alert-info", "No workouts found." }
                },
                FetchState::Ready(workouts) => rsx! {
                    div {
                        class: "workout-grid",

                        for workout in workouts.iter() {
                            div {
                                key: "{workout.id}",
                                class: "card workout-card",
                                div {
                                    class: "card-header",
                                    span { class: "fw-semibold", "{workout.name}" }
                                    span {
                                        class: format!("badge text-white {}", difficulty_badge_class(&workout.difficulty)),
                                        "{workout.difficulty}"
                                    }
                                }
                                div {
                                    class: "card-body",
                                    p {
                                        span { class: "badge bg-primary", "{workout.activity_type}" }
                                        span { class: "text-muted", " {workout.duration} min · ~{workout.calories_estimate} cal" }
                                    }
                                    p { "{workout.description}" }
                                    p { class: "instructions", "{workout.instructions}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::difficulty_badge_class;

    #[test]
    fn known_levels_map_to_their_badges_case_insensitively() {
        assert_eq!(difficulty_badge_class("Beginner"), "badge-beginner");
        assert_eq!(difficulty_badge_class("INTERMEDIATE"), "badge-intermediate");
        assert_eq!(difficulty_badge_class("advanced"), "badge-advanced");
    }

    #[test]
    fn unknown_levels_fall_back_to_secondary() {
        assert_eq!(difficulty_badge_class("legendary"), "bg-secondary");
        assert_eq!(difficulty_badge_class(""), "bg-secondary");
    }
}
