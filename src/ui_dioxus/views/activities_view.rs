use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::Activity;
use crate::services::{load_collection, ApiTransport, Collection, FetchState, ResourceController};
use crate::ui_dioxus::views::format_date;

#[component]
pub fn ActivitiesView() -> Element {
    let transport = use_context::<Arc<dyn ApiTransport>>();
    let mut controller = use_signal(|| ResourceController::<Activity>::new(Collection::Activities));

    use_effect(move || {
        let transport = transport.clone();
        let token = controller.write().activate();
        let url = controller.peek().endpoint_url();
        spawn(async move {
            let result = load_collection::<Activity>(&*transport, &url).await;
            controller.write().apply(token, result);
        });
    });

    use_drop(move || controller.write().deactivate());

    let state = controller.read().state().clone();

    rsx! {
        div {
            class: "view-container",
            h2 { class: "page-heading", "🏃 Activities" }

            match state {
                FetchState::Loading => rsx! {
                    div { class: "loading-indicator", "Loading activities…" }
                },
                FetchState::Error(message) => rsx! {
                    div { class: "alert alert-danger", "⚠️ Failed to load activities: {message}" }
                },
                FetchState::Ready(activities) if activities.is_empty() => rsx! {
                    div { class: "alert alert-info", "No activities found." }
                },
                FetchState::Ready(activities) => rsx! {
                    div {
                        class: "card",
                        div {
                            class: "card-header",
                            {format!("Activity Log — {} entr{}", activities.len(), if activities.len() != 1 { "ies" } else { "y" })}
                        }
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Member" }
                                    th { "Activity" }
                                    th { "Duration (min)" }
                                    th { "Calories" }
                                    th { "Date" }
                                    th { "Notes" }
                                }
                            }
                            tbody {
                                for (index, activity) in activities.iter().enumerate() {
                                    tr {
                                        key: "{activity.id}",
                                        td { {(index + 1).to_string()} }
                                        td { "{activity.user_email}" }
                                        td {
                                            span { class: "badge bg-primary", "{activity.activity_type}" }
                                        }
                                        td { "{activity.duration}" }
                                        td { "{activity.calories_burned}" }
                                        td { class: "text-muted", {format_date(activity.date)} }
                                        td { {activity.notes.clone().unwrap_or_default()} }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
