use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::Team;
use crate::services::{load_collection, ApiTransport, Collection, FetchState, ResourceController};

#[component]
pub fn TeamsView() -> Element {
    let transport = use_context::<Arc<dyn ApiTransport>>();
    let mut controller = use_signal(|| ResourceController::<Team>::new(Collection::Teams));

    use_effect(move || {
        let transport = transport.clone();
        let token = controller.write().activate();
        let url = controller.peek().endpoint_url();
        spawn(async move {
            let result = load_collection::<Team>(&*transport, &url).await;
            controller.write().apply(token, result);
        });
    });

    use_drop(move || controller.write().deactivate());

    let state = controller.read().state().clone();

    rsx! {
        div {
            class: "view-container",
            h2 { class: "page-heading", "🏆 Teams" }

            match state {
                FetchState::Loading => rsx! {
                    div { class: "loading-indicator", "Loading teams…" }
                },
                FetchState::Error(message) => rsx! {
                    div { class: "alert alert-danger", "⚠️ Failed to load teams: {message}" }
                },
                FetchState::Ready(teams) if teams.is_empty() => rsx! {
                    div { class: "alert alert-info", "No teams found." }
                },
                FetchState::Ready(teams) => rsx! {
                    div {
                        class: "card",
                        div {
                            class: "card-header",
                            {format!("Teams — {} team{}", teams.len(), if teams.len() != 1 { "s" } else { "" })}
                        }
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Name" }
                                    th { "Description" }
                                    th { "Members" }
                                }
                            }
                            tbody {
                                for (index, team) in teams.iter().enumerate() {
                                    tr {
                                        key: "{team.id}",
                                        td { {(index + 1).to_string()} }
                                        td { class: "fw-semibold", "{team.name}" }
                                        td { "{team.description}" }
                                        td {
                                            span { class: "badge bg-primary", "{team.members_count} members" }
                                        }
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
