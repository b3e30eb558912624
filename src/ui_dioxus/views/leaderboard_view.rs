use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::LeaderboardEntry;
use crate::services::{load_collection, ApiTransport, Collection, FetchState, ResourceController};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// The top three positions in server order get fixed medals; everything
/// after shows the server-assigned rank. Positions come from returned order,
/// never from re-sorting.
pub fn medal_or_rank(position: usize, rank: i64) -> String {
    match MEDALS.get(position) {
        Some(medal) => (*medal).to_string(),
        None => rank.to_string(),
    }
}

#[component]
pub fn LeaderboardView() -> Element {
    let transport = use_context::<Arc<dyn ApiTransport>>();
    let mut controller =
        use_signal(|| ResourceController::<LeaderboardEntry>::new(Collection::Leaderboard));

    use_effect(move || {
        let transport = transport.clone();
        let token = controller.write().activate();
        let url = controller.peek().endpoint_url();
        spawn(async move {
            let result = load_collection::<LeaderboardEntry>(&*transport, &url).await;
            controller.write().apply(token, result);
        });
    });

    use_drop(move || controller.write().deactivate());

    let state = controller.read().state().clone();

    rsx! {
        div {
            class: "view-container",
            h2 { class: "page-heading", "📊 Leaderboard" }

            match state {
                FetchState::Loading => rsx! {
                    div { class: "loading-indicator", "Loading leaderboard…" }
                },
                FetchState::Error(message) => rsx! {
                    div { class: "alert alert-danger", "⚠️ Failed to load leaderboard: {message}" }
                },
                FetchState::Ready(entries) if entries.is_empty() => rsx! {
                    div { class: "alert alert-info", "No leaderboard data found." }
                },
                FetchState::Ready(entries) => rsx! {
                    div {
                        class: "card",
                        div {
                            class: "card-header",
                            {format!("Team Rankings — {} team{}", entries.len(), if entries.len() != 1 { "s" } else { "" })}
                        }
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Rank" }
                                    th { "Team Name" }
                                    th { "Total Activities" }
                                    th { "Total Calories" }
                                    th { "Total Duration (min)" }
                                }
                            }
                            tbody {
                                for (index, entry) in entries.iter().enumerate() {
                                    tr {
                                        key: "{entry.id}",
                                        class: if index == 0 { "top-rank" } else { "" },
                                        td { {medal_or_rank(index, entry.rank)} }
                                        td { "{entry.team_name}" }
                                        td {
                                            span { class: "badge bg-primary", "{entry.total_activities}" }
                                        }
                                        td {
                                            span { class: "badge bg-success", "{entry.total_calories}" }
                                        }
                                        td { "{entry.total_duration}" }
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Server order wins even when the rank values disagree with it; the rank
    // field only shows from the fourth position on.
    #[rstest]
    #[case(0, 7, "🥇")]
    #[case(1, 7, "🥈")]
    #[case(2, 7, "🥉")]
    #[case(3, 4, "4")]
    #[case(9, 10, "10")]
    fn medal_decoration_follows_returned_order(
        #[case] position: usize,
        #[case] rank: i64,
        #[case] expected: &str,
    ) {
        assert_eq!(medal_or_rank(position, rank), expected);
    }
}
