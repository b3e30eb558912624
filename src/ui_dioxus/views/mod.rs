pub mod activities_view;
pub mod leaderboard_view;
pub mod members_view;
pub mod teams_view;
pub mod workouts_view;

pub use activities_view::ActivitiesView;
pub use leaderboard_view::LeaderboardView;
pub use members_view::MembersView;
pub use teams_view::TeamsView;
pub use workouts_view::WorkoutsView;

use chrono::{DateTime, Utc};

/// Table-cell date rendering with the shared "no value" dash.
pub(crate) fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "—".to_string(),
    }
}
