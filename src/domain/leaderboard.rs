use serde::{Deserialize, Serialize};

/// One row of the server-computed leaderboard. Rows arrive already ranked;
/// the client never re-sorts them or recomputes `rank`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub team_name: String,
    #[serde(default)]
    pub total_activities: i64,
    #[serde(default)]
    pub total_calories: i64,
    #[serde(default)]
    pub total_duration: i64, // minutes
    #[serde(default)]
    pub rank: i64,
}
