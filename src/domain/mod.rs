pub mod activity;
pub mod leaderboard;
pub mod member;
pub mod team;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::LeaderboardEntry;
pub use member::{Member, MemberPatch};
pub use team::Team;
pub use workout::Workout;
