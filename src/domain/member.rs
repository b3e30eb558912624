use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member record as served by `/api/members/`. The `team` field is the
/// team's display name, not a foreign id; the backend is authoritative for
/// keeping it consistent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The decoded body of a successful PATCH response. The backend may return
/// the full record or only the fields it changed, so every field is optional
/// and `apply_to` overlays just the ones that are present.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub team: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl MemberPatch {
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(email) = &self.email {
            member.email = email.clone();
        }
        if let Some(team) = &self.team {
            member.team = team.clone();
        }
        if let Some(created_at) = self.created_at {
            member.created_at = Some(created_at);
        }
    }
}
