use std::time::Duration;

use serde_json::{json, Value};
use tracing::{info, warn};

use super::endpoint::record_url;
use super::fetch::{ApiTransport, FetchError};
use crate::domain::{Member, MemberPatch};

/// How long a successful save stays on screen before the modal dismisses
/// itself, unless the user closes it first.
pub const SAVE_SUCCESS_DISMISS: Duration = Duration::from_millis(800);

/// The editable subset of a member record, copied out when editing begins
/// and only merged back after the server confirms the update.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub team: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Team,
}

/// A commit ready to go over the wire: the record to PATCH and a body of
/// exactly the editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRequest {
    pub member_id: String,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq)]
struct EditSession {
    member_id: String,
    draft: MemberDraft,
    saving: bool,
    save_error: Option<String>,
    save_success: bool,
}

/// Edit workflow layered on an already-loaded members list: one draft at a
/// time, at most one commit in flight, and the displayed list only ever
/// reflects server-confirmed state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberEditor {
    session: Option<EditSession>,
}

impl MemberEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `member`: snapshot its editable fields and clear any
    /// flags left over from a previous session. No network traffic.
    pub fn begin_edit(&mut self, member: &Member) {
        self.session = Some(EditSession {
            member_id: member.id.clone(),
            draft: MemberDraft {
                name: member.name.clone(),
                email: member.email.clone(),
                team: member.team.clone(),
            },
            saving: false,
            save_error: None,
            save_success: false,
        });
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.member_id.as_str())
    }

    pub fn draft(&self) -> Option<&MemberDraft> {
        self.session.as_ref().map(|s| &s.draft)
    }

    pub fn is_saving(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.saving)
    }

    pub fn save_error(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.save_error.as_deref())
    }

    pub fn save_success(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.save_success)
    }

    /// Local draft mutation only; nothing is sent and the list is untouched.
    pub fn update_field(&mut self, field: DraftField, value: String) {
        if let Some(session) = &mut self.session {
            match field {
                DraftField::Name => session.draft.name = value,
                DraftField::Email => session.draft.email = value,
                DraftField::Team => session.draft.team = value,
            }
        }
    }

    /// Discard the draft and flags. Never mutates the list.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Arm a commit. Returns `None` if nothing is being edited or a commit
    /// is already in flight for this draft.
    pub fn start_commit(&mut self) -> Option<CommitRequest> {
        let session = self.session.as_mut()?;
        if session.saving {
            warn!(member_id = %session.member_id, "commit already in flight, ignoring");
            return None;
        }
        session.saving = true;
        session.save_error = None;
        Some(CommitRequest {
            member_id: session.member_id.clone(),
            body: json!({
                "name": session.draft.name,
                "email": session.draft.email,
                "team": session.draft.team,
            }),
        })
    }

    /// Land the commit's outcome. On success the confirmed fields are spliced
    /// over the matching list entry in place, everything else in the list and
    /// record untouched. On failure the list and draft stay exactly as they
    /// were so the user can retry or cancel.
    pub fn finish_commit(
        &mut self,
        members: &mut [Member],
        result: Result<MemberPatch, FetchError>,
    ) {
        let Some(session) = &mut self.session else {
            // Session was torn down while the request was in flight.
            return;
        };
        session.saving = false;
        match result {
            Ok(patch) => {
                if let Some(member) = members.iter_mut().find(|m| m.id == session.member_id) {
                    patch.apply_to(member);
                }
                session.save_success = true;
                info!(member_id = %session.member_id, "member updated");
            }
            Err(err) => {
                session.save_error = Some(err.to_string());
            }
        }
    }
}

/// Send the partial update and decode the confirmed fields.
pub async fn submit_patch(
    transport: &dyn ApiTransport,
    members_url: &str,
    request: &CommitRequest,
) -> Result<MemberPatch, FetchError> {
    let url = record_url(members_url, &request.member_id);
    info!(%url, "PATCH member");
    let body = transport.patch_json(&url, &request.body).await?;
    serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}
