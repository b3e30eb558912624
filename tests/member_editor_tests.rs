use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use octofit_dashboard::domain::Member;
use octofit_dashboard::services::{
    submit_patch, ApiTransport, DraftField, FetchError, MemberEditor,
};

fn members_fixture() -> Vec<Member> {
    vec![
        Member {
            id: "m1".into(),
            name: "Ada".into(),
            email: "ada@x.com".into(),
            team: "Team Blue".into(),
            created_at: None,
        },
        Member {
            id: "m2".into(),
            name: "Grace".into(),
            email: "grace@x.com".into(),
            team: "Team Gold".into(),
            created_at: None,
        },
    ]
}

fn patch_of(value: Value) -> octofit_dashboard::domain::MemberPatch {
    serde_json::from_value(value).unwrap()
}

#[test]
fn begin_edit_snapshots_editable_fields_and_clears_old_flags() {
    let members = members_fixture();
    let mut editor = MemberEditor::new();

    editor.begin_edit(&members[0]);
    let mut scratch = members.clone();
    editor.finish_commit(&mut scratch, Err(FetchError::Status { status: 500 }));
    assert!(editor.save_error().is_some());

    editor.begin_edit(&members[1]);
    assert_eq!(editor.editing_id(), Some("m2"));
    assert!(editor.save_error().is_none());
    assert!(!editor.save_success());
    let draft = editor.draft().unwrap();
    assert_eq!(draft.name, "Grace");
    assert_eq!(draft.email, "grace@x.com");
    assert_eq!(draft.team, "Team Gold");
}

#[test]
fn commit_body_carries_exactly_the_editable_fields() {
    let members = members_fixture();
    let mut editor = MemberEditor::new();

    editor.begin_edit(&members[0]);
    editor.update_field(DraftField::Name, "Ada Lovelace".into());
    editor.update_field(DraftField::Team, "Team Gold".into());

    let request = editor.start_commit().unwrap();
    assert_eq!(request.member_id, "m1");
    assert_eq!(
        request.body,
        json!({"name": "Ada Lovelace", "email": "ada@x.com", "team": "Team Gold"})
    );
}

#[test]
fn successful_partial_update_merges_only_returned_fields() {
    let mut members = members_fixture();
    let mut editor = MemberEditor::new();

    editor.begin_edit(&members[0]);
    editor.update_field(DraftField::Name, "Ada Lovelace".into());
    let _request = editor.start_commit().unwrap();

    // Server confirms only the name.
    editor.finish_commit(&mut members, Ok(patch_of(json!({"name": "Ada Lovelace"}))));

    assert_eq!(members[0].name, "Ada Lovelace");
    assert_eq!(members[0].email, "ada@x.com");
    assert_eq!(members[0].team, "Team Blue");
    // Everyone else keeps their position and value.
    assert_eq!(members[1], members_fixture()[1]);
    assert!(editor.save_success());
    assert!(!editor.is_saving());
}

#[test]
fn failed_commit_leaves_list_and_draft_untouched_for_retry() {
    let mut members = members_fixture();
    let before = members.clone();
    let mut editor = MemberEditor::new();

    editor.begin_edit(&members[0]);
    editor.update_field(DraftField::Email, "countess@x.com".into());
    let _request = editor.start_commit().unwrap();

    editor.finish_commit(&mut members, Err(FetchError::Status { status: 500 }));

    assert_eq!(members, before);
    assert_eq!(editor.draft().unwrap().email, "countess@x.com");
    assert!(editor.save_error().unwrap().contains("500"));
    assert!(!editor.save_success());

    // The same draft can go again.
    let retry = editor.start_commit();
    assert!(retry.is_some());
    assert!(editor.save_error().is_none());
}

#[test]
fn at_most_one_commit_in_flight_per_draft() {
    let members = members_fixture();
    let mut editor = MemberEditor::new();

    editor.begin_edit(&members[0]);
    assert!(editor.start_commit().is_some());
    assert!(editor.is_saving());
    assert!(editor.start_commit().is_none());
}

#[test]
fn commit_without_a_draft_is_rejected() {
    let mut editor = MemberEditor::new();
    assert!(editor.start_commit().is_none());
}

#[test]
fn cancel_discards_draft_without_touching_the_list() {
    let mut members = members_fixture();
    let before = members.clone();
    let mut editor = MemberEditor::new();

    editor.begin_edit(&members[0]);
    editor.update_field(DraftField::Name, "Renamed".into());
    editor.cancel();

    assert!(!editor.is_editing());
    assert_eq!(members, before);

    // A commit landing after cancel has nothing to update.
    editor.finish_commit(&mut members, Ok(patch_of(json!({"name": "Renamed"}))));
    assert_eq!(members, before);
    assert!(!editor.save_success());
}

#[test]
fn full_record_response_overlays_cleanly() {
    let mut members = members_fixture();
    let mut editor = MemberEditor::new();

    editor.begin_edit(&members[1]);
    editor.update_field(DraftField::Team, "Team Blue".into());
    let _request = editor.start_commit().unwrap();

    editor.finish_commit(
        &mut members,
        Ok(patch_of(json!({
            "name": "Grace",
            "email": "grace@x.com",
            "team": "Team Blue",
            "created_at": "2026-01-15T09:30:00Z",
        }))),
    );

    assert_eq!(members[1].team, "Team Blue");
    assert!(members[1].created_at.is_some());
    assert!(editor.save_success());
}

/// Records the PATCH it receives and answers with a canned body.
struct RecordingTransport {
    response: Result<Value, FetchError>,
    seen: Mutex<Vec<(String, Value)>>,
}

#[async_trait]
impl ApiTransport for RecordingTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        Err(FetchError::Network(format!("unexpected GET {url}")))
    }

    async fn patch_json(&self, url: &str, body: &Value) -> Result<Value, FetchError> {
        self.seen
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        self.response.clone()
    }
}

#[tokio::test]
async fn submit_patch_targets_the_record_url_and_decodes_the_response() {
    let members = members_fixture();
    let mut editor = MemberEditor::new();
    editor.begin_edit(&members[0]);
    editor.update_field(DraftField::Name, "Ada Lovelace".into());
    let request = editor.start_commit().unwrap();

    let transport = RecordingTransport {
        response: Ok(json!({"name": "Ada Lovelace"})),
        seen: Mutex::new(Vec::new()),
    };

    let patch = submit_patch(&transport, "http://localhost:8000/api/members/", &request)
        .await
        .unwrap();
    assert_eq!(patch.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(patch.email, None);

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "http://localhost:8000/api/members/m1/");
    assert_eq!(seen[0].1, request.body);
}

#[tokio::test]
async fn submit_patch_surfaces_http_failures() {
    let members = members_fixture();
    let mut editor = MemberEditor::new();
    editor.begin_edit(&members[0]);
    let request = editor.start_commit().unwrap();

    let transport = RecordingTransport {
        response: Err(FetchError::Status { status: 400 }),
        seen: Mutex::new(Vec::new()),
    };

    let result = submit_patch(&transport, "http://localhost:8000/api/members/", &request).await;
    assert_eq!(result, Err(FetchError::Status { status: 400 }));
}
