use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::{Member, Team};
use crate::services::{
    codespace_name, collection_url, load_collection, submit_patch, ApiTransport, Collection,
    FetchState, MemberEditor, ResourceController, SAVE_SUCCESS_DISMISS,
};
use crate::ui_dioxus::components::MemberEditModal;
use crate::ui_dioxus::views::format_date;

/// The one editable collection. Loads members plus the teams list so the
/// edit modal can offer the current team names as select options.
#[component]
pub fn MembersView() -> Element {
    let transport = use_context::<Arc<dyn ApiTransport>>();
    let mut members = use_signal(|| ResourceController::<Member>::new(Collection::Members));
    let mut teams = use_signal(|| ResourceController::<Team>::new(Collection::Teams));
    let mut editor = use_signal(MemberEditor::new);

    use_effect({
        let transport = transport.clone();
        move || {
            {
                let transport = transport.clone();
                let token = members.write().activate();
                let url = members.peek().endpoint_url();
                spawn(async move {
                    let result = load_collection::<Member>(&*transport, &url).await;
                    members.write().apply(token, result);
                });
            }
            {
                let transport = transport.clone();
                let token = teams.write().activate();
                let url = teams.peek().endpoint_url();
                spawn(async move {
                    let result = load_collection::<Team>(&*transport, &url).await;
                    teams.write().apply(token, result);
                });
            }
        }
    });

    use_drop(move || {
        members.write().deactivate();
        teams.write().deactivate();
    });

    let transport_for_save = transport.clone();

    let state = members.read().state().clone();
    let team_options: Vec<String> = match teams.read().state() {
        FetchState::Ready(teams) => teams.iter().map(|t| t.name.clone()).collect(),
        _ => Vec::new(),
    };
    let editor_snapshot = editor.read().clone();
    let open_draft = editor_snapshot.draft().cloned();

    rsx! {
        div {
            class: "view-container",
            h2 { class: "page-heading", "👤 Members" }

            match state {
                FetchState::Loading => rsx! {
                    div { class: "loading-indicator", "Loading members…" }
                },
                FetchState::Error(message) => rsx! {
                    div { class: "alert alert-danger", "⚠️ Failed to load members: {message}" }
                },
                FetchState::Ready(members_list) if members_list.is_empty() => rsx! {
                    div { class: "alert alert-info", "No members found." }
                },
                FetchState::Ready(members_list) => rsx! {
                    div {
                        class: "card",
                        div {
                            class: "card-header",
                            {format!("Members — {} member{}", members_list.len(), if members_list.len() != 1 { "s" } else { "" })}
                        }
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Team" }
                                    th { "Joined" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for (index, member) in members_list.iter().enumerate() {
                                    MemberRow {
                                        key: "{member.id}",
                                        index: index,
                                        member: member.clone(),
                                        on_edit: move |member: Member| editor.write().begin_edit(&member),
                                    }
                                }
                            }
                        }
                    }
                },
            }

            match open_draft {
                Some(draft) => rsx! {
                    MemberEditModal {
                        draft: draft,
                        team_options: team_options,
                        saving: editor_snapshot.is_saving(),
                        save_error: editor_snapshot.save_error().map(str::to_string),
                        save_success: editor_snapshot.save_success(),
                        on_change: move |(field, value)| editor.write().update_field(field, value),
                        on_save: move |_| commit_member_edit(transport_for_save.clone(), members, editor),
                        on_cancel: move |_| editor.write().cancel(),
                    }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn MemberRow(index: usize, member: Member, on_edit: EventHandler<Member>) -> Element {
    let row_number = (index + 1).to_string();
    let joined = format_date(member.created_at);
    let member_for_edit = member.clone();

    rsx! {
        tr {
            td { {row_number} }
            td { class: "fw-semibold", "{member.name}" }
            td {
                a { href: "mailto:{member.email}", "{member.email}" }
            }
            td {
                span { class: "badge bg-secondary", "{member.team}" }
            }
            td { class: "text-muted", {joined} }
            td {
                button {
                    class: "btn btn-sm btn-outline-primary",
                    onclick: move |_| on_edit.call(member_for_edit.clone()),
                    "✏️ Edit"
                }
            }
        }
    }
}

/// Arm and run one commit: at most one in flight per draft; the list is only
/// touched once the server has confirmed the update.
fn commit_member_edit(
    transport: Arc<dyn ApiTransport>,
    mut members: Signal<ResourceController<Member>>,
    mut editor: Signal<MemberEditor>,
) {
    let Some(request) = editor.write().start_commit() else {
        return;
    };
    spawn(async move {
        let url = collection_url(codespace_name().as_deref(), Collection::Members);
        let result = submit_patch(&*transport, &url, &request).await;
        {
            let mut members_ref = members.write();
            let mut editor_ref = editor.write();
            match members_ref.items_mut() {
                Some(items) => editor_ref.finish_commit(items, result),
                None => editor_ref.finish_commit(&mut [], result),
            }
        }
        if editor.peek().save_success() {
            spawn(async move {
                tokio::time::sleep(SAVE_SUCCESS_DISMISS).await;
                // Skip the auto-dismiss if the user already closed the modal
                // or started another edit meanwhile.
                if editor.peek().save_success() {
                    editor.write().cancel();
                }
            });
        }
    });
}
