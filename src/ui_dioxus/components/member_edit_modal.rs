use dioxus::prelude::*;

use crate::services::{DraftField, MemberDraft};

/// Edit dialog for one member. Purely presentational: the draft, flags, and
/// team options come in as props and every interaction goes back out through
/// the handlers.
#[component]
pub fn MemberEditModal(
    draft: MemberDraft,
    team_options: Vec<String>,
    saving: bool,
    save_error: Option<String>,
    save_success: bool,
    on_change: EventHandler<(DraftField, String)>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        // Modal backdrop
        div {
            class: "modal-backdrop",
            onclick: move |_| on_cancel.call(()),

            // Modal content
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    h5 { class: "modal-title", "✏️ Edit Member" }
                    button {
                        class: "btn-close",
                        onclick: move |_| on_cancel.call(()),
                        "×"
                    }
                }

                div {
                    class: "modal-body",

                    if let Some(err) = save_error.as_ref() {
                        div { class: "alert alert-danger", "{err}" }
                    }
                    if save_success {
                        div { class: "alert alert-success", "✅ Saved successfully!" }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "edit-name", "Name" }
                        input {
                            id: "edit-name",
                            r#type: "text",
                            class: "form-control",
                            value: "{draft.name}",
                            required: true,
                            oninput: move |e| on_change.call((DraftField::Name, e.value())),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "edit-email", "Email" }
                        input {
                            id: "edit-email",
                            r#type: "email",
                            class: "form-control",
                            value: "{draft.email}",
                            required: true,
                            oninput: move |e| on_change.call((DraftField::Email, e.value())),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "edit-team", "Team" }
                        // Free-text fallback when the teams read failed or
                        // returned nothing
                        if team_options.is_empty() {
                            input {
                                id: "edit-team",
                                r#type: "text",
                                class: "form-control",
                                value: "{draft.team}",
                                placeholder: "Team name",
                                oninput: move |e| on_change.call((DraftField::Team, e.value())),
                            }
                        } else {
                            select {
                                id: "edit-team",
                                class: "form-select",
                                value: "{draft.team}",
                                required: true,
                                onchange: move |e| on_change.call((DraftField::Team, e.value())),
                                option { value: "", "— select a team —" }
                                for name in team_options.iter() {
                                    option {
                                        key: "{name}",
                                        value: "{name}",
                                        selected: *name == draft.team,
                                        "{name}"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: saving,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: saving,
                        onclick: move |_| on_save.call(()),
                        if saving { "Saving…" } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
