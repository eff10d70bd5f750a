use api::{EntryKind, TimelineDraft, TimelineEntry};
use dioxus::prelude::*;

use super::hooks::{use_collection, use_editor};
use super::shared::{delete_prompt, keyed, AreaField, Field, FormActions, RowActions};
use crate::components::{Label, StatusBanner};

#[component]
pub fn ManageEducation() -> Element {
    let collection = use_collection::<TimelineEntry>();
    let editor = use_editor::<TimelineDraft>(collection);

    let state = collection.state.read();
    if state.loading && state.items.is_empty() {
        return rsx! { div { class: "loading-state", "Loading Education..." } };
    }
    let draft = editor.draft();

    rsx! {
        div {
            class: "manage-section",
            h2 { "Manage Education & Experience" }
            StatusBanner { status: state.status.clone() }

            form {
                class: "admin-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    editor.submit();
                },
                div {
                    class: "form-grid",
                    div {
                        class: "form-group",
                        Label { html_for: "entry-kind", "Type" }
                        select {
                            id: "entry-kind",
                            class: "input",
                            value: draft.kind.as_str(),
                            onchange: move |evt: FormEvent| {
                                editor.edit(|d| d.kind = EntryKind::from_str_lossy(&evt.value()))
                            },
                            option { value: "education", selected: draft.kind == EntryKind::Education, "Education" }
                            option { value: "experience", selected: draft.kind == EntryKind::Experience, "Experience" }
                        }
                    }
                    Field {
                        id: "entry-year",
                        label: "Year",
                        placeholder: "2021 - 2024",
                        value: draft.year.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.year = evt.value()),
                    }
                    Field {
                        id: "entry-title",
                        label: "Title",
                        value: draft.title.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.title = evt.value()),
                    }
                    Field {
                        id: "entry-institution",
                        label: "Institution",
                        value: draft.institution.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.institution = evt.value()),
                    }
                    Field {
                        id: "entry-order",
                        label: "Order",
                        r#type: "number",
                        value: draft.order.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.order = evt.value()),
                    }
                }
                AreaField {
                    id: "entry-desc",
                    label: "Description",
                    value: draft.desc.clone(),
                    required: true,
                    oninput: move |evt: FormEvent| editor.edit(|d| d.desc = evt.value()),
                }
                FormActions {
                    label: "Entry",
                    editing: editor.is_editing(),
                    saving: editor.is_saving(),
                    on_cancel: move |_| editor.cancel_edit(),
                }
            }

            div {
                class: "admin-list",
                h3 { "Current Entries" }
                table {
                    thead {
                        tr {
                            th { "Year" }
                            th { "Title" }
                            th { "Type" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (key, entry) in keyed(&state.items) {
                            tr {
                                key: "{key}",
                                td { "{entry.year}" }
                                td { "{entry.title}" }
                                td { {entry.kind.as_str()} }
                                RowActions {
                                    on_edit: {
                                        let entry = entry.clone();
                                        move |_| editor.begin_edit(&entry)
                                    },
                                    on_delete: {
                                        let id = key.clone();
                                        move |_| collection.request_delete(&id)
                                    },
                                }
                            }
                        }
                    }
                }
            }

            {delete_prompt(&state, collection, true)}
        }
    }
}
