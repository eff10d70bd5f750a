use api::{Project, ProjectDraft, PROJECT_CATEGORIES};
use dioxus::prelude::*;

use super::hooks::{use_collection, use_editor};
use super::shared::{delete_prompt, keyed, AreaField, Field, FormActions, RowActions};
use crate::components::{Label, StatusBanner};

#[component]
pub fn ManageProjects() -> Element {
    let collection = use_collection::<Project>();
    let editor = use_editor::<ProjectDraft>(collection);

    let state = collection.state.read();
    if state.loading && state.items.is_empty() {
        return rsx! { div { class: "loading-state", "Loading Projects..." } };
    }
    let draft = editor.draft();

    rsx! {
        div {
            class: "manage-section",
            h2 { "Manage Projects" }
            StatusBanner { status: state.status.clone() }

            form {
                class: "admin-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    editor.submit();
                },
                div {
                    class: "form-grid",
                    Field {
                        id: "project-title",
                        label: "Title",
                        value: draft.title.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.title = evt.value()),
                    }
                    div {
                        class: "form-group",
                        Label { html_for: "project-category", "Category" }
                        select {
                            id: "project-category",
                            class: "input",
                            value: draft.category.clone(),
                            required: true,
                            onchange: move |evt: FormEvent| editor.edit(|d| d.category = evt.value()),
                            option { value: "", "Select Category" }
                            for category in PROJECT_CATEGORIES {
                                option { value: category, selected: draft.category == category, "{category}" }
                            }
                        }
                    }
                    Field {
                        id: "project-image",
                        label: "Image URL",
                        placeholder: "/images/project.png",
                        value: draft.image.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.image = evt.value()),
                    }
                    Field {
                        id: "project-link",
                        label: "Project Link",
                        placeholder: "https://github.com/...",
                        value: draft.link.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.link = evt.value()),
                    }
                    Field {
                        id: "project-order",
                        label: "Order",
                        r#type: "number",
                        value: draft.order.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.order = evt.value()),
                    }
                }
                AreaField {
                    id: "project-description",
                    label: "Description",
                    value: draft.description.clone(),
                    required: true,
                    oninput: move |evt: FormEvent| editor.edit(|d| d.description = evt.value()),
                }
                FormActions {
                    label: "Project",
                    editing: editor.is_editing(),
                    saving: editor.is_saving(),
                    on_cancel: move |_| editor.cancel_edit(),
                }
            }

            div {
                class: "admin-list",
                h3 { "Current Projects" }
                table {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Category" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (key, project) in keyed(&state.items) {
                            tr {
                                key: "{key}",
                                td { "{project.title}" }
                                td { "{project.category}" }
                                RowActions {
                                    on_edit: {
                                        let project = project.clone();
                                        move |_| editor.begin_edit(&project)
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
