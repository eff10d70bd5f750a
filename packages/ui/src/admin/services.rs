use api::{Service, ServiceDraft};
use dioxus::prelude::*;

use super::hooks::{use_collection, use_editor};
use super::shared::{delete_prompt, keyed, AreaField, Field, FormActions, RowActions};
use crate::components::StatusBanner;

#[component]
pub fn ManageServices() -> Element {
    let collection = use_collection::<Service>();
    let editor = use_editor::<ServiceDraft>(collection);

    let state = collection.state.read();
    if state.loading && state.items.is_empty() {
        return rsx! { div { class: "loading-state", "Loading Services..." } };
    }
    let draft = editor.draft();

    rsx! {
        div {
            class: "manage-section",
            h2 { "Manage Services" }
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
                        id: "service-title",
                        label: "Title",
                        value: draft.title.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.title = evt.value()),
                    }
                    Field {
                        id: "service-icon",
                        label: "Icon",
                        placeholder: "🎨",
                        value: draft.icon.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.icon = evt.value()),
                    }
                    Field {
                        id: "service-order",
                        label: "Order",
                        r#type: "number",
                        value: draft.order.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.order = evt.value()),
                    }
                }
                AreaField {
                    id: "service-desc",
                    label: "Description",
                    value: draft.desc.clone(),
                    required: true,
                    oninput: move |evt: FormEvent| editor.edit(|d| d.desc = evt.value()),
                }
                FormActions {
                    label: "Service",
                    editing: editor.is_editing(),
                    saving: editor.is_saving(),
                    on_cancel: move |_| editor.cancel_edit(),
                }
            }

            div {
                class: "admin-list",
                h3 { "Current Services" }
                table {
                    thead {
                        tr {
                            th { "Icon" }
                            th { "Title" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (key, service) in keyed(&state.items) {
                            tr {
                                key: "{key}",
                                td { "{service.icon}" }
                                td { "{service.title}" }
                                RowActions {
                                    on_edit: {
                                        let service = service.clone();
                                        move |_| editor.begin_edit(&service)
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
