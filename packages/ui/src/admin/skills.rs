use api::{Skill, SkillDraft};
use dioxus::prelude::*;

use super::hooks::{use_collection, use_editor};
use super::shared::{delete_prompt, keyed, Field, FormActions, RowActions};
use crate::components::StatusBanner;

#[component]
pub fn ManageSkills() -> Element {
    let collection = use_collection::<Skill>();
    let editor = use_editor::<SkillDraft>(collection);

    let state = collection.state.read();
    if state.loading && state.items.is_empty() {
        return rsx! { div { class: "loading-state", "Loading Skills..." } };
    }
    let draft = editor.draft();

    rsx! {
        div {
            class: "manage-section",
            h2 { "Manage Skills" }
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
                        id: "skill-name",
                        label: "Skill Name",
                        value: draft.name.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.name = evt.value()),
                    }
                    Field {
                        id: "skill-level",
                        label: "Level (0-100)",
                        r#type: "number",
                        value: draft.level.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.level = evt.value()),
                    }
                    Field {
                        id: "skill-icon",
                        label: "Icon URL",
                        placeholder: "/icons/rust.svg",
                        value: draft.icon.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.icon = evt.value()),
                    }
                    Field {
                        id: "skill-order",
                        label: "Order",
                        r#type: "number",
                        value: draft.order.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.order = evt.value()),
                    }
                }
                FormActions {
                    label: "Skill",
                    editing: editor.is_editing(),
                    saving: editor.is_saving(),
                    on_cancel: move |_| editor.cancel_edit(),
                }
            }

            div {
                class: "admin-list",
                h3 { "Current Skills" }
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Level" }
                            th { "Order" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (key, skill) in keyed(&state.items) {
                            tr {
                                key: "{key}",
                                td { "{skill.name}" }
                                td { "{skill.level}%" }
                                td { "{skill.order}" }
                                RowActions {
                                    on_edit: {
                                        let skill = skill.clone();
                                        move |_| editor.begin_edit(&skill)
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
