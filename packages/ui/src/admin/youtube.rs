use api::{YoutubeDraft, YoutubeVideo};
use dioxus::prelude::*;

use super::hooks::{use_collection, use_editor};
use super::shared::{delete_prompt, keyed, AreaField, Field, FormActions, RowActions};
use crate::components::StatusBanner;

#[component]
pub fn ManageYoutube() -> Element {
    let collection = use_collection::<YoutubeVideo>();
    let editor = use_editor::<YoutubeDraft>(collection);

    let state = collection.state.read();
    if state.loading && state.items.is_empty() {
        return rsx! { div { class: "loading-state", "Loading Videos..." } };
    }
    let draft = editor.draft();

    rsx! {
        div {
            class: "manage-section",
            h2 { "Manage YouTube" }
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
                        id: "video-title",
                        label: "Title",
                        value: draft.title.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.title = evt.value()),
                    }
                    Field {
                        id: "video-link",
                        label: "Video Link",
                        placeholder: "https://youtube.com/watch?v=...",
                        value: draft.link.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| editor.edit(|d| d.link = evt.value()),
                    }
                    Field {
                        id: "video-thumbnail",
                        label: "Thumbnail URL",
                        value: draft.thumbnail.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.thumbnail = evt.value()),
                    }
                    Field {
                        id: "video-order",
                        label: "Order",
                        r#type: "number",
                        value: draft.order.clone(),
                        oninput: move |evt: FormEvent| editor.edit(|d| d.order = evt.value()),
                    }
                }
                AreaField {
                    id: "video-desc",
                    label: "Description",
                    value: draft.desc.clone(),
                    required: true,
                    oninput: move |evt: FormEvent| editor.edit(|d| d.desc = evt.value()),
                }
                FormActions {
                    label: "Video",
                    editing: editor.is_editing(),
                    saving: editor.is_saving(),
                    on_cancel: move |_| editor.cancel_edit(),
                }
            }

            div {
                class: "admin-list",
                h3 { "Current Videos" }
                table {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Link" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (key, video) in keyed(&state.items) {
                            tr {
                                key: "{key}",
                                td { "{video.title}" }
                                td {
                                    a { href: "{video.link}", target: "_blank", rel: "noreferrer", "Open" }
                                }
                                RowActions {
                                    on_edit: {
                                        let video = video.clone();
                                        move |_| editor.begin_edit(&video)
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
