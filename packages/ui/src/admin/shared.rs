//! Pieces every admin panel renders the same way.

use api::{CollectionState, Resource};
use dioxus::prelude::*;

use super::hooks::CollectionHandle;
use crate::components::{Button, ButtonVariant, ConfirmDialog, Input, Label, TextArea};

/// Saved items paired with their ids, for keyed rows. Unsaved items are skipped.
pub fn keyed<R: Resource>(items: &[R]) -> Vec<(String, R)> {
    items
        .iter()
        .filter_map(|item| item.id().map(|id| (id.to_string(), item.clone())))
        .collect()
}

/// Labelled single-line input.
#[component]
pub fn Field(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            Label { html_for: id.clone(), "{label}" }
            Input {
                id: id.clone(),
                r#type: r#type.clone(),
                placeholder: placeholder.clone(),
                value: value.clone(),
                required: required,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// Labelled multi-line input.
#[component]
pub fn AreaField(
    id: String,
    label: String,
    value: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            Label { html_for: id.clone(), "{label}" }
            TextArea {
                id: id.clone(),
                rows: rows,
                value: value.clone(),
                required: required,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// Edit/Delete buttons for one table row.
#[component]
pub fn RowActions(on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        td {
            class: "row-actions",
            button {
                class: "edit-mini",
                onclick: move |_| on_edit.call(()),
                "Edit"
            }
            button {
                class: "delete-mini",
                onclick: move |_| on_delete.call(()),
                "Delete"
            }
        }
    }
}

/// Submit and Cancel buttons under a panel form.
#[component]
pub fn FormActions(
    label: String,
    editing: bool,
    saving: bool,
    on_cancel: EventHandler<()>,
) -> Element {
    let verb = if editing { "Update" } else { "Add" };

    rsx! {
        div {
            class: "form-actions",
            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: saving,
                if saving { "Saving..." } else { "{verb} {label}" }
            }
            if editing {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

/// Confirmation modal shown while a delete is pending.
pub fn delete_prompt<R: Resource>(
    state: &CollectionState<R>,
    collection: CollectionHandle<R>,
    reload: bool,
) -> Element {
    if state.pending_delete.is_none() {
        return rsx! {};
    }
    let message = format!("Delete this {}?", R::LABEL.to_lowercase());

    rsx! {
        ConfirmDialog {
            message: message,
            on_confirm: move |_| collection.confirm_delete(reload),
            on_cancel: move |_| collection.decline_delete(),
        }
    }
}
