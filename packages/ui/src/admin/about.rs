//! About singleton editor with resume upload.

use api::{AboutDraft, ApiError, StatusLine};
use dioxus::prelude::*;

use super::shared::{AreaField, Field};
use crate::auth::{current_token, end_rejected_session, use_api, use_session};
use crate::components::{Button, ButtonVariant, Label, StatusBanner};
use crate::upload::read_selected_file;

const RESUME_INPUT_ID: &str = "resume-upload";

fn upload_failure(error: &ApiError) -> StatusLine {
    match error {
        ApiError::Transport(_) => {
            StatusLine::error("Network error during upload.")
        }
        other => StatusLine::for_error(
            other,
            format!(
                "Upload failed: {}",
                other.describe("Unknown error", "Unknown error")
            ),
        ),
    }
}

fn save_failure(error: &ApiError) -> StatusLine {
    match error {
        ApiError::Transport(_) => {
            StatusLine::error("Network error updating about.")
        }
        other => StatusLine::for_error(
            other,
            format!(
                "Error: {}",
                other.describe("Failed to update about.", "Failed to update about.")
            ),
        ),
    }
}

#[component]
pub fn ManageAbout() -> Element {
    let api = use_api();
    let session = use_session();
    let mut draft = use_signal(AboutDraft::default);
    let mut loading = use_signal(|| true);
    let mut uploading = use_signal(|| false);
    let mut status = use_signal(|| Option::<StatusLine>::None);

    use_future(move || async move {
        let client = api.peek().clone();
        match client.fetch_about().await {
            Ok(Some(profile)) => draft.set(AboutDraft::from_profile(&profile)),
            Ok(None) => tracing::info!("No about profile saved yet"),
            Err(e) => {
                tracing::warn!("Loading about failed: {e}");
                status.set(Some(StatusLine::error("Failed to load About data.")));
            }
        }
        loading.set(false);
    });

    let handle_upload = move |_evt: FormEvent| {
        spawn(async move {
            let Some(file) = read_selected_file(RESUME_INPUT_ID).await else {
                return;
            };
            uploading.set(true);
            status.set(Some(StatusLine::success("Uploading resume...")));

            let client = api.peek().clone();
            let token = current_token(session);
            match client.upload(token.as_deref(), file).await {
                Ok(url) => {
                    draft.write().resume_link = Some(url);
                    status.set(Some(StatusLine::success(
                        "Resume uploaded successfully! Click save to update.",
                    )));
                }
                Err(e) => {
                    let line = upload_failure(&e);
                    end_rejected_session(session, &line);
                    status.set(Some(line));
                }
            }
            uploading.set(false);
        });
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        status.set(None);
        let profile = match draft.peek().build() {
            Ok(profile) => profile,
            Err(e) => {
                status.set(Some(StatusLine::error(e.to_string())));
                return;
            }
        };
        spawn(async move {
            let client = api.peek().clone();
            let token = current_token(session);
            let outcome = match client.save_about(token.as_deref(), &profile).await {
                Ok(()) => StatusLine::success("About section updated successfully!"),
                Err(e) => save_failure(&e),
            };
            end_rejected_session(session, &outcome);
            status.set(Some(outcome));
        });
    };

    if loading() {
        return rsx! { div { class: "loading-state", "Loading About Data..." } };
    }
    let current = draft();

    rsx! {
        div {
            class: "manage-section",
            h2 { "Manage About Section" }
            StatusBanner { status: status() }

            form {
                class: "admin-form",
                onsubmit: handle_save,
                div {
                    class: "form-grid",
                    Field {
                        id: "about-name",
                        label: "Name",
                        value: current.name.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                    }
                    Field {
                        id: "about-degree",
                        label: "Degree",
                        value: current.degree.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| draft.write().degree = evt.value(),
                    }
                    Field {
                        id: "about-phone",
                        label: "Phone",
                        value: current.phone.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                    }
                    Field {
                        id: "about-email",
                        label: "Email",
                        value: current.email.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                    }
                    Field {
                        id: "about-address",
                        label: "Address",
                        value: current.address.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| draft.write().address = evt.value(),
                    }
                    Field {
                        id: "about-freelance",
                        label: "Freelance Status",
                        value: current.freelance.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| draft.write().freelance = evt.value(),
                    }
                }
                Field {
                    id: "about-roles",
                    label: "Roles (comma separated)",
                    placeholder: "e.g. Developer, Designer",
                    value: current.roles.clone(),
                    oninput: move |evt: FormEvent| draft.write().roles = evt.value(),
                }
                AreaField {
                    id: "about-home-description",
                    label: "Home Hero Description",
                    value: current.home_description.clone(),
                    oninput: move |evt: FormEvent| draft.write().home_description = evt.value(),
                }
                AreaField {
                    id: "about-bio",
                    label: "Biography",
                    rows: 6,
                    value: current.bio.clone(),
                    required: true,
                    oninput: move |evt: FormEvent| draft.write().bio = evt.value(),
                }

                div {
                    class: "form-group",
                    Label { html_for: "{RESUME_INPUT_ID}", "Resume PDF Upload" }
                    div {
                        class: "upload-row",
                        input {
                            id: RESUME_INPUT_ID,
                            r#type: "file",
                            accept: ".pdf",
                            disabled: uploading(),
                            onchange: handle_upload,
                        }
                        if uploading() {
                            span { "Uploading..." }
                        }
                    }
                    if let Some(link) = current.resume_link.clone() {
                        p {
                            class: "resume-current",
                            "Current Resume: "
                            a { href: "{link}", target: "_blank", rel: "noreferrer", "View File" }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: uploading(),
                    if uploading() { "Uploading..." } else { "Save Changes" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_failure_messages() {
        assert_eq!(
            upload_failure(&ApiError::Rejected(Some("Only PDF files".to_string()))).text,
            "Upload failed: Only PDF files"
        );
        assert_eq!(
            upload_failure(&ApiError::Rejected(None)).text,
            "Upload failed: Unknown error"
        );
        assert_eq!(
            upload_failure(&ApiError::Transport("offline".to_string())).text,
            "Network error during upload."
        );
        assert_eq!(
            upload_failure(&ApiError::NotAuthenticated).text,
            "Upload failed: Please log in to make changes."
        );
        assert!(upload_failure(&ApiError::NotAuthenticated).needs_sign_in());
    }

    #[test]
    fn test_save_failure_messages() {
        assert_eq!(
            save_failure(&ApiError::Rejected(Some("Invalid email".to_string()))).text,
            "Error: Invalid email"
        );
        assert_eq!(
            save_failure(&ApiError::Transport("offline".to_string())).text,
            "Network error updating about."
        );
        assert_eq!(
            save_failure(&ApiError::Decode("eof".to_string())).text,
            "Error: Failed to update about."
        );
    }
}
