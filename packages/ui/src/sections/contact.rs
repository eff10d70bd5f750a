use api::ContactForm;
use dioxus::prelude::*;

use super::{SectionFrame, SectionHead};
use crate::auth::{use_api, use_site_config};
use crate::latest::Latest;
use crate::reveal::{use_reveal, SectionId};
use crate::timer::sleep_ms;

/// How long a success or error line stays before the form returns to idle.
pub const STATUS_RESET_MS: u64 = 5000;

/// Where the contact form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl ContactStatus {
    pub fn is_sending(self) -> bool {
        self == ContactStatus::Sending
    }

    pub fn button_label(self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Line shown under the form, if any.
    pub fn message(self) -> Option<(&'static str, &'static str)> {
        match self {
            ContactStatus::Success => Some(("status-msg success", "Message sent successfully!")),
            ContactStatus::Error => Some((
                "status-msg error",
                "Message could not be sent. Please try again later.",
            )),
            _ => None,
        }
    }
}

/// One form's submit cycles. Each submission is a round; a reset timer left
/// over from an earlier round does nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactCycle {
    pub status: ContactStatus,
    latest: Latest,
}

impl ContactCycle {
    /// Start sending. `None` while a send is already in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.status.is_sending() {
            return None;
        }
        self.status = ContactStatus::Sending;
        Some(self.latest.begin())
    }

    pub fn finish(&mut self, round: u64, sent: bool) {
        if self.latest.is_current(round) {
            self.status = if sent {
                ContactStatus::Success
            } else {
                ContactStatus::Error
            };
        }
    }

    /// Back to idle once the outcome line has been shown long enough.
    pub fn expire(&mut self, round: u64) {
        if self.latest.is_current(round) && !self.status.is_sending() {
            self.status = ContactStatus::Idle;
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let api = use_api();
    let config = use_site_config();
    let revealed = use_reveal(SectionId::Contact);
    let mut form = use_signal(ContactForm::default);
    let mut cycle = use_signal(ContactCycle::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(round) = cycle.write().begin() else {
            return;
        };
        spawn(async move {
            let client = api.peek().clone();
            let payload = form.peek().clone();
            let sent = match client.send_message(&payload).await {
                Ok(()) => {
                    form.set(ContactForm::default());
                    true
                }
                Err(e) => {
                    tracing::warn!("Error sending message: {e}");
                    false
                }
            };
            cycle.write().finish(round, sent);
            sleep_ms(STATUS_RESET_MS).await;
            cycle.write().expire(round);
        });
    };

    let current = cycle().status;
    let sending = current.is_sending();
    let button_class = if sending {
        "form-submit-btn sending"
    } else {
        "form-submit-btn"
    };
    let values = form();

    rsx! {
        SectionFrame {
            section: SectionId::Contact,
            class: "contact-section",
            revealed: revealed(),
            SectionHead { subtitle: "Contact", title: "Contact Me" }
            div {
                class: "contact-grid",
                div {
                    class: "contact-info-column",
                    for (i, info) in config.contact.info.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "info-box",
                            style: "--i: {i}",
                            div { class: "info-icon", "{info.icon}" }
                            div {
                                class: "info-content",
                                h4 { class: "info-label", "{info.label}" }
                                p { class: "info-value", "{info.value}" }
                            }
                        }
                    }
                    if !config.contact.social.is_empty() {
                        div {
                            class: "social-links-section",
                            h4 { class: "social-title", "Connect with me" }
                            div {
                                class: "social-links",
                                for link in config.contact.social.iter() {
                                    a {
                                        key: "{link.name}",
                                        href: "{link.url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "social-icon-link",
                                        img { src: "{link.icon}", alt: "{link.name}" }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "contact-form-column",
                    form {
                        class: "contact-form",
                        onsubmit: on_submit,
                        div {
                            class: "form-group",
                            input {
                                r#type: "text",
                                name: "name",
                                placeholder: "Your Name",
                                required: true,
                                disabled: sending,
                                value: "{values.name}",
                                oninput: move |evt| form.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            input {
                                r#type: "email",
                                name: "email",
                                placeholder: "Your Email",
                                required: true,
                                disabled: sending,
                                value: "{values.email}",
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            input {
                                r#type: "text",
                                name: "subject",
                                placeholder: "Subject",
                                required: true,
                                disabled: sending,
                                value: "{values.subject}",
                                oninput: move |evt| form.write().subject = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            textarea {
                                name: "message",
                                placeholder: "Message",
                                rows: "7",
                                required: true,
                                disabled: sending,
                                value: "{values.message}",
                                oninput: move |evt| form.write().message = evt.value(),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "{button_class}",
                            disabled: sending,
                            "{current.button_label()}"
                        }
                        if let Some((class, text)) = current.message() {
                            p { class: "{class}", "{text}" }
                        }
                    }
                }
            }
            Link {
                to: "/admin/login",
                class: "admin-lock-link",
                aria_label: "Admin Login",
                span { class: "lock-icon", "🔒" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label_follows_status() {
        assert_eq!(ContactStatus::Idle.button_label(), "Send Message");
        assert_eq!(ContactStatus::Sending.button_label(), "Sending...");
        assert_eq!(ContactStatus::Error.button_label(), "Send Message");
    }

    #[test]
    fn test_stale_reset_does_not_unlock_a_newer_send() {
        let mut cycle = ContactCycle::default();
        let first = cycle.begin().unwrap();
        assert!(cycle.begin().is_none());
        cycle.finish(first, true);
        assert_eq!(cycle.status, ContactStatus::Success);

        // Resubmitted before the first outcome line timed out
        let second = cycle.begin().unwrap();
        cycle.expire(first);
        assert_eq!(cycle.status, ContactStatus::Sending);
        assert!(cycle.begin().is_none());

        cycle.finish(second, false);
        cycle.expire(second);
        assert_eq!(cycle.status, ContactStatus::Idle);
    }

    #[test]
    fn test_only_outcomes_show_a_line() {
        assert!(ContactStatus::Idle.message().is_none());
        assert!(ContactStatus::Sending.message().is_none());
        assert_eq!(
            ContactStatus::Success.message().map(|(_, text)| text),
            Some("Message sent successfully!")
        );
        assert!(ContactStatus::Error
            .message()
            .is_some_and(|(class, _)| class.ends_with("error")));
    }
}
