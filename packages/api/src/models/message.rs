use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::Resource;

/// A contact inquiry left by a visitor. Listing requires a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// RFC 3339 timestamp set by the server.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Message {
    /// Day the message arrived as `dd/mm/yyyy`, or an empty string when unknown.
    pub fn received_on(&self) -> String {
        match self.created_at.as_deref().map(DateTime::parse_from_rfc3339) {
            Some(Ok(at)) => at.format("%d/%m/%Y").to_string(),
            Some(Err(_)) => self.created_at.clone().unwrap_or_default(),
            None => String::new(),
        }
    }
}

impl Resource for Message {
    const PATH: &'static str = "contact";
    const LABEL: &'static str = "Message";
    const PLURAL: &'static str = "messages";
    const PROTECTED: bool = true;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// What a visitor submits from the public contact section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_on() {
        let mut msg = Message {
            created_at: Some("2025-03-09T10:15:00.000Z".to_string()),
            ..Default::default()
        };
        assert_eq!(msg.received_on(), "09/03/2025");

        msg.created_at = Some("yesterday".to_string());
        assert_eq!(msg.received_on(), "yesterday");

        msg.created_at = None;
        assert_eq!(msg.received_on(), "");
    }

    #[test]
    fn test_contact_form_completeness() {
        let mut form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Hi".to_string(),
            message: " ".to_string(),
        };
        assert!(!form.is_complete());
        form.message = "Hello".to_string();
        assert!(form.is_complete());
    }
}
