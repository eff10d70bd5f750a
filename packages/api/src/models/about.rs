use serde::{Deserialize, Serialize};

use super::required;
use crate::error::FieldError;

/// The singleton About profile. Feeds both the hero and the about section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    /// Availability, e.g. "Available".
    #[serde(default)]
    pub freelance: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub home_description: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_link: Option<String>,
}

impl AboutProfile {
    /// Label/value pairs rendered in the about section.
    pub fn details(&self) -> [(&'static str, &str); 6] {
        [
            ("Name", self.name.as_str()),
            ("Degree", self.degree.as_str()),
            ("Phone", self.phone.as_str()),
            ("Email", self.email.as_str()),
            ("Address", self.address.as_str()),
            ("Freelance", self.freelance.as_str()),
        ]
    }
}

/// Form state for the About panel. Roles are edited as one comma-separated line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AboutDraft {
    pub name: String,
    pub degree: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub freelance: String,
    pub bio: String,
    pub home_description: String,
    pub roles: String,
    pub resume_link: Option<String>,
}

impl AboutDraft {
    pub fn from_profile(profile: &AboutProfile) -> Self {
        Self {
            name: profile.name.clone(),
            degree: profile.degree.clone(),
            phone: profile.phone.clone(),
            email: profile.email.clone(),
            address: profile.address.clone(),
            freelance: profile.freelance.clone(),
            bio: profile.bio.clone(),
            home_description: profile.home_description.clone(),
            roles: profile.roles.join(", "),
            resume_link: profile.resume_link.clone(),
        }
    }

    pub fn build(&self) -> Result<AboutProfile, FieldError> {
        Ok(AboutProfile {
            name: required("Name", &self.name)?,
            degree: required("Degree", &self.degree)?,
            phone: required("Phone", &self.phone)?,
            email: required("Email", &self.email)?,
            address: required("Address", &self.address)?,
            freelance: required("Freelance Status", &self.freelance)?,
            bio: required("Biography", &self.bio)?,
            home_description: self.home_description.trim().to_string(),
            roles: split_roles(&self.roles),
            resume_link: self.resume_link.clone().filter(|l| !l.trim().is_empty()),
        })
    }
}

/// `"Developer, Designer,"` → `["Developer", "Designer"]`.
pub fn split_roles(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AboutProfile {
        AboutProfile {
            name: "Sivakumar".to_string(),
            degree: "MCA".to_string(),
            phone: "+91 00000 00000".to_string(),
            email: "me@example.com".to_string(),
            address: "Tiruppur".to_string(),
            freelance: "Available".to_string(),
            bio: "Hello".to_string(),
            home_description: String::new(),
            roles: vec!["Developer".to_string(), "Designer".to_string()],
            resume_link: None,
        }
    }

    #[test]
    fn test_camel_case_fields() {
        let about: AboutProfile = serde_json::from_str(
            r#"{"name":"S","homeDescription":"Hi","roles":["A"],"resumeLink":"/r.pdf"}"#,
        )
        .unwrap();
        assert_eq!(about.home_description, "Hi");
        assert_eq!(about.resume_link.as_deref(), Some("/r.pdf"));
        assert_eq!(about.degree, "");
    }

    #[test]
    fn test_roles_roundtrip_through_draft() {
        let draft = AboutDraft::from_profile(&profile());
        assert_eq!(draft.roles, "Developer, Designer");
        assert_eq!(draft.build().unwrap(), profile());
    }

    #[test]
    fn test_split_roles_drops_blanks() {
        assert_eq!(split_roles(" Developer ,, Designer, "), vec!["Developer", "Designer"]);
        assert!(split_roles("").is_empty());
    }

    #[test]
    fn test_details_order() {
        let p = profile();
        let labels: Vec<&str> = p.details().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Name", "Degree", "Phone", "Email", "Address", "Freelance"]);
    }
}
