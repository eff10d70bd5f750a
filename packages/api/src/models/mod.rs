//! # Content models exchanged with the portfolio backend
//!
//! Every type here is deserialised verbatim from the backend's JSON and sent
//! back the same way. Field names follow the backend (`_id`, camelCase).
//!
//! ## Collections
//!
//! | Struct | Path | Draft |
//! |--------|------|-------|
//! | [`Project`] | `projects` | [`ProjectDraft`] |
//! | [`Skill`] | `skills` | [`SkillDraft`] |
//! | [`Service`] | `services` | [`ServiceDraft`] |
//! | [`YoutubeVideo`] | `youtube` | [`YoutubeDraft`] |
//! | [`TimelineEntry`] | `education` | [`TimelineDraft`] |
//! | [`Message`] | `contact` | none (written by visitors through [`ContactForm`]) |
//!
//! [`AboutProfile`] is the one singleton: no id, upserted in place via
//! `POST /about`, edited through [`AboutDraft`].
//!
//! ## Traits
//!
//! - [`Resource`]: a backend collection (path, display label, identity).
//! - [`Editable`]: a resource with a form draft.
//! - [`Draft`]: text-bound form state that validates into a resource.
//!
//! An item whose `id()` is `None` has not been created yet.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::FieldError;

mod about;
mod auth;
mod message;
mod project;
mod service;
mod skill;
mod timeline;
mod youtube;

pub use about::{split_roles, AboutDraft, AboutProfile};
pub use auth::Credentials;
pub use message::{ContactForm, Message};
pub use project::{Project, ProjectDraft, PROJECT_CATEGORIES};
pub use service::{Service, ServiceDraft};
pub use skill::{Skill, SkillDraft};
pub use timeline::{split_timeline, EntryKind, TimelineDraft, TimelineEntry};
pub use youtube::{YoutubeDraft, YoutubeVideo};

/// A collection managed by the backend under `/<PATH>`.
pub trait Resource: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Path segment after the base URL, e.g. `"projects"`.
    const PATH: &'static str;
    /// Singular label used in status lines, e.g. `"Project"`.
    const LABEL: &'static str;
    /// Plural noun used in load messages, e.g. `"projects"`.
    const PLURAL: &'static str;
    /// Whether even listing needs a session token.
    const PROTECTED: bool = false;

    /// Server-issued identifier, `None` for a draft not yet created.
    fn id(&self) -> Option<&str>;
}

/// A resource editable through an admin form.
pub trait Editable: Resource {
    type Draft: Draft<Item = Self>;
}

/// Form state bound to text inputs.
pub trait Draft: Clone + Default + PartialEq + 'static {
    type Item: Resource;

    /// Load an existing item's fields into a fresh draft.
    fn from_item(item: &Self::Item) -> Self;

    /// Validate and convert into a payload. The result never carries an id.
    fn build(&self) -> Result<Self::Item, FieldError>;
}

/// Trim `value`, failing when nothing is left.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

/// Parse a display-order style field. Blank means 0, anything else must be an integer.
pub(crate) fn whole_number(field: &'static str, value: &str) -> Result<i32, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<i32>()
        .map_err(|_| FieldError::NotANumber(field))
}

/// Reads a stored integer field. Older records may hold `null` (a `NaN` that
/// went through JSON), a float or a numeric string; anything unusable is 0.
pub(crate) fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(int_from_json(&value).unwrap_or(0))
}

fn int_from_json(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("Title", "  Demo ").unwrap(), "Demo");
        assert_eq!(required("Title", "   "), Err(FieldError::Required("Title")));
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(int_from_json(&Value::Null), None);
        assert_eq!(int_from_json(&serde_json::json!(4)), Some(4));
        assert_eq!(int_from_json(&serde_json::json!(2.9)), Some(2));
        assert_eq!(int_from_json(&serde_json::json!(" 12 ")), Some(12));
        assert_eq!(int_from_json(&serde_json::json!("NaN")), None);
        assert_eq!(int_from_json(&serde_json::json!(1e12)), None);
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number("Order", ""), Ok(0));
        assert_eq!(whole_number("Order", " 7 "), Ok(7));
        assert_eq!(whole_number("Order", "-2"), Ok(-2));
        assert_eq!(whole_number("Order", "abc"), Err(FieldError::NotANumber("Order")));
        assert_eq!(whole_number("Order", "1.5"), Err(FieldError::NotANumber("Order")));
    }
}
