use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{lenient_int, required, whole_number, Draft, Editable, Resource};
use crate::error::FieldError;

/// Which column of the education section an entry belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Education,
    Experience,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Education => "education",
            EntryKind::Experience => "experience",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "experience" => EntryKind::Experience,
            _ => EntryKind::Education,
        }
    }
}

/// Reads `type`, filing anything but `"experience"` under education.
fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EntryKind, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => EntryKind::from_str_lossy(&s),
        _ => EntryKind::default(),
    })
}

/// An education or work experience entry, served from `/education`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form period, e.g. "2019 - 2022".
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: EntryKind,
    #[serde(default, deserialize_with = "lenient_int")]
    pub order: i32,
}

impl Resource for TimelineEntry {
    const PATH: &'static str = "education";
    const LABEL: &'static str = "Entry";
    const PLURAL: &'static str = "education entries";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Editable for TimelineEntry {
    type Draft = TimelineDraft;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineDraft {
    pub year: String,
    pub title: String,
    pub institution: String,
    pub desc: String,
    pub kind: EntryKind,
    pub order: String,
}

impl Draft for TimelineDraft {
    type Item = TimelineEntry;

    fn from_item(item: &TimelineEntry) -> Self {
        Self {
            year: item.year.clone(),
            title: item.title.clone(),
            institution: item.institution.clone(),
            desc: item.desc.clone(),
            kind: item.kind,
            order: item.order.to_string(),
        }
    }

    fn build(&self) -> Result<TimelineEntry, FieldError> {
        Ok(TimelineEntry {
            id: None,
            year: required("Year", &self.year)?,
            title: required("Title", &self.title)?,
            institution: required("Institution", &self.institution)?,
            desc: required("Description", &self.desc)?,
            kind: self.kind,
            order: whole_number("Order", &self.order)?,
        })
    }
}

/// Split entries into (education, experience), keeping server order within each.
pub fn split_timeline(entries: &[TimelineEntry]) -> (Vec<TimelineEntry>, Vec<TimelineEntry>) {
    entries
        .iter()
        .cloned()
        .partition(|e| e.kind == EntryKind::Education)
}
