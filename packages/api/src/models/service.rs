use serde::{Deserialize, Serialize};

use super::{lenient_int, required, whole_number, Draft, Editable, Resource};
use crate::error::FieldError;

/// An offered service card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Usually a single emoji.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, deserialize_with = "lenient_int")]
    pub order: i32,
}

impl Resource for Service {
    const PATH: &'static str = "services";
    const LABEL: &'static str = "Service";
    const PLURAL: &'static str = "services";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Editable for Service {
    type Draft = ServiceDraft;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceDraft {
    pub title: String,
    pub icon: String,
    pub desc: String,
    pub order: String,
}

impl Draft for ServiceDraft {
    type Item = Service;

    fn from_item(item: &Service) -> Self {
        Self {
            title: item.title.clone(),
            icon: item.icon.clone(),
            desc: item.desc.clone(),
            order: item.order.to_string(),
        }
    }

    fn build(&self) -> Result<Service, FieldError> {
        Ok(Service {
            id: None,
            title: required("Title", &self.title)?,
            icon: self.icon.trim().to_string(),
            desc: required("Description", &self.desc)?,
            order: whole_number("Order", &self.order)?,
        })
    }
}
