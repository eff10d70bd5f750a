use serde::{Deserialize, Serialize};

use super::{lenient_int, required, whole_number, Draft, Editable, Resource};
use crate::error::FieldError;

/// Categories offered by the project form and the public filter tabs.
pub const PROJECT_CATEGORIES: [&str; 2] = ["Design", "Development"];

/// A portfolio project card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    /// One of [`PROJECT_CATEGORIES`].
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Image URL, e.g. `/images/project.png`.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_int")]
    pub order: i32,
}

impl Resource for Project {
    const PATH: &'static str = "projects";
    const LABEL: &'static str = "Project";
    const PLURAL: &'static str = "projects";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Editable for Project {
    type Draft = ProjectDraft;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub order: String,
}

impl Draft for ProjectDraft {
    type Item = Project;

    fn from_item(item: &Project) -> Self {
        Self {
            title: item.title.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            link: item.link.clone(),
            order: item.order.to_string(),
        }
    }

    fn build(&self) -> Result<Project, FieldError> {
        Ok(Project {
            id: None,
            title: required("Title", &self.title)?,
            category: required("Category", &self.category)?,
            description: required("Description", &self.description)?,
            image: required("Image URL", &self.image)?,
            link: self.link.trim().to_string(),
            order: whole_number("Order", &self.order)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_record() {
        let project: Project = serde_json::from_str(
            r#"{"_id":"p1","title":"Demo","category":"Design","image":"/x.png","__v":0}"#,
        )
        .unwrap();
        assert_eq!(project.id(), Some("p1"));
        assert_eq!(project.description, "");
        assert_eq!(project.order, 0);
    }

    #[test]
    fn test_null_order_reads_as_zero() {
        let project: Project =
            serde_json::from_str(r#"{"_id":"p2","title":"Legacy","order":null}"#).unwrap();
        assert_eq!(project.order, 0);
        assert_eq!(project.title, "Legacy");
    }

    #[test]
    fn test_payload_omits_missing_id() {
        let draft = ProjectDraft {
            title: "Demo".to_string(),
            category: "Design".to_string(),
            description: "A demo".to_string(),
            image: "/x.png".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(draft.build().unwrap()).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["title"], "Demo");
        assert_eq!(value["order"], 0);
    }

    #[test]
    fn test_missing_required_field() {
        let draft = ProjectDraft {
            title: "Demo".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.build(), Err(FieldError::Required("Category")));
    }

    #[test]
    fn test_edit_roundtrip_keeps_fields() {
        let project = Project {
            id: Some("p1".to_string()),
            title: "Demo".to_string(),
            category: "Development".to_string(),
            description: "Desc".to_string(),
            image: "/x.png".to_string(),
            link: "https://github.com/x".to_string(),
            order: 3,
        };
        let draft = ProjectDraft::from_item(&project);
        assert_eq!(draft.order, "3");
        let rebuilt = draft.build().unwrap();
        assert_eq!(rebuilt.id, None);
        assert_eq!(rebuilt.title, project.title);
        assert_eq!(rebuilt.order, 3);
    }
}
