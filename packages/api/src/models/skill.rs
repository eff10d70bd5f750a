use serde::{Deserialize, Serialize};

use super::{lenient_int, required, whole_number, Draft, Editable, Resource};
use crate::error::FieldError;

/// A skill shown in the marquee.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Proficiency, 0 to 100.
    #[serde(default, deserialize_with = "lenient_int")]
    pub level: i32,
    /// Icon image URL, may be empty.
    #[serde(default)]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient_int")]
    pub order: i32,
}

impl Resource for Skill {
    const PATH: &'static str = "skills";
    const LABEL: &'static str = "Skill";
    const PLURAL: &'static str = "skills";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Editable for Skill {
    type Draft = SkillDraft;
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillDraft {
    pub name: String,
    pub level: String,
    pub icon: String,
    pub order: String,
}

impl Default for SkillDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: "80".to_string(),
            icon: String::new(),
            order: "0".to_string(),
        }
    }
}

impl Draft for SkillDraft {
    type Item = Skill;

    fn from_item(item: &Skill) -> Self {
        Self {
            name: item.name.clone(),
            level: item.level.to_string(),
            icon: item.icon.clone(),
            order: item.order.to_string(),
        }
    }

    fn build(&self) -> Result<Skill, FieldError> {
        let level = whole_number("Level", &self.level)?.clamp(0, 100);
        Ok(Skill {
            id: None,
            name: required("Name", &self.name)?,
            level,
            icon: self.icon.trim().to_string(),
            order: whole_number("Order", &self.order)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_level() {
        assert_eq!(SkillDraft::default().level, "80");
    }

    #[test]
    fn test_level_is_clamped() {
        let mut draft = SkillDraft {
            name: "Go".to_string(),
            level: "150".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.build().unwrap().level, 100);

        draft.level = "-5".to_string();
        assert_eq!(draft.build().unwrap().level, 0);
    }

    #[test]
    fn test_non_numeric_level_is_rejected() {
        let draft = SkillDraft {
            name: "Go".to_string(),
            level: "lots".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.build(), Err(FieldError::NotANumber("Level")));
    }

    #[test]
    fn test_deserialize_scenario_record() {
        let skill: Skill =
            serde_json::from_str(r#"{"_id":"1","name":"Go","level":90,"order":0}"#).unwrap();
        assert_eq!(skill.id(), Some("1"));
        assert_eq!(skill.level, 90);
        assert!(skill.icon.is_empty());
    }
}
