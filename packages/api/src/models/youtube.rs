use serde::{Deserialize, Serialize};

use super::{lenient_int, required, whole_number, Draft, Editable, Resource};
use crate::error::FieldError;

/// A featured YouTube video.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YoutubeVideo {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    /// Watch URL.
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "lenient_int")]
    pub order: i32,
}

impl Resource for YoutubeVideo {
    const PATH: &'static str = "youtube";
    const LABEL: &'static str = "Video";
    const PLURAL: &'static str = "videos";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Editable for YoutubeVideo {
    type Draft = YoutubeDraft;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct YoutubeDraft {
    pub title: String,
    pub desc: String,
    pub link: String,
    pub thumbnail: String,
    pub order: String,
}

impl Draft for YoutubeDraft {
    type Item = YoutubeVideo;

    fn from_item(item: &YoutubeVideo) -> Self {
        Self {
            title: item.title.clone(),
            desc: item.desc.clone(),
            link: item.link.clone(),
            thumbnail: item.thumbnail.clone(),
            order: item.order.to_string(),
        }
    }

    fn build(&self) -> Result<YoutubeVideo, FieldError> {
        Ok(YoutubeVideo {
            id: None,
            title: required("Title", &self.title)?,
            desc: required("Description", &self.desc)?,
            link: required("Video Link", &self.link)?,
            thumbnail: self.thumbnail.trim().to_string(),
            order: whole_number("Order", &self.order)?,
        })
    }
}
