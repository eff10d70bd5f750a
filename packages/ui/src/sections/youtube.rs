use api::YoutubeVideo;
use dioxus::prelude::*;

use super::{use_public_list, SectionFrame, SectionHead};
use crate::reveal::{use_reveal, SectionId};

#[component]
pub fn Youtube() -> Element {
    let videos = use_public_list::<YoutubeVideo>();
    let revealed = use_reveal(SectionId::Youtube);

    rsx! {
        SectionFrame {
            section: SectionId::Youtube,
            class: "youtube-section",
            revealed: revealed(),
            SectionHead { subtitle: "Channel", title: "YouTube" }
            div {
                class: "youtube-grid",
                for (i, video) in videos().into_iter().enumerate() {
                    a {
                        key: "{i}",
                        href: "{video.link}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "youtube-card",
                        style: "--i: {i}",
                        div {
                            class: "youtube-thumb",
                            style: "background-image: url({video.thumbnail})",
                            div {
                                class: "play-btn-box",
                                svg {
                                    xmlns: "http://www.w3.org/2000/svg",
                                    width: "40",
                                    height: "40",
                                    view_box: "0 0 24 24",
                                    fill: "currentColor",
                                    path { d: "M8 5v14l11-7z" }
                                }
                            }
                        }
                        div {
                            class: "youtube-info",
                            h3 { class: "yt-card-title", "{video.title}" }
                            p { class: "yt-card-desc", "{video.desc}" }
                        }
                    }
                }
            }
        }
    }
}
