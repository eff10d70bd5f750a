//! # Site configuration: `portfolio.toml`
//!
//! Defines the TOML file the web binary embeds at build time
//! (filename: [`SiteConfig::filename`] = `"portfolio.toml"`). It tells the
//! client where the content API lives and carries the copy that is not served
//! by the API.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [site]
//! owner = "Sivakumar"
//! default_roles = ["Full Stack Developer", "MCA Student", "UI/UX Designer"]
//!
//! [[contact.info]]
//! label = "Email Address"
//! value = "me@example.com"
//! icon = "📧"
//!
//! [[contact.social]]
//! name = "GitHub"
//! url = "https://github.com/"
//! icon = "/social/github.png"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SiteConfig`] | Top-level config. TOML (de)serialisation, API URL override, canonical filename. |
//! | [`ApiConfig`] | Base URL of the REST backend. |
//! | [`SiteCopy`] | Owner name, fallback typewriter roles, fallback hero description. |
//! | [`ContactConfig`] | Contact info boxes and social links for the contact section. |
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteCopy,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Where the content API lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://example.com/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Copy used when the API has nothing better to offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteCopy {
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Roles cycled by the hero typewriter when the About profile has none.
    #[serde(default = "default_roles")]
    pub default_roles: Vec<String>,
    #[serde(default = "default_hero_description")]
    pub hero_description: String,
}

fn default_owner() -> String {
    "Sivakumar".to_string()
}

fn default_roles() -> Vec<String> {
    vec![
        "Full Stack Developer".to_string(),
        "MCA Student".to_string(),
        "UI/UX Designer".to_string(),
    ]
}

fn default_hero_description() -> String {
    "I am a passionate MCA student and Full Stack Developer specialized in building modern, scalable, and user-centric web applications.".to_string()
}

impl Default for SiteCopy {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            default_roles: default_roles(),
            hero_description: default_hero_description(),
        }
    }
}

/// Contact section content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub info: Vec<ContactInfo>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Image path for the link icon.
    #[serde(default)]
    pub icon: String,
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `s`, logging and falling back to the default on malformed input.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Invalid {}: {e}", Self::filename());
                Self::default()
            }
        }
    }

    /// Builder method to replace the API base URL (ignored when blank).
    pub fn with_base_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}
