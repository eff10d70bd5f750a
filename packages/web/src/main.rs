use dioxus::prelude::*;

use store::SiteConfig;
use ui::admin::{
    ManageAbout, ManageEducation, ManageMessages, ManageProjects, ManageServices, ManageSkills,
    ManageYoutube,
};
use ui::sections::{About, Contact, Education, Home, MyWork, Services, Skills, Youtube};
use ui::{use_reveal_bus_provider, use_scroll_provider, Navbar, Preloader, SessionProvider};
use views::{AdminGuard, DashboardLayout, Login, NotFound, Overview, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/admin/login")]
    Login {},
    #[route("/admin/register")]
    Register {},
    #[nest("/admin/dashboard")]
        #[layout(AdminGuard)]
        #[layout(DashboardLayout)]
            #[route("/")]
            Overview {},
            #[route("/messages")]
            ManageMessages {},
            #[route("/about")]
            ManageAbout {},
            #[route("/education")]
            ManageEducation {},
            #[route("/projects")]
            ManageProjects {},
            #[route("/skills")]
            ManageSkills {},
            #[route("/services")]
            ManageServices {},
            #[route("/youtube")]
            ManageYoutube {},
        #[end_layout]
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Site configuration embedded at build time.
const PORTFOLIO_TOML: &str = include_str!("../portfolio.toml");

/// The embedded config, with `PORTFOLIO_API_URL` (set at compile time)
/// overriding the API base URL.
fn site_config() -> SiteConfig {
    SiteConfig::from_toml_or_default(PORTFOLIO_TOML).with_base_url(option_env!("PORTFOLIO_API_URL"))
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(site_config);
    let mut loading = use_signal(|| true);
    use_scroll_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            if loading() {
                Preloader { on_complete: move |_| loading.set(false) }
            }
            div {
                class: if loading() { "app-root loading" } else { "app-root" },
                Router::<Route> {}
            }
        }
    }
}

/// The public one-page site. Owns the reveal bus its sections and navbar share.
#[component]
fn Landing() -> Element {
    use_reveal_bus_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::SECTIONS_CSS }
        main {
            class: "snap-wrapper",
            Home {}
            About {}
            Education {}
            Skills {}
            MyWork {}
            Youtube {}
            Services {}
            Contact {}
        }
        Navbar {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml(PORTFOLIO_TOML).unwrap();
        assert_eq!(config.contact.info.len(), 4);
        assert_eq!(config.contact.social.len(), 5);
        assert_eq!(config.site.default_roles.len(), 3);
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(Route::ManageMessages {}.to_string(), "/admin/dashboard/messages");
        assert_eq!(
            "/admin/dashboard/youtube".parse::<Route>().ok(),
            Some(Route::ManageYoutube {})
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert!(matches!(
            "/nowhere/at-all".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
