use dioxus::prelude::*;

use ui::admin::{fetch_stats, DashboardStats, OverviewPanel};
use ui::{current_token, use_api, use_session, Latest, LogoutButton};

use crate::Route;

/// Counts shared by the sidebar badge and the overview page.
#[derive(Clone, Copy)]
struct StatsContext {
    stats: Signal<DashboardStats>,
    loading: Signal<bool>,
}

/// Sidebar links in display order.
fn nav_links() -> [(Route, &'static str); 8] {
    [
        (Route::Overview {}, "Overview"),
        (Route::ManageMessages {}, "Manage Messages"),
        (Route::ManageAbout {}, "Manage About"),
        (Route::ManageEducation {}, "Manage Education"),
        (Route::ManageProjects {}, "Manage Projects"),
        (Route::ManageSkills {}, "Manage Skills"),
        (Route::ManageServices {}, "Manage Services"),
        (Route::ManageYoutube {}, "Manage YouTube"),
    ]
}

#[component]
pub fn DashboardLayout() -> Element {
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();
    let mut sidebar_open = use_signal(|| false);

    let mut stats = use_signal(DashboardStats::default);
    let mut loading = use_signal(|| true);
    let mut latest = use_signal(Latest::default);
    use_context_provider(|| StatsContext { stats, loading });

    // Refresh the counts whenever the operator switches pages. Only the
    // newest refresh may publish its counts.
    let route = use_route::<Route>();
    use_effect(use_reactive(&route, move |route| {
        tracing::debug!("Refreshing dashboard stats for {route}");
        let round = latest.write().begin();
        spawn(async move {
            let client = api.peek().clone();
            let token = current_token(session);
            let fresh = fetch_stats(&client, token.as_deref()).await;
            if !latest.peek().is_current(round) {
                return;
            }
            if fresh.token_refused {
                tracing::warn!("Session refused while counting messages");
                session.write().logout();
            }
            stats.set(fresh);
            loading.set(false);
        });
    }));

    let messages = stats().messages;
    let sidebar_class = if sidebar_open() {
        "admin-sidebar open"
    } else {
        "admin-sidebar"
    };
    let overlay_class = if sidebar_open() {
        "sidebar-overlay open"
    } else {
        "sidebar-overlay"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: ui::ADMIN_CSS }
        div {
            class: "admin-shell",
            div {
                class: "{overlay_class}",
                onclick: move |_| sidebar_open.set(false),
            }
            button {
                class: "admin-mobile-toggle",
                onclick: move |_| sidebar_open.set(!sidebar_open()),
                span {}
                span {}
                span {}
            }
            aside {
                class: "{sidebar_class}",
                div {
                    class: "sidebar-header brand",
                    h2 { "Admin Panel" }
                }
                nav {
                    class: "admin-nav",
                    for (target, label) in nav_links() {
                        Link {
                            key: "{label}",
                            to: target.clone(),
                            active_class: "active",
                            onclick: move |_| sidebar_open.set(false),
                            "{label}"
                            if target == (Route::ManageMessages {}) && messages > 0 {
                                span { class: "nav-badge", "{messages}" }
                            }
                        }
                    }
                }
                LogoutButton {
                    class: "btn outline",
                    on_logout: move |_| {
                        nav.push(Route::Login {});
                    },
                }
            }
            main {
                class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Dashboard index page.
#[component]
pub fn Overview() -> Element {
    let ctx = use_context::<StatsContext>();

    rsx! {
        OverviewPanel { stats: (ctx.stats)(), loading: (ctx.loading)() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dashboard_page_has_a_link() {
        let links = nav_links();
        assert_eq!(links[0].0, Route::Overview {});
        assert!(links
            .iter()
            .all(|(route, _)| route.to_string().starts_with("/admin/dashboard")));
        assert!(links.iter().any(|(_, label)| *label == "Manage YouTube"));
    }
}
