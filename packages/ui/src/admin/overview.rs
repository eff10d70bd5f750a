//! Dashboard landing page: collection counts and a health line.

use api::{ApiClient, ApiError, Message, Project, Resource, Service, Skill, Transport};
use dioxus::prelude::*;

const OPERATIONAL: &str = "All modules are currently operational and connected.";
const DISCONNECTED: &str = "Potential API connection issue or empty data.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub projects: usize,
    pub skills: usize,
    pub services: usize,
    pub messages: usize,
    /// The backend answered the messages count with HTTP 401.
    pub token_refused: bool,
}

impl DashboardStats {
    /// No projects and no skills usually means the API is unreachable.
    pub fn looks_disconnected(&self) -> bool {
        self.projects == 0 && self.skills == 0
    }

    pub fn health_line(&self) -> &'static str {
        if self.looks_disconnected() {
            DISCONNECTED
        } else {
            OPERATIONAL
        }
    }
}

/// Count `R`. A failure counts as zero.
async fn count<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    token: Option<&str>,
) -> Result<usize, ApiError> {
    client.list::<R>(token).await.map(|items| items.len()).inspect_err(|e| {
        tracing::warn!("Counting {} failed: {e}", R::PLURAL);
    })
}

/// Fetch every count independently.
pub async fn fetch_stats<T: Transport>(client: &ApiClient<T>, token: Option<&str>) -> DashboardStats {
    let messages = count::<Message, T>(client, token).await;
    DashboardStats {
        projects: count::<Project, T>(client, None).await.unwrap_or(0),
        skills: count::<Skill, T>(client, None).await.unwrap_or(0),
        services: count::<Service, T>(client, None).await.unwrap_or(0),
        token_refused: matches!(messages, Err(ApiError::Unauthorized(_))),
        messages: messages.unwrap_or(0),
    }
}

#[component]
pub fn OverviewPanel(stats: DashboardStats, loading: bool) -> Element {
    let show = |n: usize| if loading { "...".to_string() } else { n.to_string() };
    let warning = !loading && stats.looks_disconnected();
    let indicator = if warning {
        "status-indicator warning"
    } else {
        "status-indicator operational"
    };
    let health = if loading { OPERATIONAL } else { stats.health_line() };

    rsx! {
        div {
            class: "overview-tab",
            header {
                h1 { "Welcome, Admin" }
            }
            section {
                class: "dashboard-content",
                div {
                    class: "stats-grid",
                    div {
                        class: "stat-card",
                        h3 { "Total Projects" }
                        p { {show(stats.projects)} }
                    }
                    div {
                        class: "stat-card",
                        h3 { "Total Skills" }
                        p { {show(stats.skills)} }
                    }
                    div {
                        class: "stat-card",
                        h3 { "Services" }
                        p { {show(stats.services)} }
                    }
                    div {
                        class: "stat-card",
                        h3 { "Inquiries" }
                        p { {show(stats.messages)} }
                    }
                }
                div {
                    class: "recent-activity",
                    h2 { "Dashboard Status" }
                    div {
                        class: "{indicator}",
                        span { class: "dot" }
                        "{health}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiRequest, Method, RawResponse};

    #[test]
    fn test_health_line() {
        let empty = DashboardStats::default();
        assert_eq!(empty.health_line(), "Potential API connection issue or empty data.");

        let healthy = DashboardStats {
            skills: 3,
            ..Default::default()
        };
        assert_eq!(healthy.health_line(), "All modules are currently operational and connected.");
    }

    /// Serves two projects and one skill; services are down and messages
    /// need a token.
    struct Backend;

    impl Transport for Backend {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            assert_eq!(request.method, Method::Get);
            let body = match request.url.rsplit('/').next() {
                Some("projects") => r#"{"success":true,"data":[{"_id":"1"},{"_id":"2"}]}"#,
                Some("skills") => r#"{"success":true,"data":[{"_id":"1","name":"Go"}]}"#,
                Some("contact") if request.bearer.as_deref() == Some("tok") => {
                    r#"{"success":true,"data":[{"_id":"m"}]}"#
                }
                Some("contact") if request.bearer.as_deref() == Some("expired") => {
                    return Ok(RawResponse {
                        status: 401,
                        body: r#"{"success":false,"error":"Token expired"}"#.to_string(),
                    });
                }
                Some("contact") => r#"{"success":false,"error":"Unauthorized"}"#,
                _ => return Err(ApiError::Transport("connection refused".to_string())),
            };
            Ok(RawResponse {
                status: 200,
                body: body.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_failures_count_as_zero() {
        let client = ApiClient::with_transport("http://api.test", Backend);
        let stats = fetch_stats(&client, Some("tok")).await;
        assert_eq!(
            stats,
            DashboardStats {
                projects: 2,
                skills: 1,
                services: 0,
                messages: 1,
                token_refused: false,
            }
        );

        let anonymous = fetch_stats(&client, None).await;
        assert_eq!(anonymous.messages, 0);
        assert!(!anonymous.token_refused);
    }

    #[tokio::test]
    async fn test_refused_token_is_reported() {
        let client = ApiClient::with_transport("http://api.test", Backend);
        let stats = fetch_stats(&client, Some("expired")).await;
        assert_eq!(stats.messages, 0);
        assert!(stats.token_refused);
        assert_eq!(stats.projects, 2);
    }
}
