//! # REST client for the portfolio backend
//!
//! Every call follows one convention:
//!
//! 1. URL = `base_url + "/" + resource [+ "/" + id]`
//! 2. method: `GET` list, `POST` create, `PUT` update by id, `DELETE` by id
//! 3. bearer token attached when one is available; writes refuse to go out
//!    without one ([`ApiError::NotAuthenticated`])
//! 4. JSON body for writes, JSON [`Envelope`] back
//!
//! There is no retry and no timeout. A failure is reported once and the
//! caller decides what to show.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::SiteConfig;

use crate::error::ApiError;
use crate::models::{AboutProfile, ContactForm, Credentials, Resource};
use crate::transport::{ApiRequest, Body, FilePart, HttpTransport, Method, RawResponse, Transport};

/// The `{success, data, error}` wrapper every endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Some login handlers put the token next to `data` instead of inside it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            token: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            token: None,
        }
    }
}

/// Turn a raw response into a successful envelope or the matching error.
pub fn decode_envelope(raw: &RawResponse) -> Result<Envelope<Value>, ApiError> {
    let parsed = serde_json::from_str::<Envelope<Value>>(&raw.body);

    if raw.status == 401 {
        let msg = parsed
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| "Unauthorized".to_string());
        return Err(ApiError::Unauthorized(msg));
    }

    let envelope = match parsed {
        Ok(envelope) => envelope,
        Err(_) if raw.status >= 400 => return Err(ApiError::Rejected(None)),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    if !envelope.success {
        return Err(ApiError::Rejected(envelope.error));
    }
    Ok(envelope)
}

fn data_as<D: DeserializeOwned>(envelope: Envelope<Value>) -> Result<Option<D>, ApiError> {
    match envelope.data {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
    }
}

fn to_body<S: Serialize>(payload: &S) -> Result<Body, ApiError> {
    serde_json::to_value(payload)
        .map(Body::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Require a non-empty token before anything is sent.
fn authorize(token: Option<&str>) -> Result<&str, ApiError> {
    token
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::NotAuthenticated)
}

/// Client for the portfolio REST API.
#[derive(Clone, Debug)]
pub struct ApiClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `base_url/path[/id]`
    pub fn url(&self, path: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, path, id),
            None => format!("{}/{}", self.base_url, path),
        }
    }

    async fn call(
        &self,
        method: Method,
        url: String,
        bearer: Option<&str>,
        body: Body,
    ) -> Result<Envelope<Value>, ApiError> {
        tracing::debug!("{method:?} {url}");
        let request = ApiRequest {
            method,
            url,
            bearer: bearer.map(str::to_string),
            body,
        };
        let url = request.url.clone();
        let raw = self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!("{method:?} {url} failed: {e}");
        })?;
        decode_envelope(&raw)
    }

    /// Fetch a whole collection. Protected collections need a token.
    ///
    /// A record that cannot be read is logged and left out, so one bad entry
    /// does not hide the rest of the collection.
    pub async fn list<R: Resource>(&self, token: Option<&str>) -> Result<Vec<R>, ApiError> {
        let bearer = if R::PROTECTED {
            Some(authorize(token)?)
        } else {
            token
        };
        let envelope = self
            .call(Method::Get, self.url(R::PATH, None), bearer, Body::Empty)
            .await?;
        let records = data_as::<Vec<Value>>(envelope)?.unwrap_or_default();
        Ok(records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<R>(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Skipping unreadable {} record: {e}", R::LABEL);
                    None
                }
            })
            .collect())
    }

    pub async fn create<R: Resource>(&self, token: Option<&str>, item: &R) -> Result<(), ApiError> {
        let token = authorize(token)?;
        let body = to_body(item)?;
        self.call(Method::Post, self.url(R::PATH, None), Some(token), body)
            .await?;
        Ok(())
    }

    pub async fn update<R: Resource>(
        &self,
        token: Option<&str>,
        id: &str,
        item: &R,
    ) -> Result<(), ApiError> {
        let token = authorize(token)?;
        let body = to_body(item)?;
        self.call(Method::Put, self.url(R::PATH, Some(id)), Some(token), body)
            .await?;
        Ok(())
    }

    pub async fn delete<R: Resource>(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        let token = authorize(token)?;
        self.call(Method::Delete, self.url(R::PATH, Some(id)), Some(token), Body::Empty)
            .await?;
        Ok(())
    }

    /// `GET /about`. `Ok(None)` when no profile has been saved yet.
    pub async fn fetch_about(&self) -> Result<Option<AboutProfile>, ApiError> {
        let envelope = self
            .call(Method::Get, self.url("about", None), None, Body::Empty)
            .await?;
        data_as(envelope)
    }

    /// Upsert the About singleton with `POST /about`.
    pub async fn save_about(&self, token: Option<&str>, profile: &AboutProfile) -> Result<(), ApiError> {
        let token = authorize(token)?;
        let body = to_body(profile)?;
        self.call(Method::Post, self.url("about", None), Some(token), body)
            .await?;
        Ok(())
    }

    /// Upload a file, returning the URL the backend stored it under.
    pub async fn upload(&self, token: Option<&str>, file: FilePart) -> Result<String, ApiError> {
        let token = authorize(token)?;
        let envelope = self
            .call(Method::Post, self.url("upload", None), Some(token), Body::File(file))
            .await?;
        data_as::<String>(envelope)?
            .ok_or_else(|| ApiError::Decode("upload response carried no URL".to_string()))
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let body = to_body(credentials)?;
        let envelope = self
            .call(Method::Post, self.url("admin/login", None), None, body)
            .await?;

        let from_data = match &envelope.data {
            Some(Value::String(token)) => Some(token.clone()),
            Some(Value::Object(fields)) => fields
                .get("token")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        };
        from_data
            .or(envelope.token)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Decode("login response carried no token".to_string()))
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let body = to_body(credentials)?;
        self.call(Method::Post, self.url("admin/register", None), None, body)
            .await?;
        Ok(())
    }

    /// Anonymous contact form submission.
    pub async fn send_message(&self, form: &ContactForm) -> Result<(), ApiError> {
        let body = to_body(form)?;
        self.call(Method::Post, self.url("contact", None), None, body)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Message, Project, Skill, TimelineEntry};
    use std::sync::{Arc, Mutex};

    /// Replies with canned responses in order and records what was sent.
    #[derive(Clone, Default)]
    struct Scripted {
        replies: Arc<Mutex<Vec<Result<RawResponse, ApiError>>>>,
        sent: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl Scripted {
        fn reply(status: u16, body: &str) -> Self {
            let s = Self::default();
            s.replies.lock().unwrap().push(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
            s
        }

        fn failing(err: ApiError) -> Self {
            let s = Self::default();
            s.replies.lock().unwrap().push(Err(err));
            s
        }

        fn sent(&self) -> Vec<ApiRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transport for Scripted {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.sent.lock().unwrap().push(request);
            self.replies.lock().unwrap().remove(0)
        }
    }

    fn client(t: &Scripted) -> ApiClient<Scripted> {
        ApiClient::with_transport("http://api.test/api/", t.clone())
    }

    #[test]
    fn test_url_building() {
        let c = client(&Scripted::default());
        assert_eq!(c.base_url(), "http://api.test/api");
        assert_eq!(c.url("projects", None), "http://api.test/api/projects");
        assert_eq!(c.url("projects", Some("42")), "http://api.test/api/projects/42");
    }

    #[tokio::test]
    async fn test_list_public_collection() {
        let t = Scripted::reply(
            200,
            r#"{"success":true,"data":[{"_id":"1","name":"Go","level":90,"order":0}]}"#,
        );
        let skills: Vec<Skill> = client(&t).list(None).await.unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Go");

        let sent = t.sent();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://api.test/api/skills");
        assert_eq!(sent[0].bearer, None);
    }

    #[tokio::test]
    async fn test_list_attaches_token_when_present() {
        let t = Scripted::reply(200, r#"{"success":true,"data":[]}"#);
        let _: Vec<Project> = client(&t).list(Some("tok")).await.unwrap();
        assert_eq!(t.sent()[0].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_missing_data_is_empty_list() {
        let t = Scripted::reply(200, r#"{"success":true}"#);
        let projects: Vec<Project> = client(&t).list(None).await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_protected_list_without_token_sends_nothing() {
        let t = Scripted::default();
        let result: Result<Vec<Message>, _> = client(&t).list(None).await;
        assert_eq!(result, Err(ApiError::NotAuthenticated));
        assert!(t.sent().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_carries_server_text() {
        let t = Scripted::reply(200, r#"{"success":false,"error":"Title is taken"}"#);
        let result = client(&t).create(Some("tok"), &Project::default()).await;
        assert_eq!(result, Err(ApiError::Rejected(Some("Title is taken".to_string()))));
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let t = Scripted::reply(401, r#"{"success":false,"error":"Unauthorized"}"#);
        let result: Result<Vec<Message>, _> = client(&t).list(Some("stale")).await;
        assert_eq!(result, Err(ApiError::Unauthorized("Unauthorized".to_string())));
    }

    #[tokio::test]
    async fn test_server_error_page_is_a_rejection() {
        let t = Scripted::reply(502, "<html>Bad Gateway</html>");
        let result = client(&t).delete::<Project>(Some("tok"), "1").await;
        assert_eq!(result, Err(ApiError::Rejected(None)));
    }

    #[tokio::test]
    async fn test_garbage_success_body_is_decode_error() {
        let t = Scripted::reply(200, "not json");
        let result: Result<Vec<Project>, _> = client(&t).list(None).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_legacy_records_do_not_hide_the_collection() {
        let t = Scripted::reply(
            200,
            r#"{"success":true,"data":[{"_id":"1","order":0},{"_id":"2","order":null},{"_id":"3","title":42}]}"#,
        );
        let projects: Vec<Project> = client(&t).list(None).await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].id(), Some("2"));
        assert_eq!(projects[1].order, 0);
    }

    #[tokio::test]
    async fn test_unknown_entry_type_still_lists() {
        let t = Scripted::reply(
            200,
            r#"{"success":true,"data":[{"_id":"e1","type":"internship"},{"_id":"e2","type":"experience"}]}"#,
        );
        let entries: Vec<TimelineEntry> = client(&t).list(None).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::Education);
        assert_eq!(entries[1].kind, EntryKind::Experience);
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let t = Scripted::failing(ApiError::Transport("offline".to_string()));
        let result: Result<Vec<Project>, _> = client(&t).list(None).await;
        assert_eq!(result, Err(ApiError::Transport("offline".to_string())));
    }

    #[tokio::test]
    async fn test_update_and_delete_are_keyed_by_id() {
        let t = Scripted::reply(200, r#"{"success":true}"#);
        t.replies.lock().unwrap().push(Ok(RawResponse {
            status: 200,
            body: r#"{"success":true}"#.to_string(),
        }));
        let c = client(&t);
        c.update(Some("tok"), "p9", &Project::default()).await.unwrap();
        c.delete::<Project>(Some("tok"), "p9").await.unwrap();

        let sent = t.sent();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "http://api.test/api/projects/p9");
        assert!(matches!(sent[0].body, Body::Json(_)));
        assert_eq!(sent[1].method, Method::Delete);
        assert_eq!(sent[1].url, "http://api.test/api/projects/p9");
        assert_eq!(sent[1].body, Body::Empty);
    }

    #[tokio::test]
    async fn test_login_token_shapes() {
        for body in [
            r#"{"success":true,"data":"t1"}"#,
            r#"{"success":true,"data":{"token":"t1"}}"#,
            r#"{"success":true,"token":"t1"}"#,
        ] {
            let t = Scripted::reply(200, body);
            let token = client(&t)
                .login(&Credentials::new("admin", "pw"))
                .await
                .unwrap();
            assert_eq!(token, "t1", "body: {body}");
            assert_eq!(t.sent()[0].url, "http://api.test/api/admin/login");
            assert_eq!(t.sent()[0].bearer, None);
        }
    }

    #[tokio::test]
    async fn test_login_without_token_is_error() {
        let t = Scripted::reply(200, r#"{"success":true,"data":{}}"#);
        let result = client(&t).login(&Credentials::new("admin", "pw")).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_about_absent() {
        let t = Scripted::reply(200, r#"{"success":true,"data":null}"#);
        assert_eq!(client(&t).fetch_about().await, Ok(None));
    }

    #[tokio::test]
    async fn test_upload_returns_url() {
        let t = Scripted::reply(200, r#"{"success":true,"data":"/uploads/cv.pdf"}"#);
        let file = FilePart {
            field: "file".to_string(),
            file_name: "cv.pdf".to_string(),
            mime: "application/pdf".to_string(),
            bytes: vec![1, 2, 3],
        };
        let url = client(&t).upload(Some("tok"), file).await.unwrap();
        assert_eq!(url, "/uploads/cv.pdf");
        assert!(matches!(t.sent()[0].body, Body::File(_)));
    }

    #[tokio::test]
    async fn test_contact_submission_is_anonymous() {
        let t = Scripted::reply(200, r#"{"success":true}"#);
        client(&t)
            .send_message(&ContactForm {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
            })
            .await
            .unwrap();
        let sent = t.sent();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://api.test/api/contact");
        assert_eq!(sent[0].bearer, None);
    }
}
