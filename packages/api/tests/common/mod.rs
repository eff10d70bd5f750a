//! In-memory stand-in for the portfolio backend.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use api::{ApiClient, ApiError, ApiRequest, Body, Method, RawResponse, Transport};
use serde_json::{json, Value};

pub const TOKEN: &str = "valid-token";
/// A token the backend has stopped accepting; answered with HTTP 401.
pub const REVOKED: &str = "revoked-token";

#[derive(Default)]
struct Inner {
    collections: BTreeMap<String, Vec<Value>>,
    next_id: u32,
    requests: Vec<ApiRequest>,
}

/// Accepts `TOKEN` as the only valid bearer, assigns ids and default order on create.
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, path: &str, items: Vec<Value>) {
        self.inner
            .lock()
            .unwrap()
            .collections
            .insert(path.to_string(), items);
    }

    pub fn stored(&self, path: &str) -> Vec<Value> {
        self.inner
            .lock()
            .unwrap()
            .collections
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn client(&self) -> ApiClient<FakeBackend> {
        ApiClient::with_transport("http://backend.test/api", self.clone())
    }
}

fn reply(status: u16, body: Value) -> Result<RawResponse, ApiError> {
    Ok(RawResponse {
        status,
        body: body.to_string(),
    })
}

impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request.clone());

        let path = request
            .url
            .strip_prefix("http://backend.test/api/")
            .unwrap_or_default()
            .to_string();
        let (collection, id) = match path.split_once('/') {
            Some((c, id)) => (c.to_string(), Some(id.to_string())),
            None => (path.clone(), None),
        };
        if request.bearer.as_deref() == Some(REVOKED) {
            return reply(401, json!({"success": false, "error": "Token expired"}));
        }
        let authorized = request.bearer.as_deref() == Some(TOKEN);
        let protected = request.method != Method::Get || collection == "contact";
        if protected && !authorized {
            return reply(200, json!({"success": false, "error": "Unauthorized"}));
        }

        match (request.method, id) {
            (Method::Get, None) => {
                let items = inner.collections.get(&collection).cloned().unwrap_or_default();
                reply(200, json!({"success": true, "data": items}))
            }
            (Method::Post, None) => {
                let Body::Json(mut item) = request.body else {
                    return reply(400, json!({"success": false, "error": "Expected JSON"}));
                };
                inner.next_id += 1;
                let id = format!("id-{}", inner.next_id);
                let items = inner.collections.entry(collection).or_default();
                item["_id"] = json!(id);
                if item.get("order").is_none() {
                    item["order"] = json!(items.len());
                }
                items.push(item.clone());
                reply(201, json!({"success": true, "data": item}))
            }
            (Method::Put, Some(id)) => {
                let Body::Json(update) = request.body else {
                    return reply(400, json!({"success": false, "error": "Expected JSON"}));
                };
                let items = inner.collections.entry(collection).or_default();
                match items.iter_mut().find(|i| i["_id"] == json!(id)) {
                    Some(existing) => {
                        let mut merged = update;
                        merged["_id"] = json!(id);
                        *existing = merged.clone();
                        reply(200, json!({"success": true, "data": merged}))
                    }
                    None => reply(404, json!({"success": false, "error": "Not found"})),
                }
            }
            (Method::Delete, Some(id)) => {
                let items = inner.collections.entry(collection).or_default();
                let before = items.len();
                items.retain(|i| i["_id"] != json!(id));
                if items.len() == before {
                    reply(404, json!({"success": false, "error": "Not found"}))
                } else {
                    reply(200, json!({"success": true}))
                }
            }
            _ => reply(404, json!({"success": false, "error": "No such route"})),
        }
    }
}
