//! # CRUD panel state machine
//!
//! Every admin page follows the same contract, split into two halves so the
//! read-only Messages page can use just the first:
//!
//! - [`CollectionState`] mirrors one backend collection. Loads replace the list
//!   wholesale. Deletes go through an explicit confirmation step.
//! - [`EditorState`] holds the form draft and, while editing, the id of the
//!   item being edited. [`EditorState::prepare`] decides between create and
//!   update.
//!
//! The states are plain data held in a [`StateSlot`]. The async drivers
//! [`load_collection`], [`submit_draft`] and [`delete_pending`] run one
//! operation against an [`ApiClient`], awaiting each mutation before any
//! reload. Every outcome is reported as one [`StatusLine`].

use crate::client::ApiClient;
use crate::error::{ApiError, FieldError};
use crate::models::{Draft, Resource};
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    /// An error that only a fresh login can fix.
    SignInRequired,
}

/// The one human-readable line a panel shows after an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Status for a failed call. Auth failures keep the server's text but are
    /// flagged so the panel can offer a way back to the login page.
    pub fn failure(err: &ApiError, fallback: &str, network: &str) -> Self {
        Self::for_error(err, err.describe(fallback, network))
    }

    /// Error line with custom text, still flagged when `err` needs a login.
    pub fn for_error(err: &ApiError, text: impl Into<String>) -> Self {
        let kind = if err.needs_sign_in() {
            StatusKind::SignInRequired
        } else {
            StatusKind::Error
        };
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind != StatusKind::Success
    }

    pub fn needs_sign_in(&self) -> bool {
        self.kind == StatusKind::SignInRequired
    }
}

/// In-memory mirror of one collection.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState<R> {
    pub items: Vec<R>,
    pub loading: bool,
    /// Id awaiting the operator's delete confirmation.
    pub pending_delete: Option<String>,
    pub status: Option<StatusLine>,
    /// Whether the last load failed, which is what offers "Retry Connection".
    pub load_failed: bool,
}

impl<R> Default for CollectionState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            pending_delete: None,
            status: None,
            load_failed: false,
        }
    }
}

impl<R: Resource> CollectionState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_load(&mut self) {
        self.loading = true;
    }

    /// Manual retry: forget the previous error before loading again.
    pub fn retry(&mut self) {
        self.status = None;
        self.load_failed = false;
        self.start_load();
    }

    pub fn finish_load(&mut self, result: Result<Vec<R>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.load_failed = false;
            }
            Err(e) => {
                tracing::warn!("Loading {} failed: {e}", R::PLURAL);
                self.items.clear();
                self.load_failed = true;
                self.status = Some(StatusLine::failure(
                    &e,
                    &format!("Failed to load {}.", R::PLURAL),
                    &format!("Network error. Could not load {}.", R::PLURAL),
                ));
            }
        }
    }

    /// First half of a delete: remember the id and wait for confirmation.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    /// Operator said no. Nothing changes.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Operator said yes. Returns the id to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Apply the outcome of `DELETE`. On success the item is removed locally.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.items.retain(|item| item.id() != Some(id));
                self.status = Some(StatusLine::success(format!(
                    "{} deleted successfully!",
                    R::LABEL
                )));
                true
            }
            Err(e) => {
                let label = R::LABEL.to_lowercase();
                self.status = Some(StatusLine::failure(
                    &e,
                    &format!("Failed to delete {label}."),
                    &format!("Network error while deleting {label}."),
                ));
                false
            }
        }
    }

    pub fn set_status(&mut self, status: StatusLine) {
        self.status = Some(status);
    }
}

/// What submitting the current draft will do.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<R> {
    Create(R),
    Update { id: String, item: R },
}

impl<R: Resource> Submission<R> {
    pub fn verb(&self) -> &'static str {
        match self {
            Submission::Create(_) => "added",
            Submission::Update { .. } => "updated",
        }
    }

    /// `POST /<resource>` or `PUT /<resource>/<id>`.
    pub async fn send<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        match self {
            Submission::Create(item) => client.create(token, item).await,
            Submission::Update { id, item } => client.update(token, id, item).await,
        }
    }
}

/// Form draft plus edit mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState<D> {
    pub draft: D,
    /// Id of the item being edited; `None` while creating.
    pub editing: Option<String>,
    pub saving: bool,
}

impl<D: Draft> EditorState<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Load `item` into the form. Items without an id cannot be edited.
    pub fn begin_edit(&mut self, item: &D::Item) {
        if let Some(id) = item.id() {
            self.editing = Some(id.to_string());
            self.draft = D::from_item(item);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = D::default();
    }

    /// Validate the draft and pick the create or update path.
    pub fn prepare(&self) -> Result<Submission<D::Item>, FieldError> {
        let item = self.draft.build()?;
        Ok(match &self.editing {
            Some(id) => Submission::Update {
                id: id.clone(),
                item,
            },
            None => Submission::Create(item),
        })
    }

    /// Apply the outcome of a submission. Success clears the form and leaves
    /// edit mode; failure keeps the draft so the operator can fix and resend.
    pub fn finish(
        &mut self,
        submission: &Submission<D::Item>,
        result: Result<(), ApiError>,
    ) -> StatusLine {
        self.saving = false;
        let label = <D::Item as Resource>::LABEL;
        match result {
            Ok(()) => {
                self.cancel_edit();
                StatusLine::success(format!("{label} {} successfully!", submission.verb()))
            }
            Err(e) => {
                let action = match submission {
                    Submission::Create(_) => "add",
                    Submission::Update { .. } => "update",
                };
                let lower = label.to_lowercase();
                StatusLine::failure(
                    &e,
                    &format!("Failed to {action} {lower}."),
                    &format!("Network error while saving {lower}."),
                )
            }
        }
    }
}

/// Somewhere panel state lives while requests are in flight. `update` only
/// borrows the state for the duration of `f`, never across an await.
pub trait StateSlot<S> {
    fn update<T>(&mut self, f: impl FnOnce(&mut S) -> T) -> T;
}

impl<R> StateSlot<CollectionState<R>> for CollectionState<R> {
    fn update<T>(&mut self, f: impl FnOnce(&mut CollectionState<R>) -> T) -> T {
        f(self)
    }
}

impl<D> StateSlot<EditorState<D>> for EditorState<D> {
    fn update<T>(&mut self, f: impl FnOnce(&mut EditorState<D>) -> T) -> T {
        f(self)
    }
}

/// Fetch the collection and replace the local list. Returns the failure line
/// when the load failed.
pub async fn load_collection<R, T, L>(
    client: &ApiClient<T>,
    token: Option<&str>,
    list: &mut L,
) -> Option<StatusLine>
where
    R: Resource,
    T: Transport,
    L: StateSlot<CollectionState<R>>,
{
    list.update(|state| state.start_load());
    let result = client.list::<R>(token).await;
    list.update(|state| {
        state.finish_load(result);
        state.status.clone().filter(|_| state.load_failed)
    })
}

/// Validate and send the draft, reloading the list only after a successful
/// response. `None` when a submission is already in flight.
pub async fn submit_draft<D, T, E, L>(
    client: &ApiClient<T>,
    token: Option<&str>,
    editor: &mut E,
    list: &mut L,
) -> Option<StatusLine>
where
    D: Draft,
    T: Transport,
    E: StateSlot<EditorState<D>>,
    L: StateSlot<CollectionState<D::Item>>,
{
    let prepared = editor.update(|state| {
        if state.saving {
            return None;
        }
        let prepared = state.prepare();
        state.saving = prepared.is_ok();
        Some(prepared)
    })?;
    let submission = match prepared {
        Ok(submission) => submission,
        Err(e) => {
            let status = StatusLine::error(e.to_string());
            list.update(|state| state.set_status(status.clone()));
            return Some(status);
        }
    };

    let result = submission.send(client, token).await;
    let ok = result.is_ok();
    let status = editor.update(|state| state.finish(&submission, result));
    list.update(|state| state.set_status(status.clone()));
    if ok {
        load_collection::<D::Item, T, L>(client, token, list).await;
    }
    Some(status)
}

/// Delete the item awaiting confirmation. With `reload`, a successful delete
/// is followed by a fresh load; otherwise the local removal stands. `None`
/// when nothing was awaiting confirmation.
pub async fn delete_pending<R, T, L>(
    client: &ApiClient<T>,
    token: Option<&str>,
    list: &mut L,
    reload: bool,
) -> Option<StatusLine>
where
    R: Resource,
    T: Transport,
    L: StateSlot<CollectionState<R>>,
{
    let id = list.update(|state| state.confirm_delete())?;
    let result = client.delete::<R>(token, &id).await;
    let (deleted, status) = list.update(|state| {
        let deleted = state.finish_delete(&id, result);
        (deleted, state.status.clone())
    });
    if deleted && reload {
        load_collection::<R, T, L>(client, token, list).await;
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Message, Project, ProjectDraft};

    fn project(id: &str, title: &str) -> Project {
        Project {
            id: Some(id.to_string()),
            title: title.to_string(),
            category: "Design".to_string(),
            description: "d".to_string(),
            image: "/x.png".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_replaces_list() {
        let mut state = CollectionState::<Project>::new();
        assert!(state.loading);
        state.finish_load(Ok(vec![project("1", "A"), project("2", "B")]));
        assert_eq!(state.items.len(), 2);
        state.finish_load(Ok(vec![project("3", "C")]));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "C");
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_load_empties_list() {
        let mut state = CollectionState::<Project>::new();
        state.finish_load(Ok(vec![project("1", "A")]));
        state.finish_load(Err(ApiError::Transport("offline".to_string())));
        assert!(state.items.is_empty());
        assert!(state.load_failed);
        assert_eq!(
            state.status,
            Some(StatusLine::error("Network error. Could not load projects."))
        );
    }

    #[test]
    fn test_unauthorized_messages_show_server_text() {
        let mut state = CollectionState::<Message>::new();
        state.finish_load(Err(ApiError::Rejected(Some("Unauthorized".to_string()))));
        assert!(state.items.is_empty());
        assert!(state.load_failed);
        assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some("Unauthorized"));

        state.retry();
        assert!(state.status.is_none());
        assert!(!state.load_failed);
        assert!(state.loading);
    }

    #[test]
    fn test_http_401_asks_for_sign_in() {
        let mut state = CollectionState::<Message>::new();
        state.finish_load(Err(ApiError::Unauthorized("Token expired".to_string())));
        let status = state.status.unwrap();
        assert_eq!(status.text, "Token expired");
        assert!(status.is_error());
        assert!(status.needs_sign_in());
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut state = CollectionState::<Project>::new();
        state.finish_load(Ok(vec![project("1", "A")]));

        state.request_delete("1");
        state.decline_delete();
        assert!(state.confirm_delete().is_none());
        assert_eq!(state.items.len(), 1);

        state.request_delete("1");
        let id = state.confirm_delete().unwrap();
        assert!(state.finish_delete(&id, Ok(())));
        assert!(state.items.is_empty());
        assert_eq!(
            state.status,
            Some(StatusLine::success("Project deleted successfully!"))
        );
    }

    #[test]
    fn test_failed_delete_keeps_item() {
        let mut state = CollectionState::<Project>::new();
        state.finish_load(Ok(vec![project("1", "A")]));
        assert!(!state.finish_delete("1", Err(ApiError::Transport("x".to_string()))));
        assert_eq!(state.items.len(), 1);
        assert_eq!(
            state.status,
            Some(StatusLine::error("Network error while deleting project."))
        );
    }

    #[test]
    fn test_prepare_create_vs_update() {
        let mut editor = EditorState::<ProjectDraft>::new();
        editor.draft = ProjectDraft::from_item(&project("x", "Demo"));
        assert!(matches!(editor.prepare(), Ok(Submission::Create(_))));

        editor.begin_edit(&project("7", "Demo"));
        assert!(editor.is_editing());
        match editor.prepare() {
            Ok(Submission::Update { id, item }) => {
                assert_eq!(id, "7");
                assert_eq!(item.id, None);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_begin_edit_ignores_unsaved_item() {
        let mut editor = EditorState::<ProjectDraft>::new();
        editor.begin_edit(&Project::default());
        assert!(!editor.is_editing());
        assert_eq!(editor.draft, ProjectDraft::default());
    }

    #[test]
    fn test_finish_success_resets_form() {
        let mut editor = EditorState::<ProjectDraft>::new();
        editor.begin_edit(&project("7", "Demo"));
        let submission = editor.prepare().unwrap();
        let status = editor.finish(&submission, Ok(()));
        assert_eq!(status, StatusLine::success("Project updated successfully!"));
        assert!(!editor.is_editing());
        assert_eq!(editor.draft, ProjectDraft::default());
    }

    #[test]
    fn test_finish_failure_keeps_draft() {
        let mut editor = EditorState::<ProjectDraft>::new();
        editor.draft = ProjectDraft::from_item(&project("x", "Demo"));
        let submission = editor.prepare().unwrap();
        let status = editor.finish(&submission, Err(ApiError::Rejected(None)));
        assert_eq!(status, StatusLine::error("Failed to add project."));
        assert_eq!(editor.draft.title, "Demo");
    }

    #[test]
    fn test_non_numeric_order_is_rejected_before_sending() {
        let mut editor = EditorState::<ProjectDraft>::new();
        editor.draft = ProjectDraft::from_item(&project("x", "Demo"));
        editor.draft.order = "first".to_string();
        assert_eq!(editor.prepare(), Err(FieldError::NotANumber("Order")));
    }
}
