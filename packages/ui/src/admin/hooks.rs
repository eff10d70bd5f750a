//! Dioxus bindings for the CRUD panel state machine.
//!
//! [`use_collection`] and [`use_editor`] keep [`CollectionState`] and
//! [`EditorState`] in signals and hand them to the [`api::panel`] drivers.
//! Every task is spawned on the calling component's scope, so leaving the
//! page cancels whatever is still in flight. A status asking for a fresh
//! login ends the session, which sends the operator back to the login page.

use api::{
    delete_pending, load_collection, submit_draft, ApiClient, CollectionState, Draft,
    EditorState, Resource, StateSlot, StatusLine,
};
use dioxus::prelude::*;
use store::Session;

use crate::auth::{current_token, end_rejected_session, use_api, use_session};

/// Handle to one collection mirrored from the backend.
pub struct CollectionHandle<R: 'static> {
    pub state: Signal<CollectionState<R>>,
    api: Signal<ApiClient>,
    session: Signal<Session>,
}

impl<R: 'static> Clone for CollectionHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for CollectionHandle<R> {}

impl<R: 'static> StateSlot<CollectionState<R>> for CollectionHandle<R> {
    fn update<T>(&mut self, f: impl FnOnce(&mut CollectionState<R>) -> T) -> T {
        f(&mut *self.state.write())
    }
}

impl<R: Resource> CollectionHandle<R> {
    /// Fetch the list and replace the local copy.
    pub async fn load(mut self) {
        let client = self.api.peek().clone();
        let token = current_token(self.session);
        let failure = load_collection(&client, token.as_deref(), &mut self).await;
        self.check_session(failure);
    }

    fn check_session(self, status: Option<StatusLine>) {
        if let Some(status) = status {
            end_rejected_session(self.session, &status);
        }
    }

    pub fn reload(&self) {
        spawn(self.load());
    }

    /// "Retry Connection": clear the error and load again.
    pub fn retry(mut self) {
        self.state.write().retry();
        self.reload();
    }

    pub fn request_delete(mut self, id: &str) {
        self.state.write().request_delete(id);
    }

    pub fn decline_delete(mut self) {
        self.state.write().decline_delete();
    }

    /// Delete the item awaiting confirmation. With `reload`, the list is
    /// fetched again afterwards; otherwise the local removal stands.
    pub fn confirm_delete(mut self, reload: bool) {
        if self.state.peek().pending_delete.is_none() {
            return;
        }
        spawn(async move {
            let client = self.api.peek().clone();
            let token = current_token(self.session);
            let status = delete_pending(&client, token.as_deref(), &mut self, reload).await;
            self.check_session(status);
        });
    }
}

/// Mirror collection `R`, loading it once on mount.
pub fn use_collection<R: Resource>() -> CollectionHandle<R> {
    let handle = CollectionHandle {
        state: use_signal(CollectionState::<R>::new),
        api: use_api(),
        session: use_session(),
    };
    use_hook(move || handle.reload());
    handle
}

/// Handle to the create/edit form of a panel.
pub struct EditorHandle<D: Draft> {
    pub state: Signal<EditorState<D>>,
    collection: CollectionHandle<<D as Draft>::Item>,
}

impl<D: Draft> Clone for EditorHandle<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Draft> Copy for EditorHandle<D> {}

impl<D: Draft> StateSlot<EditorState<D>> for EditorHandle<D> {
    fn update<T>(&mut self, f: impl FnOnce(&mut EditorState<D>) -> T) -> T {
        f(&mut *self.state.write())
    }
}

impl<D: Draft> EditorHandle<D> {
    pub fn draft(&self) -> D {
        self.state.read().draft.clone()
    }

    /// Change one field of the draft.
    pub fn edit(mut self, update: impl FnOnce(&mut D)) {
        update(&mut self.state.write().draft);
    }

    pub fn begin_edit(mut self, item: &D::Item) {
        self.state.write().begin_edit(item);
    }

    pub fn cancel_edit(mut self) {
        self.state.write().cancel_edit();
    }

    pub fn is_editing(&self) -> bool {
        self.state.read().is_editing()
    }

    pub fn is_saving(&self) -> bool {
        self.state.read().saving
    }

    /// Validate and send the draft, then reload the list on success.
    pub fn submit(mut self) {
        if self.state.peek().saving {
            return;
        }
        let mut collection = self.collection;
        spawn(async move {
            let client = collection.api.peek().clone();
            let token = current_token(collection.session);
            let status = submit_draft(&client, token.as_deref(), &mut self, &mut collection).await;
            collection.check_session(status);
        });
    }
}

/// Form state bound to `collection`.
pub fn use_editor<D: Draft>(collection: CollectionHandle<D::Item>) -> EditorHandle<D> {
    EditorHandle {
        state: use_signal(EditorState::<D>::new),
        collection,
    }
}
