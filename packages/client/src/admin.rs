//! State machine and operations behind the list-resource admin screens.
//!
//! Every screen follows the same control flow: mount → fetch list → render →
//! submit create (validate, multipart POST, re-fetch) or stage a delete
//! (confirm modal, DELETE, re-fetch). The flow is implemented once here and
//! configured per resource through [`Resource`].
//!
//! Orchestration is split from state. The async functions talk to a
//! [`Backend`] and return an outcome value; the `apply_*` methods on
//! [`AdminState`] fold an outcome back into the state. The view layer runs
//! the async half in a task and applies the result to a signal; the test
//! suite drives both halves natively against [`crate::MemoryBackend`].
//!
//! Invariants the tests pin down:
//! - a validation failure or missing credential issues zero requests;
//! - at most one list re-fetch follows a successful mutation;
//! - a failed create never clears the draft;
//! - applying a delete outcome always resolves the confirm modal.

use crate::backend::{Backend, FilePart};
use crate::listing::fetch_collection;
use crate::resource::{validate, Draft, Resource};
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient banner shown after an operation completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// What the screen is currently doing.
///
/// One tagged value instead of loose `loading`/`selectedId`/`modalOpen`
/// flags: the delete flow carries its target id, and an in-flight list fetch
/// cannot disable an unrelated control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// List fetch in flight.
    Loading,
    /// Create submission in flight.
    Submitting,
    /// Confirm-delete modal open for the remembered id. Local only — no
    /// request has been issued yet.
    Confirming(String),
    /// DELETE in flight for the id.
    Deleting(String),
}

/// Per-screen state: the fetched collection, the create-form draft, the
/// current phase and the status banner.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminState<R: Resource> {
    pub items: Vec<R>,
    pub draft: Draft,
    pub phase: Phase,
    pub message: Option<StatusMessage>,
}

impl<R: Resource> Default for AdminState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> AdminState<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            draft: Draft::default(),
            phase: Phase::Idle,
            message: None,
        }
    }

    // Local-only transitions.

    pub fn update_text(&mut self, name: &str, value: String) {
        self.draft.set_text(name, value);
    }

    pub fn attach_file(&mut self, part: FilePart) {
        self.draft.set_file(part);
    }

    /// Remember the id and open the confirm modal. No request is issued.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.phase = Phase::Confirming(id.into());
    }

    /// Close the modal and forget the staged id. No request is issued.
    pub fn cancel_delete(&mut self) {
        if matches!(self.phase, Phase::Confirming(_)) {
            self.phase = Phase::Idle;
        }
    }

    /// Id staged for deletion while the confirm modal is open.
    pub fn confirming(&self) -> Option<&str> {
        match &self.phase {
            Phase::Confirming(id) => Some(id),
            _ => None,
        }
    }

    pub fn modal_open(&self) -> bool {
        matches!(self.phase, Phase::Confirming(_) | Phase::Deleting(_))
    }

    // Begin/apply pairs around the async operations.

    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
    }

    /// On failure the prior `items` are left untouched.
    pub fn apply_load(&mut self, outcome: LoadOutcome<R>) {
        self.phase = Phase::Idle;
        match outcome {
            LoadOutcome::Loaded(items) => self.items = items,
            LoadOutcome::Failed(text) => self.message = Some(StatusMessage::error(text)),
            LoadOutcome::Abandoned => {}
        }
    }

    pub fn begin_create(&mut self) {
        self.phase = Phase::Submitting;
    }

    pub fn apply_create(&mut self, outcome: CreateOutcome<R>) {
        self.phase = Phase::Idle;
        match outcome {
            CreateOutcome::Rejected(text) | CreateOutcome::Failed(text) => {
                // Draft preserved so the user can retry.
                self.message = Some(StatusMessage::error(text));
            }
            CreateOutcome::Abandoned => {}
            CreateOutcome::Created { refreshed } => {
                self.draft = Draft::default();
                self.message = Some(StatusMessage::success(format!(
                    "{} added successfully!",
                    title_case(R::LABEL)
                )));
                match refreshed {
                    Ok(items) => self.items = items,
                    Err(text) => self.message = Some(StatusMessage::error(text)),
                }
            }
        }
    }

    /// Move `Confirming(id)` to `Deleting(id)`, handing back the id to
    /// delete. Returns `None` if no delete is staged.
    pub fn begin_confirmed_delete(&mut self) -> Option<String> {
        match &self.phase {
            Phase::Confirming(id) => {
                let id = id.clone();
                self.phase = Phase::Deleting(id.clone());
                Some(id)
            }
            _ => None,
        }
    }

    /// Success or failure, the modal is resolved and the screen returns to
    /// an interactive state.
    pub fn apply_delete(&mut self, outcome: DeleteOutcome<R>) {
        self.phase = Phase::Idle;
        match outcome {
            DeleteOutcome::Deleted { refreshed } => {
                self.message = Some(StatusMessage::success(format!(
                    "{} deleted successfully!",
                    title_case(R::LABEL)
                )));
                match refreshed {
                    Ok(items) => self.items = items,
                    Err(text) => self.message = Some(StatusMessage::error(text)),
                }
            }
            DeleteOutcome::Failed(text) => self.message = Some(StatusMessage::error(text)),
            DeleteOutcome::Abandoned => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome<R> {
    Loaded(Vec<R>),
    Failed(String),
    /// Credential required but absent; no request was issued.
    Abandoned,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome<R> {
    /// Validation failure; no request was issued.
    Rejected(String),
    /// Credential required but absent; no request was issued.
    Abandoned,
    /// POST succeeded; `refreshed` is the single follow-up list fetch.
    Created { refreshed: Result<Vec<R>, String> },
    /// POST failed; the draft is preserved for retry.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome<R> {
    /// DELETE succeeded; `refreshed` is the single follow-up list fetch.
    Deleted { refreshed: Result<Vec<R>, String> },
    Failed(String),
    /// Credential required but absent; no request was issued.
    Abandoned,
}

/// Fetch the collection for an admin screen, attaching the credential when
/// the resource requires it for listing.
pub async fn fetch_list<R: Resource, B: Backend>(
    backend: &B,
    session: &Session,
) -> LoadOutcome<R> {
    if R::AUTH.list && !session.is_authenticated() {
        tracing::warn!(resource = R::ENDPOINT, "no credential; list fetch abandoned");
        return LoadOutcome::Abandoned;
    }
    match fetch_collection::<R, B>(backend, list_token::<R>(session)).await {
        Ok(items) => LoadOutcome::Loaded(items),
        Err(err) => {
            tracing::error!(resource = R::ENDPOINT, %err, "list fetch failed");
            LoadOutcome::Failed(load_error::<R>())
        }
    }
}

/// Validate the draft, POST it as multipart, then re-fetch the list exactly
/// once. A validation failure or missing credential returns before any
/// request is issued.
pub async fn submit_create<R: Resource, B: Backend>(
    backend: &B,
    session: &Session,
    draft: &Draft,
) -> CreateOutcome<R> {
    if let Err(text) = validate(R::FIELDS, draft) {
        return CreateOutcome::Rejected(text);
    }
    let token = match mutation_token::<R>(session) {
        Ok(token) => token,
        Err(MissingCredential) => return CreateOutcome::Abandoned,
    };

    let form = draft.to_form(R::FIELDS);
    if let Err(err) = backend.post_form(&R::collection_path(), form, token).await {
        tracing::error!(resource = R::ENDPOINT, %err, "create failed");
        return CreateOutcome::Failed(format!("Failed to add {}.", R::LABEL));
    }

    CreateOutcome::Created {
        refreshed: refresh::<R, B>(backend, session).await,
    }
}

/// DELETE the staged entity, then re-fetch the list exactly once.
pub async fn delete_item<R: Resource, B: Backend>(
    backend: &B,
    session: &Session,
    id: &str,
) -> DeleteOutcome<R> {
    let token = match mutation_token::<R>(session) {
        Ok(token) => token,
        Err(MissingCredential) => return DeleteOutcome::Abandoned,
    };

    if let Err(err) = backend.delete(&R::item_path(id), token).await {
        tracing::error!(resource = R::ENDPOINT, %err, "delete failed");
        return DeleteOutcome::Failed(format!("Failed to delete {}.", R::LABEL));
    }

    DeleteOutcome::Deleted {
        refreshed: refresh::<R, B>(backend, session).await,
    }
}

struct MissingCredential;

fn mutation_token<'s, R: Resource>(
    session: &'s Session,
) -> Result<Option<&'s str>, MissingCredential> {
    if !R::AUTH.mutate {
        return Ok(None);
    }
    match session.token() {
        Some(token) => Ok(Some(token)),
        None => {
            tracing::warn!(resource = R::ENDPOINT, "no credential; operation abandoned");
            Err(MissingCredential)
        }
    }
}

fn list_token<'s, R: Resource>(session: &'s Session) -> Option<&'s str> {
    if R::AUTH.list {
        session.token()
    } else {
        None
    }
}

async fn refresh<R: Resource, B: Backend>(
    backend: &B,
    session: &Session,
) -> Result<Vec<R>, String> {
    fetch_collection::<R, B>(backend, list_token::<R>(session))
        .await
        .map_err(|err| {
            tracing::error!(resource = R::ENDPOINT, %err, "refresh after mutation failed");
            load_error::<R>()
        })
}

fn load_error<R: Resource>() -> String {
    format!("Failed to load {}.", R::ENDPOINT)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::backend::FilePart;
    use crate::memory::MemoryBackend;
    use crate::models::{BlogPost, ContactSubmission, Product};

    // In-flight requests are not cancelled when a screen unmounts; the
    // eventual outcome is applied to a signal that outlives the await. That
    // behavior is out of scope here and untested by design.

    fn seeded_blogs() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.seed(
            "blogs",
            vec![
                json!({
                    "_id": "b1",
                    "title": "First",
                    "author": "Dana",
                    "content": "<p>one</p>",
                    "image": "/uploads/one.png"
                }),
                json!({
                    "_id": "b2",
                    "title": "Second",
                    "author": "Lee",
                    "content": "<p>two</p>",
                    "image": "/uploads/two.png"
                }),
            ],
        );
        backend
    }

    fn admin_session() -> Session {
        Session::with_token("secret")
    }

    fn complete_blog_draft() -> Draft {
        let mut draft = Draft::default();
        draft.set_text("title", "A".to_string());
        draft.set_text("author", "B".to_string());
        draft.set_text("content", "<p>body</p>".to_string());
        draft.set_file(FilePart {
            filename: "cover.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        });
        draft
    }

    fn methods(backend: &MemoryBackend) -> Vec<(String, String)> {
        backend
            .requests()
            .iter()
            .map(|r| (r.method.to_string(), r.path.clone()))
            .collect()
    }

    #[tokio::test]
    async fn incomplete_draft_issues_no_requests() {
        let backend = seeded_blogs();
        let mut draft = complete_blog_draft();
        draft.set_text("content", String::new());

        let outcome = submit_create::<BlogPost, _>(&backend, &admin_session(), &draft).await;
        assert_eq!(
            outcome,
            CreateOutcome::Rejected("All fields are required.".to_string())
        );
        assert!(backend.requests().is_empty());

        let mut state = AdminState::<BlogPost>::new();
        state.draft = draft.clone();
        state.apply_create(outcome);
        assert_eq!(state.draft, draft);
        assert_eq!(
            state.message,
            Some(StatusMessage::error("All fields are required."))
        );
        assert_eq!(state.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn successful_create_refetches_once_and_clears_draft() {
        let backend = seeded_blogs();
        let draft = complete_blog_draft();

        let outcome = submit_create::<BlogPost, _>(&backend, &admin_session(), &draft).await;
        assert_eq!(
            methods(&backend),
            vec![
                ("POST".to_string(), "/api/blogs".to_string()),
                ("GET".to_string(), "/api/blogs".to_string()),
            ]
        );

        let mut state = AdminState::<BlogPost>::new();
        state.draft = draft;
        state.apply_create(outcome);
        assert_eq!(state.draft, Draft::default());
        assert_eq!(
            state.message,
            Some(StatusMessage::success("Blog added successfully!"))
        );
        assert_eq!(state.items.len(), 3);
        assert!(state.items.iter().any(|post| post.title == "A"));
    }

    #[tokio::test]
    async fn failed_create_preserves_draft_and_skips_refetch() {
        let backend = seeded_blogs();
        backend.fail("POST /api/blogs");
        let draft = complete_blog_draft();

        let outcome = submit_create::<BlogPost, _>(&backend, &admin_session(), &draft).await;
        assert_eq!(
            outcome,
            CreateOutcome::Failed("Failed to add blog.".to_string())
        );
        assert_eq!(
            methods(&backend),
            vec![("POST".to_string(), "/api/blogs".to_string())]
        );

        let mut state = AdminState::<BlogPost>::new();
        state.draft = draft.clone();
        let items_before = state.items.clone();
        state.apply_create(outcome);
        assert_eq!(state.draft, draft);
        assert_eq!(state.items, items_before);
    }

    #[tokio::test]
    async fn staged_delete_then_cancel_touches_nothing() {
        let backend = seeded_blogs();
        let mut state = AdminState::<BlogPost>::new();
        state.apply_load(fetch_list::<BlogPost, _>(&backend, &admin_session()).await);
        let items_before = state.items.clone();
        let requests_before = backend.requests().len();

        state.request_delete("b1");
        assert_eq!(state.confirming(), Some("b1"));
        assert!(state.modal_open());

        state.cancel_delete();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.modal_open());
        assert_eq!(state.items, items_before);
        assert_eq!(backend.requests().len(), requests_before);
    }

    #[tokio::test]
    async fn confirmed_delete_refetches_once_and_resolves_modal() {
        let backend = seeded_blogs();
        let session = admin_session();
        let mut state = AdminState::<BlogPost>::new();
        state.apply_load(fetch_list::<BlogPost, _>(&backend, &session).await);

        state.request_delete("b1");
        let id = state.begin_confirmed_delete().expect("staged id");
        assert_eq!(state.phase, Phase::Deleting("b1".to_string()));

        let outcome = delete_item::<BlogPost, _>(&backend, &session, &id).await;
        state.apply_delete(outcome);

        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.modal_open());
        assert!(state.items.iter().all(|post| post.id != "b1"));
        assert_eq!(
            methods(&backend)[1..],
            vec![
                ("DELETE".to_string(), "/api/blogs/b1".to_string()),
                ("GET".to_string(), "/api/blogs".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn failed_delete_still_resolves_modal() {
        let backend = seeded_blogs();
        backend.fail("DELETE /api/blogs/b1");
        let session = admin_session();
        let mut state = AdminState::<BlogPost>::new();
        state.apply_load(fetch_list::<BlogPost, _>(&backend, &session).await);
        let items_before = state.items.clone();

        state.request_delete("b1");
        let id = state.begin_confirmed_delete().unwrap();
        let outcome = delete_item::<BlogPost, _>(&backend, &session, &id).await;
        state.apply_delete(outcome);

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.items, items_before);
        assert_eq!(
            state.message,
            Some(StatusMessage::error("Failed to delete blog."))
        );
    }

    #[tokio::test]
    async fn missing_credential_abandons_the_mutation_silently() {
        let backend = seeded_blogs();
        let draft = complete_blog_draft();

        let outcome = submit_create::<BlogPost, _>(&backend, &Session::anonymous(), &draft).await;
        assert_eq!(outcome, CreateOutcome::Abandoned);
        assert!(backend.requests().is_empty());

        let mut state = AdminState::<BlogPost>::new();
        state.draft = draft.clone();
        state.apply_create(outcome);
        // Abandonment is logged, not surfaced.
        assert_eq!(state.message, None);
        assert_eq!(state.draft, draft);
    }

    #[tokio::test]
    async fn missing_credential_abandons_the_list_fetch() {
        let backend = seeded_blogs();
        let outcome = fetch_list::<BlogPost, _>(&backend, &Session::anonymous()).await;
        assert_eq!(outcome, LoadOutcome::Abandoned);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn contacts_delete_needs_no_credential() {
        let backend = MemoryBackend::new();
        backend.seed(
            "contacts",
            vec![json!({
                "_id": "c1",
                "name": "Sam",
                "email": "sam@example.com",
                "message": "Hello"
            })],
        );

        let outcome =
            delete_item::<ContactSubmission, _>(&backend, &Session::anonymous(), "c1").await;
        assert!(matches!(outcome, DeleteOutcome::Deleted { .. }));
        assert!(backend.requests().iter().all(|r| !r.authorized));
    }

    #[tokio::test]
    async fn failed_list_fetch_keeps_prior_items() {
        let backend = seeded_blogs();
        let session = admin_session();
        let mut state = AdminState::<BlogPost>::new();
        state.apply_load(fetch_list::<BlogPost, _>(&backend, &session).await);
        let items_before = state.items.clone();
        assert_eq!(items_before.len(), 2);

        backend.fail("GET /api/blogs");
        state.begin_load();
        state.apply_load(fetch_list::<BlogPost, _>(&backend, &session).await);

        assert_eq!(state.items, items_before);
        assert_eq!(
            state.message,
            Some(StatusMessage::error("Failed to load blogs."))
        );
        assert_eq!(state.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn blog_list_fetch_attaches_the_credential_but_products_stay_public() {
        let backend = seeded_blogs();
        backend.seed("products", vec![]);
        let session = admin_session();

        let _ = fetch_list::<BlogPost, _>(&backend, &session).await;
        let _ = fetch_list::<Product, _>(&backend, &session).await;

        let requests = backend.requests();
        assert!(requests[0].authorized, "blogs list is credentialed");
        assert!(!requests[1].authorized, "products list is public");
    }

    #[tokio::test]
    async fn refresh_failure_after_create_surfaces_as_an_error_banner() {
        let backend = seeded_blogs();
        backend.fail("GET /api/blogs");
        let draft = complete_blog_draft();

        let outcome = submit_create::<BlogPost, _>(&backend, &admin_session(), &draft).await;
        let mut state = AdminState::<BlogPost>::new();
        state.draft = draft;
        state.apply_create(outcome);

        // The create itself went through, so the draft is gone, but the
        // failed refresh wins the banner.
        assert_eq!(state.draft, Draft::default());
        assert_eq!(
            state.message,
            Some(StatusMessage::error("Failed to load blogs."))
        );
    }
}
