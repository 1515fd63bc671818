//! `TodoClient`: the todo list plus the create/edit form, wired to the API.
//!
//! # Design
//! The client owns its state behind a `tokio::sync::RwLock` and never holds
//! the lock across a transport call. Every displayed list is the result of
//! the most recent successful `list_todos`; mutations never patch the list
//! locally, they re-fetch it.
//!
//! Operations return `TodoError` instead of notifying anyone. A wire failure
//! is logged here once and surfaces as `RequestFailed`, whose message is the
//! text a front end shows the user.
//!
//! A mutation whose follow-up re-fetch fails has still taken effect: the
//! form is cleared and the call returns the fetch failure.
//!
//! A successful submit only resets the form if it still targets the item
//! it targeted when the request was sent. A create empties the fields and
//! keeps any edit target; an update leaves edit mode.

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::api::TodoApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, Operation, TodoError};
use crate::form::{FormMode, FormState};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{TodoId, TodoItem};
use crate::validate::ValidationError;

/// Everything a front end needs to draw the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub todos: Vec<TodoItem>,
    pub form: FormState,
    /// A create or update is in flight.
    pub submitting: bool,
}

pub struct TodoClient<T> {
    api: TodoApi,
    transport: T,
    state: RwLock<ViewState>,
}

impl<T: Transport> TodoClient<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            api: TodoApi::new(config.base_url()),
            transport,
            state: RwLock::new(ViewState::default()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// First load of the list.
    pub async fn on_mount(&self) -> Result<(), TodoError> {
        self.list_todos().await
    }

    /// Replace the local list with the server's. On failure the current
    /// list is kept as is.
    pub async fn list_todos(&self) -> Result<(), TodoError> {
        let request = self.api.build_list_todos();
        let todos = self
            .round_trip(Operation::Fetch, request, TodoApi::parse_list_todos)
            .await?;
        debug!(count = todos.len(), "fetched todos");
        self.state.write().await.todos = todos;
        Ok(())
    }

    /// Submit the form: update when an item is being edited, create
    /// otherwise.
    pub async fn submit(&self) -> Result<(), TodoError> {
        self.submit_form(None).await
    }

    /// Create a todo from the form fields, regardless of mode.
    pub async fn submit_create(&self) -> Result<(), TodoError> {
        self.submit_form(Some(Operation::Create)).await
    }

    /// Send the form fields as an update of the item being edited.
    pub async fn submit_update(&self) -> Result<(), TodoError> {
        self.submit_form(Some(Operation::Update)).await
    }

    pub async fn delete_todo(&self, id: &TodoId) -> Result<(), TodoError> {
        let request = self.api.build_delete_todo(id);
        self.round_trip(Operation::Delete, request, TodoApi::parse_delete_todo)
            .await?;
        info!(%id, "todo deleted");
        self.list_todos().await
    }

    pub async fn start_edit(&self, item: &TodoItem) {
        debug!(id = %item.id, "editing todo");
        self.state.write().await.form.start_edit(item.clone());
    }

    /// Leave edit mode without saving. Does nothing in create mode.
    pub async fn cancel_edit(&self) {
        let mut state = self.state.write().await;
        if state.form.mode() == FormMode::Edit {
            state.form.clear();
        }
    }

    pub async fn set_title(&self, text: &str) -> Result<(), ValidationError> {
        self.state.write().await.form.set_title(text)
    }

    pub async fn set_description(&self, text: &str) -> Result<(), ValidationError> {
        self.state.write().await.form.set_description(text)
    }

    pub async fn todos(&self) -> Vec<TodoItem> {
        self.state.read().await.todos.clone()
    }

    pub async fn form(&self) -> FormState {
        self.state.read().await.form.clone()
    }

    pub async fn is_submitting(&self) -> bool {
        self.state.read().await.submitting
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    async fn submit_form(&self, requested: Option<Operation>) -> Result<(), TodoError> {
        let (op, request, submitted_target) = {
            let mut state = self.state.write().await;
            if state.submitting {
                return Err(TodoError::Busy);
            }
            let submitted_target = state.form.editing().map(|item| item.id.clone());
            let op = requested.unwrap_or(match state.form.mode() {
                FormMode::Edit => Operation::Update,
                FormMode::Create => Operation::Create,
            });
            let target = match op {
                Operation::Update => Some(
                    state
                        .form
                        .editing()
                        .map(|item| item.id.clone())
                        .ok_or(TodoError::NotEditing)?,
                ),
                _ => None,
            };
            let input = state.form.to_input()?;
            let request = match &target {
                Some(id) => self.api.build_update_todo(id, &input),
                None => self.api.build_create_todo(&input),
            }
            .map_err(|e| TodoError::request_failed(op, e))?;
            state.submitting = true;
            (op, request, submitted_target)
        };

        let result = self
            .round_trip(op, request, |api, response| match op {
                Operation::Update => api.parse_update_todo(response),
                _ => api.parse_create_todo(response),
            })
            .await;

        {
            let mut state = self.state.write().await;
            state.submitting = false;
            let current_target = state.form.editing().map(|item| &item.id);
            if result.is_ok() && current_target == submitted_target.as_ref() {
                match op {
                    Operation::Update => state.form.clear(),
                    _ => state.form.clear_fields(),
                }
            }
        }
        result?;
        info!(%op, "form submitted");
        self.list_todos().await
    }

    async fn round_trip<R>(
        &self,
        op: Operation,
        request: HttpRequest,
        parse: impl FnOnce(&TodoApi, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, TodoError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let result = match self.transport.execute(request).await {
            Ok(response) => parse(&self.api, response),
            Err(e) => Err(ApiError::from(e)),
        };
        result.map_err(|source| {
            error!(%op, error = %source, "request failed");
            TodoError::request_failed(op, source)
        })
    }
}
