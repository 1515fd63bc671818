//! Client core for the todo service.
//!
//! # Overview
//! `TodoApi` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `TodoClient` layers
//! the list and the create/edit form on top, driving requests through a
//! host-supplied `Transport`.
//!
//! # Design
//! - `TodoApi` is stateless, it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `TodoClient` is configured explicitly and never reads the environment.
//! - Every wire failure collapses into `TodoError::RequestFailed`; callers
//!   decide how to show it.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod transport;
pub mod types;
pub mod validate;
pub mod view;

pub use api::TodoApi;
pub use client::{TodoClient, ViewState};
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, Operation, TodoError, TransportError};
pub use form::{FormMode, FormState};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{ListTodosResponse, TodoId, TodoInput, TodoItem};
pub use validate::{Field, ValidationError, MAX_FIELD_LEN};
