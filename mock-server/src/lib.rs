//! In-memory stand-in for the todo backend.
//!
//! Serves the four routes the client calls, with document-store shaped
//! records (`_id`, `createdAt`) kept in insertion order.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const MAX_FIELD_LEN: usize = 50;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct TodoInput {
    pub title: String,
    pub description: String,
}

impl TodoInput {
    fn is_valid(&self) -> bool {
        [&self.title, &self.description]
            .iter()
            .all(|f| !f.is_empty() && f.chars().count() <= MAX_FIELD_LEN)
    }
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

type ApiResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    router(Db::default())
}

/// Build the router over an existing store, e.g. one seeded by a test.
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/getTodos", get(list_todos))
        .route("/createTodo", post(create_todo))
        .route("/updateTodo/{id}", put(update_todo))
        .route("/deleteTodo/{id}", delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn failure(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": message })))
}

async fn list_todos(State(db): State<Db>) -> Json<Value> {
    let todos = db.read().await;
    Json(json!({ "data": todos.as_slice() }))
}

async fn create_todo(State(db): State<Db>, Json(input): Json<TodoInput>) -> ApiResult {
    if !input.is_valid() {
        return Err(failure(StatusCode::BAD_REQUEST, "title and description must be 1-50 characters"));
    }
    let todo = Todo {
        id: Uuid::new_v4().simple().to_string(),
        title: input.title,
        description: input.description,
        created_at: Utc::now(),
    };
    tracing::info!(id = %todo.id, "todo created");
    db.write().await.push(todo.clone());
    Ok((StatusCode::CREATED, Json(json!({ "data": todo }))))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TodoInput>,
) -> ApiResult {
    if !input.is_valid() {
        return Err(failure(StatusCode::BAD_REQUEST, "title and description must be 1-50 characters"));
    }
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "todo not found"))?;
    todo.title = input.title;
    todo.description = input.description;
    tracing::info!(%id, "todo updated");
    Ok((StatusCode::OK, Json(json!({ "data": todo.clone() }))))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    let pos = todos.iter().position(|t| t.id == id).ok_or(StatusCode::NOT_FOUND)?;
    todos.remove(pos);
    tracing::info!(%id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_document_shape() {
        let todo = Todo {
            id: "abc".to_string(),
            title: "Test".to_string(),
            description: "Desc".to_string(),
            created_at: DateTime::parse_from_rfc3339("2024-01-15T09:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["_id"], "abc");
        assert_eq!(json["description"], "Desc");
        assert_eq!(json["createdAt"], "2024-01-15T09:30:00Z");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn input_requires_description() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"title":"No description"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn input_length_bounds() {
        let ok = TodoInput {
            title: "a".repeat(50),
            description: "b".to_string(),
        };
        assert!(ok.is_valid());
        let long = TodoInput {
            title: "a".repeat(51),
            description: "b".to_string(),
        };
        assert!(!long.is_valid());
        let empty = TodoInput {
            title: "a".to_string(),
            description: String::new(),
        };
        assert!(!empty.is_valid());
    }
}
