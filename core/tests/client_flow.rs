//! `TodoClient` driven against the mock server's router, in process.
//!
//! The transport turns each `HttpRequest` into an axum request and feeds it
//! to the router with `tower::ServiceExt::oneshot`, so no socket is opened.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use http_body_util::BodyExt;
use mock_server::Db;
use todo_core::{
    ClientConfig, FormMode, HttpRequest, HttpResponse, Operation, TodoClient, TodoError, Transport,
    TransportError,
};
use tokio::sync::RwLock;
use tower::ServiceExt;

#[derive(Clone)]
struct RouterTransport {
    app: Router,
}

impl Transport for RouterTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = Request::builder()
            .method(request.method.as_str())
            .uri(&request.path);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        let req = builder
            .body(Body::from(request.body.unwrap_or_default()))
            .map_err(|e| TransportError::new(e.to_string()))?;

        let resp = self
            .app
            .clone()
            .oneshot(req)
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = resp.status().as_u16();
        let bytes = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?
            .to_bytes();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

fn client() -> (TodoClient<RouterTransport>, Db) {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    let transport = RouterTransport {
        app: mock_server::router(db.clone()),
    };
    let config = ClientConfig::new("http://mock.local").unwrap();
    (TodoClient::new(&config, transport), db)
}

async fn fill(client: &TodoClient<RouterTransport>, title: &str, description: &str) {
    client.set_title(title).await.unwrap();
    client.set_description(description).await.unwrap();
}

#[tokio::test]
async fn mount_on_empty_backend() {
    let (client, _db) = client();
    client.on_mount().await.unwrap();
    assert!(client.todos().await.is_empty());
}

#[tokio::test]
async fn create_edit_delete_round_trip() {
    let (client, db) = client();
    client.on_mount().await.unwrap();

    fill(&client, "Buy milk", "2% milk, 1 gallon").await;
    client.submit().await.unwrap();
    fill(&client, "Walk dog", "Around the block").await;
    client.submit().await.unwrap();

    let todos = client.todos().await;
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].title, "Buy milk");
    assert_eq!(todos[0].description, "2% milk, 1 gallon");
    let form = client.form().await;
    assert_eq!((form.title(), form.description()), ("", ""));

    // Edit the first item without touching the fields.
    client.start_edit(&todos[0]).await;
    client.submit().await.unwrap();
    let after = client.todos().await;
    assert_eq!(after[0], todos[0]);
    assert_eq!(client.form().await.mode(), FormMode::Create);

    // Edit the second item for real.
    client.start_edit(&after[1]).await;
    client.set_title("Walk cat").await.unwrap();
    client.submit().await.unwrap();
    assert_eq!(db.read().await[1].title, "Walk cat");
    assert_eq!(client.todos().await[1].title, "Walk cat");

    // Delete the first one.
    client.delete_todo(&after[0].id).await.unwrap();
    let remaining = client.todos().await;
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|t| t.id != after[0].id));
}

#[tokio::test]
async fn deleting_a_vanished_item_reports_failure() {
    let (client, db) = client();
    fill(&client, "t", "d").await;
    client.submit().await.unwrap();
    let item = client.todos().await.remove(0);

    db.write().await.clear();

    let err = client.delete_todo(&item.id).await.unwrap_err();
    assert_eq!(err.operation(), Some(Operation::Delete));
    // The stale list is still what was last fetched.
    assert_eq!(client.todos().await, vec![item]);
}

#[tokio::test]
async fn updating_a_vanished_item_keeps_edit_state() {
    let (client, db) = client();
    fill(&client, "t", "d").await;
    client.submit().await.unwrap();
    let item = client.todos().await.remove(0);
    client.start_edit(&item).await;

    db.write().await.clear();

    let err = client.submit().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to update todo");
    assert_eq!(client.form().await.editing(), Some(&item));
}

#[tokio::test]
async fn boundary_lengths() {
    let (client, _db) = client();
    let fifty = "a".repeat(50);
    fill(&client, &fifty, &fifty).await;
    client.submit().await.unwrap();
    assert_eq!(client.todos().await[0].title, fifty);

    assert!(client.set_title(&"a".repeat(51)).await.is_err());
    assert!(client.set_description(&"a".repeat(51)).await.is_err());
    assert!(matches!(client.submit().await, Err(TodoError::Invalid(_))));
}
