use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

pub type Db = Arc<Vec<Todo>>;

/// The collection served by [`app`], shaped like the public placeholder data.
pub fn fixture_todos() -> Vec<Todo> {
    [
        (1, 1, "delectus aut autem", false),
        (1, 2, "quis ut nam facilis", false),
        (1, 3, "fugiat veniam minus", false),
        (1, 4, "et porro tempora", true),
        (2, 21, "suscipit repellat esse quibusdam voluptatem incidunt", false),
        (2, 22, "distinctio vitae autem nihil ut molestias quo", true),
        (3, 41, "aliquid amet impedit consequatur aspernatur placeat eaque fugiat suscipit", false),
        (3, 42, "rerum perferendis error quia ut eveniet", false),
    ]
    .into_iter()
    .map(|(user_id, id, title, completed)| Todo {
        user_id,
        id,
        title: title.to_string(),
        completed,
    })
    .collect()
}

pub fn app() -> Router {
    app_with(fixture_todos())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(todos);
    Router::new()
        .route("/todos", get(list_todos))
        .with_state(db)
}

/// A server whose collection endpoint always answers `status`.
pub fn failing_app(status: StatusCode) -> Router {
    Router::new()
        .route("/todos", get(fail))
        .with_state(status)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    info!(count = db.len(), "serving todos");
    Json(db.as_ref().clone())
}

async fn fail(State(status): State<StatusCode>) -> (StatusCode, &'static str) {
    info!(%status, "failing todos request");
    (status, "mock failure")
}
