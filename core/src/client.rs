//! Stateless request builder and response parser for the todo collection.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. The single read is split into
//! `build_list_todos`, which produces an `HttpRequest`, and
//! `parse_list_todos`, which consumes the `HttpResponse`. The host executes
//! the round-trip in between, keeping this crate free of I/O.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Todo;

/// Public endpoint the widget reads when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Synchronous, stateless client for the todo collection.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://localhost:3000/todos");
    }

    #[test]
    fn default_client_targets_public_endpoint() {
        let req = TodoClient::default().build_list_todos();
        assert_eq!(req.path, "https://jsonplaceholder.typicode.com/todos");
    }

    #[test]
    fn parse_list_todos_success() {
        let body = r#"[{"userId":1,"id":1,"title":"delectus aut autem","completed":false}]"#;
        let todos = client().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].user_id, 1);
        assert_eq!(todos[0].title, "delectus aut autem");
        assert!(!todos[0].completed);
    }

    #[test]
    fn parse_list_todos_empty_array() {
        let todos = client().parse_list_todos(response(200, "[]")).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn parse_list_todos_not_found() {
        let err = client().parse_list_todos(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_todos_server_error() {
        let err = client()
            .parse_list_todos(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_todos_rejects_wrong_shape() {
        let body = r#"[{"id":"one","title":"x","completed":false}]"#;
        let err = client().parse_list_todos(response(200, body)).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
