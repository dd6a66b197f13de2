//! Full widget lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then mounts a widget, executes
//! its fetch over real HTTP using ureq, and drives searches through the
//! form. Validates that the core's request building, response parsing, and
//! filtering work end-to-end with the actual server.

use axum::http::StatusCode;
use todo_search_core::{
    FetchOutcome, HttpMethod, HttpResponse, ListView, SearchOptions, SearchWidget, TodoClient,
    TransportError, ValidationError,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: todo_search_core::HttpRequest) -> Result<HttpResponse, TransportError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
    }
    .map_err(|e| TransportError(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

fn start_server(app: axum::Router) -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::serve(listener, app).await
        })
        .unwrap();
    });

    addr
}

fn loaded_widget(addr: std::net::SocketAddr) -> SearchWidget {
    let mut widget = SearchWidget::new(TodoClient::new(&format!("http://{addr}")), SearchOptions::default());
    let ticket = widget.mount();
    let outcome = widget.complete_fetch(ticket.generation, execute(ticket.request));
    assert_eq!(outcome, FetchOutcome::Loaded(mock_server::fixture_todos().len()));
    widget
}

fn visible_ids(widget: &SearchWidget) -> Vec<u64> {
    widget.visible().iter().map(|t| t.id).collect()
}

#[test]
fn search_lifecycle() {
    // Step 1: start mock server on a random port.
    let addr = start_server(mock_server::app());

    // Step 2: mount and fetch; the view is the whole collection.
    let mut widget = loaded_widget(addr);
    assert!(!widget.is_loading());
    assert!(widget.error().is_none());
    assert_eq!(visible_ids(&widget), vec![1, 2, 3, 4, 21, 22, 41, 42]);

    // Step 3: title substring.
    widget.input("delectus");
    widget.submit().unwrap();
    assert_eq!(visible_ids(&widget), vec![1]);

    // Step 4: user id, which also hits todo id 1 and nothing else.
    widget.input("1");
    widget.submit().unwrap();
    assert_eq!(visible_ids(&widget), vec![1, 2, 3, 4]);

    // Step 5: exact todo id.
    widget.input("22");
    widget.submit().unwrap();
    assert_eq!(visible_ids(&widget), vec![22]);

    // Step 6: shared title fragment across users, case-insensitive.
    widget.input("  FUGIAT ");
    widget.submit().unwrap();
    assert_eq!(visible_ids(&widget), vec![3, 41]);

    // Step 7: no match renders the empty indicator.
    widget.input("zzz");
    widget.submit().unwrap();
    assert_eq!(widget.view().list, ListView::Empty);

    // Step 8: empty submission is blocked and the view is unchanged.
    widget.input("");
    assert_eq!(widget.submit(), Err(ValidationError::Required));
    assert_eq!(widget.view().list, ListView::Empty);
    assert!(widget.view().to_string().contains("Search query is required"));

    // Step 9: the source collection never changed.
    assert_eq!(widget.todos().len(), mock_server::fixture_todos().len());
}

#[test]
fn payload_matches_server_schema() {
    let addr = start_server(mock_server::app());
    let widget = loaded_widget(addr);

    let served = mock_server::fixture_todos();
    for (fetched, served) in widget.todos().iter().zip(&served) {
        assert_eq!(fetched.id, served.id);
        assert_eq!(fetched.user_id, served.user_id);
        assert_eq!(fetched.title, served.title);
        assert_eq!(fetched.completed, served.completed);
    }
}

#[test]
fn rejected_fetch_shows_fixed_message() {
    let addr = start_server(mock_server::failing_app(StatusCode::INTERNAL_SERVER_ERROR));
    let mut widget = SearchWidget::new(TodoClient::new(&format!("http://{addr}")), SearchOptions::default());

    let ticket = widget.mount();
    assert!(widget.view().to_string().contains("Loading..."));
    let outcome = widget.complete_fetch(ticket.generation, execute(ticket.request));

    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(!widget.is_loading());
    assert_eq!(widget.error(), Some("Failed to fetch data"));
    assert_eq!(widget.view().list, ListView::Empty);

    // The widget stays interactive.
    widget.input("delectus");
    widget.submit().unwrap();
    assert!(widget.visible().is_empty());
}

#[test]
fn late_result_after_unmount_is_ignored() {
    let addr = start_server(mock_server::app());
    let mut widget = SearchWidget::new(TodoClient::new(&format!("http://{addr}")), SearchOptions::default());

    let ticket = widget.mount();
    widget.unmount();
    let outcome = widget.complete_fetch(ticket.generation, execute(ticket.request));

    assert_eq!(outcome, FetchOutcome::Discarded);
    assert!(widget.todos().is_empty());
}
