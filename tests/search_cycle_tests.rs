//! End-to-end search cycle tests driven through the library API.
//!
//! A fake worker thread stands in for the GitHub client so the full
//! submit -> loading -> response -> render path runs without the network.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use hubseek::app::App;
use hubseek::github::types::SearchResults;
use hubseek::search::{SearchRequest, SearchResponse};
use hubseek::session::Session;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_results() -> SearchResults {
    let raw = fs::read_to_string(fixture_path("search_response.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Spawn a worker that answers every request with the fixture payload.
fn spawn_fixture_worker(
    request_rx: mpsc::Receiver<SearchRequest>,
    response_tx: mpsc::Sender<SearchResponse>,
) {
    thread::spawn(move || {
        while let Ok(SearchRequest::Query { request_id, .. }) = request_rx.recv() {
            let items = fixture_results().items;
            if response_tx
                .send(SearchResponse::Results { items, request_id })
                .is_err()
            {
                break;
            }
        }
    });
}

fn wired_app(initial: &str) -> (App, mpsc::Receiver<SearchRequest>, mpsc::Sender<SearchResponse>) {
    let mut app = App::new(initial, Session::empty());
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    app.search.set_channels(request_tx, response_rx);
    (app, request_rx, response_tx)
}

fn render_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_startup_query_resolves_to_rendered_row() {
    let mut app = App::new("preact", Session::empty());
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    app.search.set_channels(request_tx, response_rx);
    spawn_fixture_worker(request_rx, response_tx);

    app.submit_query();
    assert!(app.search.loading);
    assert!(render_to_string(&mut app).contains("Searching…"));

    // Block until the worker has answered, then poll it in
    while !app.poll_search_responses() {
        thread::yield_now();
    }

    assert!(!app.search.loading);
    assert_eq!(app.search.results.len(), 1);

    let output = render_to_string(&mut app);
    assert!(output.contains("preactjs/preact"));
    assert!(output.contains("★36000"));
    assert!(output.contains("last updated"));
}

#[test]
fn test_out_of_order_responses_latest_submission_wins() {
    let (mut app, request_rx, response_tx) = wired_app("");

    app.input.textarea.insert_str("react");
    app.submit_query();
    let SearchRequest::Query { request_id: first, .. } = request_rx.recv().unwrap();

    app.input.textarea.insert_str(" hooks");
    app.submit_query();
    let SearchRequest::Query { request_id: second, .. } = request_rx.recv().unwrap();

    // Second response arrives first, then the stale one
    response_tx
        .send(SearchResponse::Results {
            items: fixture_results().items,
            request_id: second,
        })
        .unwrap();
    response_tx
        .send(SearchResponse::Results {
            items: vec![],
            request_id: first,
        })
        .unwrap();

    app.poll_search_responses();

    assert_eq!(app.search.results.len(), 1, "stale empty payload discarded");
    assert!(!app.search.empty_result);
    assert!(!app.search.loading);
}

#[test]
fn test_failure_then_retry_recovers() {
    let (mut app, request_rx, response_tx) = wired_app("preact");

    app.submit_query();
    let SearchRequest::Query { request_id, .. } = request_rx.recv().unwrap();
    response_tx
        .send(SearchResponse::Failed { request_id })
        .unwrap();
    app.poll_search_responses();

    assert!(app.search.error);
    assert!(render_to_string(&mut app).contains("Something went wrong"));

    app.submit_query();
    let SearchRequest::Query { request_id, .. } = request_rx.recv().unwrap();
    response_tx
        .send(SearchResponse::Results {
            items: fixture_results().items,
            request_id,
        })
        .unwrap();
    app.poll_search_responses();

    assert!(!app.search.error);
    assert!(render_to_string(&mut app).contains("preactjs/preact"));
}

#[test]
fn test_submitted_query_survives_restart_via_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_query");

    let (mut app, _request_rx, _response_tx) = wired_app("");
    app.session = Session::with_path(path.clone());
    app.input.textarea.insert_str("react hooks");
    app.submit_query();

    let restored = Session::with_path(path);
    assert_eq!(restored.read_initial_query().as_deref(), Some("react hooks"));
}
