#![allow(clippy::unwrap_used)]
//! End-to-end turns against an in-process `/llm` backend.
//!
//! Each test starts an axum server on an ephemeral port and drives the
//! chat controller with the real HTTP client.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use llmchat_cli::chat::{BubbleState, ChatController, MessageRole, Transcript, TurnOutcome, UiEvent};
use llmchat_cli::client::LlmClient;
use llmchat_cli::config::parse_endpoint;

/// A request as the backend saw it: content type and JSON body.
type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

#[derive(Clone)]
struct Backend {
    seen: Seen,
    status: StatusCode,
    reply: &'static str,
}

async fn llm(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    backend.seen.lock().unwrap().push((content_type, body));
    (backend.status, backend.reply.to_string())
}

/// Starts a backend answering every message with `reply`; returns its base
/// URL and the requests it receives.
async fn spawn_backend(status: StatusCode, reply: &'static str) -> (String, Seen) {
    let seen = Seen::default();
    let router = Router::new().route("/llm", post(llm)).with_state(Backend {
        seen: Arc::clone(&seen),
        status,
        reply,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn controller(endpoint: &str) -> ChatController<Transcript, LlmClient> {
    let endpoint = parse_endpoint(endpoint).unwrap();
    let mut controller = ChatController::new(Transcript::new(), LlmClient::new(&endpoint));
    controller.init();
    controller
}

#[tokio::test]
async fn test_hi_ok_turn() {
    let (endpoint, seen) = spawn_backend(StatusCode::OK, "ok").await;
    let mut controller = controller(&endpoint);

    controller.set_input("hi");
    let outcome = controller.handle_event(UiEvent::SendClick).await;

    assert_eq!(outcome, TurnOutcome::Replied("ok".to_string()));

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("application/json"));
    assert_eq!(seen[0].1, json!({ "message": "hi" }));

    let transcript = controller.view();
    let bubbles = transcript.bubbles();
    assert_eq!(bubbles.len(), 2);
    assert_eq!(bubbles[0].role, MessageRole::User);
    assert_eq!(bubbles[0].text, "hi");
    assert_eq!(bubbles[1].role, MessageRole::Assistant);
    assert_eq!(bubbles[1].text, "ok");
    assert_eq!(bubbles[1].state, BubbleState::Ready);

    assert!(transcript.input_enabled());
    assert!(transcript.send_enabled());
    assert!(transcript.input_focused());
}

#[tokio::test]
async fn test_reply_whitespace_is_trimmed() {
    let (endpoint, _) = spawn_backend(StatusCode::OK, "  hello  \n").await;
    let mut controller = controller(&endpoint);

    controller.set_input("hi");
    let outcome = controller.send().await;

    assert_eq!(outcome, TurnOutcome::Replied("hello".to_string()));
    assert_eq!(controller.view().last().unwrap().text, "hello");
}

#[tokio::test]
async fn test_error_status_body_is_still_the_reply() {
    let (endpoint, _) =
        spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, " model overloaded ").await;
    let mut controller = controller(&endpoint);

    controller.set_input("hi");
    let outcome = controller.send().await;

    assert_eq!(outcome, TurnOutcome::Replied("model overloaded".to_string()));
    assert_eq!(controller.view().last().unwrap().state, BubbleState::Ready);
}

#[tokio::test]
async fn test_empty_reply_clears_loading_state() {
    let (endpoint, _) = spawn_backend(StatusCode::OK, "").await;
    let mut controller = controller(&endpoint);

    controller.set_input("tell me about Frieren");
    let outcome = controller.send().await;

    assert_eq!(outcome, TurnOutcome::Replied(String::new()));
    let last = controller.view().last().unwrap();
    assert_eq!(last.text, "");
    assert_eq!(last.state, BubbleState::Ready);
}

#[tokio::test]
async fn test_blank_input_sends_nothing() {
    let (endpoint, seen) = spawn_backend(StatusCode::OK, "ok").await;
    let mut controller = controller(&endpoint);

    controller.set_input("   ");
    let outcome = controller.send().await;

    assert_eq!(outcome, TurnOutcome::Skipped);
    assert!(controller.view().is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_message_is_posted_verbatim() {
    let (endpoint, seen) = spawn_backend(StatusCode::OK, "ok").await;
    let mut controller = controller(&format!("{endpoint}/"));

    controller.set_input(" naïve \"quotes\" ");
    controller.send().await;

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen[0].1, json!({ "message": " naïve \"quotes\" " }));
}

#[tokio::test]
async fn test_endpoint_query_does_not_break_path() {
    let (endpoint, seen) = spawn_backend(StatusCode::OK, "ok").await;
    let mut controller = controller(&format!("{endpoint}/?session=1"));

    controller.set_input("hi");
    let outcome = controller.send().await;

    assert_eq!(outcome, TurnOutcome::Replied("ok".to_string()));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_backend_recovers() {
    // Grab a free port, then close it so the connection is refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut controller = controller(&format!("http://{addr}"));
    controller.set_input("hi");
    let outcome = controller.send().await;

    let TurnOutcome::Failed(message) = outcome else {
        panic!("expected a failed turn, got {outcome:?}");
    };
    assert!(message.contains(&format!("http://{addr}/llm")));

    let transcript = controller.view();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.last().unwrap().state, BubbleState::Error);
    assert_eq!(transcript.last().unwrap().text, message);
    assert!(transcript.input_enabled());
    assert!(transcript.send_enabled());
    assert!(transcript.input_focused());
}
