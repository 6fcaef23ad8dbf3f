//! Task resolution tests against in-process transports
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use todoist_mcp::TodoistClient;
use todoist_mcp::todoist::{Error, Method, Resolution, Result, Transport};

/// Fails the test if any request is made.
struct NoNetwork;

#[async_trait]
impl Transport for NoNetwork {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        _: Option<Vec<u8>>,
    ) -> Result<Option<Vec<u8>>> {
        panic!("unexpected request: {method} {path}");
    }
}

/// Answers every GET with the same task list and counts calls.
struct CannedTasks {
    body: Vec<u8>,
    calls: AtomicUsize,
}

impl CannedTasks {
    fn new() -> Self {
        let tasks = json!([
            {"id": "1", "content": "Buy groceries"},
            {"id": "2", "content": "Buy groceries for party"},
            {"id": "3", "content": "Prepare team meeting agenda"},
            {"id": "4", "content": "Team meeting notes"}
        ]);
        Self {
            body: serde_json::to_vec(&tasks).unwrap(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Transport for CannedTasks {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        _: Option<Vec<u8>>,
    ) -> Result<Option<Vec<u8>>> {
        assert_eq!(method, Method::GET);
        assert_eq!(path, "/tasks");
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(self.body.clone()))
    }
}

#[tokio::test]
async fn test_explicit_id_makes_no_request() {
    let client = TodoistClient::with_transport(NoNetwork);

    let resolution = client
        .resolve_task(Some("12345"), Some("ignored name"))
        .await
        .unwrap();
    assert_eq!(resolution, Resolution::Explicit("12345".to_string()));
    assert_eq!(resolution.label(), Some("12345"));
}

#[tokio::test]
async fn test_exact_match_beats_earlier_partial() {
    let client = TodoistClient::with_transport(CannedTasks::new());

    let resolution = client
        .resolve_task(None, Some("buy GROCERIES"))
        .await
        .unwrap();
    assert_eq!(resolution.id(), Some("1"));
    assert_eq!(resolution.label(), Some("Buy groceries"));
    assert_eq!(client.transport().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_first_partial_match_in_list_order() {
    let client = TodoistClient::with_transport(CannedTasks::new());

    let resolution = client
        .resolve_task(None, Some("team meeting"))
        .await
        .unwrap();
    assert_eq!(
        resolution,
        Resolution::Matched {
            id: "3".to_string(),
            content: "Prepare team meeting agenda".to_string(),
        }
    );
}

#[tokio::test]
async fn test_no_match_is_not_found() {
    let client = TodoistClient::with_transport(CannedTasks::new());

    let resolution = client.resolve_task(None, Some("dentist")).await.unwrap();
    assert_eq!(resolution, Resolution::NotFound);
    assert_eq!(resolution.id(), None);
}

#[tokio::test]
async fn test_blank_id_falls_back_to_name() {
    let client = TodoistClient::with_transport(CannedTasks::new());

    let resolution = client
        .resolve_task(Some("  "), Some("notes"))
        .await
        .unwrap();
    assert_eq!(resolution.id(), Some("4"));
}

#[tokio::test]
async fn test_missing_reference_is_rejected_without_request() {
    let client = TodoistClient::with_transport(NoNetwork);

    let err = client.resolve_task(None, Some("   ")).await.unwrap_err();
    assert!(matches!(err, Error::MissingTaskReference));

    let err = client.resolve_task(None, None).await.unwrap_err();
    assert!(matches!(err, Error::MissingTaskReference));
}
