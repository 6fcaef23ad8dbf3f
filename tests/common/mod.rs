//! Common test utilities for integration tests
#![allow(dead_code)]

use serde_json::{Value, json};
use std::time::Duration;
use todoist_mcp::{ClientConfig, TodoistClient, TodoistServerHandler};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    }
}

/// Client pointed at a fresh mock server
pub async fn setup() -> (MockServer, TodoistClient) {
    let server = MockServer::start().await;
    let client = TodoistClient::new(TEST_TOKEN, &test_config(&server)).unwrap();
    (server, client)
}

/// MCP handler pointed at a fresh mock server
pub async fn setup_handler() -> (MockServer, TodoistServerHandler) {
    let server = MockServer::start().await;
    let handler = TodoistServerHandler::new(TEST_TOKEN, &test_config(&server)).unwrap();
    (server, handler)
}

pub fn task_json(id: &str, content: &str) -> Value {
    json!({
        "id": id,
        "content": content,
        "description": "",
        "project_id": "p1",
        "section_id": null,
        "parent_id": null,
        "labels": [],
        "priority": 1,
        "child_order": 1,
        "due": null,
        "checked": false,
        "added_at": "2025-01-15T09:00:00Z"
    })
}

pub fn project_json(id: &str, name: &str, inbox: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "color": "grey",
        "parent_id": null,
        "child_order": 0,
        "is_shared": false,
        "is_favorite": false,
        "inbox_project": inbox,
        "view_style": "list"
    })
}

/// Cursor envelope as returned by list endpoints
pub fn page(results: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({ "results": results, "next_cursor": next_cursor })
}
