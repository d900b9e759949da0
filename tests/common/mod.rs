//! Shared helpers for the integration tests
//!
//! Spins up a wiremock server standing in for the messaging endpoint and
//! provides fixtures in the backend's wire shape. Mocks are matched on
//! the `action` discriminator in the request body, mirroring how the
//! real backend dispatches.

#![allow(dead_code)]

use mgram::client::MessagingApi;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock backend and a client pointed at it.
pub async fn start_api() -> (MockServer, MessagingApi) {
    let server = MockServer::start().await;
    let api = MessagingApi::with_endpoint(server.uri());
    (server, api)
}

/// A mock answering one action with a JSON body.
pub fn action_mock(action: &str, response: serde_json::Value) -> Mock {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "action": action })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
}

/// Chat fixture in wire shape.
pub fn chat_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "lastMessage": "Нет сообщений",
        "time": "14:32",
        "unread": 0,
        "avatar": "💬",
        "online": false
    })
}

/// Message fixture in wire shape.
pub fn message_json(id: i64, text: &str, sender: &str) -> serde_json::Value {
    json!({
        "id": id,
        "text": text,
        "sender": sender,
        "time": "14:35",
        "encrypted": true
    })
}

/// Contact fixture in wire shape.
pub fn contact_json(id: i64, name: &str, online: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "status": if online { "В сети" } else { "Был вчера" },
        "avatar": "👤",
        "online": online
    })
}

/// Admin user fixture in wire shape.
pub fn user_json(id: i64, username: &str, is_admin: bool, is_blocked: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": username,
        "username": username,
        "avatar": "👤",
        "online": false,
        "isAdmin": is_admin,
        "isBlocked": is_blocked,
        "createdAt": "2024-03-12"
    })
}

/// Rating fixture in wire shape (no envelope, per the contract).
pub fn rating_json() -> serde_json::Value {
    json!({
        "messagesSent": 120,
        "messagesReceived": 340,
        "callsMade": 7,
        "filesShared": 12,
        "ratingScore": 98,
        "lastActivity": "2025-06-01 18:40"
    })
}
