//! Screen controller scenarios
//!
//! End-to-end controller behavior against a mock backend: verbatim list
//! mirroring, optimistic-after-confirm sends, reload-on-success
//! mutations, and the client-side admin guard.

mod common;

use common::*;
use mgram::screens::{AdminScreen, ChatsScreen, ContactsScreen, LoadPhase, ProfileScreen, Session};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn chat_list_mirrors_the_server_verbatim() {
    let (server, api) = start_api().await;
    // Deliberately not sorted by id; the client must not reorder.
    action_mock(
        "get_chats",
        json!({"chats": [chat_json(5, "Команда"), chat_json(2, "Анна"), chat_json(9, "Новости")]}),
    )
    .mount(&server)
    .await;

    let mut screen = ChatsScreen::new(Session::new(1));
    screen.activate(&api).await;

    assert_eq!(screen.chats_phase, LoadPhase::Ready);
    let ids: Vec<i64> = screen.chats.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![5, 2, 9]);
}

#[tokio::test]
async fn activation_is_one_shot() {
    let (server, api) = start_api().await;
    action_mock("get_chats", json!({"chats": [chat_json(1, "Анна")]}))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = ChatsScreen::new(Session::new(1));
    screen.activate(&api).await;
    screen.activate(&api).await;
    assert_eq!(screen.chats.len(), 1);
}

#[tokio::test]
async fn confirmed_send_appends_exactly_the_server_message() {
    let (server, api) = start_api().await;
    action_mock("get_chats", json!({"chats": [chat_json(4, "Анна")]}))
        .mount(&server)
        .await;
    action_mock("get_messages", json!({"messages": [message_json(1, "Привет", "other")]}))
        .mount(&server)
        .await;
    action_mock("send_message", message_json(2, "Как дела?", "me"))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = ChatsScreen::new(Session::new(1));
    screen.activate(&api).await;
    screen.open_chat(&api, 4).await;

    let before = screen.messages.clone();
    screen.message_input = "Как дела?".to_string();
    screen.send_message(&api).await;

    // Prior list plus exactly the server-returned element.
    assert_eq!(screen.messages.len(), before.len() + 1);
    assert_eq!(screen.messages[..before.len()], before[..]);
    let appended = screen.messages.last().unwrap();
    assert_eq!(appended.id, 2);
    assert_eq!(appended.text, "Как дела?");
    // Draft cleared only after confirmation.
    assert!(screen.message_input.is_empty());
}

#[tokio::test]
async fn failed_send_leaves_list_and_draft_untouched() {
    let (server, api) = start_api().await;
    action_mock("get_chats", json!({"chats": [chat_json(4, "Анна")]}))
        .mount(&server)
        .await;
    action_mock("get_messages", json!({"messages": [message_json(1, "Привет", "other")]}))
        .mount(&server)
        .await;
    action_mock("send_message", json!({"error": "database unavailable"}))
        .mount(&server)
        .await;

    let mut screen = ChatsScreen::new(Session::new(1));
    screen.activate(&api).await;
    screen.open_chat(&api, 4).await;

    screen.message_input = "Как дела?".to_string();
    screen.send_message(&api).await;

    assert_eq!(screen.messages.len(), 1);
    assert_eq!(screen.message_input, "Как дела?");
    assert!(screen.ui_error.is_some());
}

#[tokio::test]
async fn blank_draft_is_never_sent() {
    let (server, api) = start_api().await;
    action_mock("get_chats", json!({"chats": [chat_json(4, "Анна")]}))
        .mount(&server)
        .await;
    action_mock("get_messages", json!({"messages": []}))
        .mount(&server)
        .await;
    action_mock("send_message", message_json(2, "", "me"))
        .expect(0)
        .mount(&server)
        .await;

    let mut screen = ChatsScreen::new(Session::new(1));
    screen.activate(&api).await;
    screen.open_chat(&api, 4).await;

    screen.message_input = "   ".to_string();
    screen.send_message(&api).await;
    assert!(screen.messages.is_empty());
}

#[tokio::test]
async fn channel_creation_closes_form_and_reloads_chats() {
    let (server, api) = start_api().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "action": "create_channel",
            "name": "Дизайн",
            "description": "UI/UX",
            "avatar_emoji": "🎨",
            "creator_id": 1,
            "is_channel": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    // The reload returns the authoritative list with the new channel in it.
    action_mock(
        "get_chats",
        json!({"chats": [chat_json(12, "Дизайн"), chat_json(4, "Анна")]}),
    )
    .mount(&server)
    .await;

    let mut screen = ChatsScreen::new(Session::new(1));
    screen.open_channel_form();
    screen.channel_draft.name = "Дизайн".to_string();
    screen.channel_draft.description = "UI/UX".to_string();
    screen.channel_draft.avatar_emoji = "🎨".to_string();
    screen.submit_channel(&api).await;

    assert!(!screen.show_channel_form);
    assert!(screen.chats.iter().any(|c| c.name == "Дизайн"));
}

#[tokio::test]
async fn failed_channel_creation_keeps_the_form_open() {
    let (server, api) = start_api().await;
    action_mock("create_channel", json!({"success": false}))
        .mount(&server)
        .await;

    let mut screen = ChatsScreen::new(Session::new(1));
    screen.open_channel_form();
    screen.channel_draft.name = "Дизайн".to_string();
    screen.submit_channel(&api).await;

    assert!(screen.show_channel_form);
    assert_eq!(screen.channel_draft.name, "Дизайн");
    assert!(screen.ui_error.is_some());
}

#[tokio::test]
async fn contacts_screen_mirrors_and_filters() {
    let (server, api) = start_api().await;
    action_mock(
        "get_contacts",
        json!({"contacts": [contact_json(2, "Анна", true), contact_json(3, "Борис", false)]}),
    )
    .mount(&server)
    .await;

    let mut screen = ContactsScreen::new(Session::new(1));
    screen.activate(&api).await;
    assert_eq!(screen.contacts.len(), 2);

    screen.search_query = "анна".to_string();
    let filtered = screen.filtered_contacts();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
    // The cache is untouched by filtering.
    assert_eq!(screen.contacts.len(), 2);
}

#[tokio::test]
async fn rating_is_displayed_unmodified() {
    let (server, api) = start_api().await;
    action_mock("get_user_rating", rating_json())
        .mount(&server)
        .await;

    let mut screen = ProfileScreen::new(Session::new(1));
    screen.activate(&api).await;

    let rating = screen.rating.as_ref().unwrap();
    assert_eq!(rating.rating_score, 98);
    assert_eq!(rating.calls_made, 7);
    assert_eq!(rating.files_shared, 12);
}

#[tokio::test]
async fn invite_code_is_revealed_and_dismissable() {
    let (server, api) = start_api().await;
    action_mock("create_invite", json!({"inviteCode": "ZX12QW34", "id": 1}))
        .mount(&server)
        .await;

    let mut screen = ProfileScreen::new(Session::new(1));
    screen.create_invite(&api).await;
    assert_eq!(screen.invite_code.as_deref(), Some("ZX12QW34"));

    screen.dismiss_invite();
    assert!(screen.invite_code.is_none());
}

#[tokio::test]
async fn blocking_an_admin_issues_no_request() {
    let (server, api) = start_api().await;
    action_mock(
        "get_all_users",
        json!({"users": [user_json(1, "root", true, false), user_json(2, "bob", false, false)]}),
    )
    .mount(&server)
    .await;
    action_mock("block_user", json!({"success": true}))
        .expect(0)
        .mount(&server)
        .await;

    let mut screen = AdminScreen::new(Session::admin(1));
    screen.activate(&api).await;
    screen.block_user(&api, 1, "test".to_string()).await;

    assert!(screen.ui_error.is_some());
    assert!(!screen.users[0].is_blocked);
}

#[tokio::test]
async fn blocking_a_regular_user_reloads_the_list() {
    let (server, api) = start_api().await;
    // First load shows bob unblocked; the one-shot mock expires after
    // serving it, so the reload after the block falls through to the
    // blocked-state mock mounted below.
    action_mock(
        "get_all_users",
        json!({"users": [user_json(2, "bob", false, false)]}),
    )
    .up_to_n_times(1)
    .mount(&server)
    .await;
    action_mock("block_user", json!({"success": true}))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = AdminScreen::new(Session::admin(1));
    screen.activate(&api).await;
    assert!(!screen.users[0].is_blocked);

    action_mock(
        "get_all_users",
        json!({"users": [user_json(2, "bob", false, true)]}),
    )
    .mount(&server)
    .await;

    screen.block_user(&api, 2, "spam".to_string()).await;
    assert!(screen.users[0].is_blocked);
    assert_eq!(screen.users_phase, LoadPhase::Ready);
}

#[tokio::test]
async fn unblock_is_idempotent_on_an_unblocked_user() {
    let (server, api) = start_api().await;
    action_mock(
        "get_all_users",
        json!({"users": [user_json(2, "bob", false, false)]}),
    )
    .mount(&server)
    .await;
    action_mock("unblock_user", json!({"success": true, "message": "User unblocked"}))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = AdminScreen::new(Session::admin(1));
    screen.activate(&api).await;
    screen.unblock_user(&api, 2).await;

    assert!(!screen.users[0].is_blocked);
    assert!(screen.ui_error.is_none());
}

#[tokio::test]
async fn failed_user_load_keeps_previous_list() {
    let (server, api) = start_api().await;
    action_mock(
        "get_all_users",
        json!({"users": [user_json(2, "bob", false, false)]}),
    )
    .up_to_n_times(1)
    .mount(&server)
    .await;

    let mut screen = AdminScreen::new(Session::admin(1));
    screen.activate(&api).await;
    assert_eq!(screen.users.len(), 1);

    action_mock("get_all_users", json!({"error": "boom"}))
        .mount(&server)
        .await;
    screen.refresh_users(&api).await;

    assert_eq!(screen.users.len(), 1);
    assert_eq!(screen.users_phase, LoadPhase::Failed);
    assert!(screen.ui_error.is_some());
}
