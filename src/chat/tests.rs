//! Tests for the chat session store and message types.

use chefbot_config::Greeting;

use super::state::ChatSession;
use super::types::{ChatMessage, Sender};

#[test]
fn test_new_session() {
    let session = ChatSession::new();
    assert!(session.is_empty());
    assert!(session.input().is_empty());
    assert!(!session.is_open());
    assert!(!session.is_loading());
    assert!(session.error().is_none());
}

#[test]
fn test_with_greeting() {
    let greeting = Greeting {
        text: "Welcome! How can I help you today?".to_string(),
        actions: vec!["View menu".to_string(), "Book a table".to_string()],
    };
    let session = ChatSession::with_greeting(Some(&greeting));
    assert_eq!(session.len(), 1);
    let msg = &session.messages()[0];
    assert!(msg.is_bot());
    assert_eq!(msg.text(), "Welcome! How can I help you today?");
    assert_eq!(msg.actions(), ["View menu", "Book a table"]);
}

#[test]
fn test_without_greeting() {
    let session = ChatSession::with_greeting(None);
    assert!(session.is_empty());
}

#[test]
fn test_append_preserves_order() {
    let mut session = ChatSession::new();
    assert!(session.append_message(ChatMessage::user("first")));
    assert!(session.append_message(ChatMessage::bot("second")));
    assert!(session.append_message(ChatMessage::user("third")));

    let texts: Vec<&str> = session.messages().iter().map(|m| m.text()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert_eq!(session.messages()[1].sender(), Sender::Bot);
}

#[test]
fn test_blank_user_message_rejected() {
    let mut session = ChatSession::new();
    assert!(!session.append_message(ChatMessage::user("")));
    assert!(!session.append_message(ChatMessage::user("   \t\n")));
    assert!(session.is_empty());
}

#[test]
fn test_user_message_rejected_while_loading() {
    let mut session = ChatSession::new();
    assert!(session.append_message(ChatMessage::user("first")));
    session.set_loading(true);

    assert!(!session.append_message(ChatMessage::user("second")));
    assert_eq!(session.len(), 1);

    // The pending reply itself still lands
    assert!(session.append_message(ChatMessage::bot("answer")));
    session.set_loading(false);
    assert!(session.append_message(ChatMessage::user("third")));

    let texts: Vec<&str> = session.messages().iter().map(|m| m.text()).collect();
    assert_eq!(texts, vec!["first", "answer", "third"]);
}

#[test]
fn test_blank_bot_message_accepted() {
    let mut session = ChatSession::new();
    assert!(session.append_message(ChatMessage::bot("")));
    assert_eq!(session.len(), 1);
}

#[test]
fn test_user_message_has_no_actions() {
    let msg = ChatMessage::user("hi");
    assert_eq!(msg.sender(), Sender::User);
    assert!(!msg.is_bot());
    assert!(msg.actions().is_empty());
}

#[test]
fn test_toggle_open_close() {
    let mut session = ChatSession::new();
    assert!(session.toggle());
    assert!(session.is_open());
    assert!(!session.toggle());
    session.open();
    assert!(session.is_open());
    session.close();
    assert!(!session.is_open());
}

#[test]
fn test_input_take_clears() {
    let mut session = ChatSession::new();
    session.set_input("tacos");
    session.input_mut().push_str(" please");
    assert_eq!(session.take_input(), "tacos please");
    assert!(session.input().is_empty());
}

#[test]
fn test_error_slot() {
    let mut session = ChatSession::new();
    session.set_error("request failed");
    assert_eq!(session.error(), Some("request failed"));
    session.clear_error();
    assert!(session.error().is_none());
}

#[test]
fn test_loading_flag() {
    let mut session = ChatSession::new();
    session.set_loading(true);
    assert!(session.is_loading());
    session.set_loading(false);
    assert!(!session.is_loading());
}
