mod common;

use chefbot::controller::ChatController;
use chefbot::reply::{RemoteReply, ReplyError, ReplyProvider};
use chefbot::widget::WidgetAction;
use common::{CannedServer, closed_port_url, poll_until_idle, remote_config, runtime};
use std::time::Duration;

const MAX_BODY: u64 = 1024 * 1024;

#[test]
fn test_answer_with_actions() {
    let server = CannedServer::start(
        "200 OK",
        r#"{"answer":"We open at 5pm","actions":["Book a table"]}"#,
    );
    let provider = RemoteReply::new(server.url.clone(), MAX_BODY);

    let reply = provider.reply("When do you open?").unwrap();
    assert_eq!(reply.text, "We open at 5pm");
    assert_eq!(reply.actions, vec!["Book a table"]);

    let request = server.request();
    assert_eq!(request.request_line, "POST /api/query HTTP/1.1");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body, r#"{"message":"When do you open?"}"#);
}

#[test]
fn test_missing_answer_becomes_placeholder() {
    let server = CannedServer::start("200 OK", r#"{"actions":null}"#);
    let reply = RemoteReply::new(server.url.clone(), MAX_BODY)
        .reply("hello")
        .unwrap();
    assert_eq!(reply.text, "No response");
    assert!(reply.actions.is_empty());
    server.request();
}

#[test]
fn test_server_error_status() {
    let server = CannedServer::start("500 Internal Server Error", r#"{"detail":"down"}"#);
    let err = RemoteReply::new(server.url.clone(), MAX_BODY)
        .reply("hello")
        .unwrap_err();
    assert!(matches!(err, ReplyError::Status { status: 500, .. }));
    server.request();
}

#[test]
fn test_malformed_json() {
    let server = CannedServer::start("200 OK", "<html>not json</html>");
    let err = RemoteReply::new(server.url.clone(), MAX_BODY)
        .reply("hello")
        .unwrap_err();
    assert!(matches!(err, ReplyError::Decode { .. }));
    server.request();
}

#[test]
fn test_oversized_body() {
    let server = CannedServer::start("200 OK", r#"{"answer":"a fairly long answer"}"#);
    let err = RemoteReply::new(server.url.clone(), 8)
        .reply("hello")
        .unwrap_err();
    assert!(matches!(err, ReplyError::Body { .. }));
    server.request();
}

#[test]
fn test_connection_refused() {
    let err = RemoteReply::new(closed_port_url(), MAX_BODY)
        .reply("hello")
        .unwrap_err();
    assert!(matches!(err, ReplyError::Transport { .. }));
}

#[test]
fn test_remote_success_through_controller() {
    let rt = runtime();
    let server = CannedServer::start(
        "200 OK",
        r#"{"answer":"We open at 5pm","actions":["Book a table"]}"#,
    );
    let mut controller = ChatController::new(&remote_config(&server.url), rt.handle().clone());

    assert!(controller.handle(WidgetAction::Send("hours?".to_string())));
    poll_until_idle(&mut controller, Duration::from_secs(5));

    let messages = controller.session().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].text(), "We open at 5pm");
    assert_eq!(messages[1].actions(), ["Book a table"]);
    server.request();
}

#[test]
fn test_remote_failure_sets_error_without_bot_message() {
    let rt = runtime();
    let mut controller =
        ChatController::new(&remote_config(&closed_port_url()), rt.handle().clone());

    assert!(controller.handle(WidgetAction::Send("hours?".to_string())));
    poll_until_idle(&mut controller, Duration::from_secs(10));

    let session = controller.session();
    assert_eq!(session.len(), 1);
    assert!(!session.messages()[0].is_bot());
    assert!(!session.is_loading());
    assert!(session.error().is_some());

    // The next send clears the banner
    assert!(controller.handle(WidgetAction::Send("again".to_string())));
    assert!(controller.session().error().is_none());
    poll_until_idle(&mut controller, Duration::from_secs(10));
}
