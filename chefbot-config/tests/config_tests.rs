use chefbot_config::{Config, ConfigError, Greeting, LogLevel, QuickAction, ReplyStrategy};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.window_title, "ChefBot");
    assert_eq!(config.bot_name, "ChefBot");
    assert!(!config.open_on_startup);
    assert_eq!(config.reply.reply_strategy, ReplyStrategy::Simulated);
    assert_eq!(config.reply.simulated_delay_ms, 1000);
    assert_eq!(config.reply.query_endpoint, "http://localhost:8000/api/query");
    assert_eq!(config.log_level, LogLevel::Off);
}

#[test]
fn test_default_quick_actions() {
    let config = Config::default();
    assert_eq!(config.quick_actions.len(), 4);
    assert_eq!(
        config.quick_actions[0],
        QuickAction::new("View menu", "Show me the full menu.")
    );
    let labels: Vec<&str> = config.quick_actions.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["View menu", "Order online", "Book a table", "Chef's specials"]
    );
}

#[test]
fn test_default_greeting() {
    let greeting = Config::default().greeting.expect("default greeting");
    assert_eq!(greeting.text, "Welcome! How can I help you today?");
    assert_eq!(greeting.actions, vec!["View menu", "Book a table"]);
}

#[test]
fn test_builder_methods() {
    let config = Config::new()
        .with_strategy(ReplyStrategy::Remote)
        .with_endpoint("https://chef.example.com/api/query")
        .with_simulated_delay_ms(5)
        .with_bot_name("Sous");
    assert_eq!(config.reply.reply_strategy, ReplyStrategy::Remote);
    assert_eq!(config.reply.query_endpoint, "https://chef.example.com/api/query");
    assert_eq!(config.reply.simulated_delay_ms, 5);
    assert_eq!(config.bot_name, "Sous");
}

#[test]
fn test_yaml_serialization_is_flat() {
    let yaml = serde_yaml_ng::to_string(&Config::default()).unwrap();
    assert!(yaml.contains("reply_strategy: simulated"));
    assert!(yaml.contains("simulated_delay_ms: 1000"));
    assert!(!yaml.contains("reply:"));
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let config = Config::from_yaml(
        r#"
bot_name: "Trattoria"
reply_strategy: remote
query_endpoint: "https://trattoria.example.com/api/query"
"#,
    )
    .unwrap();
    assert_eq!(config.bot_name, "Trattoria");
    assert_eq!(config.reply.reply_strategy, ReplyStrategy::Remote);
    assert_eq!(config.reply.simulated_delay_ms, 1000);
    assert_eq!(config.quick_actions.len(), 4);
    assert!(config.greeting.is_some());
}

#[test]
fn test_null_greeting_disables_it() {
    let config = Config::from_yaml("greeting: null\n").unwrap();
    assert_eq!(config.greeting, None);
}

#[test]
fn test_custom_quick_actions_and_greeting() {
    let config = Config::from_yaml(
        r#"
quick_actions:
  - label: "Hours"
    action: "When are you open?"
greeting:
  text: "Ciao!"
"#,
    )
    .unwrap();
    assert_eq!(
        config.quick_actions,
        vec![QuickAction::new("Hours", "When are you open?")]
    );
    assert_eq!(
        config.greeting,
        Some(Greeting {
            text: "Ciao!".to_string(),
            actions: Vec::new(),
        })
    );
}

#[test]
fn test_env_substitution_in_endpoint() {
    let config = Config::from_yaml(
        "reply_strategy: remote\nquery_endpoint: \"${CHEFBOT_TEST_ENDPOINT_UNSET:-http://127.0.0.1:9000/api/query}\"\n",
    )
    .unwrap();
    assert_eq!(config.reply.query_endpoint, "http://127.0.0.1:9000/api/query");
}

#[test]
fn test_invalid_endpoint_rejected_for_remote() {
    let err = Config::from_yaml("reply_strategy: remote\nquery_endpoint: \"not a url\"\n")
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_non_http_scheme_rejected_for_remote() {
    let err = Config::from_yaml("reply_strategy: remote\nquery_endpoint: \"ftp://host/api\"\n")
        .unwrap_err();
    assert!(err.to_string().contains("scheme"));
}

#[test]
fn test_invalid_endpoint_ignored_for_simulated() {
    let config = Config::from_yaml("query_endpoint: \"not a url\"\n").unwrap();
    assert_eq!(config.reply.reply_strategy, ReplyStrategy::Simulated);
}

#[test]
fn test_non_positive_panel_rejected() {
    let err = Config::from_yaml("panel_width: 0.0\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let err = Config::from_yaml("bot_name: [unterminated\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_missing_file_writes_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.yaml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");

    let config = Config::new()
        .with_strategy(ReplyStrategy::Remote)
        .with_endpoint("http://localhost:8123/api/query")
        .with_bot_name("Bistro");
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_path_is_in_chefbot_dir() {
    let path = Config::config_path();
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.yaml"));
    assert!(path.starts_with(Config::config_dir()));
}
