//! Command-line interface for chefbot.
//!
//! Flags override values from the config file. Subcommands run without
//! opening a window.

use crate::chat::ChatSession;
use crate::controller::ChatController;
use crate::widget::WidgetAction;
use anyhow::{Context, Result};
use chefbot_config::{Config, ReplyStrategy, validate_endpoint};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// chefbot - Restaurant assistant chat widget
#[derive(Parser, Debug)]
#[command(name = "chefbot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of ~/.config/chefbot/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Reply strategy (overrides config)
    #[arg(long, value_enum, value_name = "STRATEGY", global = true)]
    pub strategy: Option<StrategyArg>,

    /// Query endpoint for the remote strategy (overrides config)
    #[arg(long, value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Simulated reply delay in milliseconds (overrides config)
    #[arg(long, value_name = "MS", global = true)]
    pub delay_ms: Option<u64>,

    /// Start with the chat panel expanded
    #[arg(long)]
    pub open: bool,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,
}

/// Reply strategy argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    Simulated,
    Remote,
}

impl From<StrategyArg> for ReplyStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Simulated => ReplyStrategy::Simulated,
            StrategyArg::Remote => ReplyStrategy::Remote,
        }
    }
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message without opening a window and print the transcript
    Ask {
        /// Message to send
        text: String,
    },

    /// Print the location of the config file
    ConfigPath,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Config file override
    pub config_path: Option<PathBuf>,
    /// Reply strategy override
    pub strategy: Option<ReplyStrategy>,
    /// Query endpoint override
    pub endpoint: Option<String>,
    /// Simulated delay override
    pub delay_ms: Option<u64>,
    /// Start with the panel expanded
    pub open: bool,
    /// Log level override from CLI
    pub log_level: Option<log::LevelFilter>,
}

impl RuntimeOptions {
    /// Config file this run reads.
    pub fn config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file, then apply the CLI overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_from(&self.config_path())?;
        self.apply_to(&mut config)?;
        Ok(config)
    }

    /// Apply overrides to `config` and re-check the fields they touch.
    pub fn apply_to(&self, config: &mut Config) -> Result<()> {
        if let Some(strategy) = self.strategy {
            log::info!("CLI override: reply strategy '{}'", strategy.display_name());
            config.reply.reply_strategy = strategy;
        }
        if let Some(ref endpoint) = self.endpoint {
            log::info!("CLI override: query endpoint '{}'", endpoint);
            config.reply.query_endpoint = endpoint.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.reply.simulated_delay_ms = delay_ms;
        }
        if self.open {
            config.open_on_startup = true;
        }
        if config.reply.reply_strategy == ReplyStrategy::Remote {
            validate_endpoint(&config.reply.query_endpoint)?;
        }
        Ok(())
    }
}

impl From<&Cli> for RuntimeOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            strategy: cli.strategy.map(Into::into),
            endpoint: cli.endpoint.clone(),
            delay_ms: cli.delay_ms,
            open: cli.open,
            log_level: cli.log_level.map(|l| l.to_level_filter()),
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup, with runtime options
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    run_cli(Cli::parse())
}

/// Handle an already parsed command line.
pub fn run_cli(cli: Cli) -> CliResult {
    let options = RuntimeOptions::from(&cli);

    match cli.command {
        Some(Commands::ConfigPath) => {
            println!("{}", options.config_path().display());
            CliResult::Exit(0)
        }
        Some(Commands::Ask { text }) => {
            crate::debug::init_log_bridge(options.log_level);
            let stdout = std::io::stdout();
            match run_ask(&options, &text, &mut stdout.lock()) {
                Ok(true) => CliResult::Exit(0),
                Ok(false) => CliResult::Exit(1),
                Err(e) => {
                    eprintln!("chefbot: error: {e:#}");
                    CliResult::Exit(1)
                }
            }
        }
        None => CliResult::Continue(options),
    }
}

/// Send `text` once, wait for the reply and write the transcript to `out`.
///
/// Returns `Ok(false)` when the message was rejected or the reply failed.
pub fn run_ask(options: &RuntimeOptions, text: &str, out: &mut dyn Write) -> Result<bool> {
    let config = options.load_config()?;
    crate::debug::apply_config_log_level(config.log_level.to_level_filter());
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let mut controller = ChatController::new(&config, runtime.handle().clone());

    if !controller.handle(WidgetAction::Send(text.to_string())) {
        writeln!(out, "Nothing to send: message is empty")?;
        return Ok(false);
    }
    controller.wait();

    out.write_all(format_transcript(controller.session(), &config.bot_name).as_bytes())?;
    if let Some(error) = controller.session().error() {
        writeln!(out, "! {error}")?;
        return Ok(false);
    }
    Ok(true)
}

/// Plain-text rendering of a session: one line per message, bot actions
/// indented underneath.
pub fn format_transcript(session: &ChatSession, bot_name: &str) -> String {
    let mut transcript = String::new();
    for msg in session.messages() {
        let who = if msg.is_bot() { bot_name } else { "You" };
        transcript.push_str(&format!("{who}: {}\n", msg.text()));
        for action in msg.actions() {
            transcript.push_str(&format!("    [{action}]\n"));
        }
    }
    transcript
}
