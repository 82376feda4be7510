mod command;
mod view;

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use palette_application::{
    AccessGate, AlertChannel, AuthFlowController, PalettePage, PaletteSyncController,
    SessionContext, ThemePreference,
};
use palette_infrastructure::{ConfigService, HttpPaletteClient, PalettePaths, TomlKeyValueStore};

use crate::command::{COMMANDS, Command};
use crate::view::TerminalView;

#[derive(Parser)]
#[command(name = "palette")]
#[command(about = "Palette sync REPL for the Color Carnival service", long_about = None)]
struct Args {
    /// Service base URL, overriding config.toml and PALETTE_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Directory holding config.toml, state.toml and logs
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

/// Rustyline helper: slash-command completion, highlighting and hints.
#[derive(Clone)]
struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.starts_with('/') && !line.contains(' ') {
            COMMANDS
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Logs go to a daily file so they never interleave with the REPL output.
fn init_logging(paths: &PalettePaths) -> Result<WorkerGuard> {
    let logs_dir = paths.logs_dir()?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("creating log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "palette.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let paths = PalettePaths::new(args.config_dir);
    let _log_guard = init_logging(&paths)?;

    // ===== Composition root =====
    let mut config = ConfigService::new(paths.clone()).get_config()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    palette_infrastructure::config_service::validate(&config)?;
    tracing::info!(base_url = %config.base_url, "[Startup] Palette REPL starting");

    let client = Arc::new(HttpPaletteClient::new(&config)?);
    let store = Arc::new(TomlKeyValueStore::open(&paths).await?);
    let view = Arc::new(TerminalView);

    let session = Arc::new(SessionContext::new(store.clone(), view.clone()));
    let alerts = Arc::new(AlertChannel::new(view.clone(), config.alert_duration()));
    let auth = Arc::new(AuthFlowController::new(
        client.clone(),
        session.clone(),
        view.clone(),
        alerts.clone(),
    ));
    let palettes = Arc::new(PaletteSyncController::new(
        client.clone(),
        session.clone(),
        view.clone(),
        alerts.clone(),
    ));
    let theme = Arc::new(ThemePreference::new(store.clone(), view.clone()));
    let page = PalettePage::new(
        auth,
        palettes,
        theme,
        AccessGate::new(session),
        view,
    );

    // ===== REPL =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== Color Carnival Palettes ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Connected to {}. Type /help for commands, 'quit' to exit.", config.base_url)
            .bright_black()
    );
    println!();

    page.open().await;

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match command::parse(trimmed) {
                    Ok(Command::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Ok(Command::Help) => println!("{}", command::help().bright_black()),
                    Ok(Command::Reload) => {
                        page.open().await;
                    }
                    Ok(Command::Event(event)) => {
                        if page.dispatch(event).await == palette_application::Dispatch::Ignored {
                            println!(
                                "{}",
                                "That control is disabled. Sign in and /reload.".bright_black()
                            );
                        }
                    }
                    Err(message) => println!("{}", message.yellow()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    page.close().await;
    tracing::info!("[Shutdown] Palette REPL stopped");
    Ok(())
}
