use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuestionCatalog;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Riddle Master";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),
    #[error("invalid --title value: title cannot be empty")]
    EmptyTitle,
    #[error("invalid log filter {raw:?}: {reason}")]
    InvalidLogFilter { raw: String, reason: String },
}

fn validate_log_filter(raw: &str) -> Result<(), ArgsError> {
    EnvFilter::try_new(raw)
        .map(|_| ())
        .map_err(|err| ArgsError::InvalidLogFilter {
            raw: raw.to_string(),
            reason: err.to_string(),
        })
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    catalog: Arc<QuestionCatalog>,
}

impl UiApp for DesktopApp {
    fn app_title(&self) -> String {
        self.title.clone()
    }

    fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--title <text>] [--log <filter>]");
    eprintln!("  cargo run -p app -- check [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --title {DEFAULT_TITLE}");
    eprintln!("  --log   {DEFAULT_LOG_FILTER} (falls back to RUST_LOG)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RIDDLE_TITLE, RIDDLE_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

/// Values picked up from the environment before flags are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EnvDefaults {
    title: Option<String>,
    log_filter: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            title: std::env::var("RIDDLE_TITLE")
                .ok()
                .filter(|value| !value.trim().is_empty()),
            log_filter: std::env::var("RIDDLE_LOG").ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    command: Command,
    title: String,
    /// Explicit filter; `None` defers to `RUST_LOG`, then the default.
    log_filter: Option<String>,
}

impl Args {
    fn parse(
        argv: impl IntoIterator<Item = String>,
        defaults: EnvDefaults,
    ) -> Result<Self, ArgsError> {
        let mut argv: Vec<String> = argv.into_iter().collect();

        // Default behavior: launching UI when no subcommand is provided.
        let command = match argv.first().map(String::as_str) {
            None => Command::Ui,
            Some(first) if first.starts_with('-') => Command::Ui,
            Some(first) => Command::from_arg(first)
                .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?,
        };
        if argv.first().is_some_and(|first| !first.starts_with('-')) {
            argv.remove(0);
        }
        let mut args = argv.into_iter();

        let mut parsed = Self {
            command,
            title: defaults.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            log_filter: defaults.log_filter,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--title" => {
                    let value = require_value(&mut args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    parsed.title = value.trim().to_string();
                }
                "--log" => {
                    parsed.log_filter = Some(require_value(&mut args, "--log")?);
                }
                "--help" | "-h" => {
                    parsed.command = Command::Help;
                    return Ok(parsed);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        // Covers both `--log` and `RIDDLE_LOG`.
        if let Some(raw) = &parsed.log_filter {
            validate_log_filter(raw)?;
        }

        Ok(parsed)
    }
}

/// `filter` has already been validated by `Args::parse`.
fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(raw) => EnvFilter::new(raw),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1), EnvDefaults::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if args.command == Command::Help {
        print_usage();
        return Ok(());
    }

    init_tracing(args.log_filter.as_deref());

    // The catalog is compiled in; a failure here means the bundled data is broken.
    let catalog = Arc::new(QuestionCatalog::riddles()?);

    match args.command {
        Command::Check => {
            tracing::info!(questions = catalog.len(), "catalog check passed");
            println!("catalog ok: {} questions", catalog.len());
            Ok(())
        }
        Command::Ui => {
            tracing::info!(
                title = %args.title,
                questions = catalog.len(),
                "launching desktop ui"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                title: args.title.clone(),
                catalog,
            });
            let context = build_app_context(&app);

            // Some window managers default new windows to always-on-top in dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(args.title.as_str())
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
