use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use medico_core::model::LeaderboardEntry;
use services::{AppServices, AppState, Clock, InboxNotifier, Notifier};
use storage::repository::{LeaderboardRepository, Storage};
use tracing_subscriber::EnvFilter;
use ui::{APP_TITLE, App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://medico.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: Arc<AppServices>,
    inbox: Arc<InboxNotifier>,
    state: AppState,
}

impl UiApp for DesktopApp {
    fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }

    fn inbox(&self) -> Arc<InboxNotifier> {
        Arc::clone(&self.inbox)
    }

    fn initial_state(&self) -> AppState {
        self.state.clone()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    notifications: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui          [--db <sqlite_url>] [--no-notifications]");
    eprintln!("  cargo run -p app -- leaderboard [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MEDICO_DB_URL, MEDICO_NOTIFICATIONS=off, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Leaderboard,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "leaderboard" => Some(Self::Leaderboard),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("MEDICO_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url(DEFAULT_DB_URL.into()), normalize_sqlite_url);
        let mut notifications = std::env::var("MEDICO_NOTIFICATIONS")
            .map(|value| !value.trim().eq_ignore_ascii_case("off"))
            .unwrap_or(true);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--no-notifications" if cmd == Command::Ui => notifications = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            notifications,
        })
    }
}

/// Turn a bare or `sqlite:` path into an absolute `sqlite://` URL.
fn normalize_sqlite_url(raw: String) -> String {
    let trimmed = raw.trim().to_string();
    if trimmed == "sqlite::memory:" {
        return trimmed;
    }

    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Install the global subscriber. Returns `false` (after reporting why on
/// stderr) when one is already installed.
fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            eprintln!("tracing not initialized: {err}");
            false
        }
    }
}

/// One leaderboard line. The list is unranked, so rows carry their stored
/// position, not a rank.
fn format_leaderboard_row(index: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "#{index:<3} {} / {}  score {}  accuracy {:.2}%  time {}s",
        entry.topic, entry.subtopic, entry.score, entry.accuracy, entry.time_spent
    )
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    tracing::info!(db = %parsed.db_url, command = ?cmd, "starting");

    match cmd {
        Command::Ui => {
            let inbox = Arc::new(InboxNotifier::new(parsed.notifications));
            let services = Arc::new(
                AppServices::new_sqlite(
                    &parsed.db_url,
                    Clock::default_clock(),
                    Arc::clone(&inbox) as Arc<dyn Notifier>,
                )
                .await?,
            );
            let state = services.bootstrap().await?;

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                services,
                inbox,
                state,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Leaderboard => {
            let storage = Storage::sqlite(&parsed.db_url).await?;
            let entries = storage.leaderboard.load_entries().await?;
            if entries.is_empty() {
                println!("No quizzes completed yet.");
            }
            for (index, entry) in entries.iter().enumerate() {
                println!("{}", format_leaderboard_row(index, entry));
            }
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
