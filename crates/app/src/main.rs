use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{CompletionListener, ProgressTracker, RegistrationService};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};
use ui::{App, ToastHub, UiApp, build_app_context};

mod catalog;

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
    tracker: Arc<ProgressTracker>,
    registration: Arc<RegistrationService>,
    toasts: Arc<ToastHub>,
}

impl UiApp for DesktopApp {
    fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }

    fn registration(&self) -> Arc<RegistrationService> {
        Arc::clone(&self.registration)
    }

    fn toasts(&self) -> Arc<ToastHub> {
        Arc::clone(&self.toasts)
    }
}

struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:tracker.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRACKER_DB_URL      database URL (overridden by --db)");
    eprintln!("  TRACKER_INTAKE_URL  registration intake endpoint");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRACKER_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://tracker.sqlite3".into(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
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

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // `ui` is the only subcommand and the default; accept and drop it.
    match argv.first().map(String::as_str) {
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if !first.starts_with("--") => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(Box::new(ArgsError::UnknownArg(first.to_string())));
        }
        _ => {}
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    info!(db = %parsed.db_url, "storage ready");

    let catalog = Arc::new(catalog::builtin()?);
    info!(problems = catalog.len(), "catalog loaded");

    let toasts = Arc::new(ToastHub::new());
    let tracker = Arc::new(
        ProgressTracker::load_with_listeners(
            Arc::clone(&catalog),
            Arc::clone(&storage.progress),
            vec![Arc::clone(&toasts) as Arc<dyn CompletionListener>],
        )
        .await,
    );
    let registration = Arc::new(RegistrationService::from_env());

    let app = DesktopApp {
        tracker,
        registration,
        toasts,
    };

    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Coding Terminal")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
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
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_leaves_memory_urls_alone() {
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
    }

    #[test]
    fn normalize_keeps_full_urls() {
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/x.sqlite3".into()),
            "sqlite:///tmp/x.sqlite3"
        );
    }

    #[test]
    fn normalize_absolutizes_bare_paths() {
        let url = normalize_sqlite_url("tracker.sqlite3".into());
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("tracker.sqlite3"));
    }

    #[test]
    fn args_reject_unknown_flags() {
        let mut iter = vec!["--bogus".to_string()].into_iter();
        assert!(matches!(
            Args::parse(&mut iter),
            Err(ArgsError::UnknownArg(_))
        ));
    }
}
